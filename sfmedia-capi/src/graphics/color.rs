use crate::ctypes::sfColor;
use crate::ffi::extern_fn;
use sfmedia::system::Color;

#[no_mangle]
pub static sfBlack: sfColor = sfColor::from_native(Color::BLACK);
#[no_mangle]
pub static sfWhite: sfColor = sfColor::from_native(Color::WHITE);
#[no_mangle]
pub static sfRed: sfColor = sfColor::from_native(Color::RED);
#[no_mangle]
pub static sfGreen: sfColor = sfColor::from_native(Color::GREEN);
#[no_mangle]
pub static sfBlue: sfColor = sfColor::from_native(Color::BLUE);
#[no_mangle]
pub static sfYellow: sfColor = sfColor::from_native(Color::YELLOW);
#[no_mangle]
pub static sfMagenta: sfColor = sfColor::from_native(Color::MAGENTA);
#[no_mangle]
pub static sfCyan: sfColor = sfColor::from_native(Color::CYAN);
#[no_mangle]
pub static sfTransparent: sfColor = sfColor::from_native(Color::TRANSPARENT);

extern_fn! {
    /// Construct an opaque color from its red, green and blue components.
    fn sfColor_fromRGB(red: u8, green: u8, blue: u8) -> sfColor {
        Color::rgb(red, green, blue).into()
    }
}

extern_fn! {
    /// Construct a color from its red, green, blue and alpha components.
    fn sfColor_fromRGBA(red: u8, green: u8, blue: u8, alpha: u8) -> sfColor {
        Color::rgba(red, green, blue, alpha).into()
    }
}

extern_fn! {
    /// Construct a color from a packed `0xRRGGBBAA` integer.
    fn sfColor_fromInteger(color: u32) -> sfColor {
        Color::from_integer(color).into()
    }
}

extern_fn! {
    /// Pack a color into a `0xRRGGBBAA` integer.
    fn sfColor_toInteger(color: sfColor) -> u32 {
        Color::from(color).to_integer()
    }
}

extern_fn! {
    /// Add two colors component-wise, saturating at 255.
    fn sfColor_add(color1: sfColor, color2: sfColor) -> sfColor {
        (Color::from(color1) + Color::from(color2)).into()
    }
}

extern_fn! {
    /// Subtract two colors component-wise, saturating at 0.
    fn sfColor_subtract(color1: sfColor, color2: sfColor) -> sfColor {
        (Color::from(color1) - Color::from(color2)).into()
    }
}

extern_fn! {
    /// Multiply two colors component-wise, treating components as fractions of 255.
    fn sfColor_modulate(color1: sfColor, color2: sfColor) -> sfColor {
        (Color::from(color1) * Color::from(color2)).into()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn rgba(r: u8, g: u8, b: u8, a: u8) -> sfColor {
        sfColor { r, g, b, a }
    }

    #[test]
    fn integer_scenarios() {
        unsafe {
            assert_eq!(rgba(0, 0, 3, 232), sfColor_fromInteger(1000));
            assert_eq!(255, sfColor_toInteger(rgba(0, 0, 0, 255)));
            assert_eq!(0x11223344, sfColor_toInteger(sfColor_fromInteger(0x11223344)));
        }
    }

    #[test]
    fn arithmetic_saturates() {
        unsafe {
            assert_eq!(
                rgba(255, 255, 255, 255),
                sfColor_add(rgba(255, 255, 255, 255), rgba(255, 255, 255, 25))
            );
            assert_eq!(
                rgba(0, 0, 0, 0),
                sfColor_subtract(sfColor::default(), rgba(10, 20, 30, 40))
            );
            assert_eq!(
                rgba(255, 0, 0, 128),
                sfColor_modulate(sfRed, sfColor_fromRGBA(255, 255, 255, 128))
            );
        }
    }

    #[test]
    fn constants() {
        assert_eq!(rgba(0, 0, 0, 0), sfTransparent);
        assert_eq!(unsafe { sfColor_fromRGB(255, 0, 255) }, sfMagenta);
        assert_eq!(255, sfBlack.a);
    }
}
