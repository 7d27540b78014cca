use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// An 8-bit per channel RGBA color.
///
/// Addition and subtraction saturate per channel; multiplication modulates
/// (`a * b / 255`).
#[repr(C)]
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// Unpack a `0xRRGGBBAA` integer.
    pub const fn from_integer(color: u32) -> Color {
        Color {
            r: ((color & 0xff000000) >> 24) as u8,
            g: ((color & 0x00ff0000) >> 16) as u8,
            b: ((color & 0x0000ff00) >> 8) as u8,
            a: (color & 0x000000ff) as u8,
        }
    }

    /// Pack into a `0xRRGGBBAA` integer.
    pub const fn to_integer(self) -> u32 {
        ((self.r as u32) << 24) | ((self.g as u32) << 16) | ((self.b as u32) << 8) | self.a as u32
    }

    fn map(self, rhs: Color, op: impl Fn(u8, u8) -> u8) -> Color {
        Color {
            r: op(self.r, rhs.r),
            g: op(self.g, rhs.g),
            b: op(self.b, rhs.b),
            a: op(self.a, rhs.a),
        }
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        self.map(rhs, u8::saturating_add)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        self.map(rhs, u8::saturating_sub)
    }
}

impl SubAssign for Color {
    fn sub_assign(&mut self, rhs: Color) {
        *self = *self - rhs;
    }
}

impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        self.map(rhs, |l, r| ((l as u16 * r as u16) / 255) as u8)
    }
}

impl MulAssign for Color {
    fn mul_assign(&mut self, rhs: Color) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn integer_round_trip() {
        assert_eq!(Color::rgba(0, 0, 3, 232), Color::from_integer(1000));
        assert_eq!(255, Color::rgba(0, 0, 0, 255).to_integer());
        assert_eq!(0x12345678, Color::from_integer(0x12345678).to_integer());
    }

    #[test]
    fn saturates() {
        assert_eq!(
            Color::rgba(255, 255, 255, 255),
            Color::rgba(255, 255, 255, 255) + Color::rgba(255, 255, 255, 25)
        );
        assert_eq!(
            Color::rgba(0, 0, 0, 0),
            Color::default() - Color::rgba(10, 20, 30, 40)
        );
    }

    #[test]
    fn modulates() {
        assert_eq!(
            Color::rgba(255, 0, 127, 255),
            Color::WHITE * Color::rgba(255, 0, 127, 255)
        );
        assert_eq!(Color::rgba(64, 64, 64, 255), Color::rgb(128, 128, 128) * Color::rgb(128, 128, 128));
    }
}
