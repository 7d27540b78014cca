use crate::ctypes::{sfColor, sfFloatRect, sfIntRect};
use crate::error::assert_non_null;
use crate::ffi::extern_fn;
use crate::graphics::texture::sfTexture;
use crate::graphics::transformable::transformable_fns;
use crate::handle::{handle_lifecycle, into_handle};
use sfmedia::graphics::Sprite;

/// A textured rectangle.
///
/// The sprite borrows its texture: the texture must outlive every use of the sprite, or be
/// replaced with [`sfSprite_setTexture`] before it is destroyed.
#[derive(Debug, Clone)]
pub struct sfSprite {
    pub(crate) sprite: Sprite,
    pub(crate) texture: *const sfTexture,
}

extern_fn! {
    /// Create a sprite showing the whole of `texture`.
    ///
    /// ## Safety
    /// `texture` must be null or valid, and must stay valid while the sprite uses it.
    fn sfSprite_create(texture: *const sfTexture) -> *mut sfSprite {
        assert_non_null!(texture);
        let sprite = Sprite::new(unsafe { &(*texture).texture });
        into_handle(sfSprite { sprite, texture })
    }
}

handle_lifecycle!(sfSprite);
transformable_fns!(sfSprite, sprite);

extern_fn! {
    /// Show another texture. The sprite only keeps a pointer to it.
    ///
    /// With `resetRect` the texture rectangle is reset to cover the whole new texture.
    ///
    /// ## Safety
    /// `sprite` must be null or valid. `texture` must be null or valid, and must stay valid
    /// while the sprite uses it.
    fn sfSprite_setTexture(sprite: *mut sfSprite, texture: *const sfTexture, reset_rect: bool) mut |sprite| {
        assert_non_null!(texture);
        sprite.sprite.set_texture(unsafe { &(*texture).texture }, reset_rect);
        sprite.texture = texture;
    }
}

extern_fn! {
    /// The texture last given to the sprite.
    ///
    /// ## Safety
    /// `sprite` must be null or valid.
    fn sfSprite_getTexture(sprite: *const sfSprite) |sprite| -> *const sfTexture {
        sprite.texture
    }
}

extern_fn! {
    /// ## Safety
    /// `sprite` must be null or valid.
    fn sfSprite_setTextureRect(sprite: *mut sfSprite, rectangle: sfIntRect) mut |sprite| {
        sprite.sprite.set_texture_rect(rectangle.into());
    }
}

extern_fn! {
    /// ## Safety
    /// `sprite` must be null or valid.
    fn sfSprite_getTextureRect(sprite: *const sfSprite) |sprite| -> sfIntRect {
        sprite.sprite.texture_rect().into()
    }
}

extern_fn! {
    /// Set the color the texture is modulated with.
    ///
    /// ## Safety
    /// `sprite` must be null or valid.
    fn sfSprite_setColor(sprite: *mut sfSprite, color: sfColor) mut |sprite| {
        sprite.sprite.set_color(color.into());
    }
}

extern_fn! {
    /// ## Safety
    /// `sprite` must be null or valid.
    fn sfSprite_getColor(sprite: *const sfSprite) |sprite| -> sfColor {
        sprite.sprite.color().into()
    }
}

extern_fn! {
    /// ## Safety
    /// `sprite` must be null or valid.
    fn sfSprite_getLocalBounds(sprite: *const sfSprite) |sprite| -> sfFloatRect {
        sprite.sprite.local_bounds().into()
    }
}

extern_fn! {
    /// Bounds in world coordinates, after the sprite's transform.
    ///
    /// ## Safety
    /// `sprite` must be null or valid.
    fn sfSprite_getGlobalBounds(sprite: *const sfSprite) |sprite| -> sfFloatRect {
        sprite.sprite.global_bounds().into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ctypes::{sfVector2f, sfVector2i, sfVector2u};
    use crate::graphics::texture::{sfTexture_create, sfTexture_destroy};

    fn rect(x: i32, y: i32, width: i32, height: i32) -> sfIntRect {
        sfIntRect {
            position: sfVector2i { x, y },
            size: sfVector2i { x: width, y: height },
        }
    }

    #[test]
    fn texture_is_borrowed() {
        unsafe {
            let small = sfTexture_create(sfVector2u { x: 8, y: 4 });
            let large = sfTexture_create(sfVector2u { x: 64, y: 32 });
            let sprite = sfSprite_create(small);
            assert_eq!(small.cast_const(), sfSprite_getTexture(sprite));
            assert_eq!(rect(0, 0, 8, 4), sfSprite_getTextureRect(sprite));

            sfSprite_setTexture(sprite, large, false);
            assert_eq!(large.cast_const(), sfSprite_getTexture(sprite));
            assert_eq!(rect(0, 0, 8, 4), sfSprite_getTextureRect(sprite));
            sfSprite_setTexture(sprite, large, true);
            assert_eq!(rect(0, 0, 64, 32), sfSprite_getTextureRect(sprite));

            let copy = sfSprite_copy(sprite);
            assert_eq!(large.cast_const(), sfSprite_getTexture(copy));

            sfSprite_destroy(sprite);
            sfSprite_destroy(copy);
            sfTexture_destroy(small);
            sfTexture_destroy(large);
        }
    }

    #[test]
    fn copies_are_independent() {
        unsafe {
            let texture = sfTexture_create(sfVector2u { x: 10, y: 10 });
            let sprite = sfSprite_create(texture);
            let copy = sfSprite_copy(sprite);

            sfSprite_setColor(sprite, sfColor { r: 1, g: 2, b: 3, a: 4 });
            sfSprite_setTextureRect(sprite, rect(2, 2, 4, 4));
            sfSprite_setPosition(sprite, sfVector2f { x: 5.0, y: 5.0 });

            assert_eq!(sfColor { r: 255, g: 255, b: 255, a: 255 }, sfSprite_getColor(copy));
            assert_eq!(rect(0, 0, 10, 10), sfSprite_getTextureRect(copy));
            assert_eq!(sfVector2f::default(), sfSprite_getPosition(copy));

            let bounds = sfSprite_getGlobalBounds(sprite);
            assert_eq!(sfVector2f { x: 5.0, y: 5.0 }, bounds.position);
            assert_eq!(sfVector2f { x: 4.0, y: 4.0 }, sfSprite_getLocalBounds(sprite).size);

            sfSprite_destroy(sprite);
            sfSprite_destroy(copy);
            sfTexture_destroy(texture);
        }
    }

    #[test]
    fn requires_a_texture() {
        unsafe {
            assert!(sfSprite_create(std::ptr::null()).is_null());
            assert!(sfSprite_copy(std::ptr::null()).is_null());
            sfSprite_destroy(std::ptr::null_mut());
        }
    }
}
