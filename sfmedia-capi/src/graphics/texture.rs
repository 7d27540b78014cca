use crate::ctypes::{sfIntRect, sfVector2u};
use crate::error::{assert_non_null, try_export};
use crate::ffi::extern_fn;
use crate::graphics::image::sfImage;
use crate::handle::{handle_lifecycle, into_handle};
use crate::system::input_stream::sfInputStream;
use sfmedia::graphics::{Image, Texture};
use sfmedia::system::{IntRect, Vector2u};
use std::ffi::{c_char, c_void, CStr};

/// Pixels prepared for drawing.
#[derive(Debug, Clone)]
pub struct sfTexture {
    pub(crate) texture: Texture,
}

/// Read an optional area argument.
///
/// ## Safety
/// `area` must be null or valid.
unsafe fn optional_area(area: *const sfIntRect) -> Option<IntRect> {
    if area.is_null() {
        None
    } else {
        Some(unsafe { *area }.into())
    }
}

extern_fn! {
    /// Create a transparent texture. Returns null if either side is zero or larger than
    /// [`sfTexture_getMaximumSize`].
    fn sfTexture_create(size: sfVector2u) -> *mut sfTexture {
        let texture = try_export!(Texture::new(size.into()));
        into_handle(sfTexture { texture })
    }
}

extern_fn! {
    /// Load a texture from an image file, optionally only the part inside `area`.
    ///
    /// ## Safety
    /// `filename` must be null or a valid nul-terminated string. `area` must be null or valid.
    fn sfTexture_createFromFile(filename: *const c_char, area: *const sfIntRect) -> *mut sfTexture {
        assert_non_null!(filename);
        let filename = try_export!(unsafe { CStr::from_ptr(filename) }.to_str());
        let area = unsafe { optional_area(area) };
        let texture = try_export!(Texture::from_file(filename, area));
        into_handle(sfTexture { texture })
    }
}

extern_fn! {
    /// Load a texture from an encoded image held in memory.
    ///
    /// ## Safety
    /// `data` must be null or valid for reads of `size` bytes. `area` must be null or valid.
    fn sfTexture_createFromMemory(data: *const c_void, size: usize, area: *const sfIntRect) -> *mut sfTexture {
        assert_non_null!(data);
        let data = unsafe { std::slice::from_raw_parts(data.cast::<u8>(), size) };
        let area = unsafe { optional_area(area) };
        let texture = try_export!(Texture::from_memory(data, area));
        into_handle(sfTexture { texture })
    }
}

extern_fn! {
    /// Load a texture from an image read from a custom stream.
    ///
    /// ## Safety
    /// `stream` must be null or valid, and its callbacks must be safe to call with its `userData`.
    /// `area` must be null or valid.
    fn sfTexture_createFromStream(stream: *mut sfInputStream, area: *const sfIntRect) |stream| -> *mut sfTexture {
        let mut stream = *stream;
        let image = try_export!(Image::load_from_stream(&mut stream));
        let area = unsafe { optional_area(area) };
        let texture = try_export!(Texture::from_image(&image, area));
        into_handle(sfTexture { texture })
    }
}

extern_fn! {
    /// Create a texture from an image, optionally only the part inside `area`.
    ///
    /// ## Safety
    /// `image` must be null or valid. `area` must be null or valid.
    fn sfTexture_createFromImage(image: *const sfImage, area: *const sfIntRect) |image| -> *mut sfTexture {
        let area = unsafe { optional_area(area) };
        let texture = try_export!(Texture::from_image(&image.image, area));
        into_handle(sfTexture { texture })
    }
}

handle_lifecycle!(sfTexture);

extern_fn! {
    /// The size of the texture in pixels.
    ///
    /// ## Safety
    /// `texture` must be null or valid.
    fn sfTexture_getSize(texture: *const sfTexture) |texture| -> sfVector2u {
        texture.texture.size().into()
    }
}

extern_fn! {
    /// Copy the texture into a new image, which the caller must destroy.
    ///
    /// ## Safety
    /// `texture` must be null or valid.
    fn sfTexture_copyToImage(texture: *const sfTexture) |texture| -> *mut sfImage {
        into_handle(sfImage {
            image: texture.texture.copy_to_image(),
        })
    }
}

extern_fn! {
    /// Overwrite the region at `offset` with `size.x * size.y` RGBA8 pixels.
    ///
    /// Returns `false` if the region does not fit inside the texture.
    ///
    /// ## Safety
    /// `texture` must be null or valid. `pixels` must be null or valid for reads of
    /// `size.x * size.y * 4` bytes.
    fn sfTexture_updateFromPixels(
        texture: *mut sfTexture,
        pixels: *const u8,
        size: sfVector2u,
        offset: sfVector2u
    ) mut |texture| -> bool {
        assert_non_null!(pixels);
        let size = Vector2u::from(size);
        let len = size.x as usize * size.y as usize * 4;
        let pixels = unsafe { std::slice::from_raw_parts(pixels, len) };
        try_export!(texture.texture.update_from_pixels(pixels, size, offset.into()));
        true
    }
}

extern_fn! {
    /// Overwrite the region at `offset` with the contents of `source`.
    ///
    /// ## Safety
    /// `destination` and `source` must be null or valid.
    fn sfTexture_updateFromTexture(
        destination: *mut sfTexture,
        source: *const sfTexture,
        offset: sfVector2u
    ) |source|; mut |destination| -> bool {
        try_export!(destination.texture.update_from_texture(&source.texture, offset.into()));
        true
    }
}

extern_fn! {
    /// Overwrite the region at `offset` with the contents of `image`.
    ///
    /// ## Safety
    /// `texture` and `image` must be null or valid.
    fn sfTexture_updateFromImage(texture: *mut sfTexture, image: *const sfImage, offset: sfVector2u) |image|; mut |texture| -> bool {
        try_export!(texture.texture.update_from_image(&image.image, offset.into()));
        true
    }
}

extern_fn! {
    /// ## Safety
    /// `texture` must be null or valid.
    fn sfTexture_setSmooth(texture: *mut sfTexture, smooth: bool) mut |texture| {
        texture.texture.set_smooth(smooth);
    }
}

extern_fn! {
    /// ## Safety
    /// `texture` must be null or valid.
    fn sfTexture_isSmooth(texture: *const sfTexture) |texture| -> bool {
        texture.texture.is_smooth()
    }
}

extern_fn! {
    /// ## Safety
    /// `texture` must be null or valid.
    fn sfTexture_setSrgb(texture: *mut sfTexture, srgb: bool) mut |texture| {
        texture.texture.set_srgb(srgb);
    }
}

extern_fn! {
    /// ## Safety
    /// `texture` must be null or valid.
    fn sfTexture_isSrgb(texture: *const sfTexture) |texture| -> bool {
        texture.texture.is_srgb()
    }
}

extern_fn! {
    /// ## Safety
    /// `texture` must be null or valid.
    fn sfTexture_setRepeated(texture: *mut sfTexture, repeated: bool) mut |texture| {
        texture.texture.set_repeated(repeated);
    }
}

extern_fn! {
    /// ## Safety
    /// `texture` must be null or valid.
    fn sfTexture_isRepeated(texture: *const sfTexture) |texture| -> bool {
        texture.texture.is_repeated()
    }
}

extern_fn! {
    /// Generate a mipmap chain for the texture.
    ///
    /// ## Safety
    /// `texture` must be null or valid.
    fn sfTexture_generateMipmap(texture: *mut sfTexture) mut |texture| -> bool {
        texture.texture.generate_mipmap()
    }
}

extern_fn! {
    /// Swap the contents of two textures.
    ///
    /// ## Safety
    /// `left` and `right` must be null or valid, and must not be the same texture.
    fn sfTexture_swap(left: *mut sfTexture, right: *mut sfTexture) mut |left, right| {
        left.texture.swap(&mut right.texture);
    }
}

extern_fn! {
    /// The largest edge length a texture may have.
    fn sfTexture_getMaximumSize() -> u32 {
        Texture::MAXIMUM_SIZE
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ctypes::{sfColor, sfVector2i};
    use crate::graphics::image::{
        sfImage_createFromColor, sfImage_destroy, sfImage_getPixel, sfImage_getSize,
    };

    const GREEN: sfColor = sfColor { r: 0, g: 255, b: 0, a: 255 };

    #[test]
    fn rejects_bad_sizes() {
        unsafe {
            assert!(sfTexture_create(sfVector2u { x: 0, y: 4 }).is_null());
            let too_large = sfTexture_getMaximumSize() + 1;
            assert!(sfTexture_create(sfVector2u { x: too_large, y: 1 }).is_null());
            let texture = sfTexture_create(sfVector2u { x: 4, y: 4 });
            assert_eq!(sfVector2u { x: 4, y: 4 }, sfTexture_getSize(texture));
            sfTexture_destroy(texture);
        }
    }

    #[test]
    fn image_area_and_copy_back() {
        unsafe {
            let image = sfImage_createFromColor(sfVector2u { x: 8, y: 8 }, GREEN);
            let area = sfIntRect {
                position: sfVector2i { x: 6, y: 6 },
                size: sfVector2i { x: 4, y: 4 },
            };
            let texture = sfTexture_createFromImage(image, &area);
            assert_eq!(sfVector2u { x: 2, y: 2 }, sfTexture_getSize(texture));

            let whole = sfTexture_createFromImage(image, std::ptr::null());
            assert_eq!(sfVector2u { x: 8, y: 8 }, sfTexture_getSize(whole));

            let copy = sfTexture_copyToImage(texture);
            assert_eq!(sfVector2u { x: 2, y: 2 }, sfImage_getSize(copy));
            assert_eq!(GREEN, sfImage_getPixel(copy, sfVector2u { x: 1, y: 1 }));

            sfImage_destroy(copy);
            sfImage_destroy(image);
            sfTexture_destroy(texture);
            sfTexture_destroy(whole);
        }
    }

    #[test]
    fn updates_check_bounds() {
        let pixels = [255u8; 16];
        unsafe {
            let texture = sfTexture_create(sfVector2u { x: 4, y: 4 });
            assert!(sfTexture_updateFromPixels(
                texture,
                pixels.as_ptr(),
                sfVector2u { x: 2, y: 2 },
                sfVector2u { x: 2, y: 2 }
            ));
            assert!(!sfTexture_updateFromPixels(
                texture,
                pixels.as_ptr(),
                sfVector2u { x: 2, y: 2 },
                sfVector2u { x: 3, y: 3 }
            ));

            let small = sfTexture_create(sfVector2u { x: 1, y: 1 });
            assert!(sfTexture_updateFromTexture(texture, small, sfVector2u::default()));
            assert!(!sfTexture_updateFromTexture(small, texture, sfVector2u::default()));

            let image = sfTexture_copyToImage(texture);
            assert_eq!(255, sfImage_getPixel(image, sfVector2u { x: 3, y: 3 }).a);
            assert_eq!(0, sfImage_getPixel(image, sfVector2u { x: 0, y: 0 }).a);

            sfImage_destroy(image);
            sfTexture_destroy(texture);
            sfTexture_destroy(small);
        }
    }

    #[test]
    fn flags_and_swap() {
        unsafe {
            let left = sfTexture_create(sfVector2u { x: 1, y: 1 });
            let right = sfTexture_create(sfVector2u { x: 2, y: 2 });
            sfTexture_setSmooth(left, true);
            sfTexture_setRepeated(left, true);
            sfTexture_setSrgb(left, true);
            assert!(sfTexture_generateMipmap(left));

            let copy = sfTexture_copy(left);
            sfTexture_swap(left, right);
            assert!(sfTexture_isSmooth(right));
            assert!(!sfTexture_isSmooth(left));
            assert!(sfTexture_isRepeated(copy));
            assert!(sfTexture_isSrgb(copy));
            assert_eq!(sfVector2u { x: 2, y: 2 }, sfTexture_getSize(left));

            for texture in [left, right, copy] {
                sfTexture_destroy(texture);
            }
        }
    }
}
