use crate::ctypes::{sfColor, sfIntRect, sfVector2u};
use crate::error::{assert_non_null, try_export};
use crate::ffi::extern_fn;
use crate::handle::{handle_lifecycle, into_handle};
use crate::system::input_stream::sfInputStream;
use sfmedia::graphics::Image;
use sfmedia::system::Color;
use std::ffi::{c_char, c_void, CStr};

/// An image held in system memory.
#[derive(Debug, Clone)]
pub struct sfImage {
    pub(crate) image: Image,
}

extern_fn! {
    /// Create an image of the given size filled with opaque black.
    fn sfImage_create(size: sfVector2u) -> *mut sfImage {
        into_handle(sfImage {
            image: Image::new(size.into(), Color::BLACK),
        })
    }
}

extern_fn! {
    /// Create an image of the given size filled with `color`.
    fn sfImage_createFromColor(size: sfVector2u, color: sfColor) -> *mut sfImage {
        into_handle(sfImage {
            image: Image::new(size.into(), color.into()),
        })
    }
}

extern_fn! {
    /// Create an image from an array of RGBA8 pixels, `size.x * size.y * 4` bytes long.
    ///
    /// ## Safety
    /// `pixels` must be null or valid for reads of `size.x * size.y * 4` bytes.
    fn sfImage_createFromPixels(size: sfVector2u, pixels: *const u8) -> *mut sfImage {
        assert_non_null!(pixels);
        let size = sfmedia::system::Vector2u::from(size);
        let len = size.x as usize * size.y as usize * 4;
        let pixels = unsafe { std::slice::from_raw_parts(pixels, len) };
        let image = try_export!(Image::from_pixels(size, pixels));
        into_handle(sfImage { image })
    }
}

extern_fn! {
    /// Load an image from a file.
    ///
    /// Returns null if the file cannot be opened or decoded.
    ///
    /// ## Safety
    /// `filename` must be null or a valid nul-terminated string.
    fn sfImage_createFromFile(filename: *const c_char) -> *mut sfImage {
        assert_non_null!(filename);
        let filename = try_export!(unsafe { CStr::from_ptr(filename) }.to_str());
        let image = try_export!(Image::load_from_file(filename));
        into_handle(sfImage { image })
    }
}

extern_fn! {
    /// Load an image from an encoded file held in memory.
    ///
    /// Returns null if the data cannot be decoded.
    ///
    /// ## Safety
    /// `data` must be null or valid for reads of `size` bytes.
    fn sfImage_createFromMemory(data: *const c_void, size: usize) -> *mut sfImage {
        assert_non_null!(data);
        let data = unsafe { std::slice::from_raw_parts(data.cast::<u8>(), size) };
        let image = try_export!(Image::load_from_memory(data));
        into_handle(sfImage { image })
    }
}

extern_fn! {
    /// Load an image from a custom stream.
    ///
    /// Returns null if the stream fails or its contents cannot be decoded.
    ///
    /// ## Safety
    /// `stream` must be null or valid, and its callbacks must be safe to call with its `userData`.
    fn sfImage_createFromStream(stream: *mut sfInputStream) |stream| -> *mut sfImage {
        let mut stream = *stream;
        let image = try_export!(Image::load_from_stream(&mut stream));
        into_handle(sfImage { image })
    }
}

handle_lifecycle!(sfImage);

extern_fn! {
    /// Save the image to a file. The format is chosen from the extension.
    ///
    /// ## Safety
    /// `image` must be null or valid. `filename` must be null or a valid nul-terminated string.
    fn sfImage_saveToFile(image: *const sfImage, filename: *const c_char) |image| -> bool {
        assert_non_null!(filename);
        let filename = try_export!(unsafe { CStr::from_ptr(filename) }.to_str());
        try_export!(image.image.save_to_file(filename));
        true
    }
}

extern_fn! {
    /// The size of the image in pixels.
    ///
    /// ## Safety
    /// `image` must be null or valid.
    fn sfImage_getSize(image: *const sfImage) |image| -> sfVector2u {
        image.image.size().into()
    }
}

extern_fn! {
    /// Set the alpha of every pixel of the given color to `alpha`.
    ///
    /// ## Safety
    /// `image` must be null or valid.
    fn sfImage_createMaskFromColor(image: *mut sfImage, color: sfColor, alpha: u8) mut |image| {
        image.image.create_mask_from_color(color.into(), alpha);
    }
}

extern_fn! {
    /// Copy pixels from `source` into `image` at `dest`.
    ///
    /// An empty `source_rect` copies the whole source. With `apply_alpha` the source is blended
    /// over the destination instead of replacing it.
    ///
    /// ## Safety
    /// `image` and `source` must be null or valid, and must not be the same image.
    fn sfImage_copyImage(
        image: *mut sfImage,
        source: *const sfImage,
        dest: sfVector2u,
        source_rect: sfIntRect,
        apply_alpha: bool
    ) |source|; mut |image| -> bool {
        try_export!(image.image.copy_from(&source.image, dest.into(), source_rect.into(), apply_alpha));
        true
    }
}

extern_fn! {
    /// Change the color of one pixel. Returns `false` if `coords` is outside the image.
    ///
    /// ## Safety
    /// `image` must be null or valid.
    fn sfImage_setPixel(image: *mut sfImage, coords: sfVector2u, color: sfColor) mut |image| -> bool {
        try_export!(image.image.set_pixel(coords.into(), color.into()));
        true
    }
}

extern_fn! {
    /// The color of one pixel, or transparent black if `coords` is outside the image.
    ///
    /// ## Safety
    /// `image` must be null or valid.
    fn sfImage_getPixel(image: *const sfImage, coords: sfVector2u) |image| -> sfColor {
        image.image.pixel(coords.into()).unwrap_or(Color::TRANSPARENT).into()
    }
}

extern_fn! {
    /// A pointer to the RGBA8 pixels of the image, or null if it is empty.
    ///
    /// The pointer is valid until the image is modified or destroyed.
    ///
    /// ## Safety
    /// `image` must be null or valid.
    fn sfImage_getPixelsPtr(image: *const sfImage) |image| -> *const u8 {
        let pixels = image.image.pixels();
        if pixels.is_empty() {
            std::ptr::null()
        } else {
            pixels.as_ptr()
        }
    }
}

extern_fn! {
    /// Flip the image left to right.
    ///
    /// ## Safety
    /// `image` must be null or valid.
    fn sfImage_flipHorizontally(image: *mut sfImage) mut |image| {
        image.image.flip_horizontally();
    }
}

extern_fn! {
    /// Flip the image top to bottom.
    ///
    /// ## Safety
    /// `image` must be null or valid.
    fn sfImage_flipVertically(image: *mut sfImage) mut |image| {
        image.image.flip_vertically();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::system::input_stream::test::cursor_stream;
    use std::ffi::CString;
    use std::io::Cursor;

    const RED: sfColor = sfColor { r: 255, g: 0, b: 0, a: 255 };

    fn temp_png(name: &str) -> CString {
        let path = std::env::temp_dir().join(format!("sfmedia-capi-{}-{name}.png", std::process::id()));
        CString::new(path.to_string_lossy().into_owned()).unwrap()
    }

    #[test]
    fn pixels_and_copies() {
        unsafe {
            let image = sfImage_create(sfVector2u { x: 2, y: 2 });
            assert!(sfImage_setPixel(image, sfVector2u { x: 1, y: 0 }, RED));
            assert!(!sfImage_setPixel(image, sfVector2u { x: 2, y: 0 }, RED));

            let copy = sfImage_copy(image);
            sfImage_flipHorizontally(image);
            assert_eq!(RED, sfImage_getPixel(image, sfVector2u { x: 0, y: 0 }));
            assert_eq!(RED, sfImage_getPixel(copy, sfVector2u { x: 1, y: 0 }));
            assert_eq!(
                sfColor::default(),
                sfImage_getPixel(copy, sfVector2u { x: 5, y: 5 })
            );

            let pixels = std::slice::from_raw_parts(sfImage_getPixelsPtr(copy), 16);
            assert_eq!(&[255, 0, 0, 255], &pixels[4..8]);

            sfImage_destroy(image);
            sfImage_destroy(copy);
        }
    }

    #[test]
    fn from_pixels() {
        let pixels = [7u8; 8];
        unsafe {
            let image = sfImage_createFromPixels(sfVector2u { x: 2, y: 1 }, pixels.as_ptr());
            assert_eq!(sfVector2u { x: 2, y: 1 }, sfImage_getSize(image));
            sfImage_destroy(image);
            assert!(sfImage_createFromPixels(sfVector2u { x: 1, y: 1 }, std::ptr::null()).is_null());
        }
    }

    #[test]
    fn file_stream_and_memory() {
        let path = temp_png("round-trip");
        unsafe {
            let image = sfImage_createFromColor(sfVector2u { x: 3, y: 2 }, RED);
            assert!(sfImage_saveToFile(image, path.as_ptr()));
            sfImage_destroy(image);

            let loaded = sfImage_createFromFile(path.as_ptr());
            assert!(!loaded.is_null());
            assert_eq!(sfVector2u { x: 3, y: 2 }, sfImage_getSize(loaded));
            sfImage_destroy(loaded);

            let bytes = std::fs::read(path.to_str().unwrap()).unwrap();
            let from_memory = sfImage_createFromMemory(bytes.as_ptr().cast(), bytes.len());
            assert_eq!(RED, sfImage_getPixel(from_memory, sfVector2u { x: 2, y: 1 }));
            sfImage_destroy(from_memory);

            let mut cursor = Cursor::new(bytes);
            let mut stream = cursor_stream(&mut cursor);
            let from_stream = sfImage_createFromStream(&mut stream);
            assert_eq!(RED, sfImage_getPixel(from_stream, sfVector2u { x: 0, y: 0 }));
            sfImage_destroy(from_stream);
        }
        std::fs::remove_file(path.to_str().unwrap()).unwrap();
    }

    #[test]
    fn failed_loads_return_null() {
        let missing = CString::new("/nonexistent/sfmedia/missing.png").unwrap();
        let garbage = [1u8, 2, 3, 4];
        unsafe {
            assert!(sfImage_createFromFile(missing.as_ptr()).is_null());
            assert!(sfImage_createFromFile(std::ptr::null()).is_null());
            assert!(sfImage_createFromMemory(garbage.as_ptr().cast(), garbage.len()).is_null());
            assert!(sfImage_createFromStream(std::ptr::null_mut()).is_null());
        }
    }

    #[test]
    fn blits() {
        unsafe {
            let target = sfImage_create(sfVector2u { x: 4, y: 4 });
            let source = sfImage_createFromColor(sfVector2u { x: 2, y: 2 }, RED);
            assert!(sfImage_copyImage(
                target,
                source,
                sfVector2u { x: 2, y: 2 },
                sfIntRect::default(),
                false
            ));
            assert_eq!(RED, sfImage_getPixel(target, sfVector2u { x: 3, y: 3 }));
            assert_ne!(RED, sfImage_getPixel(target, sfVector2u { x: 1, y: 1 }));
            assert!(!sfImage_copyImage(target, std::ptr::null(), sfVector2u::default(), sfIntRect::default(), false));

            sfImage_createMaskFromColor(target, RED, 0);
            assert_eq!(0, sfImage_getPixel(target, sfVector2u { x: 3, y: 3 }).a);

            sfImage_destroy(target);
            sfImage_destroy(source);
        }
    }
}
