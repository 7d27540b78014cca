use crate::error::{GraphicsError, Result};
use ::image::RgbaImage;
use sfmedia_common::stream::{InputStream, InputStreamReader};
use sfmedia_common::{Color, IntRect, Vector2, Vector2u};
use std::io::BufReader;
use std::path::Path;

/// An RGBA8 image held in system memory, rows top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    size: Vector2u,
    pixels: Vec<u8>,
}

fn byte_len(size: Vector2u) -> usize {
    size.x as usize * size.y as usize * 4
}

impl Image {
    /// Create an image filled with a single color.
    pub fn new(size: Vector2u, color: Color) -> Image {
        let mut pixels = Vec::with_capacity(byte_len(size));
        for _ in 0..(size.x as usize * size.y as usize) {
            pixels.extend_from_slice(bytemuck::bytes_of(&color));
        }
        Image { size, pixels }
    }

    /// Create an image from a buffer of tightly packed RGBA8 pixels.
    pub fn from_pixels(size: Vector2u, pixels: &[u8]) -> Result<Image> {
        let expected = byte_len(size);
        if pixels.len() != expected {
            return Err(GraphicsError::PixelBufferSize {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Image {
            size,
            pixels: pixels.to_vec(),
        })
    }

    /// Load an image from a file. The format is guessed from the contents.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Image> {
        let path = path.as_ref();
        let image = ::image::open(path).inspect_err(|err| {
            tracing::debug!(path = %path.display(), %err, "failed to load image");
        })?;
        Ok(Image::from_rgba(image.to_rgba8()))
    }

    /// Load an image from an encoded file held in memory.
    pub fn load_from_memory(data: &[u8]) -> Result<Image> {
        if data.is_empty() {
            return Err(GraphicsError::EmptyImage);
        }
        let image = ::image::load_from_memory(data)?;
        Ok(Image::from_rgba(image.to_rgba8()))
    }

    /// Load an image from a custom stream.
    pub fn load_from_stream(stream: &mut dyn InputStream) -> Result<Image> {
        let mut reader = InputStreamReader::new(stream);
        std::io::Seek::rewind(&mut reader)?;
        let image = ::image::ImageReader::new(BufReader::new(reader))
            .with_guessed_format()?
            .decode()?;
        Ok(Image::from_rgba(image.to_rgba8()))
    }

    fn from_rgba(image: RgbaImage) -> Image {
        let size = Vector2u::new(image.width(), image.height());
        Image {
            size,
            pixels: image.into_raw(),
        }
    }

    /// Save the image. The format is deduced from the file extension.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        if self.pixels.is_empty() {
            return Err(GraphicsError::EmptyImage);
        }

        let image = RgbaImage::from_raw(self.size.x, self.size.y, self.pixels.clone()).ok_or(
            GraphicsError::PixelBufferSize {
                expected: byte_len(self.size),
                actual: self.pixels.len(),
            },
        )?;
        image.save(path)?;
        Ok(())
    }

    pub fn size(&self) -> Vector2u {
        self.size
    }

    /// The raw RGBA8 pixel data, row by row.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    fn offset(&self, coords: Vector2u) -> Option<usize> {
        if coords.x < self.size.x && coords.y < self.size.y {
            Some((coords.x as usize + coords.y as usize * self.size.x as usize) * 4)
        } else {
            None
        }
    }

    pub fn pixel(&self, coords: Vector2u) -> Option<Color> {
        let offset = self.offset(coords)?;
        Some(*bytemuck::from_bytes(&self.pixels[offset..offset + 4]))
    }

    pub fn set_pixel(&mut self, coords: Vector2u, color: Color) -> Result<()> {
        let offset = self.offset(coords).ok_or(GraphicsError::OutOfBounds {
            area: IntRect::new(coords.cast(), Vector2::new(1, 1)),
            size: self.size,
        })?;
        self.pixels[offset..offset + 4].copy_from_slice(bytemuck::bytes_of(&color));
        Ok(())
    }

    /// Set the alpha of every pixel matching `color` to `alpha`.
    pub fn create_mask_from_color(&mut self, color: Color, alpha: u8) {
        let key = bytemuck::bytes_of(&color);
        for pixel in self.pixels.chunks_exact_mut(4) {
            if pixel == key {
                pixel[3] = alpha;
            }
        }
    }

    pub fn flip_horizontally(&mut self) {
        let row_len = self.size.x as usize * 4;
        if row_len == 0 {
            return;
        }
        for row in self.pixels.chunks_exact_mut(row_len) {
            let (mut left, mut right) = (0, self.size.x as usize - 1);
            while left < right {
                for channel in 0..4 {
                    row.swap(left * 4 + channel, right * 4 + channel);
                }
                left += 1;
                right -= 1;
            }
        }
    }

    pub fn flip_vertically(&mut self) {
        let row_len = self.size.x as usize * 4;
        let height = self.size.y as usize;
        for top in 0..height / 2 {
            let bottom = height - 1 - top;
            let (upper, lower) = self.pixels.split_at_mut(bottom * row_len);
            upper[top * row_len..(top + 1) * row_len].swap_with_slice(&mut lower[..row_len]);
        }
    }

    /// Copy pixels from `source` into this image at `dest`.
    ///
    /// An empty `source_rect` copies the whole source. The copied area is clipped to
    /// both images. With `apply_alpha`, source pixels are blended over the destination
    /// using the source alpha instead of replacing it.
    pub fn copy_from(
        &mut self,
        source: &Image,
        dest: Vector2u,
        source_rect: IntRect,
        apply_alpha: bool,
    ) -> Result<()> {
        if source.size.x == 0 || source.size.y == 0 || self.size.x == 0 || self.size.y == 0 {
            return Err(GraphicsError::EmptyImage);
        }

        let out_of_bounds = GraphicsError::OutOfBounds {
            area: source_rect,
            size: source.size,
        };

        if source_rect.position.x < 0
            || source_rect.position.y < 0
            || source_rect.size.x < 0
            || source_rect.size.y < 0
        {
            return Err(out_of_bounds);
        }

        let mut src_rect = source_rect.cast::<u32>();
        if src_rect.size.x == 0 || src_rect.size.y == 0 {
            src_rect = IntRect::default().cast::<u32>();
            src_rect.size = source.size;
        } else {
            if src_rect.position.x >= source.size.x || src_rect.position.y >= source.size.y {
                return Err(out_of_bounds);
            }
            src_rect.size.x = src_rect.size.x.min(source.size.x - src_rect.position.x);
            src_rect.size.y = src_rect.size.y.min(source.size.y - src_rect.position.y);
        }

        if dest.x >= self.size.x || dest.y >= self.size.y {
            return Err(GraphicsError::OutOfBounds {
                area: IntRect::new(dest.cast(), src_rect.size.cast()),
                size: self.size,
            });
        }

        let width = src_rect.size.x.min(self.size.x - dest.x) as usize;
        let height = src_rect.size.y.min(self.size.y - dest.y) as usize;
        let src_stride = source.size.x as usize * 4;
        let dst_stride = self.size.x as usize * 4;

        for row in 0..height {
            let src_start =
                (src_rect.position.y as usize + row) * src_stride + src_rect.position.x as usize * 4;
            let dst_start = (dest.y as usize + row) * dst_stride + dest.x as usize * 4;
            let src = &source.pixels[src_start..src_start + width * 4];
            let dst = &mut self.pixels[dst_start..dst_start + width * 4];

            if !apply_alpha {
                dst.copy_from_slice(src);
                continue;
            }

            for (src, dst) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
                let alpha = src[3] as u32;
                let inverse = 255 - alpha;
                for channel in 0..3 {
                    dst[channel] =
                        ((src[channel] as u32 * alpha + dst[channel] as u32 * inverse) / 255) as u8;
                }
                dst[3] = (alpha + dst[3] as u32 * inverse / 255) as u8;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sfmedia_common::stream::MemoryInputStream;

    #[test]
    fn pixel_access() {
        let mut image = Image::new(Vector2u::new(2, 2), Color::RED);
        assert_eq!(Some(Color::RED), image.pixel(Vector2u::new(1, 1)));
        image.set_pixel(Vector2u::new(0, 1), Color::BLUE).unwrap();
        assert_eq!(Some(Color::BLUE), image.pixel(Vector2u::new(0, 1)));
        assert_eq!(None, image.pixel(Vector2u::new(2, 0)));
        assert!(image.set_pixel(Vector2u::new(0, 2), Color::BLUE).is_err());
    }

    #[test]
    fn rejects_short_buffer() {
        assert!(Image::from_pixels(Vector2u::new(2, 2), &[0; 15]).is_err());
    }

    #[test]
    fn flips() {
        let mut image = Image::new(Vector2u::new(3, 2), Color::BLACK);
        image.set_pixel(Vector2u::new(0, 0), Color::RED).unwrap();

        image.flip_horizontally();
        assert_eq!(Some(Color::RED), image.pixel(Vector2u::new(2, 0)));

        image.flip_vertically();
        assert_eq!(Some(Color::RED), image.pixel(Vector2u::new(2, 1)));
        assert_eq!(Some(Color::BLACK), image.pixel(Vector2u::new(2, 0)));
    }

    #[test]
    fn masks_color() {
        let mut image = Image::new(Vector2u::new(1, 2), Color::GREEN);
        image.set_pixel(Vector2u::new(0, 1), Color::RED).unwrap();
        image.create_mask_from_color(Color::GREEN, 0);
        assert_eq!(Some(Color::rgba(0, 255, 0, 0)), image.pixel(Vector2u::new(0, 0)));
        assert_eq!(Some(Color::RED), image.pixel(Vector2u::new(0, 1)));
    }

    #[test]
    fn copies_clipped() {
        let mut dest = Image::new(Vector2u::new(4, 4), Color::BLACK);
        let source = Image::new(Vector2u::new(3, 3), Color::WHITE);
        dest.copy_from(&source, Vector2u::new(2, 2), IntRect::default(), false)
            .unwrap();
        assert_eq!(Some(Color::WHITE), dest.pixel(Vector2u::new(3, 3)));
        assert_eq!(Some(Color::BLACK), dest.pixel(Vector2u::new(1, 1)));
        assert!(dest
            .copy_from(&source, Vector2u::new(4, 0), IntRect::default(), false)
            .is_err());
    }

    #[test]
    fn copies_with_alpha() {
        let mut dest = Image::new(Vector2u::new(1, 1), Color::BLACK);
        let source = Image::new(Vector2u::new(1, 1), Color::rgba(255, 255, 255, 0));
        dest.copy_from(&source, Vector2u::new(0, 0), IntRect::default(), true)
            .unwrap();
        assert_eq!(Some(Color::BLACK), dest.pixel(Vector2u::new(0, 0)));
    }

    #[test]
    fn round_trips_through_png() {
        let mut image = Image::new(Vector2u::new(4, 3), Color::CYAN);
        image.set_pixel(Vector2u::new(1, 2), Color::MAGENTA).unwrap();

        let path = std::env::temp_dir().join(format!("sfmedia-image-{}.png", std::process::id()));
        image.save_to_file(&path).unwrap();
        let loaded = Image::load_from_file(&path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(image, loaded);

        let from_memory = Image::load_from_memory(&bytes).unwrap();
        assert_eq!(image, from_memory);

        let mut stream = MemoryInputStream::new(&bytes);
        let from_stream = Image::load_from_stream(&mut stream).unwrap();
        assert_eq!(image, from_stream);
    }

    #[test]
    fn missing_file_fails() {
        assert!(Image::load_from_file("/nonexistent/sfmedia/missing.png").is_err());
        assert!(Image::load_from_memory(&[]).is_err());
    }
}
