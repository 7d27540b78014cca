use crate::error::{GraphicsError, Result};
use crate::image::Image;
use sfmedia_common::{Color, IntRect, Vector2, Vector2u};
use std::path::Path;

/// An image living on the rendering side, with sampling state attached.
///
/// There is no device behind a texture; its pixels are kept in system memory so
/// they can be updated and read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    size: Vector2u,
    pixels: Vec<u8>,
    smooth: bool,
    srgb: bool,
    repeated: bool,
    mipmap: bool,
}

impl Texture {
    /// The largest edge length a texture may have.
    pub const MAXIMUM_SIZE: u32 = 16384;

    /// Create a transparent texture of the given size.
    pub fn new(size: Vector2u) -> Result<Texture> {
        if size.x == 0
            || size.y == 0
            || size.x > Self::MAXIMUM_SIZE
            || size.y > Self::MAXIMUM_SIZE
        {
            return Err(GraphicsError::InvalidSize(size));
        }

        Ok(Texture {
            size,
            pixels: Image::new(size, Color::TRANSPARENT).pixels().to_vec(),
            smooth: false,
            srgb: false,
            repeated: false,
            mipmap: false,
        })
    }

    /// Create a texture from the pixels of an image, optionally limited to `area`.
    ///
    /// The area is clamped to the image. An empty or absent area loads the whole image.
    pub fn from_image(image: &Image, area: Option<IntRect>) -> Result<Texture> {
        let image_size = image.size().cast::<i32>();
        let area = match area {
            Some(area) if area.size.x > 0 && area.size.y > 0 => area,
            _ => IntRect::new(Vector2::new(0, 0), image_size),
        };

        let left = area.position.x.clamp(0, image_size.x);
        let top = area.position.y.clamp(0, image_size.y);
        let width = area.size.x.min(image_size.x - left);
        let height = area.size.y.min(image_size.y - top);
        let clamped = IntRect::new(Vector2::new(left, top), Vector2::new(width, height));

        let mut texture = Texture::new(clamped.size.cast())?;
        let mut region = Image::new(clamped.size.cast(), Color::TRANSPARENT);
        region.copy_from(image, Vector2u::new(0, 0), clamped, false)?;
        texture.pixels = region.pixels().to_vec();
        Ok(texture)
    }

    pub fn from_file(path: impl AsRef<Path>, area: Option<IntRect>) -> Result<Texture> {
        Texture::from_image(&Image::load_from_file(path)?, area)
    }

    pub fn from_memory(data: &[u8], area: Option<IntRect>) -> Result<Texture> {
        Texture::from_image(&Image::load_from_memory(data)?, area)
    }

    pub fn size(&self) -> Vector2u {
        self.size
    }

    /// Overwrite a region of the texture with tightly packed RGBA8 pixels.
    pub fn update_from_pixels(&mut self, pixels: &[u8], size: Vector2u, dest: Vector2u) -> Result<()> {
        let region = Image::from_pixels(size, pixels)?;
        self.update_from_image(&region, dest)
    }

    /// Overwrite a region of the texture with the contents of an image.
    pub fn update_from_image(&mut self, image: &Image, dest: Vector2u) -> Result<()> {
        let size = image.size();
        if dest.x + size.x > self.size.x || dest.y + size.y > self.size.y {
            return Err(GraphicsError::OutOfBounds {
                area: IntRect::new(dest.cast(), size.cast()),
                size: self.size,
            });
        }

        let mut target = self.copy_to_image();
        target.copy_from(image, dest, IntRect::default(), false)?;
        self.pixels = target.pixels().to_vec();
        Ok(())
    }

    /// Overwrite the texture with the contents of another texture at `dest`.
    pub fn update_from_texture(&mut self, texture: &Texture, dest: Vector2u) -> Result<()> {
        self.update_from_image(&texture.copy_to_image(), dest)
    }

    pub fn copy_to_image(&self) -> Image {
        // Size and pixel length always agree.
        Image::from_pixels(self.size, &self.pixels).unwrap_or_default()
    }

    pub fn swap(&mut self, other: &mut Texture) {
        std::mem::swap(self, other);
    }

    pub fn is_smooth(&self) -> bool {
        self.smooth
    }

    pub fn set_smooth(&mut self, smooth: bool) {
        self.smooth = smooth;
    }

    pub fn is_srgb(&self) -> bool {
        self.srgb
    }

    pub fn set_srgb(&mut self, srgb: bool) {
        self.srgb = srgb;
    }

    pub fn is_repeated(&self) -> bool {
        self.repeated
    }

    pub fn set_repeated(&mut self, repeated: bool) {
        self.repeated = repeated;
    }

    pub fn has_mipmap(&self) -> bool {
        self.mipmap
    }

    /// Mark the texture as having a mipmap chain.
    pub fn generate_mipmap(&mut self) -> bool {
        self.mipmap = true;
        true
    }
}
