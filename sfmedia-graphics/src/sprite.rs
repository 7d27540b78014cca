use crate::texture::Texture;
use crate::transformable::{AsTransformable, Transformable};
use sfmedia_common::{Color, FloatRect, IntRect, Vector2, Vector2f};

/// A transformable textured rectangle.
///
/// The sprite only records which part of a texture it shows; the texture itself is
/// owned elsewhere and must be tracked by the caller.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sprite {
    texture_rect: IntRect,
    color: Color,
    transformable: Transformable,
}

impl Sprite {
    /// Create a sprite showing the whole of `texture`.
    pub fn new(texture: &Texture) -> Sprite {
        Sprite::with_rect(IntRect::new(Vector2::new(0, 0), texture.size().cast()))
    }

    /// Create a sprite showing only `rect` of its texture.
    pub fn with_rect(rect: IntRect) -> Sprite {
        Sprite {
            texture_rect: rect,
            color: Color::WHITE,
            transformable: Transformable::default(),
        }
    }

    /// Switch to another texture. With `reset_rect` the sub-rectangle is reset to
    /// cover the whole new texture.
    pub fn set_texture(&mut self, texture: &Texture, reset_rect: bool) {
        if reset_rect {
            self.texture_rect = IntRect::new(Vector2::new(0, 0), texture.size().cast());
        }
    }

    pub fn texture_rect(&self) -> IntRect {
        self.texture_rect
    }

    pub fn set_texture_rect(&mut self, rect: IntRect) {
        self.texture_rect = rect;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Bounds in the sprite's own coordinate space.
    pub fn local_bounds(&self) -> FloatRect {
        let size = self.texture_rect.size;
        FloatRect::new(
            Vector2f::new(0.0, 0.0),
            Vector2f::new(size.x.abs() as f32, size.y.abs() as f32),
        )
    }

    /// Bounds after applying the sprite's transform.
    pub fn global_bounds(&self) -> FloatRect {
        self.transformable
            .transform()
            .transform_rect(&self.local_bounds())
    }
}

impl AsTransformable for Sprite {
    fn transformable(&self) -> &Transformable {
        &self.transformable
    }

    fn transformable_mut(&mut self) -> &mut Transformable {
        &mut self.transformable
    }
}
