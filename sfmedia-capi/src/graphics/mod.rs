//! 2D graphics: colors, rects, transforms, images, textures, sprites and shapes.

pub mod color;
pub mod image;
pub mod rect;
pub mod render_states;
pub mod shape;
pub mod sprite;
pub mod texture;
pub mod transform;
pub mod transformable;
