//! 2D graphics resources for sfmedia.
//!
//! Images are decoded and encoded with the [`image`](https://docs.rs/image) crate.
//! Textures keep their pixels in system memory; there is no rendering device here,
//! only the resource and geometry model that drawing is built on.

/// Blend factors, equations and modes.
pub mod blend;
/// Errors from loading and manipulating graphics resources.
pub mod error;
/// RGBA images in system memory.
pub mod image;
/// Filled and outlined polygons.
pub mod shape;
/// Textured rectangles.
pub mod sprite;
/// Stencil test configuration.
pub mod stencil;
/// Sampled images.
pub mod texture;
/// Position, rotation, scale and origin.
pub mod transformable;

pub use error::{GraphicsError, Result};
