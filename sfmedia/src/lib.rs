#![forbid(missing_docs)]
//! A small multimedia engine.
//!
//! sfmedia groups the value types, resources and sockets that a 2D multimedia
//! application is built from. It is the native side of the `sfmedia-capi` C
//! bindings, and can be used directly from Rust.
//!
//! ## Modules
//! Every module except [`system`] sits behind a cargo feature, all enabled by default.
//!
//! | **Module**   | **Contents**                                               | **feature**  |
//! |--------------|------------------------------------------------------------|--------------|
//! | `system`     | vectors, angles, rects, colors, time, clock, streams       |              |
//! | `window`     | video modes and context settings                           |              |
//! | `graphics`   | images, textures, sprites, shapes, stencil and blend modes | `graphics`   |
//! | `audio`      | listener, sounds, streams, recorders                       | `audio`      |
//! | `network`    | IPv4 addresses, TCP and UDP sockets                        | `network`    |
//!

/// Value types and byte streams used throughout the engine.
pub mod system {
    pub use sfmedia_common::angle::Angle;
    pub use sfmedia_common::clock::Clock;
    pub use sfmedia_common::color::Color;
    pub use sfmedia_common::rect::{FloatRect, IntRect, Rect};
    pub use sfmedia_common::stream::{
        FileInputStream, InputStream, InputStreamReader, MemoryInputStream,
    };
    pub use sfmedia_common::time::Time;
    pub use sfmedia_common::transform::Transform;
    pub use sfmedia_common::vector::{Vector2, Vector2f, Vector2i, Vector2u, Vector3, Vector3f};
}

/// Window creation parameters.
pub mod window {
    pub use sfmedia_common::window::*;
}

#[cfg(feature = "graphics")]
/// 2D graphics resources.
///
/// Images decode and encode through the `image` crate. Textures, sprites and shapes
/// describe what is drawn; there is no rendering device.
pub mod graphics {
    pub use sfmedia_graphics::blend::*;
    pub use sfmedia_graphics::image::Image;
    pub use sfmedia_graphics::shape::*;
    pub use sfmedia_graphics::sprite::Sprite;
    pub use sfmedia_graphics::stencil::*;
    pub use sfmedia_graphics::texture::Texture;
    pub use sfmedia_graphics::transformable::{AsTransformable, Transformable};
    pub use sfmedia_graphics::{GraphicsError, Result};
}

#[cfg(feature = "audio")]
/// Audio sources, streaming and capture.
pub mod audio {
    pub use sfmedia_audio::*;
}

#[cfg(feature = "network")]
/// IPv4 addresses and sockets.
pub mod network {
    pub use sfmedia_network::*;
}
