use crate::Vector2u;

/// A video mode: surface size and color depth.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct VideoMode {
    pub size: Vector2u,
    pub bits_per_pixel: u32,
}

impl VideoMode {
    pub const fn new(size: Vector2u, bits_per_pixel: u32) -> Self {
        VideoMode {
            size,
            bits_per_pixel,
        }
    }
}

impl Default for VideoMode {
    fn default() -> Self {
        VideoMode::new(Vector2u::new(0, 0), 32)
    }
}

/// Bit flags requested for an OpenGL context.
pub mod context_attribute {
    pub const DEFAULT: u32 = 0;
    pub const CORE: u32 = 1 << 0;
    pub const DEBUG: u32 = 1 << 2;
}

/// Requested settings of an OpenGL context.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ContextSettings {
    pub depth_bits: u32,
    pub stencil_bits: u32,
    pub antialiasing_level: u32,
    pub major_version: u32,
    pub minor_version: u32,
    /// Combination of [`context_attribute`] flags.
    pub attribute_flags: u32,
    pub srgb_capable: bool,
}

impl Default for ContextSettings {
    fn default() -> Self {
        ContextSettings {
            depth_bits: 0,
            stencil_bits: 0,
            antialiasing_level: 0,
            major_version: 1,
            minor_version: 1,
            attribute_flags: context_attribute::DEFAULT,
            srgb_capable: false,
        }
    }
}
