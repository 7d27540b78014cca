//! Window creation parameters.
use crate::ctypes::sfVector2u;
use crate::ffi::{extern_fn, fallback_default};
use sfmedia::window::{ContextSettings, VideoMode};

/// A video mode: surface size and color depth.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct sfVideoMode {
    pub size: sfVector2u,
    pub bits_per_pixel: u32,
}

impl From<VideoMode> for sfVideoMode {
    fn from(value: VideoMode) -> Self {
        sfVideoMode {
            size: value.size.into(),
            bits_per_pixel: value.bits_per_pixel,
        }
    }
}

impl From<sfVideoMode> for VideoMode {
    fn from(value: sfVideoMode) -> Self {
        VideoMode::new(value.size.into(), value.bits_per_pixel)
    }
}

/// Flags combined into [`sfContextSettings::attribute_flags`].
#[repr(u32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum sfContextAttribute {
    sfContextDefault = 0,
    sfContextCore = 1,
    sfContextDebug = 4,
}

/// Requested settings of an OpenGL context.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct sfContextSettings {
    pub depth_bits: u32,
    pub stencil_bits: u32,
    pub antialiasing_level: u32,
    pub major_version: u32,
    pub minor_version: u32,
    pub attribute_flags: u32,
    pub s_rgb_capable: bool,
}

impl From<ContextSettings> for sfContextSettings {
    fn from(value: ContextSettings) -> Self {
        sfContextSettings {
            depth_bits: value.depth_bits,
            stencil_bits: value.stencil_bits,
            antialiasing_level: value.antialiasing_level,
            major_version: value.major_version,
            minor_version: value.minor_version,
            attribute_flags: value.attribute_flags,
            s_rgb_capable: value.srgb_capable,
        }
    }
}

impl From<sfContextSettings> for ContextSettings {
    fn from(value: sfContextSettings) -> Self {
        ContextSettings {
            depth_bits: value.depth_bits,
            stencil_bits: value.stencil_bits,
            antialiasing_level: value.antialiasing_level,
            major_version: value.major_version,
            minor_version: value.minor_version,
            attribute_flags: value.attribute_flags,
            srgb_capable: value.s_rgb_capable,
        }
    }
}

fallback_default!(sfVideoMode, sfContextSettings);

extern_fn! {
    /// The video mode used when none is given: zero size, 32 bits per pixel.
    fn sfVideoMode_getDefault() -> sfVideoMode {
        VideoMode::default().into()
    }
}

extern_fn! {
    /// The context settings used when none are given.
    fn sfContextSettings_getDefault() -> sfContextSettings {
        ContextSettings::default().into()
    }
}
