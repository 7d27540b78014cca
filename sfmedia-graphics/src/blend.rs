/// A factor applied to source or destination components when blending.
#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    Zero = 0,
    One,
    SrcColor,
    OneMinusSrcColor,
    DstColor,
    OneMinusDstColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstAlpha,
    OneMinusDstAlpha,
}

/// How blended source and destination terms are combined.
#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BlendEquation {
    Add = 0,
    Subtract,
    ReverseSubtract,
    Min,
    Max,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BlendMode {
    pub color_src_factor: BlendFactor,
    pub color_dst_factor: BlendFactor,
    pub color_equation: BlendEquation,
    pub alpha_src_factor: BlendFactor,
    pub alpha_dst_factor: BlendFactor,
    pub alpha_equation: BlendEquation,
}

impl BlendMode {
    /// The same factors and equation for color and alpha.
    pub const fn uniform(src: BlendFactor, dst: BlendFactor, equation: BlendEquation) -> Self {
        BlendMode {
            color_src_factor: src,
            color_dst_factor: dst,
            color_equation: equation,
            alpha_src_factor: src,
            alpha_dst_factor: dst,
            alpha_equation: equation,
        }
    }

    pub const ALPHA: BlendMode = BlendMode {
        color_src_factor: BlendFactor::SrcAlpha,
        color_dst_factor: BlendFactor::OneMinusSrcAlpha,
        color_equation: BlendEquation::Add,
        alpha_src_factor: BlendFactor::One,
        alpha_dst_factor: BlendFactor::OneMinusSrcAlpha,
        alpha_equation: BlendEquation::Add,
    };

    pub const ADD: BlendMode = BlendMode {
        color_src_factor: BlendFactor::SrcAlpha,
        color_dst_factor: BlendFactor::One,
        color_equation: BlendEquation::Add,
        alpha_src_factor: BlendFactor::One,
        alpha_dst_factor: BlendFactor::One,
        alpha_equation: BlendEquation::Add,
    };

    pub const MULTIPLY: BlendMode =
        BlendMode::uniform(BlendFactor::DstColor, BlendFactor::Zero, BlendEquation::Add);

    pub const MIN: BlendMode =
        BlendMode::uniform(BlendFactor::One, BlendFactor::One, BlendEquation::Min);

    pub const MAX: BlendMode =
        BlendMode::uniform(BlendFactor::One, BlendFactor::One, BlendEquation::Max);

    pub const NONE: BlendMode =
        BlendMode::uniform(BlendFactor::One, BlendFactor::Zero, BlendEquation::Add);
}

impl Default for BlendMode {
    fn default() -> Self {
        BlendMode::ALPHA
    }
}
