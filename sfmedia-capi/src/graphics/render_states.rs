//! Blending and stencil configuration, and the render states that bundle them.
use crate::ctypes::{c_enum, sfTransform};
use crate::ffi::{extern_fn, fallback_default};
use crate::graphics::texture::sfTexture;
use sfmedia::graphics::{
    BlendEquation, BlendFactor, BlendMode, StencilComparison, StencilMode, StencilUpdateOperation,
    StencilValue,
};
use sfmedia::system::Transform;

c_enum!(
    /// The test a pixel must pass against the stencil buffer to be drawn.
    sfStencilComparison => StencilComparison {
        sfStencilComparisonNever = Never = 0,
        sfStencilComparisonLess = Less = 1,
        sfStencilComparisonLessEqual = LessEqual = 2,
        sfStencilComparisonGreater = Greater = 3,
        sfStencilComparisonGreaterEqual = GreaterEqual = 4,
        sfStencilComparisonEqual = Equal = 5,
        sfStencilComparisonNotEqual = NotEqual = 6,
        sfStencilComparisonAlways = Always = 7,
    }
);

c_enum!(
    /// What happens to the stencil buffer when a pixel passes the test.
    sfStencilUpdateOperation => StencilUpdateOperation {
        sfStencilUpdateOperationKeep = Keep = 0,
        sfStencilUpdateOperationZero = Zero = 1,
        sfStencilUpdateOperationReplace = Replace = 2,
        sfStencilUpdateOperationIncrement = Increment = 3,
        sfStencilUpdateOperationDecrement = Decrement = 4,
        sfStencilUpdateOperationInvert = Invert = 5,
    }
);

c_enum!(
    sfBlendFactor => BlendFactor {
        sfBlendFactorZero = Zero = 0,
        sfBlendFactorOne = One = 1,
        sfBlendFactorSrcColor = SrcColor = 2,
        sfBlendFactorOneMinusSrcColor = OneMinusSrcColor = 3,
        sfBlendFactorDstColor = DstColor = 4,
        sfBlendFactorOneMinusDstColor = OneMinusDstColor = 5,
        sfBlendFactorSrcAlpha = SrcAlpha = 6,
        sfBlendFactorOneMinusSrcAlpha = OneMinusSrcAlpha = 7,
        sfBlendFactorDstAlpha = DstAlpha = 8,
        sfBlendFactorOneMinusDstAlpha = OneMinusDstAlpha = 9,
    }
);

c_enum!(
    sfBlendEquation => BlendEquation {
        sfBlendEquationAdd = Add = 0,
        sfBlendEquationSubtract = Subtract = 1,
        sfBlendEquationReverseSubtract = ReverseSubtract = 2,
        sfBlendEquationMin = Min = 3,
        sfBlendEquationMax = Max = 4,
    }
);

/// A value compared against or written to the stencil buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct sfStencilValue {
    pub value: u32,
}

impl From<StencilValue> for sfStencilValue {
    fn from(value: StencilValue) -> Self {
        sfStencilValue { value: value.value }
    }
}

impl From<sfStencilValue> for StencilValue {
    fn from(value: sfStencilValue) -> Self {
        StencilValue::new(value.value)
    }
}

/// Stencil test and update configuration.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct sfStencilMode {
    pub stencil_comparison: sfStencilComparison,
    pub stencil_update_operation: sfStencilUpdateOperation,
    pub stencil_reference: sfStencilValue,
    pub stencil_mask: sfStencilValue,
    /// Only update the stencil buffer, do not draw colors.
    pub stencil_only: bool,
}

impl From<StencilMode> for sfStencilMode {
    fn from(value: StencilMode) -> Self {
        sfStencilMode {
            stencil_comparison: value.comparison.into(),
            stencil_update_operation: value.update_operation.into(),
            stencil_reference: value.reference.into(),
            stencil_mask: value.mask.into(),
            stencil_only: value.only,
        }
    }
}

impl From<sfStencilMode> for StencilMode {
    fn from(value: sfStencilMode) -> Self {
        StencilMode {
            comparison: value.stencil_comparison.into(),
            update_operation: value.stencil_update_operation.into(),
            reference: value.stencil_reference.into(),
            mask: value.stencil_mask.into(),
            only: value.stencil_only,
        }
    }
}

impl Default for sfStencilMode {
    fn default() -> Self {
        StencilMode::default().into()
    }
}

/// How drawn pixels are combined with the pixels already in the target.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct sfBlendMode {
    pub color_src_factor: sfBlendFactor,
    pub color_dst_factor: sfBlendFactor,
    pub color_equation: sfBlendEquation,
    pub alpha_src_factor: sfBlendFactor,
    pub alpha_dst_factor: sfBlendFactor,
    pub alpha_equation: sfBlendEquation,
}

impl sfBlendMode {
    pub const fn from_native(value: BlendMode) -> Self {
        sfBlendMode {
            color_src_factor: sfBlendFactor::from_native(value.color_src_factor),
            color_dst_factor: sfBlendFactor::from_native(value.color_dst_factor),
            color_equation: sfBlendEquation::from_native(value.color_equation),
            alpha_src_factor: sfBlendFactor::from_native(value.alpha_src_factor),
            alpha_dst_factor: sfBlendFactor::from_native(value.alpha_dst_factor),
            alpha_equation: sfBlendEquation::from_native(value.alpha_equation),
        }
    }

    pub const fn to_native(self) -> BlendMode {
        BlendMode {
            color_src_factor: self.color_src_factor.to_native(),
            color_dst_factor: self.color_dst_factor.to_native(),
            color_equation: self.color_equation.to_native(),
            alpha_src_factor: self.alpha_src_factor.to_native(),
            alpha_dst_factor: self.alpha_dst_factor.to_native(),
            alpha_equation: self.alpha_equation.to_native(),
        }
    }
}

impl From<BlendMode> for sfBlendMode {
    fn from(value: BlendMode) -> Self {
        sfBlendMode::from_native(value)
    }
}

impl From<sfBlendMode> for BlendMode {
    fn from(value: sfBlendMode) -> Self {
        value.to_native()
    }
}

impl Default for sfBlendMode {
    fn default() -> Self {
        sfBlendAlpha
    }
}

/// Blend pixels by their alpha. The default.
#[no_mangle]
pub static sfBlendAlpha: sfBlendMode = sfBlendMode::from_native(BlendMode::ALPHA);
/// Add pixels together.
#[no_mangle]
pub static sfBlendAdd: sfBlendMode = sfBlendMode::from_native(BlendMode::ADD);
/// Multiply pixels together.
#[no_mangle]
pub static sfBlendMultiply: sfBlendMode = sfBlendMode::from_native(BlendMode::MULTIPLY);
/// Keep the smaller of both pixels.
#[no_mangle]
pub static sfBlendMin: sfBlendMode = sfBlendMode::from_native(BlendMode::MIN);
/// Keep the larger of both pixels.
#[no_mangle]
pub static sfBlendMax: sfBlendMode = sfBlendMode::from_native(BlendMode::MAX);
/// Overwrite the target.
#[no_mangle]
pub static sfBlendNone: sfBlendMode = sfBlendMode::from_native(BlendMode::NONE);

/// Everything a draw call needs besides the geometry.
///
/// `texture` is borrowed and may be null.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct sfRenderStates {
    pub blend_mode: sfBlendMode,
    pub stencil_mode: sfStencilMode,
    pub transform: sfTransform,
    pub texture: *const sfTexture,
}

impl Default for sfRenderStates {
    fn default() -> Self {
        sfRenderStates {
            blend_mode: sfBlendMode::default(),
            stencil_mode: sfStencilMode::default(),
            transform: Transform::IDENTITY.into(),
            texture: std::ptr::null(),
        }
    }
}

fallback_default!(sfStencilValue, sfStencilMode, sfBlendMode, sfRenderStates);

extern_fn! {
    /// Alpha blending, an always-passing stencil test, the identity transform and no texture.
    fn sfRenderStates_getDefault() -> sfRenderStates {
        sfRenderStates::default()
    }
}
