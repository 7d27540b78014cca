/// How the stencil buffer value is compared against the reference value.
#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum StencilComparison {
    Never = 0,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Equal,
    NotEqual,
    #[default]
    Always,
}

/// What happens to the stencil buffer value when a test passes.
#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum StencilUpdateOperation {
    #[default]
    Keep = 0,
    Zero,
    Replace,
    Increment,
    Decrement,
    Invert,
}

/// A stencil reference or mask value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct StencilValue {
    pub value: u32,
}

impl StencilValue {
    pub const fn new(value: u32) -> Self {
        StencilValue { value }
    }
}

impl From<u32> for StencilValue {
    fn from(value: u32) -> Self {
        StencilValue::new(value)
    }
}

/// Full stencil state used while drawing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct StencilMode {
    pub comparison: StencilComparison,
    pub update_operation: StencilUpdateOperation,
    pub reference: StencilValue,
    pub mask: StencilValue,
    pub only: bool,
}

impl Default for StencilMode {
    fn default() -> Self {
        StencilMode {
            comparison: StencilComparison::Always,
            update_operation: StencilUpdateOperation::Keep,
            reference: StencilValue::new(0),
            mask: StencilValue::new(!0),
            only: false,
        }
    }
}
