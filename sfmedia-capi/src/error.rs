use crate::ffi::FallbackValue;
use std::any::Any;
use thiserror::Error;

/// Why a C API call was rejected.
///
/// Errors are never returned to C. They are logged and the failing function returns
/// its [`FallbackValue`].
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SfError {
    #[error("The parameter was null or invalid: {0}")]
    InvalidParameter(&'static str),
    #[error("The path was invalid.")]
    InvalidPath(#[from] std::str::Utf8Error),
    #[error("There was an IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[cfg(feature = "graphics")]
    #[error("There was an error in the graphics module: {0}")]
    GraphicsError(#[from] sfmedia::graphics::GraphicsError),
    #[cfg(feature = "audio")]
    #[error("There was an error in the audio module: {0}")]
    AudioError(#[from] sfmedia::audio::AudioError),
    #[error("There was an unknown error.")]
    UnknownError(Box<dyn Any + Send + 'static>),
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic payload"
    }
}

impl SfError {
    pub fn panic(panic: Box<dyn Any + Send + 'static>) -> SfError {
        SfError::UnknownError(panic)
    }

    /// Log the error and produce the fallback value of the calling function.
    pub fn export<T: FallbackValue>(self) -> T {
        match &self {
            SfError::UnknownError(payload) => {
                tracing::error!(panic = panic_message(payload.as_ref()), "caught a panic")
            }
            err => tracing::warn!(error = %err, "call rejected"),
        }
        T::fallback()
    }
}

macro_rules! assert_non_null {
    ($value:ident) => {
        if $value.is_null() {
            return $crate::error::SfError::InvalidParameter(stringify!($value)).export();
        }
    };
}

macro_rules! assert_some {
    ($value:ident) => {
        let Some($value) = $value else {
            return $crate::error::SfError::InvalidParameter(stringify!($value)).export();
        };
    };
}

/// Unwrap a `Result`, or export its error as the fallback value of the calling function.
macro_rules! try_export {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(err) => return $crate::error::SfError::from(err).export(),
        }
    };
}

pub(crate) use assert_non_null;
pub(crate) use assert_some;
pub(crate) use try_export;
