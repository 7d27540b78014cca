use sfmedia_common::{IntRect, Vector2u};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphicsError {
    #[error("image decoding or encoding error")]
    ImageError(#[from] ::image::ImageError),
    #[error("io error")]
    IoError(#[from] std::io::Error),
    #[error("expected {expected} bytes of pixel data but got {actual}")]
    PixelBufferSize { expected: usize, actual: usize },
    #[error("invalid size {0:?}")]
    InvalidSize(Vector2u),
    #[error("area {area:?} does not fit inside {size:?}")]
    OutOfBounds { area: IntRect, size: Vector2u },
    #[error("the image is empty")]
    EmptyImage,
}

pub type Result<T> = std::result::Result<T, GraphicsError>;
