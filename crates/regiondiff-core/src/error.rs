use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiffError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dimension mismatch: left {left_width}x{left_height}, right {right_width}x{right_height}")]
    DimensionMismatch {
        left_width: u32,
        left_height: u32,
        right_width: u32,
        right_height: u32,
    },

    #[error("Unsupported comparison mode: {0}")]
    UnsupportedMode(String),

    #[error("Capture unavailable: {0}")]
    CaptureUnavailable(String),

    #[error("Invalid pixel buffer: expected {expected} bytes, got {actual}")]
    InvalidBuffer { expected: usize, actual: usize },

    #[error("Empty image: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("Presentation failed: {0}")]
    Presentation(String),

    #[error("Comparison worker has stopped")]
    WorkerStopped,

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, DiffError>;
