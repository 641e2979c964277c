use thiserror::Error;

#[derive(Error, Debug)]
pub enum DepthError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid frame dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Frame geometry mismatch: got {got} bytes, expected {expected}")]
    GeometryMismatch { got: usize, expected: usize },

    #[error("Truncated capture file: expected {expected} bytes, got {got}")]
    TruncatedCapture { expected: usize, got: usize },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, DepthError>;
