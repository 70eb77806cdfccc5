use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A logo vertex sits exactly on the image center, so it has no radial direction.
    #[error("Degenerate vertex ({x}, {y}): coincides with the image center")]
    DegenerateVertex { x: f64, y: f64 },
    #[error("Invalid scale factor {0}: must be finite and positive")]
    InvalidScale(f64),
    #[error("Invalid brightness factor {0}: must be finite and non-negative")]
    InvalidBrightness(f64),
    #[error("Failed to load font: {0}")]
    Font(String),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error("{0}")]
    Custom(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Custom(s.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
