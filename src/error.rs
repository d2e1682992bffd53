use std::path::PathBuf;
use thiserror::Error;

/// Failure classes reported by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Argument,
    DirectoryAccess,
    Decode,
    Dimension,
    Encode,
}

#[derive(Debug, Error)]
pub enum ResizeError {
    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Invalid scale factor: {0}")]
    InvalidScale(String),

    #[error("Cannot read directory {path}: {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output directory {path}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid target dimensions for {path}: {width}x{height} scaled by {scale}")]
    Dimension {
        path: PathBuf,
        width: u32,
        height: u32,
        scale: f64,
    },

    #[error("Failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Walkdir error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl ResizeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResizeError::Argument(_) | ResizeError::InvalidScale(_) => ErrorKind::Argument,
            ResizeError::DirectoryAccess { .. } | ResizeError::Walk(_) => {
                ErrorKind::DirectoryAccess
            }
            ResizeError::Decode { .. } | ResizeError::UnsupportedFormat(_) => ErrorKind::Decode,
            ResizeError::Dimension { .. } => ErrorKind::Dimension,
            ResizeError::DirectoryCreation { .. } | ResizeError::Encode { .. } => {
                ErrorKind::Encode
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ResizeError>;
