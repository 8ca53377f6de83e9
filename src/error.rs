//! Error type shared by the public entry points.
//!
//! Algorithms never fail mid-run; validation happens once where a caller
//! hands data in, and I/O failures are wrapped with the path involved.
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Unreadable, mismatched or empty input data.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Output encoding that cannot represent the requested data.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Transform requested on a degenerate (zero-sized) field.
    #[error("cannot process a {width}x{height} field")]
    ResourceExhaustion { width: usize, height: usize },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image codec error on {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("JSON error on {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Reject zero-sized fields at an entry point.
    pub(crate) fn check_dims(width: usize, height: usize) -> Result<()> {
        if width == 0 || height == 0 {
            Err(Error::ResourceExhaustion { width, height })
        } else {
            Ok(())
        }
    }
}
