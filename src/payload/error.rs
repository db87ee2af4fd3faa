use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Failed to {op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse payload {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to decode artifact {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: base64::DecodeError,
    },
    #[error("Refusing to write artifact outside the output directory: {name}")]
    UnsafeName { name: String },
}

impl PayloadError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PayloadError>;
