use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to {op} {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Report not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("Failed to parse report {}: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Failed to encode report: {0}")]
    Encode(#[from] serde_yaml::Error),
}

impl ReportError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
