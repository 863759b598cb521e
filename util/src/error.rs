use std::path::PathBuf;

/// Result type for loading problem metadata and testcases.
pub type UtilResult<T> = Result<T, UtilError>;

/// Errors raised while reading problem files from disk.
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid problem handler JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Directory not found: {0:?}")]
    MissingDirectory(PathBuf),

    #[error("Not valid UTF-8: {0:?}")]
    NotUtf8(PathBuf),
}

impl UtilError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        UtilError::Io {
            path: path.into(),
            source,
        }
    }
}
