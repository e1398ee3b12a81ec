//! Asset index error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building the local asset index.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum AssetError {
    #[error("failed to read photo directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read photo {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
