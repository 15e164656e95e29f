use std::io;

use thiserror::Error;

/// Failures reading or parsing a markup document.
#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed document {path} at byte {position}: {message}")]
    Malformed {
        path: String,
        position: u64,
        message: String,
    },
}

impl MarkupError {
    /// The document path the error concerns.
    pub fn path(&self) -> &str {
        match self {
            MarkupError::Io { path, .. } | MarkupError::Malformed { path, .. } => path,
        }
    }
}
