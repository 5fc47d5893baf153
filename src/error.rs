//! Resource errors

use thiserror::Error;

/// Errors raised while loading stories and backgrounds.
/// All of them are fatal at start-up.
#[derive(Error, Debug)]
pub enum ResourceError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("malformed resource {path}: {reason}")]
    Malformed { path: String, reason: String },

    #[error("cannot read resource {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ResourceError {
    /// Build a `Malformed` error from any displayable reason
    pub fn malformed(path: impl Into<String>, reason: impl ToString) -> Self {
        ResourceError::Malformed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
