//! Artifact output error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort publishing.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to serialize artifact `{path}`")]
    Serialize {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to clear `{}`", path.display())]
    Clean {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_publish_error_display() {
        let err = PublishError::Write {
            path: PathBuf::from("output/api/meta.json"),
            source: Error::new(ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to write `output/api/meta.json`");
        assert!(std::error::Error::source(&err).is_some());
    }
}
