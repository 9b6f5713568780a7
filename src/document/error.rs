//! Post loading error types.

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a single post file is left out of a build.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("no frontmatter found")]
    NoFrontMatter,

    #[error("invalid frontmatter format: missing closing `---`")]
    InvalidFrontMatter,

    #[error("failed to parse frontmatter: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_document_error_display() {
        let io_err = DocumentError::Io(
            PathBuf::from("posts/hello.md"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert!(io_err.to_string().contains("posts/hello.md"));
        assert_eq!(DocumentError::NoFrontMatter.to_string(), "no frontmatter found");
    }
}
