//! Error types for artifact specialization and file I/O
//!
//! - [`BindError`]: rename/encode of constructor inputs
//! - [`ArtifactIoError`]: loading and saving artifact documents

use covenant_primitive::EncodeError;
use std::path::{Path, PathBuf};

/// Errors during constructor-input binding
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// No constructor input with this name
    #[error("constructor input \"{0}\" not found")]
    NotFound(String),

    /// Rename target is already held by another constructor input
    #[error("constructor input \"{0}\" already exists")]
    NameTaken(String),

    /// Encoder rejected the value for the declared type
    #[error(transparent)]
    Encoding(#[from] EncodeError),
}

impl BindError {
    /// Create not-found error
    #[inline]
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create name-taken error
    #[inline]
    pub fn name_taken(name: impl Into<String>) -> Self {
        Self::NameTaken(name.into())
    }
}

/// Errors while reading or writing an artifact document
#[derive(Debug, thiserror::Error)]
pub enum ArtifactIoError {
    /// IO error during file read or write
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document is not a valid artifact
    #[error("invalid artifact document {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Artifact could not be serialized
    #[error("failed to serialize artifact: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl ArtifactIoError {
    /// Create IO error for path
    pub fn io_error(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create format error for path
    pub fn format_error(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::Format {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_primitive::PrimitiveType;

    #[test]
    fn not_found_display() {
        let err = BindError::not_found("owner");
        assert_eq!(err.to_string(), "constructor input \"owner\" not found");
    }

    #[test]
    fn name_taken_display() {
        let err = BindError::name_taken("b");
        assert_eq!(err.to_string(), "constructor input \"b\" already exists");
    }

    #[test]
    fn encoding_error_is_transparent() {
        let inner = EncodeError::OutOfRange {
            ty: PrimitiveType::Value,
            value: -3,
        };
        let err = BindError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err, BindError::Encoding(inner));
    }

    #[test]
    fn format_error_names_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ArtifactIoError::format_error("a/b.json", source);
        assert!(err.to_string().contains("a/b.json"));
    }
}
