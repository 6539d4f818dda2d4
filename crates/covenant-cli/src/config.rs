//! Command configuration
//!
//! [`SpecializeConfig`] gathers the paths a `specialize` run needs, and
//! [`load_bindings`] reads the bindings document (JSON, or YAML by extension).

use covenant_artifact::Binding;
use std::path::{Path, PathBuf};

/// Errors while reading a bindings document
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid JSON bindings
    #[error("invalid JSON bindings in {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid YAML bindings
    #[error("invalid YAML bindings in {path}: {source}")]
    InvalidYaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Bindings document format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingsFormat {
    /// `.json` and anything unrecognized
    Json,
    /// `.yaml` / `.yml`
    Yaml,
}

impl BindingsFormat {
    /// Pick the format from a file extension
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Parse a bindings document
///
/// The document is an array; `null` skips a position, `{"newName": ..}`
/// renames, and any scalar is a value to encode.
///
/// Byte values are hex strings. In YAML they must be quoted: a plain
/// `1234` or `0x10` is read as a number.
///
/// # Errors
/// Returns error if the text is not a valid bindings array
pub fn parse_bindings(text: &str, format: BindingsFormat, path: &Path) -> Result<Vec<Option<Binding>>, ConfigError> {
    match format {
        BindingsFormat::Json => serde_json::from_str(text).map_err(|source| ConfigError::InvalidJson {
            path: path.to_path_buf(),
            source,
        }),
        BindingsFormat::Yaml => serde_yaml::from_str(text).map_err(|source| ConfigError::InvalidYaml {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read and parse the bindings document at `path`
///
/// # Errors
/// Returns error if the file cannot be read or parsed
pub fn load_bindings(path: &Path) -> Result<Vec<Option<Binding>>, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bindings = parse_bindings(&text, BindingsFormat::from_path(path), path)?;
    tracing::debug!(path = %path.display(), count = bindings.len(), "bindings loaded");
    Ok(bindings)
}

/// Inputs of a `specialize` run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecializeConfig {
    /// Artifact to read
    pub artifact: PathBuf,
    /// Bindings document; `None` applies no bindings
    pub bindings: Option<PathBuf>,
    /// Where to write the specialized artifact
    pub output: PathBuf,
}

impl SpecializeConfig {
    /// Create config reading `artifact` and writing `output`
    #[inline]
    #[must_use]
    pub fn new(artifact: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            artifact: artifact.into(),
            bindings: None,
            output: output.into(),
        }
    }

    /// With a bindings document
    #[inline]
    #[must_use]
    pub fn with_bindings(mut self, bindings: impl Into<PathBuf>) -> Self {
        self.bindings = Some(bindings.into());
        self
    }
}
