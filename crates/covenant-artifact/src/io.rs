//! Artifact document I/O
//!
//! The only part of this crate that touches the filesystem. Reads are UTF-8
//! JSON; writes are two-space indented JSON that overwrite the target.

use crate::error::ArtifactIoError;
use crate::model::Artifact;
use std::path::Path;

/// Load an artifact document from `path`
///
/// # Errors
/// - [`ArtifactIoError::Io`] if the file cannot be read
/// - [`ArtifactIoError::Format`] if the content is not a valid artifact
pub fn import_artifact(path: impl AsRef<Path>) -> Result<Artifact, ArtifactIoError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ArtifactIoError::io_error(path, e))?;
    let artifact = Artifact::from_json_str(&content).map_err(|e| ArtifactIoError::format_error(path, e))?;

    tracing::debug!(
        path = %path.display(),
        contract = %artifact.contract_name,
        inputs = artifact.constructor_inputs.len(),
        functions = artifact.functions.len(),
        "artifact loaded"
    );
    Ok(artifact)
}

/// Write `artifact` to `path`, replacing any existing content
///
/// # Errors
/// - [`ArtifactIoError::Serialize`] if the artifact cannot be encoded
/// - [`ArtifactIoError::Io`] if the file cannot be written
pub fn export_artifact(artifact: &Artifact, path: impl AsRef<Path>) -> Result<(), ArtifactIoError> {
    let path = path.as_ref();
    let json = artifact.to_json_pretty().map_err(ArtifactIoError::Serialize)?;
    std::fs::write(path, json).map_err(|e| ArtifactIoError::io_error(path, e))?;

    tracing::debug!(
        path = %path.display(),
        contract = %artifact.contract_name,
        digest = %artifact.digest().short(),
        "artifact written"
    );
    Ok(())
}
