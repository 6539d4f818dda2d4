//! Subcommand implementations
//!
//! Each command reads through the artifact file boundary and returns a
//! report; printing is left to the binary.

use crate::config::{load_bindings, SpecializeConfig};
use anyhow::Context;
use covenant_artifact::{export_artifact, import_artifact, specialize, Artifact, ArtifactDigest, Parameter};
use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

/// Result of a `specialize` run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecializeOutcome {
    /// Contract name
    pub contract_name: String,
    /// Constructor inputs before binding
    pub inputs_before: usize,
    /// Constructor inputs left after binding
    pub inputs_after: usize,
    /// Digest of the written artifact
    pub digest: ArtifactDigest,
    /// Where the artifact was written
    pub output: PathBuf,
}

impl Display for SpecializeOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {} constructor input(s), wrote {} ({})",
            self.contract_name,
            self.inputs_before,
            self.inputs_after,
            self.output.display(),
            self.digest.short()
        )
    }
}

/// Load, bind and write an artifact
///
/// Nothing is written unless every binding succeeds.
///
/// # Errors
/// Returns error if loading, binding or writing fails
pub fn run_specialize(config: &SpecializeConfig) -> anyhow::Result<SpecializeOutcome> {
    let artifact = import_artifact(&config.artifact)
        .with_context(|| format!("failed to load artifact {}", config.artifact.display()))?;
    let bindings = match &config.bindings {
        Some(path) => load_bindings(path)?,
        None => Vec::new(),
    };

    let specialized = specialize(&artifact, &bindings)
        .with_context(|| format!("failed to specialize {}", artifact.contract_name))?;
    export_artifact(&specialized, &config.output)
        .with_context(|| format!("failed to write artifact {}", config.output.display()))?;

    Ok(SpecializeOutcome {
        contract_name: specialized.contract_name.clone(),
        inputs_before: artifact.constructor_inputs.len(),
        inputs_after: specialized.constructor_inputs.len(),
        digest: specialized.digest(),
        output: config.output.clone(),
    })
}

/// Summary of an artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectReport {
    pub contract_name: String,
    pub digest: ArtifactDigest,
    pub constructor_inputs: Vec<Parameter>,
    pub functions: Vec<FunctionSummary>,
}

/// Per-function part of an [`InspectReport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionSummary {
    pub name: String,
    pub function_inputs: usize,
    pub requirements: usize,
    pub instructions: usize,
    pub placeholders: Vec<String>,
}

impl InspectReport {
    /// Summarize an in-memory artifact
    #[must_use]
    pub fn of(artifact: &Artifact) -> Self {
        let functions = artifact
            .functions
            .iter()
            .map(|f| FunctionSummary {
                name: f.name.clone(),
                function_inputs: f.function_inputs.len(),
                requirements: f.require.len(),
                instructions: f.asm.len(),
                placeholders: f.placeholders().into_iter().map(str::to_string).collect(),
            })
            .collect();

        Self {
            contract_name: artifact.contract_name.clone(),
            digest: artifact.digest(),
            constructor_inputs: artifact.constructor_inputs.clone(),
            functions,
        }
    }
}

impl Display for InspectReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "contract {} ({})", self.contract_name, self.digest)?;
        writeln!(f, "constructor inputs:")?;
        if self.constructor_inputs.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for input in &self.constructor_inputs {
            writeln!(f, "  {}: {}", input.name, input.ty)?;
        }
        writeln!(f, "functions:")?;
        for function in &self.functions {
            write!(
                f,
                "  {} ({} inputs, {} requirements, {} instructions)",
                function.name, function.function_inputs, function.requirements, function.instructions
            )?;
            if function.placeholders.is_empty() {
                writeln!(f)?;
            } else {
                writeln!(f, " uses {}", function.placeholders.join(", "))?;
            }
        }
        Ok(())
    }
}

/// Load an artifact and summarize it
///
/// # Errors
/// Returns error if the artifact cannot be loaded
pub fn run_inspect(path: &Path) -> anyhow::Result<InspectReport> {
    let artifact =
        import_artifact(path).with_context(|| format!("failed to load artifact {}", path.display()))?;
    Ok(InspectReport::of(&artifact))
}
