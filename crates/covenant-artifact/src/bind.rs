//! Constructor-parameter binding
//!
//! Specializes an [`Artifact`] by baking encoded argument values into its
//! instructions, or by renaming placeholders for later binding.
//!
//! # Ordering
//! [`transform_artifact`] resolves binding `i` against the name of the
//! *original* artifact's `i`-th constructor input. Earlier steps shrink or
//! rename the threaded artifact's inputs, so positional lookups on it would
//! misalign.

use crate::error::BindError;
use crate::model::Artifact;
use crate::rewrite::{placeholder, rewrite_functions};
use covenant_primitive::{Argument, ArgumentEncoder, ScriptEncoder};
use serde::{Deserialize, Serialize};

/// Per-parameter directive
///
/// In documents a rename is `{"newName": "..."}`; anything else is parsed
/// as an [`Argument`] scalar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Binding {
    /// Keep the parameter symbolic under a new name
    Rename {
        #[serde(rename = "newName")]
        new_name: String,
    },
    /// Encode the value and substitute it into the instructions
    Value(Argument),
}

impl Binding {
    /// Rename directive
    #[inline]
    #[must_use]
    pub fn rename(new_name: impl Into<String>) -> Self {
        Self::Rename {
            new_name: new_name.into(),
        }
    }

    /// Value binding
    #[inline]
    #[must_use]
    pub fn value(arg: impl Into<Argument>) -> Self {
        Self::Value(arg.into())
    }
}

/// Rename constructor input `name` to `new_name`
///
/// Every `"$name"` token in every function becomes `"$new_name"`. The input
/// keeps its type and position.
///
/// # Errors
/// - [`BindError::NotFound`] if no constructor input is named `name`
/// - [`BindError::NameTaken`] if another constructor input is already named
///   `new_name`
pub fn rename_constructor_input(
    artifact: &Artifact,
    name: &str,
    new_name: &str,
) -> Result<Artifact, BindError> {
    let index = position_of(artifact, name)?;
    // Names stay unique, otherwise placeholders of two inputs would merge.
    if new_name != name && artifact.constructor_input(new_name).is_some() {
        return Err(BindError::name_taken(new_name));
    }
    let mut constructor_inputs = artifact.constructor_inputs.clone();
    constructor_inputs[index].name = new_name.to_string();

    Ok(Artifact {
        contract_name: artifact.contract_name.clone(),
        constructor_inputs,
        functions: rewrite_functions(&artifact.functions, &placeholder(name), &placeholder(new_name)),
    })
}

/// Encode `value` for constructor input `input_name` and bake it in
///
/// The encoded bytes replace every `"$input_name"` token as lowercase hex,
/// and the input is removed from `constructor_inputs`.
///
/// # Errors
/// - [`BindError::NotFound`] if no constructor input is named `input_name`
/// - [`BindError::Encoding`] with the encoder's error, unchanged
pub fn encode_constructor_arg<E>(
    artifact: &Artifact,
    input_name: &str,
    value: &Argument,
    encoder: &E,
) -> Result<Artifact, BindError>
where
    E: ArgumentEncoder + ?Sized,
{
    let index = position_of(artifact, input_name)?;
    let input = &artifact.constructor_inputs[index];
    let encoded = hex::encode(encoder.encode(value, input.ty)?);

    tracing::debug!(
        input = input_name,
        ty = %input.ty,
        value = %value,
        occurrences = artifact.count_token(&placeholder(input_name)),
        "encoding constructor argument"
    );

    let mut constructor_inputs = artifact.constructor_inputs.clone();
    constructor_inputs.remove(index);

    Ok(Artifact {
        contract_name: artifact.contract_name.clone(),
        constructor_inputs,
        functions: rewrite_functions(&artifact.functions, &placeholder(input_name), &encoded),
    })
}

/// Index of the first constructor input named `name`
fn position_of(artifact: &Artifact, name: &str) -> Result<usize, BindError> {
    artifact
        .constructor_inputs
        .iter()
        .position(|p| p.name == name)
        .ok_or_else(|| BindError::not_found(name))
}

/// Apply `bindings` to the constructor inputs, in declaration order
///
/// `bindings[i]` targets the original artifact's `i`-th constructor input.
/// `None` entries, and inputs past the end of `bindings`, are left alone.
/// Bindings past the last input are ignored.
///
/// # Errors
/// Fails on the first step that fails; no partially bound artifact is
/// returned.
pub fn transform_artifact<E>(
    artifact: &Artifact,
    bindings: &[Option<Binding>],
    encoder: &E,
) -> Result<Artifact, BindError>
where
    E: ArgumentEncoder + ?Sized,
{
    // Names are fixed up front; only the threaded artifact changes.
    let declared = &artifact.constructor_inputs;
    if bindings.len() > declared.len() {
        tracing::warn!(
            contract = %artifact.contract_name,
            inputs = declared.len(),
            bindings = bindings.len(),
            "ignoring bindings past the last constructor input"
        );
    }

    let mut bound = 0usize;
    let mut renamed = 0usize;
    let result = declared
        .iter()
        .zip(bindings)
        .try_fold(artifact.clone(), |current, (input, binding)| match binding {
            None => Ok(current),
            Some(Binding::Rename { new_name }) => {
                tracing::debug!(input = %input.name, new_name = %new_name, "renaming constructor input");
                renamed += 1;
                rename_constructor_input(&current, &input.name, new_name)
            }
            Some(Binding::Value(value)) => {
                bound += 1;
                encode_constructor_arg(&current, &input.name, value, encoder)
            }
        })?;

    if tracing::enabled!(tracing::Level::INFO) {
        tracing::info!(
            contract = %result.contract_name,
            bound,
            renamed,
            remaining = result.constructor_inputs.len(),
            digest = %result.digest().short(),
            "artifact specialized"
        );
    }
    Ok(result)
}

/// [`transform_artifact`] with the default [`ScriptEncoder`]
///
/// # Errors
/// See [`transform_artifact`]
#[inline]
pub fn specialize(artifact: &Artifact, bindings: &[Option<Binding>]) -> Result<Artifact, BindError> {
    transform_artifact(artifact, bindings, &ScriptEncoder)
}
