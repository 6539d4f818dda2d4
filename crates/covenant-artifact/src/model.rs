//! Contract artifact model
//!
//! Defines [`Artifact`] and its parts exactly as they appear in the JSON
//! document emitted by the contract compiler.

use crate::hash::ArtifactDigest;
use crate::rewrite::PLACEHOLDER_PREFIX;
use covenant_primitive::PrimitiveType;
use serde::{Deserialize, Serialize};

/// Compiled contract description
///
/// # Invariants
/// - Constructor input names are unique
/// - A constructor input `x` is referenced from instructions only as `"$x"`
///
/// Transformations never mutate an artifact in place; they return a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// Contract identifier
    pub contract_name: String,
    /// Parameters still to be bound, in declaration order
    pub constructor_inputs: Vec<Parameter>,
    /// Callable functions, in declaration order
    pub functions: Vec<ArtifactFunction>,
}

impl Artifact {
    /// Create an empty artifact
    #[inline]
    #[must_use]
    pub fn new(contract_name: impl Into<String>) -> Self {
        Self {
            contract_name: contract_name.into(),
            constructor_inputs: Vec::new(),
            functions: Vec::new(),
        }
    }

    /// With an additional constructor input
    #[inline]
    #[must_use]
    pub fn with_constructor_input(mut self, input: Parameter) -> Self {
        self.constructor_inputs.push(input);
        self
    }

    /// With an additional function
    #[inline]
    #[must_use]
    pub fn with_function(mut self, function: ArtifactFunction) -> Self {
        self.functions.push(function);
        self
    }

    /// Parse from JSON text
    ///
    /// # Errors
    /// Returns error if the text is not valid JSON or a required field is missing
    #[inline]
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize as JSON indented with two spaces
    ///
    /// # Errors
    /// Returns error if serialization fails
    #[inline]
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Look up a constructor input by name
    #[inline]
    #[must_use]
    pub fn constructor_input(&self, name: &str) -> Option<&Parameter> {
        self.constructor_inputs.iter().find(|p| p.name == name)
    }

    /// Distinct placeholder tokens, in first-occurrence order
    #[must_use]
    pub fn placeholders(&self) -> Vec<&str> {
        distinct_placeholders(self.functions.iter().flat_map(|f| f.asm.iter()))
    }

    /// Number of occurrences of `token` across every function
    #[must_use]
    pub fn count_token(&self, token: &str) -> usize {
        self.functions.iter().map(|f| f.count_token(token)).sum()
    }

    /// Content digest of this artifact
    #[inline]
    #[must_use]
    pub fn digest(&self) -> ArtifactDigest {
        ArtifactDigest::of(self)
    }
}

/// Named, typed parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    /// Name, unique within the containing list
    pub name: String,
    /// Declared primitive type
    #[serde(rename = "type")]
    pub ty: PrimitiveType,
}

impl Parameter {
    /// Create new parameter
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, ty: PrimitiveType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Precondition record
///
/// Opaque to this crate: carried through every transformation untouched,
/// key order included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Requirement(pub serde_json::Value);

impl From<serde_json::Value> for Requirement {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

/// Callable contract function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactFunction {
    /// Function name
    pub name: String,
    /// Witness inputs, scoped to this function
    pub function_inputs: Vec<Parameter>,
    /// Preconditions
    pub require: Vec<Requirement>,
    /// Instruction tokens: literal opcodes/operands or `"$name"` placeholders
    pub asm: Vec<String>,
}

impl ArtifactFunction {
    /// Create an empty function
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            function_inputs: Vec::new(),
            require: Vec::new(),
            asm: Vec::new(),
        }
    }

    /// With an additional function input
    #[inline]
    #[must_use]
    pub fn with_input(mut self, input: Parameter) -> Self {
        self.function_inputs.push(input);
        self
    }

    /// With an additional requirement
    #[inline]
    #[must_use]
    pub fn with_requirement(mut self, requirement: impl Into<Requirement>) -> Self {
        self.require.push(requirement.into());
        self
    }

    /// With instruction tokens appended
    #[inline]
    #[must_use]
    pub fn with_asm<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.asm.extend(tokens.into_iter().map(Into::into));
        self
    }

    /// Check if `token` occurs in the instruction sequence
    #[inline]
    #[must_use]
    pub fn contains_token(&self, token: &str) -> bool {
        self.asm.iter().any(|t| t == token)
    }

    /// Number of occurrences of `token` in the instruction sequence
    #[inline]
    #[must_use]
    pub fn count_token(&self, token: &str) -> usize {
        self.asm.iter().filter(|t| *t == token).count()
    }

    /// Distinct placeholder tokens, in first-occurrence order
    #[must_use]
    pub fn placeholders(&self) -> Vec<&str> {
        distinct_placeholders(self.asm.iter())
    }
}

fn distinct_placeholders<'a>(tokens: impl Iterator<Item = &'a String>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for token in tokens {
        if token.starts_with(PLACEHOLDER_PREFIX) && !seen.contains(&token.as_str()) {
            seen.push(token);
        }
    }
    seen
}
