//! Covenant Artifact
//!
//! Compiled contract artifacts and constructor-parameter specialization.
//!
//! # Core Concepts
//!
//! - [`Artifact`]: Contract description (constructor inputs, functions, instructions)
//! - [`replace_token`]: Exact-match instruction token substitution
//! - [`Binding`]: Per-parameter directive (encode a value, or rename)
//! - [`transform_artifact`]: Ordered fold of bindings into a new artifact
//! - [`ArtifactDigest`]: 32-byte Blake3 digest for identity checks
//!
//! # Example
//!
//! ```rust
//! use covenant_artifact::{specialize, Artifact, ArtifactFunction, Binding, Parameter};
//! use covenant_primitive::PrimitiveType;
//!
//! let artifact = Artifact::new("Pair")
//!     .with_constructor_input(Parameter::new("a", PrimitiveType::Number))
//!     .with_constructor_input(Parameter::new("b", PrimitiveType::Number))
//!     .with_function(ArtifactFunction::new("sum").with_asm(["$a", "$b", "OP_ADD"]));
//!
//! let out = specialize(&artifact, &[Some(Binding::value(5_i64)), Some(Binding::rename("bNew"))])?;
//! assert_eq!(out.functions[0].asm, ["05", "$bNew", "OP_ADD"]);
//! # Ok::<(), covenant_artifact::BindError>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod bind;
mod error;
mod hash;
mod io;
mod model;
mod rewrite;

// Re-exports
pub use bind::{encode_constructor_arg, rename_constructor_input, specialize, transform_artifact, Binding};
pub use error::{ArtifactIoError, BindError};
pub use hash::{ArtifactDigest, DigestError};
pub use io::{export_artifact, import_artifact};
pub use model::{Artifact, ArtifactFunction, Parameter, Requirement};
pub use rewrite::{placeholder, replace_token, rewrite_functions, PLACEHOLDER_PREFIX};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
