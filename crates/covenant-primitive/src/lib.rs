//! Covenant Primitives
//!
//! The closed set of constructor parameter types and the byte encoding
//! used when a typed value is baked into an instruction sequence.
//!
//! # Core Concepts
//!
//! - [`PrimitiveType`]: Type tag carried by every artifact parameter
//! - [`Argument`]: Caller-supplied value (number, boolean or raw bytes)
//! - [`ArgumentEncoder`]: Seam turning `(value, type)` into bytes
//! - [`ScriptEncoder`]: Default encoder (minimal script numbers, fixed-width keys)
//!
//! # Example
//!
//! ```rust
//! use covenant_primitive::{Argument, ArgumentEncoder, PrimitiveType, ScriptEncoder};
//!
//! let bytes = ScriptEncoder.encode(&Argument::Number(-255), PrimitiveType::Number)?;
//! assert_eq!(hex::encode(bytes), "ff80");
//! # Ok::<(), covenant_primitive::EncodeError>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod argument;
mod encode;
mod types;

pub use argument::Argument;
pub use encode::{encode_script_number, ArgumentEncoder, EncodeError, ScriptEncoder};
pub use types::{PrimitiveType, UnknownTypeError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
