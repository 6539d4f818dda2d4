//! Typed argument values
//!
//! An [`Argument`] is what a caller supplies for a constructor parameter
//! before it is encoded into bytes.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Caller-supplied constructor argument
///
/// Deserializes from a plain JSON/YAML scalar: numbers become
/// [`Argument::Number`], booleans [`Argument::Boolean`] and strings are
/// decoded as lowercase or uppercase hex into [`Argument::Bytes`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawArgument", into = "RawArgument")]
pub enum Argument {
    /// Signed integer
    Number(i64),
    /// Boolean flag
    Boolean(bool),
    /// Raw bytes (hex in documents)
    Bytes(Vec<u8>),
}

impl Argument {
    /// Build a bytes argument from a hex string
    ///
    /// # Errors
    /// Returns error if `s` is not valid hex
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        hex::decode(s).map(Self::Bytes)
    }

    /// Short name of the value kind, used in error messages
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
            Self::Bytes(_) => "bytes",
        }
    }
}

impl Display for Argument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Bytes(bytes) => write!(f, "0x{}", hex::encode(bytes)),
        }
    }
}

impl From<i64> for Argument {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for Argument {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<Vec<u8>> for Argument {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&[u8]> for Argument {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

/// Untyped document scalar
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawArgument {
    Boolean(bool),
    Number(i64),
    Hex(String),
}

impl TryFrom<RawArgument> for Argument {
    type Error = hex::FromHexError;

    fn try_from(raw: RawArgument) -> Result<Self, Self::Error> {
        match raw {
            RawArgument::Boolean(b) => Ok(Self::Boolean(b)),
            RawArgument::Number(n) => Ok(Self::Number(n)),
            RawArgument::Hex(s) => Self::from_hex(&s),
        }
    }
}

impl From<Argument> for RawArgument {
    fn from(arg: Argument) -> Self {
        match arg {
            Argument::Number(n) => Self::Number(n),
            Argument::Boolean(b) => Self::Boolean(b),
            Argument::Bytes(bytes) => Self::Hex(hex::encode(bytes)),
        }
    }
}
