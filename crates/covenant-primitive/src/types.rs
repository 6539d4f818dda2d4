//! Primitive type tags
//!
//! Provides [`PrimitiveType`], the closed set of types a constructor or
//! function parameter may declare.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Parameter type tag
///
/// Serialized as the lowercase tag used in artifact documents
/// (`"number"`, `"bool"`, `"xonlypubkey"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    /// Signed integer, encoded as a minimal script number
    Number,
    /// Boolean, encoded as a script number (`1` or empty)
    Bool,
    /// Arbitrary byte string
    Bytes,
    /// 32-byte asset identifier
    Asset,
    /// Explicit amount, encoded as 8-byte little-endian
    Value,
    /// 33-byte compressed public key
    #[serde(rename = "pubkey")]
    PubKey,
    /// 32-byte x-only public key
    #[serde(rename = "xonlypubkey")]
    XOnlyPubKey,
    /// Schnorr signature (64 bytes, or 65 with sighash byte)
    #[serde(rename = "sig")]
    Signature,
    /// Schnorr signature over arbitrary data
    #[serde(rename = "datasig")]
    DataSignature,
}

impl PrimitiveType {
    /// Every tag in declaration order
    pub const ALL: [Self; 9] = [
        Self::Number,
        Self::Bool,
        Self::Bytes,
        Self::Asset,
        Self::Value,
        Self::PubKey,
        Self::XOnlyPubKey,
        Self::Signature,
        Self::DataSignature,
    ];

    /// Tag as written in artifact documents
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Bytes => "bytes",
            Self::Asset => "asset",
            Self::Value => "value",
            Self::PubKey => "pubkey",
            Self::XOnlyPubKey => "xonlypubkey",
            Self::Signature => "sig",
            Self::DataSignature => "datasig",
        }
    }

    /// Accepted byte lengths for byte-backed types
    ///
    /// `None` means any length (or the type is not byte-backed).
    #[inline]
    #[must_use]
    pub const fn byte_lengths(&self) -> Option<&'static [usize]> {
        match self {
            Self::Asset | Self::XOnlyPubKey => Some(&[32]),
            Self::PubKey => Some(&[33]),
            Self::Signature => Some(&[64, 65]),
            Self::DataSignature => Some(&[64]),
            Self::Number | Self::Bool | Self::Bytes | Self::Value => None,
        }
    }
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized type tag
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown primitive type: '{0}'")]
pub struct UnknownTypeError(pub String);

impl FromStr for PrimitiveType {
    type Err = UnknownTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| UnknownTypeError(s.to_string()))
    }
}
