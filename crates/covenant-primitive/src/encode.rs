//! Type-directed argument encoding
//!
//! Provides the [`ArgumentEncoder`] seam and [`ScriptEncoder`], the default
//! implementation producing the byte pushes expected by tapscript-style
//! instruction sequences.

use crate::argument::Argument;
use crate::types::PrimitiveType;

/// Encodes a typed argument into bytes
///
/// Implement this to plug a different type system into artifact
/// specialization. Implementations must not perform I/O.
pub trait ArgumentEncoder {
    /// Encode `value` as the declared parameter type `ty`
    ///
    /// # Errors
    /// Returns error if the value is not compatible with `ty`
    fn encode(&self, value: &Argument, ty: PrimitiveType) -> Result<Vec<u8>, EncodeError>;
}

/// Errors raised when a value cannot be encoded as the declared type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// Value kind does not match the declared type
    #[error("type mismatch: {ty} cannot be encoded from a {found} value")]
    TypeMismatch {
        ty: PrimitiveType,
        found: &'static str,
    },

    /// Byte-backed value has the wrong length
    #[error("invalid length for {ty}: expected {expected:?} bytes, got {actual}")]
    InvalidLength {
        ty: PrimitiveType,
        expected: &'static [usize],
        actual: usize,
    },

    /// Numeric value outside the type's range
    #[error("value {value} out of range for {ty}")]
    OutOfRange { ty: PrimitiveType, value: i64 },
}

/// Default encoder
///
/// - `number` / `bool`: minimal script number
/// - `value`: 8-byte little-endian unsigned amount
/// - byte-backed types: verbatim, length-checked where the type is fixed-width
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptEncoder;

impl ArgumentEncoder for ScriptEncoder {
    fn encode(&self, value: &Argument, ty: PrimitiveType) -> Result<Vec<u8>, EncodeError> {
        match (ty, value) {
            (PrimitiveType::Number, Argument::Number(n)) => Ok(encode_script_number(*n)),
            (PrimitiveType::Bool, Argument::Boolean(b)) => Ok(encode_script_number(i64::from(*b))),
            (PrimitiveType::Value, Argument::Number(n)) => u64::try_from(*n)
                .map(|amount| amount.to_le_bytes().to_vec())
                .map_err(|_| EncodeError::OutOfRange { ty, value: *n }),
            (PrimitiveType::Value, Argument::Bytes(bytes)) => {
                check_length(ty, bytes, &[8])?;
                Ok(bytes.clone())
            }
            (
                PrimitiveType::Bytes
                | PrimitiveType::Asset
                | PrimitiveType::PubKey
                | PrimitiveType::XOnlyPubKey
                | PrimitiveType::Signature
                | PrimitiveType::DataSignature,
                Argument::Bytes(bytes),
            ) => {
                if let Some(lengths) = ty.byte_lengths() {
                    check_length(ty, bytes, lengths)?;
                }
                Ok(bytes.clone())
            }
            (ty, value) => Err(EncodeError::TypeMismatch {
                ty,
                found: value.kind(),
            }),
        }
    }
}

fn check_length(
    ty: PrimitiveType,
    bytes: &[u8],
    expected: &'static [usize],
) -> Result<(), EncodeError> {
    if expected.contains(&bytes.len()) {
        Ok(())
    } else {
        Err(EncodeError::InvalidLength {
            ty,
            expected,
            actual: bytes.len(),
        })
    }
}

/// Minimal little-endian sign-magnitude encoding
///
/// Zero is the empty byte string. The sign lives in the high bit of the last
/// byte; an extra byte is appended when the magnitude already uses that bit.
#[must_use]
pub fn encode_script_number(value: i64) -> Vec<u8> {
    if value == 0 {
        return Vec::new();
    }

    let negative = value < 0;
    let mut magnitude = value.unsigned_abs();
    let mut out = Vec::with_capacity(9);
    while magnitude > 0 {
        out.push((magnitude & 0xff) as u8);
        magnitude >>= 8;
    }

    // `out` is non-empty: value != 0
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}
