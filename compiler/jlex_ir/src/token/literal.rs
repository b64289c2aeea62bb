//! Decoded literal payloads.

use std::fmt;

/// Value decoded from a literal token.
///
/// Integer variants hold the exact magnitude as written; `2147483648` is a
/// legal `Int` because only the parser knows whether a unary minus applies.
/// Hex, octal, and binary literals keep their raw bit pattern, so `0xFFFFFFFF`
/// is `Int(4294967295)`.
///
/// Floating variants store bits so the type stays `Eq + Hash`.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum LiteralValue {
    Int(u64),
    Long(u64),
    /// `f32` bits.
    Float(u32),
    /// `f64` bits.
    Double(u64),
    Bool(bool),
    Char(char),
    /// Decoded contents of a string literal or text block.
    Str(String),
    Null,
}

impl LiteralValue {
    #[inline]
    pub fn float(value: f32) -> Self {
        LiteralValue::Float(value.to_bits())
    }

    #[inline]
    pub fn double(value: f64) -> Self {
        LiteralValue::Double(value.to_bits())
    }

    /// Integer magnitude for `Int` and `Long`.
    pub fn as_integer(&self) -> Option<u64> {
        match *self {
            LiteralValue::Int(v) | LiteralValue::Long(v) => Some(v),
            _ => None,
        }
    }

    /// Floating value for `Float` (widened) and `Double`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            LiteralValue::Float(bits) => Some(f64::from(f32::from_bits(bits))),
            LiteralValue::Double(bits) => Some(f64::from_bits(bits)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            LiteralValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match *self {
            LiteralValue::Char(c) => Some(c),
            _ => None,
        }
    }
}

impl fmt::Debug for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Int(v) => write!(f, "Int({v})"),
            LiteralValue::Long(v) => write!(f, "Long({v})"),
            LiteralValue::Float(bits) => write!(f, "Float({:?})", f32::from_bits(*bits)),
            LiteralValue::Double(bits) => write!(f, "Double({:?})", f64::from_bits(*bits)),
            LiteralValue::Bool(v) => write!(f, "Bool({v})"),
            LiteralValue::Char(c) => write!(f, "Char({c:?})"),
            LiteralValue::Str(s) => write!(f, "Str({s:?})"),
            LiteralValue::Null => f.write_str("Null"),
        }
    }
}
