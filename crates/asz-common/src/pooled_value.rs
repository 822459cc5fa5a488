//! Constant-folded literal values.
//!
//! A `PooledValue` is what the constant folder hands to the checker for a
//! `const` or default-value initializer. Coercion toward a declared type never
//! mutates a value; it produces a new one.

use crate::ecma;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag of a pooled value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Int,
    UInt,
    Double,
    Utf8,
    True,
    False,
    Undefined,
    Null,
    Namespace,
}

/// A constant-pool literal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum PooledValue {
    Int(i32),
    UInt(u32),
    Double(f64),
    Utf8(String),
    True,
    False,
    Undefined,
    Null,
    /// A namespace constant, carrying its URI.
    Namespace(String),
}

impl PooledValue {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            PooledValue::Int(_) => ValueKind::Int,
            PooledValue::UInt(_) => ValueKind::UInt,
            PooledValue::Double(_) => ValueKind::Double,
            PooledValue::Utf8(_) => ValueKind::Utf8,
            PooledValue::True => ValueKind::True,
            PooledValue::False => ValueKind::False,
            PooledValue::Undefined => ValueKind::Undefined,
            PooledValue::Null => ValueKind::Null,
            PooledValue::Namespace(_) => ValueKind::Namespace,
        }
    }

    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value {
            PooledValue::True
        } else {
            PooledValue::False
        }
    }

    /// Numeric payload of int, uint and double values.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            PooledValue::Int(v) => Some(f64::from(v)),
            PooledValue::UInt(v) => Some(f64::from(v)),
            PooledValue::Double(v) => Some(v),
            _ => None,
        }
    }

    /// Boolean payload of `true` and `false`.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            PooledValue::True => Some(true),
            PooledValue::False => Some(false),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PooledValue::Utf8(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            PooledValue::Int(_) | PooledValue::UInt(_) | PooledValue::Double(_)
        )
    }

    /// ECMAScript `ToNumber` of the value.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            PooledValue::Int(v) => f64::from(*v),
            PooledValue::UInt(v) => f64::from(*v),
            PooledValue::Double(v) => *v,
            PooledValue::Utf8(s) => ecma::string_to_number(s),
            PooledValue::True => 1.0,
            PooledValue::False | PooledValue::Null => 0.0,
            PooledValue::Undefined | PooledValue::Namespace(_) => f64::NAN,
        }
    }

    /// ECMAScript `ToBoolean` of the value.
    #[must_use]
    pub fn to_boolean(&self) -> bool {
        match self {
            PooledValue::Int(v) => *v != 0,
            PooledValue::UInt(v) => *v != 0,
            PooledValue::Double(v) => ecma::number_to_boolean(*v),
            PooledValue::Utf8(s) => ecma::string_to_boolean(s),
            PooledValue::True | PooledValue::Namespace(_) => true,
            PooledValue::False | PooledValue::Undefined | PooledValue::Null => false,
        }
    }

    /// True for a double holding NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        matches!(self, PooledValue::Double(v) if v.is_nan())
    }
}

/// Source-like rendering used in diagnostic messages.
impl fmt::Display for PooledValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PooledValue::Int(v) => write!(f, "{v}"),
            PooledValue::UInt(v) => write!(f, "{v}"),
            PooledValue::Double(v) => f.write_str(&ecma::number_to_string(*v)),
            PooledValue::Utf8(s) => f.write_str(s),
            PooledValue::True => f.write_str("true"),
            PooledValue::False => f.write_str("false"),
            PooledValue::Undefined => f.write_str("undefined"),
            PooledValue::Null => f.write_str("null"),
            PooledValue::Namespace(uri) => f.write_str(uri),
        }
    }
}
