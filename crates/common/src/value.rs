//! Runtime value representation for the Arborate VM.
//!
//! Values are what live on the operand stack and in local variable slots.

use std::fmt;

use crate::vm_type::VmType;

/// Runtime value: exactly one of the [`VmType`] kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VmValue {
    /// Boolean value.
    Boolean(bool),
    /// Signed 64-bit integer.
    Integer(i64),
}

impl VmValue {
    /// Returns the type tag for this value.
    pub fn vm_type(&self) -> VmType {
        match self {
            VmValue::Boolean(_) => VmType::Boolean,
            VmValue::Integer(_) => VmType::Integer,
        }
    }

    /// Returns the boolean payload, or `None` for an integer.
    pub fn as_boolean(&self) -> Option<bool> {
        match *self {
            VmValue::Boolean(b) => Some(b),
            VmValue::Integer(_) => None,
        }
    }

    /// Returns the integer payload, or `None` for a boolean.
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            VmValue::Integer(i) => Some(i),
            VmValue::Boolean(_) => None,
        }
    }
}

impl From<bool> for VmValue {
    fn from(value: bool) -> Self {
        VmValue::Boolean(value)
    }
}

impl From<i64> for VmValue {
    fn from(value: i64) -> Self {
        VmValue::Integer(value)
    }
}

impl fmt::Display for VmValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VmValue::Boolean(b) => write!(f, "{b}"),
            VmValue::Integer(i) => write!(f, "{i}"),
        }
    }
}
