//! Static and runtime type tags for Arborate values.

use std::fmt;

/// The kind of a value.
///
/// Used both as the declared type in function signatures and as the runtime
/// tag of every value on the stack or in a variable slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VmType {
    /// `true` or `false`.
    Boolean,
    /// Signed 64-bit integer.
    Integer,
}

/// All value types, in definition order.
pub const ALL_VM_TYPES: [VmType; 2] = [VmType::Boolean, VmType::Integer];

impl VmType {
    /// Returns the display name for this type.
    pub fn name(&self) -> &'static str {
        match self {
            VmType::Boolean => "Boolean",
            VmType::Integer => "Integer",
        }
    }
}

impl fmt::Display for VmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_vm_types_count() {
        assert_eq!(ALL_VM_TYPES.len(), 2);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(VmType::Boolean.to_string(), "Boolean");
        assert_eq!(VmType::Integer.to_string(), "Integer");
    }
}
