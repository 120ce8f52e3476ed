//! Function definitions: the unit of code handed to a machine.

use crate::instruction::Instruction;
use crate::vm_type::VmType;

/// An immutable function: code, signature and local slot count.
///
/// Inputs are taken from the top of the shared stack (first parameter
/// deepest); outputs are left there in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDefinition {
    code: Vec<Instruction>,
    in_params: Vec<VmType>,
    out_params: Vec<VmType>,
    var_count: usize,
}

impl FunctionDefinition {
    /// Create a new function definition.
    pub fn new(
        code: Vec<Instruction>,
        in_params: Vec<VmType>,
        out_params: Vec<VmType>,
        var_count: usize,
    ) -> Self {
        Self {
            code,
            in_params,
            out_params,
            var_count,
        }
    }

    /// The instruction sequence.
    pub fn code(&self) -> &[Instruction] {
        &self.code
    }

    /// Input parameter types, deepest stack value first.
    pub fn in_params(&self) -> &[VmType] {
        &self.in_params
    }

    /// Output parameter types, deepest stack value first.
    pub fn out_params(&self) -> &[VmType] {
        &self.out_params
    }

    /// Number of local variable slots.
    pub fn var_count(&self) -> usize {
        self.var_count
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.code.len()
    }

    /// Returns true if the function has no instructions.
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction_code::InstructionCode;

    #[test]
    fn accessors() {
        let def = FunctionDefinition::new(
            vec![
                Instruction::with_integer(InstructionCode::StackToVariable, 0),
                Instruction::with_integer(InstructionCode::VariableToStack, 0),
            ],
            vec![VmType::Integer],
            vec![VmType::Integer, VmType::Boolean],
            1,
        );
        assert_eq!(def.len(), 2);
        assert!(!def.is_empty());
        assert_eq!(def.in_params(), &[VmType::Integer]);
        assert_eq!(def.out_params(), &[VmType::Integer, VmType::Boolean]);
        assert_eq!(def.var_count(), 1);
    }

    #[test]
    fn empty_code() {
        let def = FunctionDefinition::new(vec![], vec![], vec![VmType::Boolean], 0);
        assert!(def.is_empty());
        assert_eq!(def.len(), 0);
    }
}
