//! Instruction code and operand shape checks.
//!
//! Decodes the raw code and confirms the operand is present exactly when the
//! code needs one, and is of the kind the code needs.

use arborate_common::{Instruction, InstructionCode, Operand, OperandKind, VmError};

/// An instruction whose code is assigned and whose operand matches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Code without operand.
    Bare(InstructionCode),
    /// Code with its integer operand.
    Integer(InstructionCode, i64),
    /// Code with its boolean operand.
    Boolean(InstructionCode, bool),
}

/// Check code membership, operand presence and operand kind, in that order.
pub fn check_operand(function: usize, at: usize, instr: &Instruction) -> Result<Shape, VmError> {
    let code = InstructionCode::try_from(instr.code).map_err(|e| VmError::InvalidInstruction {
        function,
        at,
        code: e.0,
    })?;

    match (code.operand_kind(), instr.operand) {
        (OperandKind::None, None) => Ok(Shape::Bare(code)),
        (OperandKind::None, Some(_)) => {
            Err(VmError::InstructionCodeDoesNotUseData { function, at, code })
        }
        (_, None) => Err(VmError::MissingInstructionData { function, at, code }),
        (OperandKind::Integer, Some(Operand::Integer(value))) => Ok(Shape::Integer(code, value)),
        (OperandKind::Boolean, Some(Operand::Boolean(value))) => Ok(Shape::Boolean(code, value)),
        (expected, Some(_)) => Err(VmError::InvalidInstructionData {
            function,
            at,
            code,
            expected,
        }),
    }
}
