//! A single Arborate instruction: a raw instruction code plus an optional operand.
//!
//! The code is kept raw (`u16`) because instructions arrive from an external
//! producer; whether it names a member of [`InstructionCode`] is decided by the
//! validator, not by construction.

use std::fmt;

use crate::instruction_code::InstructionCode;

/// The literal or index attached to an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// 64-bit signed integer: a constant, slot index, branch target or callee index.
    Integer(i64),
    /// Boolean constant.
    Boolean(bool),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Integer(i) => write!(f, "{i}"),
            Operand::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// One instruction in a function's code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// Raw instruction code. See [`InstructionCode`] for the assigned values.
    pub code: u16,
    /// Operand, if any.
    pub operand: Option<Operand>,
}

impl Instruction {
    /// Create an instruction that carries no operand.
    pub fn new(code: InstructionCode) -> Self {
        Self {
            code: code.code(),
            operand: None,
        }
    }

    /// Create an instruction with an integer operand.
    pub fn with_integer(code: InstructionCode, value: i64) -> Self {
        Self {
            code: code.code(),
            operand: Some(Operand::Integer(value)),
        }
    }

    /// Create an instruction with a boolean operand.
    pub fn with_boolean(code: InstructionCode, value: bool) -> Self {
        Self {
            code: code.code(),
            operand: Some(Operand::Boolean(value)),
        }
    }

    /// Create an instruction from a raw code, which need not be assigned.
    pub fn from_raw(code: u16, operand: Option<Operand>) -> Self {
        Self { code, operand }
    }

    /// Returns the decoded instruction code, or `None` if the raw code is unassigned.
    pub fn instruction_code(&self) -> Option<InstructionCode> {
        InstructionCode::try_from(self.code).ok()
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.instruction_code() {
            Some(code) => write!(f, "{code:?}")?,
            None => write!(f, "<unknown {:#06x}>", self.code)?,
        }
        if let Some(operand) = self.operand {
            write!(f, " {operand}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_constructors() {
        let add = Instruction::new(InstructionCode::IntegerAdd);
        assert_eq!(add.code, 0x0503);
        assert_eq!(add.operand, None);

        let push = Instruction::with_integer(InstructionCode::IntegerConstantToStack, -6);
        assert_eq!(push.operand, Some(Operand::Integer(-6)));

        let flag = Instruction::with_boolean(InstructionCode::BooleanConstantToStack, true);
        assert_eq!(flag.operand, Some(Operand::Boolean(true)));
    }

    #[test]
    fn raw_code_decoding() {
        assert_eq!(
            Instruction::from_raw(0x0031, Some(Operand::Integer(2))).instruction_code(),
            Some(InstructionCode::BranchTrue)
        );
        assert_eq!(Instruction::from_raw(0x7777, None).instruction_code(), None);
    }

    #[test]
    fn display() {
        assert_eq!(
            Instruction::with_integer(InstructionCode::Branch, 4).to_string(),
            "Branch 4"
        );
        assert_eq!(
            Instruction::new(InstructionCode::ExitFunction).to_string(),
            "ExitFunction"
        );
        assert_eq!(
            Instruction::from_raw(0x0200, Some(Operand::Boolean(false))).to_string(),
            "<unknown 0x0200> false"
        );
    }
}
