//! Instruction code definitions for the Arborate instruction set.
//!
//! Codes are grouped by family in the high byte: variable access (0x001x),
//! functions (0x002x), branches (0x003x), booleans (0x01xx) and integers
//! (0x05xx).

use crate::error::UnknownInstructionCode;

/// Identifies the operation to perform.
///
/// The `#[repr(u16)]` attribute gives each variant a stable code value, which
/// is what an [`Instruction`](crate::Instruction) actually stores.
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionCode {
    // Variables
    /// Push the value stored in slot `operand`.
    VariableToStack = 0x0010,
    /// Pop one value into slot `operand`.
    StackToVariable = 0x0011,

    // Functions
    /// Invoke the function at index `operand` on the shared stack.
    CallFunction = 0x0020,
    /// Leave the current function immediately.
    ExitFunction = 0x0021,

    // Branches
    /// Jump to instruction `operand`.
    Branch = 0x0030,
    /// Pop a Boolean, jump to `operand` if it is true.
    BranchTrue = 0x0031,
    /// Pop a Boolean, jump to `operand` if it is false.
    BranchFalse = 0x0032,

    // Boolean operations
    /// Push the Boolean `operand`.
    BooleanConstantToStack = 0x0100,
    /// Pop two Booleans, push `a == b`.
    BooleanEqual = 0x0101,
    /// Pop two Booleans, push `a != b`.
    BooleanNotEqual = 0x0102,
    /// Pop two Booleans, push `a && b`.
    BooleanAnd = 0x0103,
    /// Pop two Booleans, push `a || b`.
    BooleanOr = 0x0107,
    /// Pop one Boolean, push its negation.
    BooleanNot = 0x0108,

    // Integer operations
    /// Push the Integer `operand`.
    IntegerConstantToStack = 0x0500,
    /// Pop two Integers, push Boolean `a == b`.
    IntegerEqual = 0x0501,
    /// Pop two Integers, push Boolean `a != b`.
    IntegerNotEqual = 0x0502,
    /// Pop two Integers, push `a + b` (wrapping).
    IntegerAdd = 0x0503,
    /// Pop two Integers, push `a - b` (wrapping).
    IntegerSubtract = 0x0504,
    /// Pop two Integers, push `a * b` (wrapping).
    IntegerMultiply = 0x0505,
    /// Pop two Integers, push `a / b` truncated. Division by zero yields 0.
    IntegerDivide = 0x0506,
    /// Pop two Integers, push `a % b`. Modulus by zero yields 0.
    IntegerModulus = 0x0507,
    /// Pop two Integers, push `a << (b & 63)`.
    IntegerShiftLeft = 0x0508,
    /// Pop two Integers, push `a >> (b & 63)`, sign-filling.
    IntegerShiftRightArithmetic = 0x0509,
    /// Pop two Integers, push `a >> (b & 63)`, zero-filling.
    IntegerShiftRightLogical = 0x050A,
    /// Pop two Integers, push `a` rotated left by `b & 63`.
    IntegerRotateLeft = 0x050B,
    /// Pop two Integers, push `a` rotated right by `b & 63`.
    IntegerRotateRight = 0x050C,
    /// Pop two Integers, push `a & b`.
    IntegerBitwiseAnd = 0x050D,
    /// Pop two Integers, push `a | b`.
    IntegerBitwiseOr = 0x050E,
    /// Pop one Integer, push `!a`.
    IntegerBitwiseNot = 0x050F,
    /// Pop two Integers, push `a ^ b`.
    IntegerBitwiseXor = 0x0510,
    /// Pop two Integers, push Boolean `a > b`.
    IntegerGreaterThan = 0x0511,
    /// Pop two Integers, push Boolean `a < b`.
    IntegerLessThan = 0x0512,
    /// Pop two Integers, push Boolean `a >= b`.
    IntegerGreaterEqual = 0x0513,
    /// Pop two Integers, push Boolean `a <= b`.
    IntegerLessEqual = 0x0514,
}

/// All instruction codes, in definition order. Useful for exhaustive testing.
pub const ALL_INSTRUCTION_CODES: [InstructionCode; 34] = [
    InstructionCode::VariableToStack,
    InstructionCode::StackToVariable,
    InstructionCode::CallFunction,
    InstructionCode::ExitFunction,
    InstructionCode::Branch,
    InstructionCode::BranchTrue,
    InstructionCode::BranchFalse,
    InstructionCode::BooleanConstantToStack,
    InstructionCode::BooleanEqual,
    InstructionCode::BooleanNotEqual,
    InstructionCode::BooleanAnd,
    InstructionCode::BooleanOr,
    InstructionCode::BooleanNot,
    InstructionCode::IntegerConstantToStack,
    InstructionCode::IntegerEqual,
    InstructionCode::IntegerNotEqual,
    InstructionCode::IntegerAdd,
    InstructionCode::IntegerSubtract,
    InstructionCode::IntegerMultiply,
    InstructionCode::IntegerDivide,
    InstructionCode::IntegerModulus,
    InstructionCode::IntegerShiftLeft,
    InstructionCode::IntegerShiftRightArithmetic,
    InstructionCode::IntegerShiftRightLogical,
    InstructionCode::IntegerRotateLeft,
    InstructionCode::IntegerRotateRight,
    InstructionCode::IntegerBitwiseAnd,
    InstructionCode::IntegerBitwiseOr,
    InstructionCode::IntegerBitwiseNot,
    InstructionCode::IntegerBitwiseXor,
    InstructionCode::IntegerGreaterThan,
    InstructionCode::IntegerLessThan,
    InstructionCode::IntegerGreaterEqual,
    InstructionCode::IntegerLessEqual,
];

/// The operand an instruction code requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    /// The instruction takes no operand.
    None,
    /// A 64-bit signed integer: a literal, slot, target or function index.
    Integer,
    /// A boolean literal.
    Boolean,
}

impl TryFrom<u16> for InstructionCode {
    type Error = UnknownInstructionCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0x0010 => Ok(InstructionCode::VariableToStack),
            0x0011 => Ok(InstructionCode::StackToVariable),

            0x0020 => Ok(InstructionCode::CallFunction),
            0x0021 => Ok(InstructionCode::ExitFunction),

            0x0030 => Ok(InstructionCode::Branch),
            0x0031 => Ok(InstructionCode::BranchTrue),
            0x0032 => Ok(InstructionCode::BranchFalse),

            0x0100 => Ok(InstructionCode::BooleanConstantToStack),
            0x0101 => Ok(InstructionCode::BooleanEqual),
            0x0102 => Ok(InstructionCode::BooleanNotEqual),
            0x0103 => Ok(InstructionCode::BooleanAnd),
            0x0107 => Ok(InstructionCode::BooleanOr),
            0x0108 => Ok(InstructionCode::BooleanNot),

            0x0500 => Ok(InstructionCode::IntegerConstantToStack),
            0x0501 => Ok(InstructionCode::IntegerEqual),
            0x0502 => Ok(InstructionCode::IntegerNotEqual),
            0x0503 => Ok(InstructionCode::IntegerAdd),
            0x0504 => Ok(InstructionCode::IntegerSubtract),
            0x0505 => Ok(InstructionCode::IntegerMultiply),
            0x0506 => Ok(InstructionCode::IntegerDivide),
            0x0507 => Ok(InstructionCode::IntegerModulus),
            0x0508 => Ok(InstructionCode::IntegerShiftLeft),
            0x0509 => Ok(InstructionCode::IntegerShiftRightArithmetic),
            0x050A => Ok(InstructionCode::IntegerShiftRightLogical),
            0x050B => Ok(InstructionCode::IntegerRotateLeft),
            0x050C => Ok(InstructionCode::IntegerRotateRight),
            0x050D => Ok(InstructionCode::IntegerBitwiseAnd),
            0x050E => Ok(InstructionCode::IntegerBitwiseOr),
            0x050F => Ok(InstructionCode::IntegerBitwiseNot),
            0x0510 => Ok(InstructionCode::IntegerBitwiseXor),
            0x0511 => Ok(InstructionCode::IntegerGreaterThan),
            0x0512 => Ok(InstructionCode::IntegerLessThan),
            0x0513 => Ok(InstructionCode::IntegerGreaterEqual),
            0x0514 => Ok(InstructionCode::IntegerLessEqual),

            // Gaps inside a family (e.g. 0x0104..=0x0106) are unassigned too.
            _ => Err(UnknownInstructionCode(value)),
        }
    }
}

impl InstructionCode {
    /// Returns the stable numeric code.
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Returns the operand this instruction code requires.
    pub fn operand_kind(self) -> OperandKind {
        match self {
            InstructionCode::BooleanConstantToStack => OperandKind::Boolean,

            InstructionCode::VariableToStack
            | InstructionCode::StackToVariable
            | InstructionCode::CallFunction
            | InstructionCode::Branch
            | InstructionCode::BranchTrue
            | InstructionCode::BranchFalse
            | InstructionCode::IntegerConstantToStack => OperandKind::Integer,

            _ => OperandKind::None,
        }
    }

    /// True for `Branch`, `BranchTrue` and `BranchFalse`.
    pub fn is_branch(self) -> bool {
        matches!(
            self,
            InstructionCode::Branch | InstructionCode::BranchTrue | InstructionCode::BranchFalse
        )
    }

    /// True for the two local-variable slot instructions.
    pub fn is_variable_access(self) -> bool {
        matches!(
            self,
            InstructionCode::VariableToStack | InstructionCode::StackToVariable
        )
    }
}
