//! Index range checks and decoding to [`Op`].
//!
//! Branch targets, variable slots and callee indices are checked against the
//! owning function and the whole program, then narrowed to `usize`.

use arborate_common::{InstructionCode, VmError};

use crate::checked::{BooleanBinOp, IntegerBinOp, IntegerCmp, Op};
use crate::operands::Shape;

/// What an instruction's indices are checked against.
#[derive(Debug, Clone, Copy)]
pub struct FunctionScope {
    /// Index of the function being checked.
    pub function: usize,
    /// Its instruction count.
    pub len: usize,
    /// Its local slot count.
    pub var_count: usize,
    /// Number of functions in the program.
    pub function_count: usize,
}

/// Check the indices of a well-shaped instruction and decode it.
pub fn resolve(scope: &FunctionScope, at: usize, shape: Shape) -> Result<Op, VmError> {
    match shape {
        Shape::Integer(code, value) if code.is_branch() => {
            let target = branch_target(scope, at, value)?;
            Ok(match code {
                InstructionCode::BranchTrue => Op::BranchTrue(target),
                InstructionCode::BranchFalse => Op::BranchFalse(target),
                _ => Op::Branch(target),
            })
        }
        Shape::Integer(code, value) if code.is_variable_access() => {
            let slot = variable_slot(scope, at, value)?;
            Ok(match code {
                InstructionCode::StackToVariable => Op::StoreVariable(slot),
                _ => Op::LoadVariable(slot),
            })
        }
        Shape::Integer(InstructionCode::CallFunction, value) => {
            Ok(Op::Call(callee(scope, at, value)?))
        }
        Shape::Integer(_, value) => Ok(Op::PushInteger(value)),
        Shape::Boolean(_, value) => Ok(Op::PushBoolean(value)),
        Shape::Bare(code) => bare_op(code).ok_or(VmError::MissingInstructionData {
            function: scope.function,
            at,
            code,
        }),
    }
}

/// A branch may go anywhere in the function except to itself.
fn branch_target(scope: &FunctionScope, at: usize, target: i64) -> Result<usize, VmError> {
    match usize::try_from(target) {
        Ok(t) if t < scope.len && t != at => Ok(t),
        _ => Err(VmError::InvalidBranchDestination {
            function: scope.function,
            at,
            target,
            len: scope.len,
        }),
    }
}

fn variable_slot(scope: &FunctionScope, at: usize, index: i64) -> Result<usize, VmError> {
    match usize::try_from(index) {
        Ok(slot) if slot < scope.var_count => Ok(slot),
        _ => Err(VmError::InvalidVariableIndex {
            function: scope.function,
            at,
            index,
            var_count: scope.var_count,
        }),
    }
}

fn callee(scope: &FunctionScope, at: usize, index: i64) -> Result<usize, VmError> {
    match usize::try_from(index) {
        Ok(f) if f < scope.function_count => Ok(f),
        _ => Err(VmError::InvalidFunctionIndex {
            function: scope.function,
            at,
            index,
            function_count: scope.function_count,
        }),
    }
}

/// Decode a code that takes no operand. `None` for codes that need one.
fn bare_op(code: InstructionCode) -> Option<Op> {
    use InstructionCode as C;

    let op = match code {
        C::ExitFunction => Op::Exit,

        C::BooleanEqual => Op::Boolean(BooleanBinOp::Equal),
        C::BooleanNotEqual => Op::Boolean(BooleanBinOp::NotEqual),
        C::BooleanAnd => Op::Boolean(BooleanBinOp::And),
        C::BooleanOr => Op::Boolean(BooleanBinOp::Or),
        C::BooleanNot => Op::BooleanNot,

        C::IntegerEqual => Op::Compare(IntegerCmp::Equal),
        C::IntegerNotEqual => Op::Compare(IntegerCmp::NotEqual),
        C::IntegerGreaterThan => Op::Compare(IntegerCmp::GreaterThan),
        C::IntegerLessThan => Op::Compare(IntegerCmp::LessThan),
        C::IntegerGreaterEqual => Op::Compare(IntegerCmp::GreaterEqual),
        C::IntegerLessEqual => Op::Compare(IntegerCmp::LessEqual),

        C::IntegerAdd => Op::Integer(IntegerBinOp::Add),
        C::IntegerSubtract => Op::Integer(IntegerBinOp::Subtract),
        C::IntegerMultiply => Op::Integer(IntegerBinOp::Multiply),
        C::IntegerDivide => Op::Integer(IntegerBinOp::Divide),
        C::IntegerModulus => Op::Integer(IntegerBinOp::Modulus),
        C::IntegerShiftLeft => Op::Integer(IntegerBinOp::ShiftLeft),
        C::IntegerShiftRightArithmetic => Op::Integer(IntegerBinOp::ShiftRightArithmetic),
        C::IntegerShiftRightLogical => Op::Integer(IntegerBinOp::ShiftRightLogical),
        C::IntegerRotateLeft => Op::Integer(IntegerBinOp::RotateLeft),
        C::IntegerRotateRight => Op::Integer(IntegerBinOp::RotateRight),
        C::IntegerBitwiseAnd => Op::Integer(IntegerBinOp::BitwiseAnd),
        C::IntegerBitwiseOr => Op::Integer(IntegerBinOp::BitwiseOr),
        C::IntegerBitwiseXor => Op::Integer(IntegerBinOp::BitwiseXor),
        C::IntegerBitwiseNot => Op::IntegerBitwiseNot,

        C::VariableToStack
        | C::StackToVariable
        | C::CallFunction
        | C::Branch
        | C::BranchTrue
        | C::BranchFalse
        | C::BooleanConstantToStack
        | C::IntegerConstantToStack => return None,
    };
    Some(op)
}
