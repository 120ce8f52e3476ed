//! The decoded, validated form of a program.
//!
//! A [`CheckedFunction`] is only produced by validation. Every index inside
//! its [`Op`]s is known to be in range, so the engine can use them directly.

use arborate_common::{FunctionDefinition, VmType};

/// Binary Boolean operators. Both operands are Booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanBinOp {
    Equal,
    NotEqual,
    And,
    Or,
}

/// Binary Integer operators producing an Integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerBinOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
    ShiftLeft,
    ShiftRightArithmetic,
    ShiftRightLogical,
    RotateLeft,
    RotateRight,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
}

/// Integer comparisons producing a Boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerCmp {
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    GreaterEqual,
    LessEqual,
}

/// One decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Push the value in a slot.
    LoadVariable(usize),
    /// Pop into a slot.
    StoreVariable(usize),
    /// Invoke a function by index.
    Call(usize),
    /// Leave the current function.
    Exit,
    /// Unconditional jump.
    Branch(usize),
    /// Pop a Boolean, jump when true.
    BranchTrue(usize),
    /// Pop a Boolean, jump when false.
    BranchFalse(usize),
    PushBoolean(bool),
    PushInteger(i64),
    Boolean(BooleanBinOp),
    BooleanNot,
    Integer(IntegerBinOp),
    Compare(IntegerCmp),
    IntegerBitwiseNot,
}

/// A function that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedFunction {
    pub(crate) ops: Vec<Op>,
    pub(crate) in_params: Vec<VmType>,
    pub(crate) out_params: Vec<VmType>,
    pub(crate) var_count: usize,
}

impl CheckedFunction {
    pub(crate) fn new(ops: Vec<Op>, def: &FunctionDefinition) -> Self {
        Self {
            ops,
            in_params: def.in_params().to_vec(),
            out_params: def.out_params().to_vec(),
            var_count: def.var_count(),
        }
    }

    /// The decoded instructions.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Input parameter types, deepest stack value first.
    pub fn in_params(&self) -> &[VmType] {
        &self.in_params
    }

    /// Output parameter types, deepest stack value first. Never empty.
    pub fn out_params(&self) -> &[VmType] {
        &self.out_params
    }

    /// Number of local variable slots.
    pub fn var_count(&self) -> usize {
        self.var_count
    }
}
