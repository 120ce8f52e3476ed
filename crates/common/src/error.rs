//! The Arborate error taxonomy.
//!
//! Every failure, whether raised while validating a program or while
//! executing it, is a [`VmError`]. Each variant carries the index of the
//! function it was raised in and, where one exists, the instruction index
//! (`at`). Callers that only need the kind of failure branch on
//! [`VmError::detail`].

use thiserror::Error;

use crate::instruction_code::{InstructionCode, OperandKind};
use crate::vm_type::VmType;

/// A raw instruction code that names no member of [`InstructionCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown instruction code {0:#06x}")]
pub struct UnknownInstructionCode(pub u16);

/// Errors raised by validation or execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    // --- Validation ---
    /// The raw instruction code is not assigned.
    #[error("invalid instruction code {code:#06x} in function {function} at instruction {at}")]
    InvalidInstruction { function: usize, at: usize, code: u16 },

    /// The instruction code requires an operand and none was given.
    #[error("{code:?} requires an operand in function {function} at instruction {at}")]
    MissingInstructionData {
        function: usize,
        at: usize,
        code: InstructionCode,
    },

    /// The operand is the wrong kind for the instruction code.
    #[error("{code:?} expects a {expected:?} operand in function {function} at instruction {at}")]
    InvalidInstructionData {
        function: usize,
        at: usize,
        code: InstructionCode,
        expected: OperandKind,
    },

    /// An operand was given to an instruction code that takes none.
    #[error("{code:?} takes no operand in function {function} at instruction {at}")]
    InstructionCodeDoesNotUseData {
        function: usize,
        at: usize,
        code: InstructionCode,
    },

    /// Branch target is negative, out of range, or the branch itself.
    #[error(
        "invalid branch destination {target} in function {function} at instruction {at} \
         ({len} instructions)"
    )]
    InvalidBranchDestination {
        function: usize,
        at: usize,
        target: i64,
        len: usize,
    },

    /// Variable slot is negative or not below the function's slot count.
    #[error(
        "invalid variable index {index} in function {function} at instruction {at} \
         ({var_count} slots)"
    )]
    InvalidVariableIndex {
        function: usize,
        at: usize,
        index: i64,
        var_count: usize,
    },

    /// Callee index is negative or not below the number of functions.
    #[error(
        "invalid function index {index} in function {function} at instruction {at} \
         ({function_count} functions)"
    )]
    InvalidFunctionIndex {
        function: usize,
        at: usize,
        index: i64,
        function_count: usize,
    },

    /// The function declares no output parameters.
    #[error("function {function} declares no return value")]
    FunctionDefinitionMissingReturnValue { function: usize },

    // --- Execution ---
    /// A pop, or a function's input parameters, needed more values than this
    /// invocation owns. Entry-contract failures report the callee and `at = 0`.
    #[error(
        "too few elements on stack in function {function} at instruction {at}: \
         need {required}, have {available}"
    )]
    TooFewElementsOnStack {
        function: usize,
        at: usize,
        required: usize,
        available: usize,
    },

    /// An operator popped a value of the wrong type.
    #[error(
        "incorrect element type on stack in function {function} at instruction {at}: \
         expected {expected}, found {found}"
    )]
    IncorrectElementTypeOnStack {
        function: usize,
        at: usize,
        expected: VmType,
        found: VmType,
    },

    /// A value supplied for an input parameter has the wrong type.
    #[error(
        "incorrect argument type for parameter {param} of function {function}: \
         expected {expected}, found {found}"
    )]
    IncorrectCallArgumentType {
        function: usize,
        param: usize,
        expected: VmType,
        found: VmType,
    },

    /// A function finished with the wrong number of values in its region.
    #[error(
        "incorrect number of return values from function {function}: \
         expected {expected}, found {found}"
    )]
    IncorrectReturnArgumentCount {
        function: usize,
        expected: usize,
        found: usize,
    },

    /// A function finished with a value of the wrong type in its region.
    #[error(
        "incorrect type for return value {position} of function {function}: \
         expected {expected}, found {found}"
    )]
    IncorrectReturnArgumentType {
        function: usize,
        position: usize,
        expected: VmType,
        found: VmType,
    },

    /// A slot was read before anything was stored in it.
    #[error("variable {slot} read before being set in function {function} at instruction {at}")]
    UninitializedVariableRead {
        function: usize,
        at: usize,
        slot: usize,
    },

    /// Nested calls exceeded the configured frame limit.
    #[error("call depth exceeded limit {limit} in function {function} at instruction {at}")]
    CallDepthExceeded {
        function: usize,
        at: usize,
        limit: usize,
    },

    /// The operand stack exceeded its configured capacity.
    #[error("stack overflow (limit {limit}) in function {function} at instruction {at}")]
    StackOverflow {
        function: usize,
        at: usize,
        limit: usize,
    },

    /// The requested entry function does not exist.
    #[error("entry function {index} does not exist ({function_count} functions)")]
    InvalidEntryFunction { index: usize, function_count: usize },
}

/// The closed set of failure kinds, one per [`VmError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorDetail {
    InvalidInstruction,
    MissingInstructionData,
    InvalidInstructionData,
    InstructionCodeDoesNotUseData,
    InvalidBranchDestination,
    InvalidVariableIndex,
    InvalidFunctionIndex,
    FunctionDefinitionMissingReturnValue,
    TooFewElementsOnStack,
    IncorrectElementTypeOnStack,
    IncorrectCallArgumentType,
    IncorrectReturnArgumentCount,
    IncorrectReturnArgumentType,
    UninitializedVariableRead,
    CallDepthExceeded,
    StackOverflow,
    InvalidEntryFunction,
}

/// When an error can be raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// While constructing a machine.
    Validation,
    /// While executing a function.
    Execution,
}

impl ErrorDetail {
    /// The phase this failure kind belongs to.
    pub fn phase(self) -> Phase {
        match self {
            ErrorDetail::InvalidInstruction
            | ErrorDetail::MissingInstructionData
            | ErrorDetail::InvalidInstructionData
            | ErrorDetail::InstructionCodeDoesNotUseData
            | ErrorDetail::InvalidBranchDestination
            | ErrorDetail::InvalidVariableIndex
            | ErrorDetail::InvalidFunctionIndex
            | ErrorDetail::FunctionDefinitionMissingReturnValue => Phase::Validation,

            ErrorDetail::TooFewElementsOnStack
            | ErrorDetail::IncorrectElementTypeOnStack
            | ErrorDetail::IncorrectCallArgumentType
            | ErrorDetail::IncorrectReturnArgumentCount
            | ErrorDetail::IncorrectReturnArgumentType
            | ErrorDetail::UninitializedVariableRead
            | ErrorDetail::CallDepthExceeded
            | ErrorDetail::StackOverflow
            | ErrorDetail::InvalidEntryFunction => Phase::Execution,
        }
    }
}

impl VmError {
    /// The failure kind, without context.
    pub fn detail(&self) -> ErrorDetail {
        match self {
            VmError::InvalidInstruction { .. } => ErrorDetail::InvalidInstruction,
            VmError::MissingInstructionData { .. } => ErrorDetail::MissingInstructionData,
            VmError::InvalidInstructionData { .. } => ErrorDetail::InvalidInstructionData,
            VmError::InstructionCodeDoesNotUseData { .. } => {
                ErrorDetail::InstructionCodeDoesNotUseData
            }
            VmError::InvalidBranchDestination { .. } => ErrorDetail::InvalidBranchDestination,
            VmError::InvalidVariableIndex { .. } => ErrorDetail::InvalidVariableIndex,
            VmError::InvalidFunctionIndex { .. } => ErrorDetail::InvalidFunctionIndex,
            VmError::FunctionDefinitionMissingReturnValue { .. } => {
                ErrorDetail::FunctionDefinitionMissingReturnValue
            }
            VmError::TooFewElementsOnStack { .. } => ErrorDetail::TooFewElementsOnStack,
            VmError::IncorrectElementTypeOnStack { .. } => ErrorDetail::IncorrectElementTypeOnStack,
            VmError::IncorrectCallArgumentType { .. } => ErrorDetail::IncorrectCallArgumentType,
            VmError::IncorrectReturnArgumentCount { .. } => {
                ErrorDetail::IncorrectReturnArgumentCount
            }
            VmError::IncorrectReturnArgumentType { .. } => ErrorDetail::IncorrectReturnArgumentType,
            VmError::UninitializedVariableRead { .. } => ErrorDetail::UninitializedVariableRead,
            VmError::CallDepthExceeded { .. } => ErrorDetail::CallDepthExceeded,
            VmError::StackOverflow { .. } => ErrorDetail::StackOverflow,
            VmError::InvalidEntryFunction { .. } => ErrorDetail::InvalidEntryFunction,
        }
    }

    /// Shorthand for `self.detail().phase()`.
    pub fn phase(&self) -> Phase {
        self.detail().phase()
    }
}
