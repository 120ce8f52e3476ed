//! Arborate common types.
//!
//! This crate provides the data structures shared by the validator and the
//! virtual machine:
//!
//! - [`VmType`] / [`VmValue`]: the two value kinds and their runtime form
//! - [`InstructionCode`]: the closed instruction set
//! - [`Instruction`] / [`Operand`]: one instruction as handed over by a producer
//! - [`FunctionDefinition`]: code, signature and slot count of one function
//! - [`VmError`] / [`ErrorDetail`]: every validation and execution failure
//!
//! # Dependencies
//!
//! This crate uses `thiserror` (compile-time proc-macro, zero runtime cost)
//! and has no other dependencies.

pub mod error;
pub mod function;
pub mod instruction;
pub mod instruction_code;
pub mod value;
pub mod vm_type;

// Re-export commonly used types at the crate root.
pub use error::{ErrorDetail, Phase, UnknownInstructionCode, VmError};
pub use function::FunctionDefinition;
pub use instruction::{Instruction, Operand};
pub use instruction_code::{InstructionCode, OperandKind};
pub use value::VmValue;
pub use vm_type::VmType;
