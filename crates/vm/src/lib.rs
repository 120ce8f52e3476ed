//! Arborate virtual machine: executes validated functions.
//!
//! The VM is a stack-based machine with:
//! - One operand stack shared by every invocation of an execution
//! - Per-invocation local variable slots
//! - An explicit call-frame stack, so call depth is a checked limit
//!   rather than host recursion
//!
//! # Usage
//!
//! ```
//! use arborate_common::{FunctionDefinition, Instruction, InstructionCode, VmType, VmValue};
//! use arborate_vm::Machine;
//!
//! let machine = Machine::new(vec![FunctionDefinition::new(
//!     vec![
//!         Instruction::with_integer(InstructionCode::IntegerConstantToStack, 40),
//!         Instruction::with_integer(InstructionCode::IntegerConstantToStack, 2),
//!         Instruction::new(InstructionCode::IntegerAdd),
//!     ],
//!     vec![],
//!     vec![VmType::Integer],
//!     0,
//! )])
//! .unwrap();
//!
//! assert_eq!(machine.execute().unwrap(), vec![VmValue::Integer(42)]);
//! ```

pub mod arith;
pub mod config;
pub mod execute;
pub mod machine;

pub use config::ExecutionLimits;
pub use machine::{CallFrame, Machine};

use arborate_common::{FunctionDefinition, VmError, VmValue};

/// Validate a program and execute its first function with no arguments.
///
/// # Errors
///
/// Returns [`VmError`] if validation or execution fails.
pub fn run(functions: Vec<FunctionDefinition>) -> Result<Vec<VmValue>, VmError> {
    Machine::new(functions)?.execute()
}
