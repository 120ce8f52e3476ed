//! Program catalog: the programs the CLI can list, verify and run.
//!
//! Each program is a `ProgramSpec`: a name, an intent, the function
//! definitions, and the cases it is expected to satisfy.

pub mod arithmetic;
pub mod failing;
pub mod recursive;

use arborate_common::{FunctionDefinition, Instruction, InstructionCode, VmValue};

/// A named program built from function definitions.
#[derive(Debug, Clone)]
pub struct ProgramSpec {
    /// Unique name used on the command line, e.g. "square".
    pub name: &'static str,
    /// Natural-language description of what the program does.
    pub intent: &'static str,
    /// Function 0 is the default entry.
    pub functions: Vec<FunctionDefinition>,
    /// Inputs and expected outputs for the default entry. Empty for
    /// programs that are meant to fail.
    pub cases: Vec<Case>,
    pub category: Category,
}

/// One concrete run: entry arguments and the outputs they produce.
#[derive(Debug, Clone)]
pub struct Case {
    pub args: Vec<VmValue>,
    pub expected: Vec<VmValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Arithmetic,
    Loop,
    Recursive,
    /// Rejected by validation.
    Invalid,
    /// Valid, but fails while executing.
    Runtime,
}

/// Collect every program from every category module.
pub fn all_programs() -> Vec<ProgramSpec> {
    let mut programs = Vec::new();
    programs.extend(arithmetic::programs());
    programs.extend(recursive::programs());
    programs.extend(failing::programs());
    programs
}

/// Look a program up by name.
pub fn find(name: &str) -> Option<ProgramSpec> {
    all_programs().into_iter().find(|p| p.name == name)
}

// Builders shared by the category modules.

pub(crate) fn op(code: InstructionCode) -> Instruction {
    Instruction::new(code)
}

pub(crate) fn int(code: InstructionCode, value: i64) -> Instruction {
    Instruction::with_integer(code, value)
}

pub(crate) fn push_int(value: i64) -> Instruction {
    int(InstructionCode::IntegerConstantToStack, value)
}

pub(crate) fn case<const N: usize, const M: usize>(args: [i64; N], expected: [VmValue; M]) -> Case {
    Case {
        args: args.into_iter().map(VmValue::Integer).collect(),
        expected: expected.to_vec(),
    }
}
