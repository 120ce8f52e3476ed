//! Arborate validator: construction-time checks for function definitions.
//!
//! The validator proves that every instruction of every function is
//! well-formed before anything executes, and decodes the program into
//! [`CheckedFunction`]s for the engine.
//!
//! # Usage
//!
//! ```
//! use arborate_common::{FunctionDefinition, Instruction, InstructionCode, VmType};
//! use arborate_validator::validate;
//!
//! let program = vec![FunctionDefinition::new(
//!     vec![Instruction::with_integer(InstructionCode::IntegerConstantToStack, 42)],
//!     vec![],
//!     vec![VmType::Integer],
//!     0,
//! )];
//!
//! let checked = validate(&program).unwrap();
//! assert_eq!(checked.len(), 1);
//! ```
//!
//! # Checks
//!
//! For each instruction, in order:
//!
//! 1. **Operands**: assigned code, operand present iff required, operand kind
//! 2. **Resolve**: branch targets, variable slots and callee indices in range
//!
//! Then, per function:
//!
//! 3. **Signature**: at least one output parameter
//!
//! Stack depth and stack types are not checked here; the engine checks
//! them on every access.

pub mod checked;
pub mod operands;
pub mod resolve;
pub mod signature;

pub use checked::{BooleanBinOp, CheckedFunction, IntegerBinOp, IntegerCmp, Op};

use arborate_common::{FunctionDefinition, Instruction, VmError};
use resolve::FunctionScope;

/// Validate a program, stopping at the first violation.
///
/// Functions are checked in order; within a function every instruction is
/// checked before the signature.
///
/// # Errors
///
/// Returns the first validation-phase [`VmError`] found.
pub fn validate(functions: &[FunctionDefinition]) -> Result<Vec<CheckedFunction>, VmError> {
    functions
        .iter()
        .enumerate()
        .map(|(index, def)| check_function(index, def, functions.len()))
        .collect()
}

/// Validate a program and report every violation.
///
/// Reports the first failing check of each instruction, then each missing
/// return signature. An empty result means [`validate`] would succeed.
pub fn diagnose(functions: &[FunctionDefinition]) -> Vec<VmError> {
    let mut errors = Vec::new();

    for (index, def) in functions.iter().enumerate() {
        let scope = scope_of(index, def, functions.len());
        for (at, instr) in def.code().iter().enumerate() {
            if let Err(e) = check_instruction(&scope, at, instr) {
                errors.push(e);
            }
        }
        if let Err(e) = signature::check_signature(index, def) {
            errors.push(e);
        }
    }

    errors
}

fn check_function(
    index: usize,
    def: &FunctionDefinition,
    function_count: usize,
) -> Result<CheckedFunction, VmError> {
    let scope = scope_of(index, def, function_count);
    let ops = def
        .code()
        .iter()
        .enumerate()
        .map(|(at, instr)| check_instruction(&scope, at, instr))
        .collect::<Result<Vec<_>, _>>()?;
    signature::check_signature(index, def)?;

    log::debug!(
        "validated function {index}: {} instructions, {} in, {} out, {} slots",
        ops.len(),
        def.in_params().len(),
        def.out_params().len(),
        def.var_count()
    );
    Ok(CheckedFunction::new(ops, def))
}

fn check_instruction(scope: &FunctionScope, at: usize, instr: &Instruction) -> Result<Op, VmError> {
    let shape = operands::check_operand(scope.function, at, instr)?;
    resolve::resolve(scope, at, shape)
}

fn scope_of(index: usize, def: &FunctionDefinition, function_count: usize) -> FunctionScope {
    FunctionScope {
        function: index,
        len: def.len(),
        var_count: def.var_count(),
        function_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arborate_common::{ErrorDetail, InstructionCode, Operand, VmType};

    fn int(code: InstructionCode, value: i64) -> Instruction {
        Instruction::with_integer(code, value)
    }

    fn op(code: InstructionCode) -> Instruction {
        Instruction::new(code)
    }

    fn returns_integer(code: Vec<Instruction>, var_count: usize) -> FunctionDefinition {
        FunctionDefinition::new(code, vec![], vec![VmType::Integer], var_count)
    }

    #[test]
    fn minimal_valid_program() {
        let program = vec![returns_integer(
            vec![int(InstructionCode::IntegerConstantToStack, 42)],
            0,
        )];
        let checked = validate(&program).unwrap();
        assert_eq!(checked[0].ops(), &[Op::PushInteger(42)]);
        assert_eq!(checked[0].out_params(), &[VmType::Integer]);
    }

    #[test]
    fn empty_program_is_valid() {
        assert_eq!(validate(&[]), Ok(vec![]));
        assert!(diagnose(&[]).is_empty());
    }

    #[test]
    fn first_violation_wins() {
        let program = vec![returns_integer(
            vec![
                Instruction::from_raw(0x0104, None),
                int(InstructionCode::Branch, 9),
            ],
            0,
        )];
        assert_eq!(
            validate(&program).unwrap_err().detail(),
            ErrorDetail::InvalidInstruction
        );
    }

    #[test]
    fn instructions_checked_before_signature() {
        let program = vec![FunctionDefinition::new(
            vec![int(InstructionCode::VariableToStack, 0)],
            vec![],
            vec![],
            0,
        )];
        assert_eq!(
            validate(&program).unwrap_err().detail(),
            ErrorDetail::InvalidVariableIndex
        );
    }

    #[test]
    fn earlier_function_reported_first() {
        let program = vec![
            FunctionDefinition::new(vec![], vec![], vec![], 0),
            returns_integer(vec![int(InstructionCode::CallFunction, 7)], 0),
        ];
        assert_eq!(
            validate(&program),
            Err(VmError::FunctionDefinitionMissingReturnValue { function: 0 })
        );
    }

    #[test]
    fn call_index_checked_against_whole_program() {
        let program = vec![
            returns_integer(vec![int(InstructionCode::CallFunction, 1)], 0),
            returns_integer(vec![int(InstructionCode::IntegerConstantToStack, 1)], 0),
        ];
        assert!(validate(&program).is_ok());
        assert_eq!(
            validate(&program[..1]).unwrap_err().detail(),
            ErrorDetail::InvalidFunctionIndex
        );
    }

    #[test]
    fn diagnose_collects_all() {
        let program = vec![
            FunctionDefinition::new(
                vec![
                    Instruction::from_raw(0x0104, None),
                    int(InstructionCode::Branch, 1),
                    Instruction::from_raw(
                        InstructionCode::IntegerAdd.code(),
                        Some(Operand::Integer(1)),
                    ),
                    op(InstructionCode::IntegerAdd),
                ],
                vec![],
                vec![],
                0,
            ),
            returns_integer(vec![int(InstructionCode::StackToVariable, 3)], 1),
        ];
        let details: Vec<_> = diagnose(&program).iter().map(|e| e.detail()).collect();
        assert_eq!(
            details,
            vec![
                ErrorDetail::InvalidInstruction,
                ErrorDetail::InvalidBranchDestination,
                ErrorDetail::InstructionCodeDoesNotUseData,
                ErrorDetail::FunctionDefinitionMissingReturnValue,
                ErrorDetail::InvalidVariableIndex,
            ]
        );
    }
}
