//! Recursive programs.

use super::{case, int, op, push_int, Category, ProgramSpec};
use arborate_common::{FunctionDefinition, InstructionCode as C, VmType, VmValue};

pub fn programs() -> Vec<ProgramSpec> {
    vec![
        ProgramSpec {
            name: "power",
            intent: "Raise a base to a non-negative exponent by recursion",
            functions: vec![
                FunctionDefinition::new(
                    vec![int(C::CallFunction, 1)],
                    vec![VmType::Integer, VmType::Integer],
                    vec![VmType::Integer],
                    0,
                ),
                FunctionDefinition::new(
                    vec![
                        int(C::StackToVariable, 1),
                        int(C::StackToVariable, 0),
                        int(C::VariableToStack, 1),
                        push_int(0),
                        op(C::IntegerEqual),
                        int(C::BranchFalse, 8),
                        push_int(1),
                        op(C::ExitFunction),
                        // 8: power(base, exponent - 1) * base
                        int(C::VariableToStack, 0),
                        int(C::VariableToStack, 1),
                        push_int(1),
                        op(C::IntegerSubtract),
                        int(C::CallFunction, 1),
                        int(C::VariableToStack, 0),
                        op(C::IntegerMultiply),
                    ],
                    vec![VmType::Integer, VmType::Integer],
                    vec![VmType::Integer],
                    2,
                ),
            ],
            cases: vec![
                case([5, 0], [VmValue::Integer(1)]),
                case([5, 3], [VmValue::Integer(125)]),
                case([2, 10], [VmValue::Integer(1024)]),
            ],
            category: Category::Recursive,
        },
        ProgramSpec {
            name: "factorial",
            intent: "Compute n! by recursion, leaving early on the base case",
            functions: vec![FunctionDefinition::new(
                vec![
                    int(C::StackToVariable, 0),
                    int(C::VariableToStack, 0),
                    push_int(0),
                    op(C::IntegerEqual),
                    int(C::BranchFalse, 7),
                    push_int(1),
                    op(C::ExitFunction),
                    // 7: n * factorial(n - 1)
                    int(C::VariableToStack, 0),
                    int(C::VariableToStack, 0),
                    push_int(1),
                    op(C::IntegerSubtract),
                    int(C::CallFunction, 0),
                    op(C::IntegerMultiply),
                ],
                vec![VmType::Integer],
                vec![VmType::Integer],
                1,
            )],
            cases: vec![
                case([0], [VmValue::Integer(1)]),
                case([5], [VmValue::Integer(120)]),
                case([20], [VmValue::Integer(2_432_902_008_176_640_000)]),
            ],
            category: Category::Recursive,
        },
    ]
}
