//! Arithmetic and loop programs.

use super::{case, int, op, push_int, Category, ProgramSpec};
use arborate_common::{FunctionDefinition, InstructionCode as C, VmType, VmValue};

pub fn programs() -> Vec<ProgramSpec> {
    vec![
        ProgramSpec {
            name: "square",
            intent: "Square an integer by calling a helper function",
            functions: vec![
                FunctionDefinition::new(
                    vec![int(C::CallFunction, 1)],
                    vec![VmType::Integer],
                    vec![VmType::Integer],
                    0,
                ),
                FunctionDefinition::new(
                    vec![
                        int(C::StackToVariable, 0),
                        int(C::VariableToStack, 0),
                        int(C::VariableToStack, 0),
                        op(C::IntegerMultiply),
                    ],
                    vec![VmType::Integer],
                    vec![VmType::Integer],
                    1,
                ),
            ],
            cases: vec![
                case([5], [VmValue::Integer(25)]),
                case([10], [VmValue::Integer(100)]),
                case([-4], [VmValue::Integer(16)]),
            ],
            category: Category::Arithmetic,
        },
        ProgramSpec {
            name: "subtract",
            intent: "Subtract the second integer from the first",
            functions: vec![FunctionDefinition::new(
                vec![op(C::IntegerSubtract)],
                vec![VmType::Integer, VmType::Integer],
                vec![VmType::Integer],
                0,
            )],
            cases: vec![
                case([5, 3], [VmValue::Integer(2)]),
                case([10, 18], [VmValue::Integer(-8)]),
            ],
            category: Category::Arithmetic,
        },
        ProgramSpec {
            name: "parity",
            intent: "Return true when an integer is even",
            functions: vec![FunctionDefinition::new(
                vec![
                    push_int(2),
                    op(C::IntegerModulus),
                    push_int(0),
                    op(C::IntegerEqual),
                ],
                vec![VmType::Integer],
                vec![VmType::Boolean],
                0,
            )],
            cases: vec![
                case([4], [VmValue::Boolean(true)]),
                case([7], [VmValue::Boolean(false)]),
                case([-3], [VmValue::Boolean(false)]),
                case([0], [VmValue::Boolean(true)]),
            ],
            category: Category::Arithmetic,
        },
        ProgramSpec {
            name: "divide-by-zero",
            intent: "Divide an integer by zero, which yields zero",
            functions: vec![FunctionDefinition::new(
                vec![push_int(0), op(C::IntegerDivide)],
                vec![VmType::Integer],
                vec![VmType::Integer],
                0,
            )],
            cases: vec![
                case([42], [VmValue::Integer(0)]),
                case([0], [VmValue::Integer(0)]),
            ],
            category: Category::Arithmetic,
        },
        ProgramSpec {
            name: "min",
            intent: "Return the smaller of two integers",
            functions: vec![FunctionDefinition::new(
                vec![
                    int(C::StackToVariable, 1),
                    int(C::StackToVariable, 0),
                    int(C::VariableToStack, 0),
                    int(C::VariableToStack, 1),
                    op(C::IntegerLessThan),
                    int(C::BranchFalse, 8),
                    int(C::VariableToStack, 0),
                    op(C::ExitFunction),
                    int(C::VariableToStack, 1),
                ],
                vec![VmType::Integer, VmType::Integer],
                vec![VmType::Integer],
                2,
            )],
            cases: vec![
                case([3, 9], [VmValue::Integer(3)]),
                case([9, 3], [VmValue::Integer(3)]),
                case([-1, -1], [VmValue::Integer(-1)]),
            ],
            category: Category::Arithmetic,
        },
        ProgramSpec {
            name: "gcd",
            intent: "Greatest common divisor by Euclid's algorithm in a loop",
            functions: vec![FunctionDefinition::new(
                vec![
                    int(C::StackToVariable, 1),
                    int(C::StackToVariable, 0),
                    // 2: loop until b == 0
                    int(C::VariableToStack, 1),
                    push_int(0),
                    op(C::IntegerEqual),
                    int(C::BranchTrue, 13),
                    // (a, b) = (b, a % b)
                    int(C::VariableToStack, 0),
                    int(C::VariableToStack, 1),
                    op(C::IntegerModulus),
                    int(C::VariableToStack, 1),
                    int(C::StackToVariable, 0),
                    int(C::StackToVariable, 1),
                    int(C::Branch, 2),
                    int(C::VariableToStack, 0),
                ],
                vec![VmType::Integer, VmType::Integer],
                vec![VmType::Integer],
                2,
            )],
            cases: vec![
                case([48, 18], [VmValue::Integer(6)]),
                case([17, 5], [VmValue::Integer(1)]),
                case([9, 0], [VmValue::Integer(9)]),
            ],
            category: Category::Loop,
        },
    ]
}
