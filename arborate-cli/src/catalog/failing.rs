//! Programs that fail, one at validation and one while running.

use super::{int, push_int, Category, ProgramSpec};
use arborate_common::{FunctionDefinition, InstructionCode as C, VmType};

pub fn programs() -> Vec<ProgramSpec> {
    vec![
        ProgramSpec {
            name: "invalid",
            intent: "Branch to itself, read a missing slot, declare no return value",
            functions: vec![FunctionDefinition::new(
                vec![
                    int(C::Branch, 0),
                    int(C::VariableToStack, 3),
                    push_int(1),
                ],
                vec![],
                vec![],
                1,
            )],
            cases: vec![],
            category: Category::Invalid,
        },
        ProgramSpec {
            name: "runaway",
            intent: "Call itself forever until the call depth limit stops it",
            functions: vec![FunctionDefinition::new(
                vec![int(C::CallFunction, 0)],
                vec![],
                vec![VmType::Integer],
                0,
            )],
            cases: vec![],
            category: Category::Runtime,
        },
    ]
}
