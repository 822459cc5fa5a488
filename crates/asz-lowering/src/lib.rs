//! Lowered instruction boundary for the asz semantic analyzer.
//!
//! Code generation is an external collaborator. Two semantic checks read its
//! output: return-value completeness (is the synthesized `returnvoid` still
//! reachable) and the inlining instruction scan. This crate fixes the shape
//! they read:
//! - `opcode` - the `Opcode` set and the source-operator mapping
//! - `instruction_list` - `Instruction`, basic blocks and `InstructionList`

pub mod instruction_list;
pub mod opcode;

pub use instruction_list::{Instruction, InstructionList};
pub use opcode::{Opcode, binary_opcode};

#[cfg(test)]
#[path = "../tests/instruction_list_tests.rs"]
mod instruction_list_tests;
