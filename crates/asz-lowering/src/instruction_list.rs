//! Instruction lists split into basic blocks.
//!
//! The lowering appends a synthesized `returnvoid` to every method body so
//! that falling off the end returns. That instruction is flagged; if it is
//! still reachable in the control-flow graph, some path through a
//! value-returning function omits its `return`.

use crate::opcode::Opcode;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    /// The trailing `returnvoid` added by the lowering, not by the user.
    pub synthesized: bool,
}

impl Instruction {
    #[must_use]
    pub const fn new(opcode: Opcode) -> Self {
        Self {
            opcode,
            synthesized: false,
        }
    }

    #[must_use]
    pub const fn synthesized_return_void() -> Self {
        Self {
            opcode: Opcode::ReturnVoid,
            synthesized: true,
        }
    }

    #[must_use]
    pub const fn is_synthesized_return_void(&self) -> bool {
        self.synthesized && matches!(self.opcode, Opcode::ReturnVoid)
    }
}

#[derive(Clone, Debug, Default)]
struct Block {
    start: usize,
    end: usize,
    successors: SmallVec<[usize; 2]>,
}

/// A method body's instructions with its control-flow graph. Block 0 is the
/// entry block.
#[derive(Clone, Debug, Default)]
pub struct InstructionList {
    instructions: Vec<Instruction>,
    blocks: Vec<Block>,
}

impl InstructionList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A single straight-line block holding `opcodes`.
    #[must_use]
    pub fn from_opcodes(opcodes: &[Opcode]) -> Self {
        let mut list = Self::new();
        for &op in opcodes {
            list.push(op);
        }
        list
    }

    /// Begin a new basic block at the current end of the list and return its
    /// index.
    pub fn start_block(&mut self) -> usize {
        let at = self.instructions.len();
        self.blocks.push(Block {
            start: at,
            end: at,
            successors: SmallVec::new(),
        });
        self.blocks.len() - 1
    }

    /// Append to the current block, opening the entry block if needed.
    pub fn push(&mut self, opcode: Opcode) {
        self.push_instruction(Instruction::new(opcode));
    }

    pub fn push_synthesized_return_void(&mut self) {
        self.push_instruction(Instruction::synthesized_return_void());
    }

    fn push_instruction(&mut self, instruction: Instruction) {
        if self.blocks.is_empty() {
            self.start_block();
        }
        self.instructions.push(instruction);
        if let Some(block) = self.blocks.last_mut() {
            block.end = self.instructions.len();
        }
    }

    /// Record a control-flow edge between two blocks.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        if to < self.blocks.len()
            && let Some(block) = self.blocks.get_mut(from)
            && !block.successors.contains(&to)
        {
            block.successors.push(to);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    #[must_use]
    pub fn last(&self) -> Option<&Instruction> {
        self.instructions.last()
    }

    #[must_use]
    pub fn ends_with_synthesized_return(&self) -> bool {
        self.last()
            .is_some_and(Instruction::is_synthesized_return_void)
    }

    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Blocks reachable from the entry, in depth-first preorder.
    #[must_use]
    pub fn blocks_in_control_flow_order(&self) -> Vec<&[Instruction]> {
        let mut visited = vec![false; self.blocks.len()];
        let mut order = Vec::new();
        let mut stack = vec![0usize];
        while let Some(index) = stack.pop() {
            let Some(block) = self.blocks.get(index) else {
                continue;
            };
            if visited[index] {
                continue;
            }
            visited[index] = true;
            order.push(&self.instructions[block.start..block.end]);
            // Reverse so the first successor is visited first.
            stack.extend(block.successors.iter().rev().copied());
        }
        order
    }
}
