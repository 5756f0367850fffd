//! Append-only instruction store.

use std::ops::Index;
use std::slice;

use crate::isa::Instruction;

/// The cumulative program of a VM.
///
/// Instructions are only ever appended, so an index handed out once (a label
/// target, a return address) stays valid for the life of the VM. The store
/// also tracks the id of the next load segment, starting at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
    next_segment: u32,
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}

impl Program {
    /// Creates an empty program whose first segment will be 1.
    pub const fn new() -> Self {
        Self {
            instructions: Vec::new(),
            next_segment: 1,
        }
    }

    /// Appends an instruction and returns its index.
    pub fn push(&mut self, inst: Instruction) -> usize {
        self.instructions.push(inst);
        self.instructions.len() - 1
    }

    /// Instruction at `index`, if loaded.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Number of loaded instructions.
    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns `true` if nothing has been loaded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// All instructions in program order.
    pub fn as_slice(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Iterates over the instructions in program order.
    pub fn iter(&self) -> slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    /// Id the next `load` call will tag its instructions with.
    #[inline]
    pub const fn segment(&self) -> u32 {
        self.next_segment
    }

    /// Closes the current segment.
    pub(crate) fn advance_segment(&mut self) {
        self.next_segment += 1;
    }
}

impl Index<usize> for Program {
    type Output = Instruction;

    fn index(&self, index: usize) -> &Instruction {
        &self.instructions[index]
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builds a program from already decoded instructions; the next segment is 1.
impl From<Vec<Instruction>> for Program {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self {
            instructions,
            next_segment: 1,
        }
    }
}

impl FromIterator<Instruction> for Program {
    fn from_iter<I: IntoIterator<Item = Instruction>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}
