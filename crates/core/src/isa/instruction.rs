//! Decoded instruction with source provenance.

use std::fmt;

use super::command::{Command, Parameter};

/// A command plus where it came from.
///
/// `segment` is the id of the `load` call that decoded it and `offset` the
/// byte offset of its first symbol in that call's buffer. Neither affects
/// execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// The operation and its parameter.
    pub command: Command,
    /// Load segment the instruction was decoded in (starts at 1).
    pub segment: u32,
    /// Byte offset of the instruction within its segment's buffer.
    pub offset: usize,
}

impl Instruction {
    /// Creates an instruction with explicit provenance.
    pub const fn new(command: Command, segment: u32, offset: usize) -> Self {
        Self {
            command,
            segment,
            offset,
        }
    }

    /// The command's parameter view.
    pub const fn parameter(&self) -> Parameter<'_> {
        self.command.parameter()
    }
}

/// Wraps a bare command with no provenance (segment 0, offset 0).
impl From<Command> for Instruction {
    fn from(command: Command) -> Self {
        Self::new(command, 0, 0)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{}) {}", self.segment, self.offset, self.command)
    }
}
