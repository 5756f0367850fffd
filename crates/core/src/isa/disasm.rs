//! Program listing for diagnostics and the REPL.
//!
//! ```
//! use wspace_core::isa::{Command, Instruction, disasm::disassemble};
//! let listing = disassemble(&[Instruction::new(Command::Push(72), 1, 0)]);
//! assert_eq!(listing, "   0  (1:0) Push 72\n");
//! ```

use std::fmt::Write;

use crate::isa::instruction::Instruction;

/// Renders one line per instruction: program index, provenance, command.
pub fn disassemble(program: &[Instruction]) -> String {
    let mut out = String::new();
    for (index, inst) in program.iter().enumerate() {
        let _ = writeln!(out, "{index:>4}  {inst}");
    }
    out
}
