//! Whitespace instruction set.
//!
//! This module covers everything between raw source bytes and typed instructions:
//! 1. **Scanning:** Symbol classification and the number, label and prefix readers.
//! 2. **Commands:** The 24 operations, with parameters carried in the variants.
//! 3. **Instructions:** Commands tagged with the segment and offset they were decoded from.
//! 4. **Disassembly:** Human-readable listings for diagnostics.

/// Command set, labels and parameter views.
pub mod command;

/// Program listing.
pub mod disasm;

/// Decoded instruction with provenance.
pub mod instruction;

/// Symbol scanner and token decoders.
pub mod scan;

pub use command::{Command, Label, Parameter};
pub use instruction::Instruction;
pub use scan::Symbol;
