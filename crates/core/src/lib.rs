//! Whitespace loader and virtual machine.
//!
//! This crate implements an interpreter for the Whitespace language with the following:
//! 1. **ISA:** Symbol scanning, number and label tokens, the command set and disassembly.
//! 2. **Loader:** Incremental decoding into a cumulative program with shared label definitions.
//! 3. **VM:** Stack, heap and call stack, single-step and cancellable run-to-completion.
//! 4. **I/O:** Byte-level input and output ports supplied per call.
//! 5. **Configuration:** JSON-backed settings shared with front ends.
//!
//! ```
//! use wspace_core::{CancelToken, Vm};
//!
//! // Push 33, WriteChar, End.
//! let mut vm = Vm::new();
//! assert!(vm.load(b"   \t    \t\n\t\n  \n\n\n").is_ok());
//!
//! let mut out = Vec::new();
//! vm.run(&CancelToken::new(), &mut &b""[..], &mut out).unwrap();
//! assert_eq!(out, b"!");
//! assert!(vm.terminated);
//! ```

/// Error types shared by the loader and the engine.
pub mod common;
/// Front-end configuration (tracing, REPL prompts).
pub mod config;
/// Input and output port traits.
pub mod io;
/// Instruction set (scanner, tokens, commands, disassembly).
pub mod isa;
/// Program store, label table and incremental loader.
pub mod sim;
/// Execution engine (state, step/run, heap, cancellation).
pub mod vm;

pub use crate::common::{LoadError, LoadFailure, VmError};
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
pub use crate::io::{InputPort, OutputPort};
pub use crate::isa::{Command, Instruction, Label};
pub use crate::sim::LoadOutcome;
/// Main machine type; one instance per session.
pub use crate::vm::{CancelToken, Vm};
