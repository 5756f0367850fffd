//! Common types shared by the loader and the execution engine.
//!
//! At the moment this is only the error taxonomy:
//! 1. **Load errors:** Problems found while decoding source bytes into instructions.
//! 2. **Runtime errors:** Precondition violations, I/O failures and cancellation during execution.
//! 3. **Positioned failures:** Load errors paired with the segment and byte offset they occurred at.

/// Error types for loading and execution.
pub mod error;

pub use error::{LoadError, LoadFailure, VmError};
