//! # Execution Engine Unit Tests
//!
//! Each command's effect on the runtime state, its failure modes, the run
//! loop and complete programs.

/// Add, Sub, Mul, Div, Mod.
pub mod arithmetic;


/// Store and Retrieve.
pub mod heap;





/// Introspection and session reuse.
pub mod state;
