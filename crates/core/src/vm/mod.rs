//! Execution engine.
//!
//! This module owns the runtime side of the machine:
//! 1. **State:** Program counter, data stack, heap, call stack and the terminated flag ([`Vm`]).
//! 2. **Execution:** Single-step and run-to-completion over the loaded program.
//! 3. **Cancellation:** A shared flag polled between instructions ([`CancelToken`]).

/// Cooperative cancellation token.
pub mod cancel;

/// `step` and `run`.
pub mod execution;

/// Sparse integer heap.
pub mod heap;

/// Machine state, loading and introspection.
pub mod machine;

pub use cancel::CancelToken;
pub use heap::Heap;
pub use machine::{StateView, Vm};
