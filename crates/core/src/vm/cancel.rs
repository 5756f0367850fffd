//! Cooperative cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag polled by [`Vm::run`](crate::Vm::run) between instructions.
///
/// Clones share the flag, so one clone can be handed to another thread (a
/// signal handler, a supervisor with a deadline) and fired from there. A
/// blocking port read is never interrupted; the flag is seen once it returns.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    fired: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token that has not fired.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.fired.store(true, Ordering::Release);
    }

    /// Returns `true` once any clone has called [`cancel`](Self::cancel).
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }

    /// Clears the flag so the token can be reused for the next run.
    pub fn reset(&self) {
        self.fired.store(false, Ordering::Release);
    }
}
