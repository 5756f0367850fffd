//! Load-time and run-time error definitions.
//!
//! Errors are split along the two phases of the machine:
//! 1. **`LoadError`:** Raised by [`Vm::load`](crate::Vm::load) while decoding source bytes.
//!    `IncompleteCode` is the only non-fatal kind; it asks the caller for more bytes.
//! 2. **`VmError`:** Raised by [`Vm::step`](crate::Vm::step) and [`Vm::run`](crate::Vm::run).
//!    Every kind except `NotLoaded`, `AlreadyTerminated` and `Cancelled` also halts the machine.

use std::io;

/// Errors reported while decoding source bytes into instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The buffer ends in the middle of an instruction or parameter token.
    ///
    /// Not fatal: keep the unconsumed suffix, append more bytes and load again.
    #[error("incomplete sequence")]
    IncompleteCode,

    /// The instruction prefix or a sub-operation selector is not part of the language.
    #[error("invalid sequence")]
    InvalidCode,

    /// A `Mark` names a label that has already been defined in this VM.
    #[error("label already exists")]
    DuplicateLabel,

    /// A number literal is too large for the decoder's magnitude guard.
    #[error("integer overflow")]
    Overflow,
}

impl LoadError {
    /// Returns `true` when the error only means "feed me more bytes".
    #[inline]
    pub const fn is_incomplete(self) -> bool {
        matches!(self, Self::IncompleteCode)
    }
}

/// A [`LoadError`] together with where it happened.
///
/// `offset` is relative to the buffer handed to the `load` call that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{offset}: {error}")]
pub struct LoadFailure {
    /// Segment id of the failing `load` call.
    pub segment: u32,
    /// Byte offset of the offending instruction.
    pub offset: usize,
    /// What went wrong.
    #[source]
    pub error: LoadError,
}

/// Errors reported while executing instructions.
#[derive(Debug, thiserror::Error)]
pub enum VmError {
    /// `step` was called after the machine halted.
    #[error("vm already terminated")]
    AlreadyTerminated,

    /// The program counter is past the last loaded instruction.
    ///
    /// `run` treats this as a normal stop: the program ran out of
    /// instructions without reaching `End`.
    #[error("no program loaded")]
    NotLoaded,

    /// The instruction needs more stack items than are present.
    #[error("not enough stack to do")]
    NotEnoughStack,

    /// `Copy` or `Slide` was given an index outside the current stack.
    #[error("invalid parameter")]
    InvalidParameter,

    /// A jump or call names a label that no `Mark` has defined.
    #[error("undefined label")]
    UndefinedLabel,

    /// `Ret` with nothing on the call stack.
    #[error("callstack is empty")]
    EmptyCallStack,

    /// `Div` or `Mod` with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// The input or output port failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The cancellation token fired between two instructions.
    ///
    /// The machine is left untouched; calling `run` again resumes it.
    #[error("execution cancelled")]
    Cancelled,
}

impl VmError {
    /// Returns `true` if this error halts the machine (sets `terminated`).
    pub const fn is_fatal(&self) -> bool {
        !matches!(
            self,
            Self::AlreadyTerminated | Self::NotLoaded | Self::Cancelled
        )
    }
}
