//! Program storage and incremental loading.
//!
//! The loader turns source bytes into instructions and label definitions. It can
//! be called any number of times against the same [`Program`] and [`LabelTable`];
//! each call that consumes bytes becomes a new segment.

/// Label definitions.
pub mod labels;

/// Incremental source loader.
pub mod loader;

/// Append-only instruction store.
pub mod program;

pub use labels::LabelTable;
pub use loader::LoadOutcome;
pub use program::Program;
