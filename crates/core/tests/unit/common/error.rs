//! # Error Tests
//!
//! Messages are part of the CLI's output, so they are pinned here.

use std::io;

use rstest::rstest;
use wspace_core::{LoadError, LoadFailure, VmError};

#[rstest]
#[case(LoadError::IncompleteCode, "incomplete sequence")]
#[case(LoadError::InvalidCode, "invalid sequence")]
#[case(LoadError::DuplicateLabel, "label already exists")]
#[case(LoadError::Overflow, "integer overflow")]
fn test_load_error_display(#[case] error: LoadError, #[case] expected: &str) {
    assert_eq!(error.to_string(), expected);
}

#[test]
fn test_only_incomplete_is_incomplete() {
    assert!(LoadError::IncompleteCode.is_incomplete());
    assert!(!LoadError::InvalidCode.is_incomplete());
    assert!(!LoadError::DuplicateLabel.is_incomplete());
    assert!(!LoadError::Overflow.is_incomplete());
}

#[test]
fn test_load_failure_display_and_source() {
    let failure = LoadFailure {
        segment: 3,
        offset: 17,
        error: LoadError::InvalidCode,
    };
    assert_eq!(failure.to_string(), "17: invalid sequence");

    let source = std::error::Error::source(&failure).map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("invalid sequence"));
}

#[rstest]
#[case(VmError::AlreadyTerminated, "vm already terminated")]
#[case(VmError::NotLoaded, "no program loaded")]
#[case(VmError::NotEnoughStack, "not enough stack to do")]
#[case(VmError::InvalidParameter, "invalid parameter")]
#[case(VmError::UndefinedLabel, "undefined label")]
#[case(VmError::EmptyCallStack, "callstack is empty")]
#[case(VmError::DivisionByZero, "division by zero")]
#[case(VmError::Cancelled, "execution cancelled")]
fn test_vm_error_display(#[case] error: VmError, #[case] expected: &str) {
    assert_eq!(error.to_string(), expected);
}

#[test]
fn test_io_error_is_transparent() {
    let error = VmError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
    assert_eq!(error.to_string(), "pipe closed");
    assert!(matches!(error, VmError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
}

#[rstest]
#[case(VmError::AlreadyTerminated, false)]
#[case(VmError::NotLoaded, false)]
#[case(VmError::Cancelled, false)]
#[case(VmError::NotEnoughStack, true)]
#[case(VmError::InvalidParameter, true)]
#[case(VmError::UndefinedLabel, true)]
#[case(VmError::EmptyCallStack, true)]
#[case(VmError::DivisionByZero, true)]
fn test_vm_error_is_fatal(#[case] error: VmError, #[case] fatal: bool) {
    assert_eq!(error.is_fatal(), fatal);
}
