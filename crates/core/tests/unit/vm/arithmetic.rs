//! # Arithmetic Tests
//!
//! Operands are the second item (left) and the top item (right). Results wrap
//! like native 64-bit integers and division truncates toward zero.

use pretty_assertions::assert_eq;
use rstest::rstest;
use wspace_core::VmError;
use wspace_core::isa::Command;

use crate::common::TestContext;

#[rstest]
#[case(Command::Add, &[1, 2, 3], &[1, 5])]
#[case(Command::Sub, &[1, 2, 3], &[1, -1])]
#[case(Command::Mul, &[1, 2, 3], &[1, 6])]
#[case(Command::Div, &[5, 7, 3], &[5, 2])]
#[case(Command::Mod, &[5, 7, 3], &[5, 1])]
#[case(Command::Div, &[-7, 2], &[-3])]
#[case(Command::Mod, &[-7, 2], &[-1])]
#[case(Command::Div, &[7, -2], &[-3])]
#[case(Command::Mod, &[7, -2], &[1])]
#[case(Command::Add, &[i64::MAX, 1], &[i64::MIN])]
#[case(Command::Sub, &[i64::MIN, 1], &[i64::MAX])]
#[case(Command::Mul, &[i64::MAX, 2], &[-2])]
#[case(Command::Div, &[i64::MIN, -1], &[i64::MIN])]
#[case(Command::Mod, &[i64::MIN, -1], &[0])]
fn test_arithmetic(#[case] command: Command, #[case] stack: &[i64], #[case] expected: &[i64]) {
    let mut ctx = TestContext::new().load_commands(&[command]).with_stack(stack);

    ctx.step().unwrap();
    assert_eq!(ctx.vm.stack, expected);
    assert_eq!(ctx.vm.pc, 1);
}

#[rstest]
#[case(Command::Add)]
#[case(Command::Sub)]
#[case(Command::Mul)]
#[case(Command::Div)]
#[case(Command::Mod)]
fn test_needs_two_operands(#[case] command: Command) {
    let mut ctx = TestContext::new().load_commands(&[command]).with_stack(&[4]);

    assert!(matches!(ctx.step(), Err(VmError::NotEnoughStack)));
    assert!(ctx.vm.terminated);
    assert_eq!(ctx.vm.stack, [4]);
}

#[rstest]
#[case(Command::Div)]
#[case(Command::Mod)]
fn test_division_by_zero(#[case] command: Command) {
    let mut ctx = TestContext::new().load_commands(&[command]).with_stack(&[9, 0]);

    assert!(matches!(ctx.step(), Err(VmError::DivisionByZero)));
    assert!(ctx.vm.terminated);
    assert_eq!(ctx.vm.pc, 0);
    assert_eq!(ctx.vm.stack, [9, 0]);
}
