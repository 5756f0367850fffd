//! # Introspection and Session Reuse Tests

use pretty_assertions::assert_eq;
use wspace_core::Vm;
use wspace_core::isa::Command;

use crate::common::{TestContext, program};

#[test]
fn test_reset_control_keeps_data_state() {
    let mut ctx = TestContext::new().load_commands(&[
        Command::Push(10),
        Command::Push(20),
        Command::Store,
        Command::Push(5),
        Command::End,
    ]);
    ctx.run().unwrap();
    assert!(ctx.vm.terminated);

    ctx.vm.reset_control();
    assert!(!ctx.vm.terminated);
    assert_eq!(ctx.vm.pc, 5);
    assert!(ctx.vm.current_instruction().is_none());

    let more = program(&[
        Command::WriteNum,
        Command::Push(10),
        Command::Retrieve,
        Command::WriteNum,
        Command::End,
    ]);
    let outcome = ctx.try_load(&more);
    assert_eq!(outcome.segment, 2);
    ctx.run().unwrap();

    assert_eq!(ctx.output_str(), "520");
    assert_eq!(ctx.vm.pc, 9);
}

#[test]
fn test_reset_after_error_continues_with_new_code() {
    let mut ctx = TestContext::new().load_commands(&[Command::Push(3), Command::Swap]);
    assert!(ctx.run().is_err());
    assert!(ctx.vm.terminated);

    ctx.vm.reset_control();
    let outcome = ctx.try_load(&program(&[Command::WriteNum, Command::End]));
    assert!(outcome.is_ok());
    ctx.run().unwrap();
    assert_eq!(ctx.output_str(), "3");
}

#[test]
fn test_dump_state() {
    let mut ctx = TestContext::new().load_commands(&[
        Command::Push(7),
        Command::Push(-2),
        Command::Push(40),
        Command::Store,
        Command::Push(1),
        Command::End,
    ]);
    ctx.run().unwrap();

    let dump = ctx.vm.dump_state();
    assert!(dump.starts_with("pc: 5 / 6 (terminated)\n"), "{dump}");
    assert!(dump.contains("next: (1:"), "{dump}");
    assert!(dump.contains("End\n"), "{dump}");
    assert!(dump.contains("segment: 2\n"), "{dump}");
    assert!(dump.contains("stack: [7, 1]\n"), "{dump}");
    assert!(dump.contains("call stack: []\n"), "{dump}");
    assert!(dump.contains("heap: 1 cell(s)\n  [-2] = 40\n"), "{dump}");
}

#[test]
fn test_state_view_of_fresh_vm() {
    let vm = Vm::new();
    let expected = "pc: 0 / 0\nsegment: 1\nlabels: 0\nstack: []\ncall stack: []\nheap: 0 cell(s)\n";

    assert_eq!(vm.state().to_string(), expected);
    assert_eq!(vm.dump_state(), expected);
}

#[test]
fn test_current_instruction_tracks_pc() {
    let mut ctx = TestContext::new().load_commands(&[Command::Dup, Command::End]);
    assert_eq!(
        ctx.vm.current_instruction().map(|i| i.command.clone()),
        Some(Command::Dup)
    );
    ctx.vm.pc = 1;
    assert_eq!(
        ctx.vm.current_instruction().map(|i| i.to_string()),
        Some("(1:3) End".to_owned())
    );
    ctx.vm.pc = 2;
    assert!(ctx.vm.current_instruction().is_none());
    assert!(ctx.step().is_err());
}
