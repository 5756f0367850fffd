//! # Heap Access Tests

use pretty_assertions::assert_eq;
use wspace_core::VmError;
use wspace_core::isa::Command;
use wspace_core::vm::Heap;

use crate::common::TestContext;

#[test]
fn test_store_then_retrieve() {
    let addr = 10;
    let value = 12345;
    let mut ctx = TestContext::new()
        .load_commands(&[Command::Store, Command::Retrieve])
        .with_stack(&[addr, addr, value]);

    ctx.step().unwrap();
    assert_eq!(ctx.vm.heap.get(addr), Some(value));
    assert_eq!(ctx.vm.stack, [addr]);
    assert_eq!(ctx.vm.pc, 1);

    ctx.step().unwrap();
    assert_eq!(ctx.vm.stack, [value]);
    assert_eq!(ctx.vm.pc, 2);
}

#[test]
fn test_retrieve_unset_address_is_zero() {
    let mut ctx = TestContext::new()
        .load_commands(&[Command::Retrieve])
        .with_stack(&[-99]);

    ctx.step().unwrap();
    assert_eq!(ctx.vm.stack, [0]);
    assert!(ctx.vm.heap.is_empty());
}

#[test]
fn test_store_overwrites() {
    let mut ctx = TestContext::new()
        .load_commands(&[Command::Store, Command::Store])
        .with_stack(&[1, 20, 1, 10]);

    ctx.step().unwrap();
    ctx.step().unwrap();
    assert_eq!(ctx.vm.heap.load(1), 20);
    assert_eq!(ctx.vm.heap.len(), 1);
}

#[test]
fn test_store_needs_address_and_value() {
    let mut ctx = TestContext::new()
        .load_commands(&[Command::Store])
        .with_stack(&[5]);

    assert!(matches!(ctx.step(), Err(VmError::NotEnoughStack)));
    assert!(ctx.vm.heap.is_empty());
    assert_eq!(ctx.vm.stack, [5]);
}

#[test]
fn test_retrieve_needs_address() {
    let mut ctx = TestContext::new().load_commands(&[Command::Retrieve]);
    assert!(matches!(ctx.step(), Err(VmError::NotEnoughStack)));
    assert!(ctx.vm.terminated);
}

#[test]
fn test_heap_sorted_view() {
    let heap: Heap = [(5, 50), (-1, 10), (3, 30)].into_iter().collect();
    assert_eq!(heap.sorted(), vec![(-1, 10), (3, 30), (5, 50)]);
    assert_eq!(heap.get(4), None);
    assert_eq!(heap.load(4), 0);
}
