//! Virtual machine state and introspection.

use std::fmt;

use crate::config::Config;
use crate::isa::Instruction;
use crate::sim::{LabelTable, LoadOutcome, Program, loader};
use crate::vm::heap::Heap;

/// A Whitespace virtual machine.
///
/// One instance is one session: the program, label table, stack, heap and
/// call stack accumulate across any number of [`load`](Self::load) and
/// [`run`](Self::run) calls. Only `pc` and `terminated` are control state;
/// [`reset_control`](Self::reset_control) clears them between independent
/// executions without touching data.
///
/// Fields are public so embedders can inspect and seed the machine, the way
/// a debugger would.
#[derive(Debug, Clone, Default)]
pub struct Vm {
    /// Every instruction loaded so far.
    pub program: Program,
    /// Label definitions from every `Mark` loaded so far.
    pub labels: LabelTable,

    /// Set by `End` and by any runtime error.
    pub terminated: bool,
    /// Index of the next instruction to execute.
    pub pc: usize,
    /// Data stack, bottom first.
    pub stack: Vec<i64>,
    /// Sparse heap.
    pub heap: Heap,
    /// Return addresses pushed by `Call`.
    pub call_stack: Vec<usize>,

    /// Emit a `trace` event for every executed instruction.
    pub trace_instructions: bool,
}

impl Vm {
    /// Creates an empty machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty machine with tracing taken from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            trace_instructions: config.general.trace_instructions,
            ..Self::default()
        }
    }

    /// Creates a machine around an already decoded program.
    pub fn with_program(program: Program, labels: LabelTable) -> Self {
        Self {
            program,
            labels,
            ..Self::default()
        }
    }

    /// Decodes `code` and appends it to the program.
    ///
    /// See [`loader::load`] for the exact stopping rules. On
    /// `IncompleteCode`, keep `code[outcome.consumed..]`, append more bytes and
    /// call again.
    pub fn load(&mut self, code: &[u8]) -> LoadOutcome {
        loader::load(&mut self.program, &mut self.labels, code)
    }

    /// The instruction at `pc`, or `None` if `pc` is past the end.
    ///
    /// After a failed `step` or `run` this is the instruction that failed.
    pub fn current_instruction(&self) -> Option<&Instruction> {
        self.program.get(self.pc)
    }

    /// Prepares for a new top-level execution.
    ///
    /// Moves `pc` to the end of the program and clears `terminated`, so the
    /// next `load` + `run` executes only the newly loaded code. Stack, heap
    /// and call stack are kept.
    pub fn reset_control(&mut self) {
        self.pc = self.program.len();
        self.terminated = false;
    }

    /// Multi-line report of the runtime state.
    pub fn dump_state(&self) -> String {
        self.state().to_string()
    }

    /// Borrowed view of the runtime state that renders as [`dump_state`](Self::dump_state).
    pub const fn state(&self) -> StateView<'_> {
        StateView(self)
    }
}

/// Display adapter over a [`Vm`]'s control and data state.
///
/// Prints `pc`, the next instruction, the next segment id, the label count,
/// both stacks bottom first, and the heap sorted by address.
#[derive(Debug, Clone, Copy)]
pub struct StateView<'a>(&'a Vm);

impl fmt::Display for StateView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vm = self.0;
        writeln!(
            f,
            "pc: {} / {}{}",
            vm.pc,
            vm.program.len(),
            if vm.terminated { " (terminated)" } else { "" }
        )?;
        if let Some(inst) = vm.current_instruction() {
            writeln!(f, "next: {inst}")?;
        }
        writeln!(f, "segment: {}", vm.program.segment())?;
        writeln!(f, "labels: {}", vm.labels.len())?;
        writeln!(f, "stack: {:?}", vm.stack)?;
        writeln!(f, "call stack: {:?}", vm.call_stack)?;
        writeln!(f, "heap: {} cell(s)", vm.heap.len())?;
        for (address, value) in vm.heap.sorted() {
            writeln!(f, "  [{address}] = {value}")?;
        }
        Ok(())
    }
}
