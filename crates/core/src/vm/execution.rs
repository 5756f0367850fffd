//! Instruction execution.
//!
//! This module implements the engine's two entry points:
//! 1. **`step`:** Executes the instruction at `pc`. Any failure past the two
//!    preconditions (not terminated, `pc` in range) halts the machine.
//! 2. **`run`:** Steps until `End`, until the program runs out, or until an error,
//!    polling the cancellation token before every instruction.
//!
//! Arithmetic wraps like native two's-complement `i64`; division and remainder
//! truncate toward zero.

use tracing::{debug, trace};

use crate::common::VmError;
use crate::io::{InputPort, OutputPort};
use crate::isa::{Command, Label};
use crate::vm::cancel::CancelToken;
use crate::vm::machine::Vm;

impl Vm {
    /// Runs until the program ends, runs out of instructions, fails or is cancelled.
    ///
    /// Running out of instructions is not an error: check
    /// [`terminated`](Self::terminated) to tell it apart from `End`. A
    /// cancelled run leaves the machine exactly where it was, and calling
    /// `run` again resumes it.
    ///
    /// # Errors
    ///
    /// [`VmError::Cancelled`] if `cancel` fired, otherwise the first error
    /// returned by [`step`](Self::step) other than `NotLoaded`.
    pub fn run<I, O>(
        &mut self,
        cancel: &CancelToken,
        input: &mut I,
        output: &mut O,
    ) -> Result<(), VmError>
    where
        I: InputPort + ?Sized,
        O: OutputPort + ?Sized,
    {
        while !self.terminated {
            if cancel.is_cancelled() {
                debug!(pc = self.pc, "run cancelled");
                return Err(VmError::Cancelled);
            }
            match self.step(input, output) {
                Ok(()) => {}
                Err(VmError::NotLoaded) => break,
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Executes one instruction.
    ///
    /// # Errors
    ///
    /// - [`VmError::AlreadyTerminated`] / [`VmError::NotLoaded`]: nothing was
    ///   executed and the state is unchanged.
    /// - Anything else: the machine is now terminated and `pc` still points at
    ///   the failing instruction.
    pub fn step<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<(), VmError>
    where
        I: InputPort + ?Sized,
        O: OutputPort + ?Sized,
    {
        if self.terminated {
            return Err(VmError::AlreadyTerminated);
        }
        let Some(inst) = self.program.get(self.pc) else {
            return Err(VmError::NotLoaded);
        };
        if self.trace_instructions {
            trace!(pc = self.pc, %inst, stack = ?self.stack, "exec");
        }

        let result = self.execute(input, output);
        if let Err(error) = &result {
            self.terminated = true;
            debug!(
                pc = self.pc,
                instruction = ?self.current_instruction(),
                %error,
                "execution halted"
            );
        }
        result
    }

    /// Applies the instruction at `pc`. Preconditions are checked by `step`.
    fn execute<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<(), VmError>
    where
        I: InputPort + ?Sized,
        O: OutputPort + ?Sized,
    {
        let Self {
            program,
            labels,
            terminated,
            pc,
            stack,
            heap,
            call_stack,
            ..
        } = self;

        let Some(inst) = program.get(*pc) else {
            return Err(VmError::NotLoaded);
        };
        let next = *pc + 1;
        let resolve = |label: &Label| labels.resolve(label).ok_or(VmError::UndefinedLabel);

        match &inst.command {
            // Stack manipulation
            Command::Push(n) => stack.push(*n),
            Command::Dup => {
                let &top = stack.last().ok_or(VmError::NotEnoughStack)?;
                stack.push(top);
            }
            Command::Copy(n) => {
                let depth = stack.len();
                let idx = usize::try_from(*n)
                    .ok()
                    .filter(|&i| i < depth)
                    .ok_or(VmError::InvalidParameter)?;
                stack.push(stack[depth - 1 - idx]);
            }
            Command::Swap => {
                let len = stack.len();
                if len < 2 {
                    return Err(VmError::NotEnoughStack);
                }
                stack.swap(len - 1, len - 2);
            }
            Command::Discard => {
                if stack.pop().is_none() {
                    return Err(VmError::NotEnoughStack);
                }
            }
            Command::Slide(n) => {
                let len = stack.len();
                let n = usize::try_from(*n)
                    .ok()
                    .filter(|&n| n + 1 < len)
                    .ok_or(VmError::InvalidParameter)?;
                let top = stack[len - 1];
                stack.truncate(len - n);
                stack[len - n - 1] = top;
            }

            // Arithmetic
            Command::Add => binary(stack, |a, b| Ok(a.wrapping_add(b)))?,
            Command::Sub => binary(stack, |a, b| Ok(a.wrapping_sub(b)))?,
            Command::Mul => binary(stack, |a, b| Ok(a.wrapping_mul(b)))?,
            Command::Div => binary(stack, |a, b| {
                if b == 0 {
                    Err(VmError::DivisionByZero)
                } else {
                    Ok(a.wrapping_div(b))
                }
            })?,
            Command::Mod => binary(stack, |a, b| {
                if b == 0 {
                    Err(VmError::DivisionByZero)
                } else {
                    Ok(a.wrapping_rem(b))
                }
            })?,

            // Heap access
            Command::Store => {
                let [.., address, value] = stack[..] else {
                    return Err(VmError::NotEnoughStack);
                };
                stack.truncate(stack.len() - 2);
                heap.store(address, value);
            }
            Command::Retrieve => {
                let top = stack.last_mut().ok_or(VmError::NotEnoughStack)?;
                *top = heap.load(*top);
            }

            // Flow control
            Command::Mark(_) => {}
            Command::Call(label) => {
                let target = resolve(label)?;
                call_stack.push(next);
                *pc = target;
                return Ok(());
            }
            Command::Jump(label) => {
                *pc = resolve(label)?;
                return Ok(());
            }
            Command::JZero(label) => {
                let target = resolve(label)?;
                let value = stack.pop().ok_or(VmError::NotEnoughStack)?;
                *pc = if value == 0 { target } else { next };
                return Ok(());
            }
            Command::JNeg(label) => {
                let target = resolve(label)?;
                let value = stack.pop().ok_or(VmError::NotEnoughStack)?;
                *pc = if value < 0 { target } else { next };
                return Ok(());
            }
            Command::Ret => {
                *pc = call_stack.pop().ok_or(VmError::EmptyCallStack)?;
                return Ok(());
            }
            Command::End => {
                *terminated = true;
                return Ok(());
            }

            // I/O
            Command::WriteChar => {
                let &value = stack.last().ok_or(VmError::NotEnoughStack)?;
                output.write_bytes(&[value as u8])?;
                stack.truncate(stack.len() - 1);
            }
            Command::WriteNum => {
                let &value = stack.last().ok_or(VmError::NotEnoughStack)?;
                output.write_bytes(value.to_string().as_bytes())?;
                stack.truncate(stack.len() - 1);
            }
            Command::ReadChar => {
                let &address = stack.last().ok_or(VmError::NotEnoughStack)?;
                output.flush_output()?;
                let byte = input.read_byte()?;
                heap.store(address, i64::from(byte));
                stack.truncate(stack.len() - 1);
            }
            Command::ReadNum => {
                let &address = stack.last().ok_or(VmError::NotEnoughStack)?;
                output.flush_output()?;
                let value = input.read_number()?;
                heap.store(address, value);
                stack.truncate(stack.len() - 1);
            }
        }

        *pc = next;
        Ok(())
    }
}

/// Pops `b` (top) and `a`, pushes `op(a, b)`.
///
/// The stack is left untouched if there are fewer than two items or `op` fails.
fn binary(
    stack: &mut Vec<i64>,
    op: impl FnOnce(i64, i64) -> Result<i64, VmError>,
) -> Result<(), VmError> {
    let [.., a, b] = stack[..] else {
        return Err(VmError::NotEnoughStack);
    };
    let result = op(a, b)?;
    stack.truncate(stack.len() - 2);
    stack.push(result);
    Ok(())
}
