//! Incremental source loader.
//!
//! This module decodes Whitespace source into the program store. It performs:
//! 1. **Instruction decoding:** Prefix, sub-operation selector and parameter tokens for each instruction.
//! 2. **Label registration:** Every `Mark` defines its label in the shared table.
//! 3. **Resumable loading:** A buffer that ends mid-instruction reports how far it got, so the
//!    caller can append more bytes to the unconsumed tail and load again.
//!
//! # Encoding
//!
//! | prefix | next   | command                             |
//! |--------|--------|-------------------------------------|
//! | `SS`   | number | `Push` (the 3rd symbol is the sign) |
//! | `SLS`  |        | `Dup`                               |
//! | `STS`  | number | `Copy`                              |
//! | `SLT`  |        | `Swap`                              |
//! | `SLL`  |        | `Discard`                           |
//! | `STL`  | number | `Slide`                             |
//! | `TSS`  | S/T/L  | `Add` / `Sub` / `Mul`               |
//! | `TST`  | S/T    | `Div` / `Mod`                       |
//! | `TTS`  |        | `Store`                             |
//! | `TTT`  |        | `Retrieve`                          |
//! | `LSS`  | label  | `Mark`                              |
//! | `LST`  | label  | `Call`                              |
//! | `LSL`  | label  | `Jump`                              |
//! | `LTS`  | label  | `JZero`                             |
//! | `LTT`  | label  | `JNeg`                              |
//! | `LTL`  |        | `Ret`                               |
//! | `LLL`  |        | `End`                               |
//! | `TLS`  | S/T    | `WriteChar` / `WriteNum`            |
//! | `TLT`  | S/T    | `ReadChar` / `ReadNum`              |

use tracing::debug;

use crate::common::{LoadError, LoadFailure};
use crate::isa::scan::{next_symbol, read_label, read_number, read_prefix, read_symbol};
use crate::isa::{Command, Instruction, Symbol};
use crate::sim::{LabelTable, Program};

/// Result of one `load` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Segment id the decoded instructions were tagged with.
    pub segment: u32,
    /// Bytes consumed from the front of the buffer.
    ///
    /// On error this is the offset of the instruction that failed; for
    /// [`LoadError::IncompleteCode`] everything from here on must be fed again.
    pub consumed: usize,
    /// `Ok` if the whole buffer was decoded.
    pub result: Result<(), LoadError>,
}

impl LoadOutcome {
    /// Returns `true` if the whole buffer was decoded.
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Returns `true` if the buffer ended mid-instruction.
    pub const fn is_incomplete(&self) -> bool {
        matches!(self.result, Err(LoadError::IncompleteCode))
    }

    /// Converts into a `Result` carrying `(segment, consumed)` or a positioned failure.
    pub const fn into_result(self) -> Result<(u32, usize), LoadFailure> {
        match self.result {
            Ok(()) => Ok((self.segment, self.consumed)),
            Err(error) => Err(LoadFailure {
                segment: self.segment,
                offset: self.consumed,
                error,
            }),
        }
    }
}

/// Decodes `code` into `program`, defining labels in `labels`.
///
/// Decoding stops at the end of the buffer, at a partial instruction, or at
/// the first malformed one. Instructions decoded before the stop stay in the
/// program. If any byte was consumed the program's segment counter advances.
pub fn load(program: &mut Program, labels: &mut LabelTable, code: &[u8]) -> LoadOutcome {
    let segment = program.segment();
    let before = program.len();

    let (consumed, result) = decode_all(program, labels, code, segment);
    if consumed > 0 {
        program.advance_segment();
    }

    match result {
        Ok(()) => debug!(
            segment,
            consumed,
            decoded = program.len() - before,
            "loaded segment"
        ),
        Err(error) => debug!(
            segment,
            consumed,
            decoded = program.len() - before,
            %error,
            "load stopped"
        ),
    }

    LoadOutcome {
        segment,
        consumed,
        result,
    }
}

/// Decodes instructions until the buffer is exhausted or one fails.
///
/// Returns the offset reached and the stop reason.
fn decode_all(
    program: &mut Program,
    labels: &mut LabelTable,
    code: &[u8],
    segment: u32,
) -> (usize, Result<(), LoadError>) {
    let mut pos = 0;
    while pos < code.len() {
        let Some((_, skip)) = next_symbol(&code[pos..]) else {
            // Trailing comment.
            return (code.len(), Ok(()));
        };
        pos += skip;

        let (command, read) = match decode_instruction(&code[pos..]) {
            Ok(decoded) => decoded,
            Err(e) => return (pos, Err(e)),
        };
        if let Command::Mark(label) = &command
            && let Err(e) = labels.define(label.clone(), program.len() + 1)
        {
            return (pos, Err(e));
        }
        let _ = program.push(Instruction::new(command, segment, pos));
        pos += read;
    }
    (pos, Ok(()))
}

/// Decodes the instruction starting at the first symbol of `buf`.
///
/// # Returns
///
/// The command and the bytes consumed, parameter included.
fn decode_instruction(buf: &[u8]) -> Result<(Command, usize), LoadError> {
    use Symbol::{Lf as L, Space as S, Tab as T};

    let (prefix, mut read) = read_prefix(buf).ok_or(LoadError::IncompleteCode)?;

    let command = match prefix {
        [S, S, S | T] => {
            // The third prefix symbol doubles as the number's sign.
            let (n, r) = read_number(&buf[read - 1..])?;
            read += r - 1;
            Command::Push(n)
        }
        [S, L, S] => Command::Dup,
        [S, T, S] => {
            let (n, r) = read_number(&buf[read..])?;
            read += r;
            Command::Copy(n)
        }
        [S, L, T] => Command::Swap,
        [S, L, L] => Command::Discard,
        [S, T, L] => {
            let (n, r) = read_number(&buf[read..])?;
            read += r;
            Command::Slide(n)
        }

        [T, S, S] => match selector(buf, &mut read)? {
            S => Command::Add,
            T => Command::Sub,
            L => Command::Mul,
        },
        [T, S, T] => match selector(buf, &mut read)? {
            S => Command::Div,
            T => Command::Mod,
            L => return Err(LoadError::InvalidCode),
        },

        [T, T, S] => Command::Store,
        [T, T, T] => Command::Retrieve,

        [L, S, S] | [L, S, T] | [L, S, L] | [L, T, S] | [L, T, T] => {
            let (label, r) = read_label(&buf[read..])?;
            read += r;
            match (prefix[1], prefix[2]) {
                (S, S) => Command::Mark(label),
                (S, T) => Command::Call(label),
                (S, L) => Command::Jump(label),
                (T, S) => Command::JZero(label),
                _ => Command::JNeg(label),
            }
        }
        [L, T, L] => Command::Ret,
        [L, L, L] => Command::End,

        [T, L, S] => match selector(buf, &mut read)? {
            S => Command::WriteChar,
            T => Command::WriteNum,
            L => return Err(LoadError::InvalidCode),
        },
        [T, L, T] => match selector(buf, &mut read)? {
            S => Command::ReadChar,
            T => Command::ReadNum,
            L => return Err(LoadError::InvalidCode),
        },

        _ => return Err(LoadError::InvalidCode),
    };

    Ok((command, read))
}

/// Reads the sub-operation symbol that follows a prefix.
fn selector(buf: &[u8], read: &mut usize) -> Result<Symbol, LoadError> {
    let (sym, r) = read_symbol(&buf[*read..]).ok_or(LoadError::IncompleteCode)?;
    *read += r;
    Ok(sym)
}
