//! Whitespace command set.
//!
//! Every command is listed with its encoding (S = space, T = tab, L = newline).
//! Commands that take a parameter carry it in the variant, so a `Push` always
//! has a number and a `Jump` always has a label.

use std::fmt;

/// A jump target: the raw sequence of space/tab symbols that spelled it.
///
/// Two labels are equal exactly when their symbol sequences are equal.
/// `Display` renders the sequence with `S` for space and `T` for tab; the
/// empty label renders as `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Label(Vec<u8>);

impl Label {
    /// Builds a label from its symbol bytes.
    ///
    /// Only `b' '` and `b'\t'` occur in labels produced by the decoder.
    pub fn new(symbols: impl Into<Vec<u8>>) -> Self {
        Self(symbols.into())
    }

    /// Builds a label from the `S`/`T` letter notation used by `Display`.
    ///
    /// Returns `None` if any other character appears.
    pub fn from_letters(letters: &str) -> Option<Self> {
        letters
            .bytes()
            .map(|b| match b {
                b'S' => Some(b' '),
                b'T' => Some(b'\t'),
                _ => None,
            })
            .collect::<Option<Vec<u8>>>()
            .map(Self)
    }

    /// The raw symbol bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of symbols in the label.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the zero-length label (`LSSL` is a valid `Mark`).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("-");
        }
        for &b in &self.0 {
            f.write_str(if b == b'\t' { "T" } else { "S" })?;
        }
        Ok(())
    }
}

/// One Whitespace operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // Stack manipulation
    /// `SS` number: push the number.
    Push(i64),
    /// `SLS`: duplicate the top item.
    Dup,
    /// `STS` number: copy the n-th item (0 = top) onto the top.
    Copy(i64),
    /// `SLT`: swap the top two items.
    Swap,
    /// `SLL`: discard the top item.
    Discard,
    /// `STL` number: remove n items below the top, keeping the top.
    Slide(i64),

    // Arithmetic
    /// `TSSS`: addition.
    Add,
    /// `TSST`: subtraction.
    Sub,
    /// `TSSL`: multiplication.
    Mul,
    /// `TSTS`: integer division, truncating toward zero.
    Div,
    /// `TSTT`: remainder, sign follows the dividend.
    Mod,

    // Heap access
    /// `TTS`: store the top value at the address below it.
    Store,
    /// `TTT`: replace the address on top with the heap value stored there.
    Retrieve,

    // Flow control
    /// `LSS` label: mark a location in the program.
    Mark(Label),
    /// `LST` label: call a subroutine.
    Call(Label),
    /// `LSL` label: unconditional jump.
    Jump(Label),
    /// `LTS` label: pop, jump if zero.
    JZero(Label),
    /// `LTT` label: pop, jump if negative.
    JNeg(Label),
    /// `LTL`: return from a subroutine.
    Ret,
    /// `LLL`: end the program.
    End,

    // I/O
    /// `TLSS`: pop and write the low byte.
    WriteChar,
    /// `TLST`: pop and write in decimal.
    WriteNum,
    /// `TLTS`: read a byte into the heap address on top.
    ReadChar,
    /// `TLTT`: read a decimal line into the heap address on top.
    ReadNum,
}

/// Borrowed view of a command's parameter, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter<'a> {
    /// The command takes no parameter.
    None,
    /// A number literal (`Push`, `Copy`, `Slide`).
    Number(i64),
    /// A label (`Mark`, `Call`, `Jump`, `JZero`, `JNeg`).
    Label(&'a Label),
}

impl Command {
    /// Mnemonic of the command, without its parameter.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Push(_) => "Push",
            Self::Dup => "Dup",
            Self::Copy(_) => "Copy",
            Self::Swap => "Swap",
            Self::Discard => "Discard",
            Self::Slide(_) => "Slide",
            Self::Add => "Add",
            Self::Sub => "Sub",
            Self::Mul => "Mul",
            Self::Div => "Div",
            Self::Mod => "Mod",
            Self::Store => "Store",
            Self::Retrieve => "Retrieve",
            Self::Mark(_) => "Mark",
            Self::Call(_) => "Call",
            Self::Jump(_) => "Jump",
            Self::JZero(_) => "JZero",
            Self::JNeg(_) => "JNeg",
            Self::Ret => "Ret",
            Self::End => "End",
            Self::WriteChar => "WriteChar",
            Self::WriteNum => "WriteNum",
            Self::ReadChar => "ReadChar",
            Self::ReadNum => "ReadNum",
        }
    }

    /// The parameter carried by this command, if any.
    pub const fn parameter(&self) -> Parameter<'_> {
        match self {
            Self::Push(n) | Self::Copy(n) | Self::Slide(n) => Parameter::Number(*n),
            Self::Mark(l) | Self::Call(l) | Self::Jump(l) | Self::JZero(l) | Self::JNeg(l) => {
                Parameter::Label(l)
            }
            _ => Parameter::None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())?;
        match self.parameter() {
            Parameter::None => Ok(()),
            Parameter::Number(n) => write!(f, " {n}"),
            Parameter::Label(l) => write!(f, " {l}"),
        }
    }
}
