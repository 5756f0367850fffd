//! Whitespace scanner and token decoders.
//!
//! Everything the loader reads goes through [`next_symbol`]: it skips any byte
//! that is not a space, tab or newline and reports the next one. On top of it
//! sit the three token readers:
//! 1. **Prefix:** the first three symbols of an instruction ([`read_prefix`]).
//! 2. **Number:** sign, binary digits, newline terminator ([`read_number`]).
//! 3. **Label:** space/tab bit string, newline terminator ([`read_label`]).
//!
//! All readers return the number of bytes they consumed, comments included,
//! so the caller can keep a running offset into its buffer.

use crate::common::LoadError;
use crate::isa::command::Label;

/// One of the three significant characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `b' '`
    Space,
    /// `b'\t'`
    Tab,
    /// `b'\n'`
    Lf,
}

impl Symbol {
    /// Classifies a byte; every other byte is a comment.
    #[inline]
    pub const fn from_byte(b: u8) -> Option<Self> {
        match b {
            b' ' => Some(Self::Space),
            b'\t' => Some(Self::Tab),
            b'\n' => Some(Self::Lf),
            _ => None,
        }
    }

    /// The byte this symbol is written as.
    #[inline]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Space => b' ',
            Self::Tab => b'\t',
            Self::Lf => b'\n',
        }
    }
}

/// Finds the next symbol in `buf`.
///
/// Returns the symbol and its index, or `None` if only comment bytes remain.
#[inline]
pub fn next_symbol(buf: &[u8]) -> Option<(Symbol, usize)> {
    buf.iter()
        .enumerate()
        .find_map(|(i, &b)| Symbol::from_byte(b).map(|s| (s, i)))
}

/// Reads one symbol and returns it with the bytes consumed up to and including it.
#[inline]
pub fn read_symbol(buf: &[u8]) -> Option<(Symbol, usize)> {
    next_symbol(buf).map(|(s, p)| (s, p + 1))
}

/// Reads the three-symbol instruction prefix.
///
/// Returns `None` if the buffer runs out first. The third symbol always sits
/// at `consumed - 1`, which the loader relies on for `Push`.
pub fn read_prefix(buf: &[u8]) -> Option<([Symbol; 3], usize)> {
    let mut prefix = [Symbol::Space; 3];
    let mut cur = 0;
    for slot in &mut prefix {
        let (sym, read) = read_symbol(&buf[cur..])?;
        *slot = sym;
        cur += read;
    }
    Some((prefix, cur))
}

/// Reads a signed binary number: sign symbol, digits, newline.
///
/// Space is positive and tab negative; digits are space = 0 and tab = 1, most
/// significant first. A newline in the sign position, or right after it,
/// yields 0. Before each digit is shifted in the accumulator must not exceed
/// `i64::MAX >> 1`, otherwise the literal is rejected with
/// [`LoadError::Overflow`].
///
/// # Returns
///
/// The value and the number of bytes consumed.
pub fn read_number(buf: &[u8]) -> Result<(i64, usize), LoadError> {
    let (sign, mut cur) = read_symbol(buf).ok_or(LoadError::IncompleteCode)?;
    if sign == Symbol::Lf {
        return Ok((0, cur));
    }

    let mut n: i64 = 0;
    loop {
        let (digit, read) = read_symbol(&buf[cur..]).ok_or(LoadError::IncompleteCode)?;
        cur += read;
        if digit == Symbol::Lf {
            break;
        }
        if n > (i64::MAX >> 1) {
            return Err(LoadError::Overflow);
        }
        n = (n << 1) | i64::from(digit == Symbol::Tab);
    }

    if sign == Symbol::Tab {
        n = -n;
    }
    Ok((n, cur))
}

/// Reads a label: space/tab symbols up to a newline.
///
/// # Returns
///
/// The label and the number of bytes consumed, terminator included.
pub fn read_label(buf: &[u8]) -> Result<(Label, usize), LoadError> {
    let mut symbols = Vec::new();
    let mut cur = 0;
    loop {
        let (sym, read) = read_symbol(&buf[cur..]).ok_or(LoadError::IncompleteCode)?;
        cur += read;
        if sym == Symbol::Lf {
            return Ok((Label::new(symbols), cur));
        }
        symbols.push(sym.as_byte());
    }
}
