//! Stdin shared by the REPL and the program it runs.

use std::io::{self, BufRead, Read};

/// Line-buffered stdin split between REPL source and program input.
///
/// Both sides pull whole lines from the same reader. A line handed to the
/// running program stays with the program until it is fully consumed, so the
/// rest of a line partly read by `ReadChar` is served to the next read
/// instead of turning up as source. The program side is exposed through
/// [`BufRead`], which makes a `Console` an input port.
#[derive(Debug)]
pub struct Console<R> {
    reader: R,
    input: Vec<u8>,
    pos: usize,
}

impl<R: BufRead> Console<R> {
    /// Wraps `reader` with an empty program-input buffer.
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            input: Vec::new(),
            pos: 0,
        }
    }

    /// Appends the next source line, newline included, to `line`.
    ///
    /// Returns the number of bytes read; `0` means end of input.
    pub fn read_source_line(&mut self, line: &mut Vec<u8>) -> io::Result<usize> {
        self.reader.read_until(b'\n', line)
    }
}

impl<R: BufRead> Read for Console<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(buf.len());
        buf[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl<R: BufRead> BufRead for Console<R> {
    /// Returns the unread rest of the current input line, fetching a new line
    /// once it is used up. Empty at end of input.
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.pos >= self.input.len() {
            self.input.clear();
            self.pos = 0;
            let _ = self.reader.read_until(b'\n', &mut self.input)?;
        }
        Ok(&self.input[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.input.len());
    }
}

/// Draws Whitespace source visibly: `.` for space, `_` for tab, `,` for
/// newline. Comment bytes are dropped.
pub fn visualize(code: &[u8]) -> String {
    code.iter()
        .filter_map(|&b| match b {
            b' ' => Some('.'),
            b'\t' => Some('_'),
            b'\n' => Some(','),
            _ => None,
        })
        .collect()
}
