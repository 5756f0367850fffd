//! Byte-level I/O ports.
//!
//! The engine never touches a concrete stream. Each `step`/`run` call is given:
//! 1. **An input port:** one byte at a time for `ReadChar`, one decimal line for `ReadNum`.
//! 2. **An output port:** raw bytes for `WriteChar` and `WriteNum`.
//!
//! Any [`BufRead`] is an input port and any [`Write`] is an output port, so
//! `io::stdin().lock()`, `&[u8]`, `Cursor` and `Vec<u8>` all work directly. A
//! transport that proxies reads over some other channel implements the traits
//! itself.

use std::io::{self, BufRead, Write};

/// Source of program input.
pub trait InputPort {
    /// Reads a single byte.
    ///
    /// # Errors
    ///
    /// `UnexpectedEof` when the input is exhausted, or whatever the
    /// underlying transport reports.
    fn read_byte(&mut self) -> io::Result<u8>;

    /// Reads bytes up to and including the next newline and parses them as a
    /// decimal integer.
    ///
    /// # Errors
    ///
    /// `UnexpectedEof` if nothing could be read, `InvalidData` if the line is
    /// not an optionally signed decimal `i64`.
    fn read_number(&mut self) -> io::Result<i64>;
}

/// Sink for program output.
pub trait OutputPort {
    /// Writes all of `bytes`.
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Pushes buffered output to its destination.
    ///
    /// The engine calls this before blocking on input.
    fn flush_output(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<R: BufRead + ?Sized> InputPort for R {
    fn read_byte(&mut self) -> io::Result<u8> {
        let b = {
            let buf = self.fill_buf()?;
            *buf.first().ok_or(io::ErrorKind::UnexpectedEof)?
        };
        self.consume(1);
        Ok(b)
    }

    fn read_number(&mut self) -> io::Result<i64> {
        let mut line = Vec::new();
        if self.read_until(b'\n', &mut line)? == 0 {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        parse_number(&line)
    }
}

impl<W: Write + ?Sized> OutputPort for W {
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.write_all(bytes)
    }

    fn flush_output(&mut self) -> io::Result<()> {
        self.flush()
    }
}

/// Parses one input line as a decimal integer, ignoring surrounding ASCII whitespace.
pub fn parse_number(line: &[u8]) -> io::Result<i64> {
    let text = std::str::from_utf8(line)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?
        .trim_ascii();
    text.parse::<i64>().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("expected integer, got {text:?}: {e}"),
        )
    })
}
