use std::io;

use mockall::mock;

mock! {
    /// Byte sink whose writes and flushes are scripted per test.
    pub Sink {}
    impl io::Write for Sink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
        fn flush(&mut self) -> io::Result<()>;
    }
}

mock! {
    /// Byte source whose reads are scripted per test. Wrap it in a
    /// `BufReader` to use it as an input port.
    pub Source {}
    impl io::Read for Source {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
    }
}

/// A sink that accepts every write and counts nothing.
pub fn accepting_sink() -> MockSink {
    let mut sink = MockSink::new();
    let _ = sink.expect_write().returning(|buf| Ok(buf.len()));
    let _ = sink.expect_flush().returning(|| Ok(()));
    sink
}
