//! Call-recording output sink.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// An output sink that records every `write` call in order.
///
/// Clones share the same call log, so a test can keep one handle while the
/// command writes through another.
#[derive(Debug, Clone, Default)]
pub struct RecordingWriter {
    calls: Arc<Mutex<Vec<Vec<u8>>>>,
    fail: bool,
}

impl RecordingWriter {
    /// Creates a sink that accepts every write.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that records each write and then rejects it.
    #[must_use]
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    /// Bytes passed to each `write` call, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<u8>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Each recorded call as text with its line terminator removed.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|call| String::from_utf8_lossy(call).trim_end_matches('\n').to_string())
            .collect()
    }
}

impl Write for RecordingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).push(buf.to_vec());
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "recording sink closed"));
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
