//! In-memory sink

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// A writer that keeps everything in memory
///
/// Clones share the same buffer, so one clone can be handed to a logger
/// while another is used to inspect what was written. Useful for tests and
/// for embedding log output in another surface.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written lines, without their terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_shared_buffer() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        let mut writer = sink.clone();
        writer.write_all(b"one\ntwo\n").unwrap();

        assert_eq!(sink.contents(), "one\ntwo\n");
        assert_eq!(sink.lines(), vec!["one", "two"]);

        sink.clear();
        assert!(writer.clone().is_empty());
    }
}
