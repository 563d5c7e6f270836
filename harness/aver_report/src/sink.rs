//! Output sink for assertion diagnostics.
//!
//! Diagnostic lines can be directed to different destinations:
//! - stdout for interactive runs
//! - a capture buffer, so the harness's own tests can assert on output
//! - nowhere, when a run wants the accumulator without the noise
//!
//! Enum dispatch keeps the per-assertion write path free of vtable
//! indirection. The sink renders text with no additional framing; callers
//! hand it complete fragments or lines.

use parking_lot::Mutex;
use std::sync::Arc;

/// Sink that writes to stdout.
#[derive(Default)]
pub struct StdoutSink;

impl StdoutSink {
    /// Write a fragment without a newline.
    pub fn print(&self, text: &str) {
        print!("{text}");
    }

    /// Write a line.
    pub fn println(&self, text: &str) {
        println!("{text}");
    }

    /// Captured output. Stdout does not capture; always empty.
    pub fn captured(&self) -> String {
        String::new()
    }

    /// Drop captured output. No-op for stdout.
    pub fn clear(&self) {}
}

/// Sink that captures output into a buffer.
pub struct BufferSink {
    buffer: Mutex<String>,
}

impl BufferSink {
    /// An empty capture buffer.
    pub fn new() -> Self {
        BufferSink {
            buffer: Mutex::new(String::new()),
        }
    }

    /// Append a fragment without a newline.
    pub fn print(&self, text: &str) {
        self.buffer.lock().push_str(text);
    }

    /// Append a line.
    pub fn println(&self, text: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(text);
        buf.push('\n');
    }

    /// Everything captured so far.
    pub fn captured(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Drop captured output.
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Default for BufferSink {
    fn default() -> Self {
        Self::new()
    }
}

/// An output destination, enum-dispatched.
pub enum SinkImpl {
    /// Writes to stdout.
    Stdout(StdoutSink),
    /// Captures into a buffer.
    Buffer(BufferSink),
    /// Discards everything.
    Silent,
}

impl SinkImpl {
    /// Write a fragment without a newline.
    pub fn print(&self, text: &str) {
        match self {
            SinkImpl::Stdout(s) => s.print(text),
            SinkImpl::Buffer(s) => s.print(text),
            SinkImpl::Silent => {}
        }
    }

    /// Write a line.
    pub fn println(&self, text: &str) {
        match self {
            SinkImpl::Stdout(s) => s.println(text),
            SinkImpl::Buffer(s) => s.println(text),
            SinkImpl::Silent => {}
        }
    }

    /// Captured output; empty for destinations that do not capture.
    pub fn captured(&self) -> String {
        match self {
            SinkImpl::Stdout(s) => s.captured(),
            SinkImpl::Buffer(s) => s.captured(),
            SinkImpl::Silent => String::new(),
        }
    }

    /// Drop captured output.
    pub fn clear(&self) {
        match self {
            SinkImpl::Stdout(s) => s.clear(),
            SinkImpl::Buffer(s) => s.clear(),
            SinkImpl::Silent => {}
        }
    }
}

/// Shared handle to a sink.
pub type SharedSink = Arc<SinkImpl>;

/// A stdout sink.
pub fn stdout_sink() -> SharedSink {
    Arc::new(SinkImpl::Stdout(StdoutSink))
}

/// A capturing sink for tests.
pub fn buffer_sink() -> SharedSink {
    Arc::new(SinkImpl::Buffer(BufferSink::new()))
}

/// A sink that discards all output.
pub fn silent_sink() -> SharedSink {
    Arc::new(SinkImpl::Silent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_println_appends_a_newline() {
        let sink = BufferSink::new();
        sink.println("pass");
        assert_eq!(sink.captured(), "pass\n");
    }

    #[test]
    fn buffer_print_appends_raw_fragments() {
        let sink = BufferSink::new();
        sink.print("Assertion ");
        sink.print("failed");
        assert_eq!(sink.captured(), "Assertion failed");
    }

    #[test]
    fn buffer_clear_empties_the_capture() {
        let sink = BufferSink::new();
        sink.println("line");
        sink.clear();
        assert!(sink.captured().is_empty());
    }

    #[test]
    fn silent_sink_discards_everything() {
        let sink = silent_sink();
        sink.print("gone");
        sink.println("also gone");
        assert_eq!(sink.captured(), "");
    }

    #[test]
    fn stdout_sink_reports_no_capture() {
        let sink = StdoutSink;
        assert_eq!(sink.captured(), "");
        sink.clear();
    }

    #[test]
    fn shared_buffer_observes_writes_through_clones() {
        let sink = buffer_sink();
        let observer = Arc::clone(&sink);
        sink.println("shared");
        assert_eq!(observer.captured(), "shared\n");
    }
}
