//! # Console Port
//!
//! The single outbound contract of the application. Capabilities and
//! developers never print directly; they hand finished lines to a
//! [`Console`] and the adapter decides where those lines go.

use std::cell::RefCell;

/// Sink for human-readable status lines.
pub trait Console {
    /// Writes one line. Implementations append the line terminator.
    fn line(&self, msg: &str);
}

/// In-memory console that keeps every line in the order it was written.
///
/// Used by tests and by anything that needs to inspect output instead of
/// showing it.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    lines: RefCell<Vec<String>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every line recorded so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Drains the recorded lines, leaving the console empty.
    pub fn take(&self) -> Vec<String> {
        self.lines.take()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl Console for RecordingConsole {
    fn line(&self, msg: &str) {
        self.lines.borrow_mut().push(msg.to_string());
    }
}
