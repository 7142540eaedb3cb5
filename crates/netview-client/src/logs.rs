use serde_json::{json, Value};
use std::collections::VecDeque;

/// How many log lines the console keeps.
pub const MAX_LOG_LINES: usize = 50;

/// Rolling view over the controller's log channel.
///
/// The console never holds more than `max_lines` lines; when full, the
/// oldest line is evicted. `current_line` is the subscription cursor: the
/// server sends lines after it, and each ingested batch advances it, so a
/// reconnect resumes where the stream left off.
#[derive(Debug)]
pub struct LogConsole {
    lines: VecDeque<String>,
    max_lines: usize,
    current_line: u64,
}

impl Default for LogConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl LogConsole {
    pub fn new() -> Self {
        Self::with_capacity(MAX_LOG_LINES)
    }

    pub fn with_capacity(max_lines: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(max_lines),
            max_lines,
            current_line: 0,
        }
    }

    /// Append a batch from the channel and advance the cursor.
    pub fn ingest(&mut self, batch: &[String], last_line: u64) {
        for line in batch {
            if self.lines.len() == self.max_lines {
                self.lines.pop_front();
            }
            self.lines.push_back(line.clone());
        }
        self.current_line = last_line;
    }

    /// The subscription payload asking for the next slice of the stream.
    pub fn request(&self) -> Value {
        json!({
            "current_line": self.current_line,
            "max_lines": self.max_lines,
        })
    }

    pub fn join_message(&self) -> Value {
        json!({ "event": "join", "channel": "logs" })
    }

    pub fn leave_message(&self) -> Value {
        json!({ "event": "leave", "channel": "logs" })
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn current_line(&self) -> u64 {
        self.current_line
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
