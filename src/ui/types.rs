use std::sync::{Arc, Mutex};

use chrono::Local;

use crate::snapshot::Ground;

pub const MAX_LOG_LINES: usize = 300;

/// Thread-safe circular log buffer with a maximum capacity.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Appends `msg` prefixed with the local wall-clock time.
    pub fn push(&self, msg: String) {
        let line = format!("{} {}", Local::now().format("%H:%M:%S"), msg);
        let mut buf = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        buf.push(line);
        if buf.len() > MAX_LOG_LINES {
            buf.remove(0);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Input validation status.
#[derive(Debug)]
pub enum InputStatus {
    Incomplete,
    Invalid(&'static str),
    Valid,
}

/// Result of parsing the input line.
#[derive(Debug)]
pub enum ParsedInput {
    Incomplete,
    Invalid,
    Valid(Ground),
}
