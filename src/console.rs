//! Console sinks for human-readable output.

use chrono::Local;
use parking_lot::Mutex;
use std::io::Write;

/// Destination for display lines.
pub trait ConsoleSink: Send + Sync {
    fn write_line(&self, text: &str);
}

/// Writes lines to stdout, optionally prefixed with the local time.
#[derive(Debug, Default)]
pub struct StdoutConsole {
    timestamps: bool,
}

impl StdoutConsole {
    pub fn new(timestamps: bool) -> Self {
        Self { timestamps }
    }
}

impl ConsoleSink for StdoutConsole {
    fn write_line(&self, text: &str) {
        let mut out = std::io::stdout().lock();
        let result = if self.timestamps {
            writeln!(out, "{} {}", Local::now().format("%H:%M:%S%.3f"), text)
        } else {
            writeln!(out, "{}", text)
        };
        if let Err(e) = result {
            log::warn!("Failed to write to stdout: {}", e);
        }
    }
}

/// Keeps every line in memory.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    lines: Mutex<Vec<String>>,
}

impl MemoryConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }
}

impl ConsoleSink for MemoryConsole {
    fn write_line(&self, text: &str) {
        self.lines.lock().push(text.to_string());
    }
}
