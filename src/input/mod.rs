//! Reading producers.
//!
//! The dispatcher pulls readings from a [`ReadingSource`] until it reports
//! the end of the stream. Each source type handles one way of receiving
//! readings:
//! - `scripted`: a fixed list, including the demonstration sequence
//! - `line`: newline-delimited text or JSON from any reader (stdin, a file,
//!   a serial line)
//! - `channel`: readings pushed by other threads or tokio tasks

pub mod channel;
pub mod line;
pub mod scripted;

pub use channel::ChannelSource;
pub use line::{LineSource, parse_line};
pub use scripted::ScriptedSource;

use crate::sensors::Reading;

/// Blocking source of readings.
pub trait ReadingSource {
    /// Next reading, or `None` once the stream is exhausted.
    fn next_reading(&mut self) -> Option<Reading>;
}

impl<S: ReadingSource + ?Sized> ReadingSource for Box<S> {
    fn next_reading(&mut self) -> Option<Reading> {
        (**self).next_reading()
    }
}
