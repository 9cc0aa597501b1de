//! Channel-fed source for concurrent producers.
//!
//! Any number of threads or tokio tasks hold a [`Sender`] and push readings;
//! the dispatcher is the single consumer, so updates reach the store one at
//! a time. The stream ends once every sender has been dropped.

use super::ReadingSource;
use crate::sensors::Reading;
use tokio::sync::mpsc::{self, Receiver, Sender};

pub struct ChannelSource {
    rx: Receiver<Reading>,
}

impl ChannelSource {
    /// Create a source and the sender producers use to feed it.
    pub fn channel(capacity: usize) -> (Sender<Reading>, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        (tx, Self { rx })
    }

    pub fn new(rx: Receiver<Reading>) -> Self {
        Self { rx }
    }
}

impl ReadingSource for ChannelSource {
    /// Blocks the calling thread; do not call from inside an async task.
    fn next_reading(&mut self) -> Option<Reading> {
        self.rx.blocking_recv()
    }
}
