//! Fixed sequence of readings.

use super::ReadingSource;
use crate::sensors::{Reading, SensorKind};
use std::collections::VecDeque;

#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    pending: VecDeque<Reading>,
}

impl ScriptedSource {
    pub fn new(readings: impl IntoIterator<Item = Reading>) -> Self {
        Self {
            pending: readings.into_iter().collect(),
        }
    }

    /// The sequence the hub was demonstrated with: a comfortable room.
    pub fn demo() -> Self {
        Self::new([
            Reading::new(SensorKind::Temperature, 25.0, "C"),
            Reading::new(SensorKind::Humidity, 60.0, "%"),
            Reading::new(SensorKind::Luminosity, 500.0, "lx"),
        ])
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl ReadingSource for ScriptedSource {
    fn next_reading(&mut self) -> Option<Reading> {
        self.pending.pop_front()
    }
}
