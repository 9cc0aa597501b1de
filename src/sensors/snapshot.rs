//! Latest-reading-per-kind view.

use super::{Reading, SensorKind};
use serde::Serialize;
use std::collections::BTreeMap;

/// The most recent reading for each sensor kind.
///
/// Holds at most one reading per kind; inserting a reading of a kind that is
/// already present replaces it. A `Snapshot` handed out by the store is an
/// owned copy, so changing it never touches the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    readings: BTreeMap<SensorKind, Reading>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a reading, returning the one it replaced.
    pub fn insert(&mut self, reading: Reading) -> Option<Reading> {
        self.readings.insert(reading.kind(), reading)
    }

    pub fn get(&self, kind: SensorKind) -> Option<&Reading> {
        self.readings.get(&kind)
    }

    /// Value of the latest reading of `kind`, if any was observed.
    pub fn value(&self, kind: SensorKind) -> Option<f64> {
        self.get(kind).map(Reading::value)
    }

    pub fn contains(&self, kind: SensorKind) -> bool {
        self.readings.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.values()
    }
}

impl FromIterator<Reading> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Reading>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        for reading in iter {
            snapshot.insert(reading);
        }
        snapshot
    }
}
