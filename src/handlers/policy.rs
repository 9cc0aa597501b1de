//! Fixed actuation thresholds.

use crate::sensors::{SensorKind, Snapshot};

/// Temperature above which the environment is too hot (°C, exclusive).
pub const TEMPERATURE_HIGH: f64 = 40.0;

/// Temperature below which the environment is too cold (°C, exclusive).
pub const TEMPERATURE_LOW: f64 = 0.0;

/// Humidity below which the air is critically dry (%, exclusive).
pub const HUMIDITY_LOW: f64 = 20.0;

/// Luminosity above which the room is bright enough to switch the light off (lx, exclusive).
pub const LUMINOSITY_BRIGHT: f64 = 700.0;

/// True when any reading in the snapshot is in a critical range.
pub fn is_critical(snapshot: &Snapshot) -> bool {
    snapshot.iter().any(|reading| match reading.kind() {
        SensorKind::Temperature => reading.value() > TEMPERATURE_HIGH,
        SensorKind::Humidity => reading.value() < HUMIDITY_LOW,
        SensorKind::Luminosity => false,
    })
}
