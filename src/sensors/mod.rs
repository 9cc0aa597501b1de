//! Sensor data types.
//!
//! Readings arrive from input sources as [`Reading`] values and are folded
//! into a [`Snapshot`] by the [`SensorStore`](crate::store::SensorStore).

pub mod kind;
pub mod reading;
pub mod snapshot;

pub use kind::SensorKind;
pub use reading::Reading;
pub use snapshot::Snapshot;
