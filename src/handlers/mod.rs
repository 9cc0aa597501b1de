//! Reactive handlers notified by the [`SensorStore`](crate::store::SensorStore).
//!
//! Each handler receives the full snapshot taken right after an update plus
//! the reading that caused it, and turns that into actuator commands or
//! console output. Handlers are independent of each other: one failing does
//! not stop the others from running.

pub mod alarm;
pub mod display;
pub mod led;
pub mod policy;

pub use alarm::AlarmHandler;
pub use display::DisplayHandler;
pub use led::{LedHandler, LedRefresh};

use crate::error::HandlerError;
use crate::sensors::{Reading, Snapshot};

/// Capability shared by every handler subscribed to the store.
///
/// # Example
/// ```ignore
/// struct Logger;
///
/// impl SensorHandler for Logger {
///     fn name(&self) -> &str {
///         "logger"
///     }
///
///     fn on_update(&self, _snapshot: &Snapshot, changed: &Reading) -> Result<(), HandlerError> {
///         log::info!("{}", changed);
///         Ok(())
///     }
/// }
/// ```
pub trait SensorHandler: Send + Sync {
    /// Short name used in logs and failure reports.
    fn name(&self) -> &str;

    /// React to an accepted reading.
    ///
    /// `snapshot` already contains `changed`. It is a private copy, so the
    /// handler can keep or modify it freely.
    fn on_update(&self, snapshot: &Snapshot, changed: &Reading) -> Result<(), HandlerError>;
}
