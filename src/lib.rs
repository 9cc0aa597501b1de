//! Environmental monitoring hub.
//!
//! Sensor readings (temperature, humidity, luminosity) flow from an input
//! source into a [`SensorStore`](store::SensorStore), which keeps the latest
//! reading per kind and notifies the display, alarm and LED handlers. The
//! handlers turn the current snapshot into commands for an
//! [`ActuatorChannel`](actuator::ActuatorChannel).

pub mod actuator;
pub mod config;
pub mod console;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod input;
pub mod sensors;
pub mod store;

pub use dispatcher::{Dispatcher, RunSummary, StopHandle};
pub use error::{HandlerError, HubError, InvalidReadingError, Result};
pub use sensors::{Reading, SensorKind, Snapshot};
pub use store::{SensorStore, UpdateReport};
