//! Actuator channels.
//!
//! An [`ActuatorChannel`] realizes [`Command`]s on hardware (or pretends to).
//! One channel is built at startup and shared by every handler through an
//! `Arc<dyn ActuatorChannel>`.
//!
//! Sending is best-effort: a channel never reports a failure back to the
//! caller. Transport errors are logged by the channel itself and any retry
//! policy belongs to the channel.

pub mod command;
pub mod console;
pub mod memory;
pub mod serial;

pub use command::Command;
pub use console::ConsoleActuator;
pub use memory::MemoryActuator;
pub use serial::SerialActuator;

/// Boundary to the device that executes commands.
///
/// Implementations must be safe to call from whichever thread runs the
/// store update. The channels in this module serialize their writes with a
/// mutex, so they also tolerate concurrent callers.
pub trait ActuatorChannel: Send + Sync {
    fn send_command(&self, command: Command);
}
