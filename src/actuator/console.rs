//! Actuator that only reports commands in the log.
//!
//! Used when no serial device is configured, mirroring what the firmware
//! would receive.

use super::{ActuatorChannel, Command};
use log::info;

#[derive(Debug, Default)]
pub struct ConsoleActuator;

impl ConsoleActuator {
    pub fn new() -> Self {
        Self
    }
}

impl ActuatorChannel for ConsoleActuator {
    fn send_command(&self, command: Command) {
        info!("[Actuator] sending: {}", command);
    }
}
