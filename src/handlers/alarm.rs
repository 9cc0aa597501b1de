//! Buzzer control.

use super::SensorHandler;
use super::policy;
use crate::actuator::{ActuatorChannel, Command};
use crate::error::HandlerError;
use crate::sensors::{Reading, Snapshot};
use std::sync::Arc;

/// Sounds the buzzer while any reading is critical.
///
/// Sends exactly one command per notification, whichever kind changed.
pub struct AlarmHandler {
    actuator: Arc<dyn ActuatorChannel>,
}

impl AlarmHandler {
    pub fn new(actuator: Arc<dyn ActuatorChannel>) -> Self {
        Self { actuator }
    }

    /// Buzzer command for the given snapshot.
    pub fn decide(snapshot: &Snapshot) -> Command {
        if policy::is_critical(snapshot) {
            Command::BuzzerOn
        } else {
            Command::BuzzerOff
        }
    }
}

impl SensorHandler for AlarmHandler {
    fn name(&self) -> &str {
        "alarm"
    }

    fn on_update(&self, snapshot: &Snapshot, _changed: &Reading) -> Result<(), HandlerError> {
        self.actuator.send_command(Self::decide(snapshot));
        Ok(())
    }
}
