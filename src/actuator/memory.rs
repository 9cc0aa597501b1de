//! In-memory actuator that records every command in order.

use super::{ActuatorChannel, Command};
use parking_lot::Mutex;

/// Records commands instead of executing them. Useful for dry runs.
#[derive(Debug, Default)]
pub struct MemoryActuator {
    sent: Mutex<Vec<Command>>,
}

impl MemoryActuator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands sent so far, oldest first.
    pub fn commands(&self) -> Vec<Command> {
        self.sent.lock().clone()
    }

    /// Remove and return the recorded commands.
    pub fn take(&self) -> Vec<Command> {
        std::mem::take(&mut *self.sent.lock())
    }
}

impl ActuatorChannel for MemoryActuator {
    fn send_command(&self, command: Command) {
        self.sent.lock().push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let actuator = MemoryActuator::new();
        actuator.send_command(Command::LuzOn);
        actuator.send_command(Command::BuzzerOff);
        assert_eq!(actuator.commands(), vec![Command::LuzOn, Command::BuzzerOff]);

        assert_eq!(actuator.take().len(), 2);
        assert!(actuator.commands().is_empty());
    }
}
