//! Line-oriented actuator for the Arduino serial link.
//!
//! Each command is written as its token followed by `\n`. The serial port is
//! expected to be configured (baud rate etc.) outside the hub; the device
//! node is simply opened as a file.

use super::{ActuatorChannel, Command};
use log::{debug, error, info};
use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Writes commands to any byte sink.
///
/// Write failures are logged and dropped; the next command is attempted
/// normally.
pub struct SerialActuator<W: Write + Send> {
    port: Mutex<W>,
    label: String,
}

impl SerialActuator<std::fs::File> {
    /// Open a serial device node (e.g. `/dev/ttyACM0`) for writing.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new().write(true).open(path)?;
        info!("[Actuator] Connected to serial device {}", path.display());
        Ok(Self::new(file, path.display().to_string()))
    }
}

impl<W: Write + Send> SerialActuator<W> {
    pub fn new(port: W, label: impl Into<String>) -> Self {
        Self {
            port: Mutex::new(port),
            label: label.into(),
        }
    }

    /// Consume the actuator and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.port.into_inner()
    }
}

impl<W: Write + Send> ActuatorChannel for SerialActuator<W> {
    fn send_command(&self, command: Command) {
        let mut port = self.port.lock();
        match write_line(&mut *port, command.as_str()) {
            Ok(()) => debug!("[Actuator] {} <- {}", self.label, command),
            Err(e) => error!("[Actuator] Failed to send {} to {}: {}", command, self.label, e),
        }
    }
}

fn write_line<W: Write>(port: &mut W, token: &str) -> io::Result<()> {
    port.write_all(token.as_bytes())?;
    port.write_all(b"\n")?;
    port.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPort;

    impl Write for BrokenPort {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "unplugged"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_newline_terminated_tokens() {
        let actuator = SerialActuator::new(Vec::new(), "buffer");
        actuator.send_command(Command::BuzzerOn);
        actuator.send_command(Command::TempNormal);

        let written = String::from_utf8(actuator.into_inner()).unwrap();
        assert_eq!(written, "BUZZER_ON\nTEMP_NORMAL\n");
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let actuator = SerialActuator::new(BrokenPort, "broken");
        actuator.send_command(Command::AlertaOn);
        actuator.send_command(Command::AlertaOff);
    }
}
