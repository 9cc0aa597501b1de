//! Prints each incoming reading.

use super::SensorHandler;
use crate::console::ConsoleSink;
use crate::error::HandlerError;
use crate::sensors::{Reading, Snapshot};
use std::sync::Arc;

/// Writes one line per notification describing the reading that changed.
pub struct DisplayHandler {
    console: Arc<dyn ConsoleSink>,
}

impl DisplayHandler {
    pub fn new(console: Arc<dyn ConsoleSink>) -> Self {
        Self { console }
    }

    pub fn format_line(reading: &Reading) -> String {
        format!("[Reading] {}", reading)
    }
}

impl SensorHandler for DisplayHandler {
    fn name(&self) -> &str {
        "display"
    }

    fn on_update(&self, _snapshot: &Snapshot, changed: &Reading) -> Result<(), HandlerError> {
        self.console.write_line(&Self::format_line(changed));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MemoryConsole;
    use crate::sensors::SensorKind;

    #[test]
    fn test_prints_only_changed_reading() {
        let console = Arc::new(MemoryConsole::new());
        let handler = DisplayHandler::new(console.clone());
        let temp = Reading::new(SensorKind::Temperature, 25.0, "C");
        let humidity = Reading::new(SensorKind::Humidity, 60.0, "%");
        let snapshot: Snapshot = [temp.clone(), humidity.clone()].into_iter().collect();

        handler.on_update(&snapshot, &humidity).unwrap();

        assert_eq!(console.lines(), vec!["[Reading] Humidity: 60.0 %".to_string()]);
    }

    #[test]
    fn test_value_is_not_rounded() {
        let console = Arc::new(MemoryConsole::new());
        let handler = DisplayHandler::new(console.clone());
        let dry = Reading::new(SensorKind::Humidity, 19.96, "%");
        let snapshot: Snapshot = [dry.clone()].into_iter().collect();

        handler.on_update(&snapshot, &dry).unwrap();

        assert!(crate::handlers::policy::is_critical(&snapshot));
        assert_eq!(console.lines(), vec!["[Reading] Humidity: 19.96 %".to_string()]);
    }
}
