//! Newline-delimited reading feed.
//!
//! Accepts two line formats, which may be mixed:
//!
//! ```text
//! Temperature 25.0 C
//! Umidade: 60 %
//! {"kind":"Luminosity","value":500.0,"unit":"lx"}
//! ```
//!
//! The unit is optional and defaults to the kind's usual unit. Blank lines
//! and lines starting with `#` are ignored. Lines that cannot be parsed are
//! logged and skipped; the stream only ends at EOF or on a read error.

use super::ReadingSource;
use crate::error::InvalidReadingError;
use crate::sensors::Reading;
use log::{error, warn};
use std::io::BufRead;

/// Parse one line. `Ok(None)` means the line carries no reading.
pub fn parse_line(line: &str) -> Result<Option<Reading>, InvalidReadingError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    if line.starts_with('{') {
        return serde_json::from_str::<Reading>(line)
            .map(Some)
            .map_err(|e| InvalidReadingError::Malformed(e.to_string()));
    }

    let mut fields = line.split_whitespace();
    let (Some(kind), Some(value)) = (fields.next(), fields.next()) else {
        return Err(InvalidReadingError::Malformed(line.to_string()));
    };
    let kind = kind.trim_end_matches(':');
    let value: f64 = value
        .parse()
        .map_err(|_| InvalidReadingError::Malformed(line.to_string()))?;

    let unit = fields.next();
    if fields.next().is_some() {
        return Err(InvalidReadingError::Malformed(line.to_string()));
    }

    let reading = match unit {
        Some(unit) => Reading::parse(kind, value, unit)?,
        None => {
            let parsed = Reading::parse(kind, value, "")?;
            Reading::with_default_unit(parsed.kind(), value)
        }
    };
    Ok(Some(reading))
}

pub struct LineSource<R: BufRead> {
    reader: R,
    line_number: usize,
    skipped: usize,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_number: 0,
            skipped: 0,
        }
    }

    /// Lines rejected so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<R: BufRead> ReadingSource for LineSource<R> {
    fn next_reading(&mut self) -> Option<Reading> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => self.line_number += 1,
                Err(e) => {
                    error!("[Input] Read failed after line {}: {}", self.line_number, e);
                    return None;
                }
            }

            match parse_line(&line) {
                Ok(Some(reading)) => return Some(reading),
                Ok(None) => {}
                Err(e) => {
                    self.skipped += 1;
                    warn!("[Input] Skipping line {}: {}", self.line_number, e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::SensorKind;
    use std::io::Cursor;

    #[test]
    fn test_parse_plain_line() {
        let reading = parse_line("Temperatura 25.0 C").unwrap().unwrap();
        assert_eq!(reading, Reading::new(SensorKind::Temperature, 25.0, "C"));

        let reading = parse_line("Humidity: 61.5").unwrap().unwrap();
        assert_eq!(reading, Reading::new(SensorKind::Humidity, 61.5, "%"));
    }

    #[test]
    fn test_parse_json_line() {
        let reading = parse_line(r#"{"kind":"Luminosidade","value":701,"unit":"lx"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(reading, Reading::new(SensorKind::Luminosity, 701.0, "lx"));
    }

    #[test]
    fn test_parse_rejects_bad_lines() {
        assert_eq!(
            parse_line("Pressure 1013 hPa"),
            Err(InvalidReadingError::UnknownKind("Pressure".into()))
        );
        assert!(matches!(
            parse_line("Temperature warm"),
            Err(InvalidReadingError::Malformed(_))
        ));
        assert!(matches!(
            parse_line("Temperature"),
            Err(InvalidReadingError::Malformed(_))
        ));
        assert_eq!(
            parse_line("Temperature 25 C junk"),
            Err(InvalidReadingError::Malformed("Temperature 25 C junk".into()))
        );
        assert_eq!(parse_line("   "), Ok(None));
        assert_eq!(parse_line("# calibration run"), Ok(None));
    }

    #[test]
    fn test_source_skips_invalid_lines() {
        let input = "Temperature 25 C\nbogus line\n\nHumidity 60 %\nWind 3 m/s\nHumidity 61 % extra\nLuminosity 500 lx\n";
        let mut source = LineSource::new(Cursor::new(input));

        let values: Vec<f64> = std::iter::from_fn(|| source.next_reading())
            .map(|r| r.value())
            .collect();

        assert_eq!(values, [25.0, 60.0, 500.0]);
        assert_eq!(source.skipped(), 3);
    }
}
