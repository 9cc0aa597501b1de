//! Sensor reading value object.
//!
//! A [`Reading`] is one observation from one sensor. It cannot be changed
//! after construction; producers build a new one for every observation.

use super::SensorKind;
use crate::error::InvalidReadingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One immutable sensor observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawReading")]
pub struct Reading {
    kind: SensorKind,
    value: f64,
    unit: String,
}

impl Reading {
    /// Create a reading for a known sensor kind.
    ///
    /// The value is not checked here; [`SensorStore::update`] refuses
    /// non-finite values.
    ///
    /// [`SensorStore::update`]: crate::store::SensorStore::update
    pub fn new(kind: SensorKind, value: f64, unit: impl Into<String>) -> Self {
        Self {
            kind,
            value,
            unit: unit.into(),
        }
    }

    /// Create a reading using the kind's default unit.
    pub fn with_default_unit(kind: SensorKind, value: f64) -> Self {
        Self::new(kind, value, kind.default_unit())
    }

    /// Build a reading from an untyped kind name, as received from a transport.
    pub fn parse(
        kind: &str,
        value: f64,
        unit: impl Into<String>,
    ) -> Result<Self, InvalidReadingError> {
        let name = kind.trim();
        let kind = SensorKind::from_str(name)
            .map_err(|_| InvalidReadingError::UnknownKind(name.to_string()))?;
        Ok(Self::new(kind, value, unit))
    }

    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Check that the reading can be stored.
    pub fn validate(&self) -> Result<(), InvalidReadingError> {
        if !self.value.is_finite() {
            return Err(InvalidReadingError::NonFinite {
                kind: self.kind,
                value: self.value,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?} {}", self.kind, self.value, self.unit)
    }
}

/// Wire shape of a reading before the kind name is resolved.
#[derive(Debug, Deserialize)]
struct RawReading {
    kind: String,
    value: f64,
    #[serde(default)]
    unit: Option<String>,
}

impl TryFrom<RawReading> for Reading {
    type Error = InvalidReadingError;

    fn try_from(raw: RawReading) -> Result<Self, Self::Error> {
        let mut reading = Reading::parse(&raw.kind, raw.value, "")?;
        reading.unit = raw
            .unit
            .unwrap_or_else(|| reading.kind.default_unit().to_string());
        Ok(reading)
    }
}
