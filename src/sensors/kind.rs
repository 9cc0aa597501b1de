//! Sensor kinds known to the hub.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The kind of quantity a reading measures.
///
/// Parsing is case-insensitive and also accepts the Portuguese names used by
/// the Arduino firmware (`Temperatura`, `Umidade`, `Luminosidade`).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum SensorKind {
    #[strum(to_string = "Temperature", serialize = "Temperatura")]
    Temperature,
    #[strum(to_string = "Humidity", serialize = "Umidade")]
    Humidity,
    #[strum(to_string = "Luminosity", serialize = "Luminosidade")]
    Luminosity,
}

impl SensorKind {
    /// Unit assumed when a producer does not send one.
    pub const fn default_unit(self) -> &'static str {
        match self {
            SensorKind::Temperature => "C",
            SensorKind::Humidity => "%",
            SensorKind::Luminosity => "lx",
        }
    }
}
