use thiserror::Error as ThisError;

use crate::sensors::SensorKind;

/// Reasons a reading is refused before it reaches the store.
#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum InvalidReadingError {
    #[error("Unknown sensor kind: {0}")]
    UnknownKind(String),

    #[error("Non-finite value {value} for {kind} reading")]
    NonFinite { kind: SensorKind, value: f64 },

    #[error("Malformed reading line: {0}")]
    Malformed(String),
}

/// Failure raised by a single handler while reacting to an update.
#[derive(ThisError, Debug, Clone, PartialEq)]
pub enum HandlerError {
    #[error("Handler failed: {0}")]
    Failed(String),

    #[error("Handler panicked: {0}")]
    Panicked(String),
}

#[derive(ThisError, Debug)]
pub enum HubError {
    #[error(transparent)]
    InvalidReading(#[from] InvalidReadingError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HubError>;
