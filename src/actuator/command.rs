//! Actuator command vocabulary.
//!
//! The string forms are the exact tokens the Arduino firmware matches on.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    BuzzerOn,
    BuzzerOff,
    TempAltaOn,
    TempBaixaOn,
    TempNormal,
    AlertaOn,
    AlertaOff,
    LuzOn,
    LuzOff,
}

impl Command {
    /// Wire token sent to the actuator.
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_wire_tokens() {
        let tokens: Vec<String> = Command::iter().map(|c| c.to_string()).collect();
        assert_eq!(
            tokens,
            [
                "BUZZER_ON",
                "BUZZER_OFF",
                "TEMP_ALTA_ON",
                "TEMP_BAIXA_ON",
                "TEMP_NORMAL",
                "ALERTA_ON",
                "ALERTA_OFF",
                "LUZ_ON",
                "LUZ_OFF",
            ]
        );
    }

    #[test]
    fn test_parse_token() {
        assert_eq!(Command::from_str("TEMP_BAIXA_ON"), Ok(Command::TempBaixaOn));
        assert!(Command::from_str("FAN_ON").is_err());
    }
}
