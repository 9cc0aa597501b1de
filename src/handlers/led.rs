//! LED indicator control.
//!
//! Three indicators are driven from the snapshot:
//! - temperature LEDs: `TEMP_ALTA_ON` above 40 °C, `TEMP_BAIXA_ON` below 0 °C,
//!   `TEMP_NORMAL` otherwise (the high check wins)
//! - general alert LED: `ALERTA_ON` / `ALERTA_OFF`, same rule as the buzzer
//! - light: `LUZ_OFF` above 700 lx, `LUZ_ON` otherwise
//!
//! Commands are sent in that order. The alert LED is refreshed on every
//! notification; when the temperature and light indicators are refreshed
//! depends on [`LedRefresh`].

use super::SensorHandler;
use super::policy::{self, LUMINOSITY_BRIGHT, TEMPERATURE_HIGH, TEMPERATURE_LOW};
use crate::actuator::{ActuatorChannel, Command};
use crate::error::HandlerError;
use crate::sensors::{Reading, SensorKind, Snapshot};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum::{Display, EnumString};

/// When the temperature and light indicators are re-sent.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum LedRefresh {
    /// Only the indicator of the kind that just changed (plus the alert LED).
    #[default]
    ChangedKind,
    /// Every indicator whose kind is present in the snapshot.
    Snapshot,
}

pub struct LedHandler {
    actuator: Arc<dyn ActuatorChannel>,
    refresh: LedRefresh,
}

impl LedHandler {
    pub fn new(actuator: Arc<dyn ActuatorChannel>) -> Self {
        Self::with_refresh(actuator, LedRefresh::default())
    }

    pub fn with_refresh(actuator: Arc<dyn ActuatorChannel>, refresh: LedRefresh) -> Self {
        Self { actuator, refresh }
    }

    pub fn refresh(&self) -> LedRefresh {
        self.refresh
    }

    /// Commands for one notification, in sending order.
    pub fn decide(refresh: LedRefresh, snapshot: &Snapshot, changed: &Reading) -> Vec<Command> {
        let applies = |kind: SensorKind| match refresh {
            LedRefresh::ChangedKind => changed.kind() == kind,
            LedRefresh::Snapshot => true,
        };
        let mut commands = Vec::with_capacity(3);

        if applies(SensorKind::Temperature)
            && let Some(celsius) = snapshot.value(SensorKind::Temperature)
        {
            commands.push(temperature_command(celsius));
        }

        commands.push(if policy::is_critical(snapshot) {
            Command::AlertaOn
        } else {
            Command::AlertaOff
        });

        if applies(SensorKind::Luminosity)
            && let Some(lux) = snapshot.value(SensorKind::Luminosity)
        {
            commands.push(if lux > LUMINOSITY_BRIGHT {
                Command::LuzOff
            } else {
                Command::LuzOn
            });
        }

        commands
    }
}

fn temperature_command(celsius: f64) -> Command {
    if celsius > TEMPERATURE_HIGH {
        Command::TempAltaOn
    } else if celsius < TEMPERATURE_LOW {
        Command::TempBaixaOn
    } else {
        Command::TempNormal
    }
}

impl SensorHandler for LedHandler {
    fn name(&self) -> &str {
        "led"
    }

    fn on_update(&self, snapshot: &Snapshot, changed: &Reading) -> Result<(), HandlerError> {
        for command in Self::decide(self.refresh, snapshot, changed) {
            self.actuator.send_command(command);
        }
        Ok(())
    }
}
