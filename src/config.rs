use crate::handlers::LedRefresh;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Load environment variables from a `.env` file in the working directory.
/// Values may contain spaces without quotes; variables already set win.
pub fn load_dotenv() {
    let env_path = Path::new(".env");
    if !env_path.exists() {
        return;
    }

    let content = match fs::read_to_string(env_path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Ignoring unreadable .env file: {}", e);
            return;
        }
    };

    for (key, value) in parse_dotenv(&content) {
        if std::env::var(key).is_err() {
            // SAFETY: called from main before the runtime or any other thread starts
            unsafe { std::env::set_var(key, value) };
        }
    }
}

fn parse_dotenv(content: &str) -> Vec<(&str, &str)> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let (key, value) = line.split_once('=')?;
            let mut value = value.trim();
            if value.len() >= 2
                && ((value.starts_with('"') && value.ends_with('"'))
                    || (value.starts_with('\'') && value.ends_with('\'')))
            {
                value = &value[1..value.len() - 1];
            }
            Some((key.trim(), value))
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    pub actuator: ActuatorConfig,
    pub display: DisplayConfig,
    pub led_refresh: LedRefresh,
}

/// Where readings come from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputConfig {
    /// The built-in three-reading demonstration.
    #[default]
    Demo,
    /// Line feed on standard input.
    Stdin,
    /// Line feed from a file or device node.
    File(PathBuf),
}

impl InputConfig {
    /// `demo`, `stdin` (or `-`), anything else is a path. Keywords are
    /// case-insensitive.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("demo") {
            InputConfig::Demo
        } else if value.eq_ignore_ascii_case("stdin") || value == "-" {
            InputConfig::Stdin
        } else {
            InputConfig::File(PathBuf::from(value))
        }
    }
}

/// Where commands go.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActuatorConfig {
    /// Commands are only logged.
    #[default]
    Console,
    /// Commands are written to a serial device node.
    Serial(PathBuf),
}

impl ActuatorConfig {
    /// `console` (any case), anything else is a serial device path.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("console") {
            ActuatorConfig::Console
        } else {
            ActuatorConfig::Serial(PathBuf::from(value))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Prefix display lines with the local time.
    pub timestamps: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key lookup, starting from defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(input) = lookup("HUB_INPUT") {
            config.input = InputConfig::parse(&input);
        }
        if let Some(actuator) = lookup("HUB_ACTUATOR") {
            config.actuator = ActuatorConfig::parse(&actuator);
        }
        if let Some(refresh) = lookup("HUB_LED_REFRESH") {
            match refresh.parse::<LedRefresh>() {
                Ok(r) => config.led_refresh = r,
                Err(_) => warn!("Ignoring unknown HUB_LED_REFRESH value: {}", refresh),
            }
        }
        if let Some(timestamps) = lookup("HUB_DISPLAY_TIMESTAMPS") {
            match timestamps.trim().to_ascii_lowercase().parse::<bool>() {
                Ok(t) => config.display.timestamps = t,
                Err(_) => warn!(
                    "Ignoring invalid HUB_DISPLAY_TIMESTAMPS value: {}",
                    timestamps
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.input, InputConfig::Demo);
        assert_eq!(config.actuator, ActuatorConfig::Console);
        assert_eq!(config.led_refresh, LedRefresh::ChangedKind);
    }

    #[test]
    fn test_variables_override_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("HUB_INPUT", "-"),
            ("HUB_ACTUATOR", "/dev/ttyACM0"),
            ("HUB_LED_REFRESH", "snapshot"),
            ("HUB_DISPLAY_TIMESTAMPS", "true"),
        ]));
        assert_eq!(config.input, InputConfig::Stdin);
        assert_eq!(
            config.actuator,
            ActuatorConfig::Serial(PathBuf::from("/dev/ttyACM0"))
        );
        assert_eq!(config.led_refresh, LedRefresh::Snapshot);
        assert!(config.display.timestamps);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("HUB_LED_REFRESH", "sometimes"),
            ("HUB_DISPLAY_TIMESTAMPS", "yes please"),
        ]));
        assert_eq!(config.led_refresh, LedRefresh::ChangedKind);
        assert!(!config.display.timestamps);
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        assert_eq!(InputConfig::parse("Demo"), InputConfig::Demo);
        assert_eq!(InputConfig::parse(" STDIN "), InputConfig::Stdin);
        assert_eq!(
            InputConfig::parse("Readings.txt"),
            InputConfig::File(PathBuf::from("Readings.txt"))
        );
        assert_eq!(ActuatorConfig::parse("CONSOLE"), ActuatorConfig::Console);

        let config = Config::from_lookup(lookup(&[("HUB_DISPLAY_TIMESTAMPS", "TRUE")]));
        assert!(config.display.timestamps);
    }

    #[test]
    fn test_parse_dotenv() {
        let content = "# hub settings\nHUB_INPUT = readings.txt\n\nHUB_ACTUATOR=\"/dev/tty USB0\"\nnot a pair\n";
        assert_eq!(
            parse_dotenv(content),
            vec![("HUB_INPUT", "readings.txt"), ("HUB_ACTUATOR", "/dev/tty USB0")]
        );
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = Config {
            input: InputConfig::File(PathBuf::from("feed.jsonl")),
            ..Config::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<Config>(&json).unwrap(), config);
    }
}
