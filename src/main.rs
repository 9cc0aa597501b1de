use ambient_hub::Dispatcher;
use ambient_hub::actuator::{ActuatorChannel, ConsoleActuator, SerialActuator};
use ambient_hub::config::{self, ActuatorConfig, Config, InputConfig};
use ambient_hub::console::StdoutConsole;
use ambient_hub::error::Result;
use ambient_hub::handlers::LedRefresh;
use ambient_hub::input::{LineSource, ReadingSource, ScriptedSource};
use clap::Parser;
use log::{debug, error, info, warn};
use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;
use std::time::Duration;

/// Environmental monitoring hub: feeds sensor readings to the display,
/// alarm and LED handlers.
///
/// Flags override the `HUB_*` environment variables, which are read by
/// `Config::from_env`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Reading source: `demo`, `stdin` / `-`, or a file path [HUB_INPUT]
    #[arg(long)]
    input: Option<String>,

    /// Actuator: `console` or a serial device path [HUB_ACTUATOR]
    #[arg(long)]
    actuator: Option<String>,

    /// LED refresh mode: `changed-kind` or `snapshot` [HUB_LED_REFRESH]
    #[arg(long)]
    led_refresh: Option<LedRefresh>,

    /// Prefix display lines with the local time
    #[arg(long)]
    timestamps: bool,
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn build_config(args: Args) -> Config {
    let mut config = Config::from_env();
    if let Some(input) = args.input {
        config.input = InputConfig::parse(&input);
    }
    if let Some(actuator) = args.actuator {
        config.actuator = ActuatorConfig::parse(&actuator);
    }
    if let Some(refresh) = args.led_refresh {
        config.led_refresh = refresh;
    }
    if args.timestamps {
        config.display.timestamps = true;
    }
    config
}

fn build_actuator(config: &ActuatorConfig) -> Result<Arc<dyn ActuatorChannel>> {
    let actuator: Arc<dyn ActuatorChannel> = match config {
        ActuatorConfig::Console => Arc::new(ConsoleActuator::new()),
        ActuatorConfig::Serial(path) => Arc::new(SerialActuator::open(path)?),
    };
    Ok(actuator)
}

fn build_source(config: &InputConfig) -> Result<Box<dyn ReadingSource + Send>> {
    let source: Box<dyn ReadingSource + Send> = match config {
        InputConfig::Demo => Box::new(ScriptedSource::demo()),
        InputConfig::Stdin => Box::new(LineSource::new(BufReader::new(std::io::stdin()))),
        InputConfig::File(path) => Box::new(LineSource::new(BufReader::new(File::open(path)?))),
    };
    Ok(source)
}

fn main() {
    // Environment is mutated here, before the runtime spawns its workers.
    config::load_dotenv();
    let args = Args::parse();
    init_logger();
    info!("Starting environmental monitoring hub");

    let config = build_config(args);
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to start async runtime: {}", e);
            std::process::exit(1);
        }
    };
    runtime.block_on(run(config));
    info!("Environmental monitoring hub stopped");
}

async fn run(config: Config) {
    info!("Configuration loaded:");
    info!("  Input: {:?}", config.input);
    info!("  Actuator: {:?}", config.actuator);
    info!("  LED refresh: {}", config.led_refresh);

    let actuator = match build_actuator(&config.actuator) {
        Ok(a) => a,
        Err(e) => {
            error!("Failed to open actuator: {}", e);
            std::process::exit(1);
        }
    };
    let mut source = match build_source(&config.input) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to open input: {}", e);
            std::process::exit(1);
        }
    };

    let console = Arc::new(StdoutConsole::new(config.display.timestamps));
    let dispatcher = Dispatcher::new(actuator, console, config.led_refresh);
    let store = dispatcher.store().clone();
    let stop = dispatcher.stop_handle();

    // Handlers block inside the store update, so the loop gets its own thread.
    let mut run = tokio::task::spawn_blocking(move || dispatcher.run(&mut source));

    let summary = tokio::select! {
        result = &mut run => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Received shutdown signal");
            stop.stop();
            match tokio::time::timeout(Duration::from_secs(2), &mut run).await {
                Ok(result) => result,
                Err(_) => {
                    warn!("Input still blocked, exiting without waiting for it");
                    std::process::exit(0);
                }
            }
        }
    };

    match summary {
        Ok(summary) => info!(
            "Processed {} reading(s), rejected {}, handler failures {}",
            summary.accepted, summary.rejected, summary.handler_failures
        ),
        Err(e) => error!("Dispatcher thread failed: {}", e),
    }

    match serde_json::to_string(&store.snapshot_all()) {
        Ok(json) => debug!("Final snapshot: {}", json),
        Err(e) => warn!("Failed to serialize final snapshot: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_env_refresh_falls_back_to_default() {
        // SAFETY: this is the only test in the binary that touches the environment
        unsafe { std::env::set_var("HUB_LED_REFRESH", "sometimes") };
        let args = Args::try_parse_from(["ambient-hub"]);
        let config = args.map(build_config);
        unsafe { std::env::remove_var("HUB_LED_REFRESH") };

        let config = config.unwrap();
        assert_eq!(config.led_refresh, LedRefresh::ChangedKind);
    }

    #[test]
    fn test_flags_are_parsed() {
        let args = Args::try_parse_from([
            "ambient-hub",
            "--input",
            "STDIN",
            "--led-refresh",
            "snapshot",
            "--timestamps",
        ])
        .unwrap();
        assert_eq!(args.input.as_deref(), Some("STDIN"));
        assert_eq!(args.led_refresh, Some(LedRefresh::Snapshot));
        assert!(args.timestamps);
        assert!(Args::try_parse_from(["ambient-hub", "--led-refresh", "sometimes"]).is_err());
    }
}
