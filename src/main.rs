//! localweather - CLI entry point
//!
//! Fetches current conditions for a coordinate and prints a report, either
//! once or periodically in watch mode. Settings come from a YAML config
//! file, with flags overriding individual values.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use localweather::common::format;
use localweather::{Config, Station, TemperatureUnit, VERSION};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "localweather")]
#[command(version = VERSION)]
#[command(about = "Fetch current weather conditions for a coordinate")]
struct Args {
    /// Path to configuration file
    #[arg(short = 'c', long = "config", default_value = "config.yaml")]
    config: PathBuf,

    /// Latitude of the location
    #[arg(long = "lat", allow_negative_numbers = true)]
    lat: f64,

    /// Longitude of the location
    #[arg(long = "lon", allow_negative_numbers = true)]
    lon: f64,

    /// Temperature unit for display (overrides config)
    #[arg(long = "units")]
    units: Option<TemperatureUnit>,

    /// API key (overrides config)
    #[arg(long = "api-key")]
    api_key: Option<String>,

    /// API base URL (overrides config)
    #[arg(long = "base-url")]
    base_url: Option<String>,

    /// Refresh on the configured interval instead of fetching once
    #[arg(short = 'w', long = "watch")]
    watch: bool,

    /// Print the conditions as JSON instead of a report
    #[arg(long = "json")]
    json: bool,

    /// Test configuration and exit
    #[arg(short = 't', long = "test")]
    test: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut args = Args::parse();

    // Load configuration; a missing file means defaults
    let mut config = if args.config.exists() {
        Config::load(args.config.to_str().unwrap_or("config.yaml"))?
    } else {
        Config::default()
    };

    // Apply CLI overrides
    if let Some(base_url) = args.base_url.take() {
        config.api_base_url = base_url;
    }

    if let Some(api_key) = args.api_key.take() {
        config.api_key = Some(api_key);
    }

    if let Some(units) = args.units {
        config.units = units;
    }

    config.validate()?;

    // Initialize logging; the env filter wins over the configured level
    let directive = format!(
        "localweather={}",
        config.log_level.as_deref().unwrap_or("info")
    );
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(directive.parse()?),
        )
        .init();

    info!("localweather v{}", VERSION);

    // Test mode
    if args.test {
        info!("Configuration test passed");
        return Ok(());
    }

    info!(
        "Location: ({}, {})",
        format::format_number(args.lat, 4),
        format::format_number(args.lon, 4)
    );

    let units = config.units;
    let station = Arc::new(Station::new(config)?);

    if args.watch {
        run_watch(station, args.lat, args.lon, units, args.json).await?;
    } else {
        match station.fetch_current(args.lat, args.lon).await {
            Ok(data) => print_conditions(&data, units, args.json)?,
            Err(e) => {
                error!("Fetch failed: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Refresh periodically, printing every new snapshot until ctrl-c
async fn run_watch(
    station: Arc<Station>,
    lat: f64,
    lon: f64,
    units: TemperatureUnit,
    json: bool,
) -> anyhow::Result<()> {
    let mut rx = station.subscribe();

    let printer = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let snapshot = rx.borrow_and_update().clone();
            if let Some(snapshot) = snapshot {
                println!("[{}]", snapshot.fetched_at.format("%Y-%m-%dT%H:%M:%SZ"));
                if let Err(e) = print_conditions(&snapshot.data, units, json) {
                    error!("Print failed: {}", e);
                }
                println!();
            }
        }
    });

    station.run(lat, lon).await?;
    printer.abort();

    Ok(())
}

fn print_conditions(
    data: &localweather::WeatherData,
    units: TemperatureUnit,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(data)?);
    } else {
        println!("{}", format::format_report(data, units));
    }
    Ok(())
}
