//! Binary for the `weather` tool: look up current conditions for a city
//! via WeatherAPI.com and print a short glyph-prefixed report.

use std::process::ExitCode;

use clap::Parser;

use skypixel_cli::report;
use skypixel_core::{Config, provider};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Simple weather CLI (WeatherAPI.com)")]
struct Cli {
    /// City name to get the weather for.
    #[arg(long)]
    city: String,

    /// API key override; falls back to WEATHERAPI_KEY, then the config file.
    #[arg(long)]
    key: Option<String>,

    /// Persist the resolved API key to the config file.
    #[arg(long)]
    store_key: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    skypixel_cli::init_tracing();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", report::format_error(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    if cli.store_key {
        config.api_key = Some(config.resolve_api_key(cli.key.clone())?);
        config.save()?;
    }

    let provider = provider::provider_from_config(&config, cli.key)?;
    let weather = provider.current(&cli.city).await?;

    println!("{}", report::format_report(&weather));
    Ok(())
}
