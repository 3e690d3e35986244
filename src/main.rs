// src/main.rs

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use wavescraper::{WaveScraper, FORECAST_URL};

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    info!("fetching surf forecast from {}", FORECAST_URL);
    let scraper = WaveScraper::new()?;
    let forecast = scraper.forecast()?;
    println!("{}", serde_json::to_string_pretty(&forecast)?);
    Ok(())
}
