// src/client.rs

use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use tracing::info;

use crate::cache::TtlCache;
use crate::fetch::{HttpSource, PageSource};
use crate::forecast::Forecast;
use crate::process;

/// How long a fetched forecast is served from cache.
pub const FORECAST_TTL: Duration = Duration::from_secs(3600);

/// The one entry point: fetches, extracts and caches the surf forecast.
///
/// A fresh forecast is fetched at most once per [`FORECAST_TTL`]; calls in
/// between are answered from the cache without touching the network.
pub struct WaveScraper<S = HttpSource> {
    source: S,
    cache: TtlCache<Forecast>,
}

impl WaveScraper {
    pub fn new() -> Result<Self> {
        Ok(Self::with_source(
            HttpSource::new()?,
            TtlCache::new(FORECAST_TTL),
        ))
    }
}

impl<S: PageSource> WaveScraper<S> {
    /// Build a scraper over an arbitrary page source and cache. This is how
    /// tests wire in canned pages and a hand-driven clock.
    pub fn with_source(source: S, cache: TtlCache<Forecast>) -> Self {
        Self { source, cache }
    }

    /// The current forecast, cached or fresh.
    pub fn forecast(&self) -> Result<Forecast> {
        self.cache.get_or_refresh(|| self.refresh())
    }

    fn refresh(&self) -> Result<Forecast> {
        let html = self.source.fetch()?;
        let today = Local::now().date_naive();
        let forecast = process::extract(&html, today)?;
        info!(days = forecast.len(), "assembled surf forecast");
        Ok(forecast)
    }
}
