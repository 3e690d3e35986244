// src/lib.rs
pub mod cache;
pub mod client;
pub mod fetch;
pub mod forecast;
pub mod process;

pub use cache::TtlCache;
pub use client::{WaveScraper, FORECAST_TTL};
pub use fetch::{HttpSource, PageSource, FORECAST_URL};
pub use forecast::{DayForecast, Forecast, ForecastEntry};
