// src/fetch.rs

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

/// The forecast page we scrape.
pub const FORECAST_URL: &str = "https://gosurf.co.il/forecast/tel-aviv";

/// Anything that can produce the raw markup of the forecast page.
///
/// The HTTP implementation below is the only one used outside of tests;
/// tests substitute canned pages and count how often they are asked.
pub trait PageSource {
    fn fetch(&self) -> Result<String>;
}

/// Fetches the forecast page over HTTP with a blocking client.
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    pub fn new() -> Result<Self> {
        Self::with_url(FORECAST_URL)
    }

    /// Point the source at a different page (e.g. another beach).
    pub fn with_url(url: &str) -> Result<Self> {
        let url = Url::parse(url).with_context(|| format!("invalid forecast URL {url}"))?;
        let client = Client::builder().build().context("building HTTP client")?;
        Ok(Self { client, url })
    }
}

impl PageSource for HttpSource {
    fn fetch(&self) -> Result<String> {
        let body = self
            .client
            .get(self.url.clone())
            .send()
            .with_context(|| format!("GET {}", self.url))?
            .error_for_status()?
            .text()
            .with_context(|| format!("reading body from {}", self.url))?;
        debug!(bytes = body.len(), "fetched forecast page");
        Ok(body)
    }
}
