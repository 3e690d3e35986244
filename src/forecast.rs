// src/forecast.rs

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Date keys are rendered `DD/MM/YYYY`, the format the downstream
/// consumers already expect.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Conditions at one hour of one day: canonical field name → normalized value.
pub type ForecastEntry = BTreeMap<String, String>;

/// One day of hourly conditions, keyed by the verbatim hour label ("06:00").
pub type DayForecast = BTreeMap<String, ForecastEntry>;

/// A full multi-day forecast, one entry per day table found on the page.
///
/// Keys are consecutive calendar dates starting at the date of the fetch.
/// Serializes as `{"07/08/2026": {"06:00": {"Waves": "1.2", ...}, ...}, ...}`
/// with the dates in chronological order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    pub days: BTreeMap<NaiveDate, DayForecast>,
}

impl Forecast {
    /// Number of days covered.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayForecast> {
        self.days.get(&date)
    }
}

impl Serialize for Forecast {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (date, day) in &self.days {
            map.serialize_entry(&date.format(DATE_FORMAT).to_string(), day)?;
        }
        map.end()
    }
}
