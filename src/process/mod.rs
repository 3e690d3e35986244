// src/process/mod.rs

pub mod normalize;
pub mod table;
pub mod translate;

pub use table::{day_tables, parse_table, RawTable};

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};
use tracing::instrument;

use crate::forecast::{DayForecast, Forecast, ForecastEntry};
use normalize::normalize_value;
use translate::translate_field;

/// Header of the column holding each row's time slot. The page leaves the
/// leftmost header cell blank, so the hour column is keyed by the empty
/// string. This is a fixed property of the source markup, not derived from
/// field translation.
pub const HOUR_COLUMN: &str = "";

/// Parse the page markup and assemble the forecast, dating the first table
/// `start` and each following table one day later.
#[instrument(level = "debug", skip(html))]
pub fn extract(html: &str, start: NaiveDate) -> Result<Forecast> {
    assemble(day_tables(html), start)
}

/// Assemble parsed day tables into the final date-keyed forecast.
pub fn assemble(tables: Vec<RawTable>, start: NaiveDate) -> Result<Forecast> {
    let mut forecast = Forecast::default();
    for (offset, table) in tables.iter().enumerate() {
        let date = start + Days::new(offset as u64);
        let mut day = DayForecast::new();
        for record in table.records() {
            let hour = record
                .iter()
                .find(|(field, _)| *field == HOUR_COLUMN)
                .map(|(_, value)| value.to_string())
                .with_context(|| format!("row without hour column in table for {date}"))?;

            let mut entry = ForecastEntry::new();
            for (field, value) in record {
                if field == HOUR_COLUMN {
                    continue;
                }
                let name = translate_field(field);
                if name.is_empty() {
                    continue;
                }
                entry.insert(name.to_string(), normalize_value(field, value));
            }
            day.insert(hour, entry);
        }
        forecast.days.insert(date, day);
    }
    Ok(forecast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    fn wave_table(height: &str) -> RawTable {
        table(&["", "גלים"], &[&["06:00", height]])
    }

    #[test]
    fn test_one_date_per_table_in_sequence() {
        let tables = vec![wave_table("1.0"), wave_table("1.1"), wave_table("1.2")];
        let forecast = assemble(tables, start()).unwrap();

        let dates: Vec<_> = forecast.days.keys().copied().collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
                NaiveDate::from_ymd_opt(2026, 8, 8).unwrap(),
                NaiveDate::from_ymd_opt(2026, 8, 9).unwrap(),
            ]
        );
        assert_eq!(forecast.len(), 3);
    }

    #[test]
    fn test_rows_become_hour_keyed_entries() {
        let tables = vec![table(
            &["", "גלים", "רוח", "סוואל"],
            &[
                &["06:00", "1.2 מ׳", "15 קמ״ש", "2 S"],
                &["09:00", "קטן", "21 NW", "1"],
            ],
        )];
        let forecast = assemble(tables, start()).unwrap();
        let day = forecast.day(start()).unwrap();

        assert_eq!(day.len(), 2);
        let six = &day["06:00"];
        assert_eq!(six["Waves"], "1.2");
        assert_eq!(six["Wind"], "15");
        assert_eq!(six["Swell"], "2S");
        let nine = &day["09:00"];
        assert_eq!(nine["Waves"], "קטן");
        assert_eq!(nine["Wind"], "21NW");
    }

    #[test]
    fn test_unit_only_fields_are_dropped() {
        let tables = vec![table(
            &["", "גלים", "קמ״ש", "ס״מ", "שניות"],
            &[&["06:00", "1.2", "x", "y", "z"]],
        )];
        let forecast = assemble(tables, start()).unwrap();
        let entry = &forecast.day(start()).unwrap()["06:00"];

        assert_eq!(entry.keys().collect::<Vec<_>>(), vec!["Waves"]);
    }

    #[test]
    fn test_unknown_fields_survive_untranslated() {
        let tables = vec![table(&["", "visibility"], &[&["06:00", "good stuff"]])];
        let forecast = assemble(tables, start()).unwrap();
        let entry = &forecast.day(start()).unwrap()["06:00"];

        assert_eq!(entry["visibility"], "good");
    }

    #[test]
    fn test_row_without_hour_column_is_an_error() {
        let tables = vec![table(&["גלים"], &[&["1.2"]])];
        let err = assemble(tables, start()).unwrap_err();
        assert!(err.to_string().contains("hour column"));
    }

    #[test]
    fn test_empty_input_yields_empty_forecast() {
        let forecast = assemble(Vec::new(), start()).unwrap();
        assert!(forecast.is_empty());
    }

    #[test]
    fn test_extract_end_to_end() {
        let html = "<!DOCTYPE html><html><body>\
            <div class=\"day_overflow_cont\"><table class=\"chart\">\
              <tr class=\"chart_header\"><td></td><td>גלים</td><td>רוח</td></tr>\
              <tr><td>06:00</td><td>1.2 מ׳</td><td>15 קמ״ש</td></tr>\
            </table></div>\
            <div class=\"day_overflow_cont\"><table class=\"chart\">\
              <tr class=\"chart_header\"><td></td><td>גלים</td><td>רוח</td></tr>\
              <tr><td>06:00</td><td>0.8 מ׳</td><td>8 W</td></tr>\
            </table></div>\
            </body></html>";
        let forecast = extract(html, start()).unwrap();

        assert_eq!(forecast.len(), 2);
        let today = &forecast.day(start()).unwrap()["06:00"];
        assert_eq!(today["Waves"], "1.2");
        assert_eq!(today["Wind"], "15");
        let tomorrow = forecast
            .day(NaiveDate::from_ymd_opt(2026, 8, 8).unwrap())
            .unwrap();
        assert_eq!(tomorrow["06:00"]["Wind"], "8W");
    }
}
