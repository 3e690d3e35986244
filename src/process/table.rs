// src/process/table.rs

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

static DAY_CONTAINER: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.day_overflow_cont").expect("selector should parse"));
static CHART_TABLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table.chart").expect("selector should parse"));
static HEADER_ROW: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr.chart_header").expect("selector should parse"));
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").expect("selector should parse"));
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").expect("selector should parse"));

/// One chart table, as found on the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    /// Column names from the header row, trimmed, in column order.
    pub headers: Vec<String>,
    /// Each data row as its trimmed cell texts, in row order.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Pair each row's cells with the header names, by position.
    ///
    /// Pairing truncates to the shorter side, so surplus cells or surplus
    /// headers are dropped rather than treated as an error. The page is not
    /// always tidy about trailing columns, and the lenient pairing matches
    /// what it actually serves.
    pub fn records(&self) -> impl Iterator<Item = Vec<(&str, &str)>> + '_ {
        let headers = &self.headers;
        self.rows.iter().map(move |cells| {
            headers
                .iter()
                .map(String::as_str)
                .zip(cells.iter().map(String::as_str))
                .collect()
        })
    }
}

/// Collect the per-day chart tables from the page, in document order.
///
/// Day containers without a chart table are skipped; a page with no
/// containers at all yields an empty vec.
pub fn day_tables(html: &str) -> Vec<RawTable> {
    let document = Html::parse_document(html);
    let tables: Vec<RawTable> = document
        .select(&DAY_CONTAINER)
        .filter_map(|container| container.select(&CHART_TABLE).next())
        .map(parse_table)
        .collect();
    debug!(tables = tables.len(), "located day tables");
    tables
}

/// Parse one chart table into headers and data rows.
///
/// The header row is the first `tr.chart_header`; every other `tr` is data,
/// excluded by node identity so a header row with odd cell contents is never
/// double-counted. Without a header row the field-name sequence is empty.
pub fn parse_table(table: ElementRef<'_>) -> RawTable {
    let header_row = table.select(&HEADER_ROW).next();
    let headers = header_row.map(cell_texts).unwrap_or_default();
    let rows = table
        .select(&ROW)
        .filter(|row| Some(row.id()) != header_row.map(|header| header.id()))
        .map(cell_texts)
        .collect();
    RawTable { headers, rows }
}

fn cell_texts(row: ElementRef<'_>) -> Vec<String> {
    row.select(&CELL)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .collect()
}
