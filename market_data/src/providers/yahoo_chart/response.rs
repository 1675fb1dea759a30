//! Serde models for the Yahoo v8 chart payload.
//!
//! Only the fields the accessor consumes are modeled; everything else in
//! the payload is ignored. Quote columns are parallel arrays aligned with
//! `timestamp`, and individual entries may be `null` for halted or partial
//! sessions.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

/// Body-level error block Yahoo returns for unknown symbols or rejected
/// ranges (often alongside a non-2xx status).
#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    pub meta: ChartMeta,
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteColumns>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuoteColumns {
    #[serde(default)]
    pub open: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub high: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub low: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub close: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub volume: Option<Vec<Option<u64>>>,
}

#[derive(Debug, Deserialize)]
pub struct ChartMeta {
    pub symbol: String,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, rename = "exchangeName")]
    pub exchange_name: Option<String>,
    #[serde(default, rename = "instrumentType")]
    pub instrument_type: Option<String>,
    #[serde(default, rename = "shortName")]
    pub short_name: Option<String>,
    #[serde(default, rename = "longName")]
    pub long_name: Option<String>,
    #[serde(default, rename = "regularMarketPrice")]
    pub regular_market_price: Option<f64>,
    #[serde(default, rename = "fiftyTwoWeekHigh")]
    pub fifty_two_week_high: Option<f64>,
    #[serde(default, rename = "fiftyTwoWeekLow")]
    pub fifty_two_week_low: Option<f64>,
    #[serde(default, rename = "exchangeTimezoneName")]
    pub timezone: Option<String>,
}
