use async_trait::async_trait;
use chrono::DateTime;
use reqwest::{Client, header};
use tracing::{debug, warn};

use crate::{
    models::{
        bar::{Bar, PriceSeries},
        request::HistoryRequest,
        symbol_info::SymbolInfo,
    },
    providers::{
        DataProvider, FetchedHistory, ProviderError, ProviderInitError,
        yahoo_chart::response::{ChartResponse, ChartResult, QuoteColumns},
    },
};

const BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

// The chart endpoint rejects requests without a browser-like user agent.
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

pub struct YahooChartProvider {
    client: Client,
}

impl YahooChartProvider {
    /// Creates a new Yahoo chart provider.
    ///
    /// The endpoint is unauthenticated; the client only needs its default
    /// headers set once.
    pub fn new() -> Result<Self, ProviderInitError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, header::HeaderValue::from_static(USER_AGENT));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl DataProvider for YahooChartProvider {
    async fn fetch_history(
        &self,
        request: &HistoryRequest,
    ) -> Result<FetchedHistory, ProviderError> {
        request.validate()?;

        let url = format!("{BASE_URL}/{}", request.symbol);
        let query = [
            ("range", request.period.as_str()),
            ("interval", request.interval.as_str()),
            ("events", "div,splits"),
        ];

        debug!(symbol = %request.symbol, period = %request.period, interval = %request.interval, "fetching history");

        let response = self.client.get(&url).query(&query).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown API error".to_string());
            return Err(ProviderError::Api(api_error_message(status, &body)));
        }

        let decoded = response.json::<ChartResponse>().await?;

        if let Some(error) = decoded.chart.error {
            return Err(ProviderError::Api(format!(
                "{}: {}",
                error.code, error.description
            )));
        }

        let result = decoded
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| ProviderError::Api("empty chart result".to_string()))?;

        let info = symbol_info(&result);
        let bars = collect_bars(&result);
        if bars.is_empty() {
            debug!(symbol = %request.symbol, "no usable rows in chart result");
        }

        Ok(FetchedHistory {
            series: PriceSeries::new(request.symbol.clone(), request.interval, bars),
            info,
        })
    }
}

/// Prefers the body-level chart error description over the raw body, since
/// Yahoo sends the structured error alongside 4xx statuses.
fn api_error_message(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ChartResponse>(body) {
        Ok(decoded) => match decoded.chart.error {
            Some(error) => format!("{}: {}", error.code, error.description),
            None => format!("HTTP {status}"),
        },
        Err(_) => format!("HTTP {status}: {body}"),
    }
}

/// Assembles bars from the parallel quote columns, dropping any row with a
/// missing field.
fn collect_bars(result: &ChartResult) -> Vec<Bar> {
    let Some(timestamps) = result.timestamp.as_ref() else {
        return Vec::new();
    };
    let Some(quote) = result.indicators.quote.first() else {
        return Vec::new();
    };

    let mut bars = Vec::with_capacity(timestamps.len());
    for (idx, &secs) in timestamps.iter().enumerate() {
        let row = (
            column_value(&quote.open, idx),
            column_value(&quote.high, idx),
            column_value(&quote.low, idx),
            column_value(&quote.close, idx),
            column_value(&quote.volume, idx),
            DateTime::from_timestamp(secs, 0),
        );
        let (Some(open), Some(high), Some(low), Some(close), Some(volume), Some(timestamp)) = row
        else {
            warn!(index = idx, "dropping bar with missing quote fields");
            continue;
        };
        bars.push(Bar {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        });
    }
    bars
}

fn column_value<T: Copy>(column: &Option<Vec<Option<T>>>, idx: usize) -> Option<T> {
    column.as_ref()?.get(idx).copied().flatten()
}

fn symbol_info(result: &ChartResult) -> SymbolInfo {
    let meta = &result.meta;
    SymbolInfo {
        symbol: meta.symbol.clone(),
        currency: meta.currency.clone(),
        exchange: meta.exchange_name.clone(),
        instrument_type: meta.instrument_type.clone(),
        short_name: meta.short_name.clone(),
        long_name: meta.long_name.clone(),
        regular_market_price: meta.regular_market_price,
        fifty_two_week_high: meta.fifty_two_week_high,
        fifty_two_week_low: meta.fifty_two_week_low,
        timezone: meta.timezone.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(payload: &str) -> ChartResult {
        let decoded: ChartResponse = serde_json::from_str(payload).unwrap();
        decoded.chart.result.unwrap().into_iter().next().unwrap()
    }

    #[test]
    fn collect_bars_skips_null_rows() {
        let result = decode(
            r#"{
            "chart": {
                "result": [{
                    "meta": { "symbol": "SPY" },
                    "timestamp": [100, 200, 300],
                    "indicators": {
                        "quote": [{
                            "open": [1.0, null, 3.0],
                            "high": [1.5, 2.5, 3.5],
                            "low": [0.5, 1.5, 2.5],
                            "close": [1.2, 2.2, 3.2],
                            "volume": [10, 20, 30]
                        }]
                    }
                }],
                "error": null
            }
        }"#,
        );

        let bars = collect_bars(&result);
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].close, 1.2);
        assert_eq!(bars[1].close, 3.2);
        assert_eq!(bars[1].volume, 30);
    }

    #[test]
    fn collect_bars_handles_missing_columns() {
        let result = decode(
            r#"{
            "chart": {
                "result": [{
                    "meta": { "symbol": "SPY" },
                    "indicators": { "quote": [] }
                }],
                "error": null
            }
        }"#,
        );
        assert!(collect_bars(&result).is_empty());
    }

    #[test]
    fn symbol_info_is_read_from_meta() {
        let result = decode(
            r#"{
            "chart": {
                "result": [{
                    "meta": {
                        "symbol": "SPY",
                        "currency": "USD",
                        "exchangeName": "PCX",
                        "shortName": "SPDR S&P 500",
                        "regularMarketPrice": 443.5
                    },
                    "indicators": { "quote": [] }
                }],
                "error": null
            }
        }"#,
        );
        let info = symbol_info(&result);
        assert_eq!(info.symbol, "SPY");
        assert_eq!(info.display_name(), "SPDR S&P 500");
        assert_eq!(info.regular_market_price, Some(443.5));
    }

    #[test]
    fn api_error_message_prefers_structured_error() {
        let body = r#"{
            "chart": {
                "result": null,
                "error": { "code": "Not Found", "description": "No data found" }
            }
        }"#;
        let message = api_error_message(reqwest::StatusCode::NOT_FOUND, body);
        assert_eq!(message, "Not Found: No data found");

        let fallback = api_error_message(reqwest::StatusCode::NOT_FOUND, "oops");
        assert!(fallback.starts_with("HTTP 404"));
    }
}
