//! Canonical in-memory representation of a time-series bar (OHLCV) and the
//! ordered series that groups bars for one symbol.
//!
//! [`PriceSeries`] is the standard output of every
//! [`DataProvider`](crate::providers::DataProvider) implementation and the
//! standard input of the statistics engine. Its bars are strictly increasing
//! by timestamp; the constructor enforces that by sorting and dropping
//! duplicate timestamps, so downstream code can rely on the ordering.

use chrono::{DateTime, Utc};

use crate::models::interval::Interval;

/// A single time-series bar (OHLCV) for a given timestamp.
///
/// Vendor-agnostic; prices are in the security's quote currency.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// The timestamp for this bar (UTC).
    pub timestamp: DateTime<Utc>,

    /// Opening price.
    pub open: f64,

    /// Highest price during the bar interval.
    pub high: f64,

    /// Lowest price during the bar interval.
    pub low: f64,

    /// Closing price.
    pub close: f64,

    /// Volume traded during the bar interval.
    pub volume: u64,
}

impl Bar {
    /// Whether the session closed at or above its open.
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

/// An ordered set of bars for a single symbol at a single sampling interval.
///
/// Invariants held by construction: bars are sorted ascending by timestamp
/// with no duplicate timestamps, and all bars share the series' interval.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    symbol: String,
    interval: Interval,
    bars: Vec<Bar>,
}

impl PriceSeries {
    /// Builds a series from raw bars, sorting by timestamp and keeping the
    /// first bar for any duplicated timestamp.
    pub fn new(symbol: impl Into<String>, interval: Interval, mut bars: Vec<Bar>) -> Self {
        bars.sort_by_key(|bar| bar.timestamp);
        bars.dedup_by_key(|bar| bar.timestamp);
        Self {
            symbol: symbol.into(),
            interval,
            bars,
        }
    }

    /// An empty series for the symbol, the uniform "no usable data" value.
    pub fn empty(symbol: impl Into<String>, interval: Interval) -> Self {
        Self::new(symbol, interval, Vec::new())
    }

    /// The symbol this series represents (e.g. "AAPL").
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The sampling interval shared by every bar.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// The bars, ascending by timestamp.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The closing-price column, in bar order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|bar| bar.close).collect()
    }

    pub fn first_bar(&self) -> Option<&Bar> {
        self.bars.first()
    }

    pub fn last_bar(&self) -> Option<&Bar> {
        self.bars.last()
    }
}
