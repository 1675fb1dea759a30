//! Typed per-run context: the current selection and the data loaded for
//! it.
//!
//! The selection is the (symbol, interval, period) triple every view reads.
//! Loaded series are tied to the selection that produced them; changing any
//! part of the selection clears them so no view can render data for a stale
//! symbol or range.

use market_data::{HistoryRequest, Interval, Period, PriceSeries, SymbolInfo};

#[derive(Debug, Clone)]
pub struct Session {
    symbol: String,
    interval: Interval,
    period: Period,
    relative: Option<PriceSeries>,
    daily_max: Option<PriceSeries>,
    info: Option<SymbolInfo>,
}

impl Session {
    /// Starts a session with the given selection.
    ///
    /// A period that is not valid for the interval falls back to the
    /// interval's default, mirroring how the selection widget resets.
    pub fn new(symbol: impl Into<String>, interval: Interval, period: Period) -> Self {
        let period = if interval.validate_period(period).is_ok() {
            period
        } else {
            interval.default_period()
        };
        Self {
            symbol: symbol.into().trim().to_ascii_uppercase(),
            interval,
            period,
            relative: None,
            daily_max: None,
            info: None,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// Replaces the selection, clearing loaded data if anything changed.
    pub fn set_selection(&mut self, symbol: impl Into<String>, interval: Interval, period: Period) {
        let next = Session::new(symbol, interval, period);
        let changed = next.symbol != self.symbol
            || next.interval != self.interval
            || next.period != self.period;
        self.symbol = next.symbol;
        self.interval = next.interval;
        self.period = next.period;
        if changed {
            self.relative = None;
            self.daily_max = None;
            self.info = None;
        }
    }

    /// The fetch request for the selection's own range.
    pub fn relative_request(&self) -> HistoryRequest {
        HistoryRequest::new(self.symbol.clone(), self.period, self.interval)
    }

    /// The fetch request for the symbol's full daily history, which the
    /// annual-performance and volatility views need regardless of the
    /// selected range.
    pub fn daily_max_request(&self) -> HistoryRequest {
        HistoryRequest::new(self.symbol.clone(), Period::Max, Interval::Day)
    }

    pub fn relative(&self) -> Option<&PriceSeries> {
        self.relative.as_ref()
    }

    pub fn daily_max(&self) -> Option<&PriceSeries> {
        self.daily_max.as_ref()
    }

    pub fn info(&self) -> Option<&SymbolInfo> {
        self.info.as_ref()
    }

    pub fn store_relative(&mut self, series: PriceSeries) {
        self.relative = Some(series);
    }

    pub fn store_daily_max(&mut self, series: PriceSeries) {
        self.daily_max = Some(series);
    }

    pub fn store_info(&mut self, info: SymbolInfo) {
        self.info = Some(info);
    }
}
