//! Universal parameters for requesting a symbol's price history.

use serde::{Deserialize, Serialize};

use crate::models::interval::{Interval, ParamError, Period};

/// Parameters for one history fetch, vendor-agnostic.
///
/// The triple (symbol, period, interval) fully identifies a fetch and is
/// also the memoization key for cached results. Symbols are normalized to
/// uppercase at construction so "spy" and "SPY" name the same request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryRequest {
    /// The ticker symbol to request (e.g. "AAPL").
    pub symbol: String,

    /// How far back to fetch.
    pub period: Period,

    /// The sampling interval for each bar.
    pub interval: Interval,
}

impl HistoryRequest {
    pub fn new(symbol: impl Into<String>, period: Period, interval: Interval) -> Self {
        Self {
            symbol: symbol.into().trim().to_ascii_uppercase(),
            period,
            interval,
        }
    }

    /// Checks the period/interval combination against the fixed table.
    ///
    /// Providers call this before any network traffic; the statistics
    /// engine only ever sees series fetched from validated requests.
    pub fn validate(&self) -> Result<(), ParamError> {
        self.interval.validate_period(self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_is_normalized_to_uppercase() {
        let request = HistoryRequest::new(" spy ", Period::YearToDate, Interval::Day);
        assert_eq!(request.symbol, "SPY");
    }

    #[test]
    fn validate_applies_the_combination_table() {
        let ok = HistoryRequest::new("SPY", Period::YearToDate, Interval::Day);
        assert!(ok.validate().is_ok());

        let bad = HistoryRequest::new("SPY", Period::Max, Interval::Minute);
        assert!(matches!(
            bad.validate(),
            Err(ParamError::InvalidCombination { .. })
        ));
    }

    #[test]
    fn requests_differing_only_by_case_share_a_cache_key() {
        let a = HistoryRequest::new("spy", Period::YearToDate, Interval::Day);
        let b = HistoryRequest::new("SPY", Period::YearToDate, Interval::Day);
        assert_eq!(a, b);
    }
}
