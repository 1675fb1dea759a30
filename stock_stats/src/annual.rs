//! Per-calendar-year annualized returns.
//!
//! The series is partitioned by the calendar year (UTC) of each bar's
//! timestamp; since the series is ordered, each partition is a contiguous
//! run. Years with fewer than [`MIN_BARS_PER_YEAR`] bars are omitted from
//! the output.

use chrono::Datelike;
use indexmap::IndexMap;
use market_data::PriceSeries;

/// Years with fewer bars than this are not meaningful and are skipped.
pub const MIN_BARS_PER_YEAR: usize = 30;

/// A partition at least this many bars long is treated as a complete
/// year; annualizing it geometrically would only amplify compounding
/// error near the boundary.
const FULL_YEAR_BARS: usize = 360;

const DAYS_PER_YEAR: f64 = 365.0;

/// Calendar year → annualized percentage return, in chronological order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnualReturnTable {
    returns: IndexMap<i32, f64>,
}

impl AnnualReturnTable {
    /// The annualized percentage return for `year`, if it qualified.
    pub fn get(&self, year: i32) -> Option<f64> {
        self.returns.get(&year).copied()
    }

    /// (year, percent return) pairs in chronological insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.returns.iter().map(|(&year, &value)| (year, value))
    }

    pub fn len(&self) -> usize {
        self.returns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }
}

/// Builds the annual return table for a daily-sampled series.
///
/// Within a year partition, `start` is the first close and `end` the last
/// (the series is already sorted ascending). A partition of `n` bars with
/// `total = end / start` reports `total − 1` when `n ≥ 360`, otherwise the
/// geometric annualization `total^(365/n) − 1`, both as percentages.
pub fn annual_returns(series: &PriceSeries) -> AnnualReturnTable {
    let bars = series.bars();
    let mut returns = IndexMap::new();

    let mut start = 0;
    while start < bars.len() {
        let year = bars[start].timestamp.year();
        let mut end = start;
        while end < bars.len() && bars[end].timestamp.year() == year {
            end += 1;
        }
        let partition = &bars[start..end];
        start = end;

        if partition.len() < MIN_BARS_PER_YEAR {
            continue;
        }

        let n = partition.len();
        let total_return = partition[n - 1].close / partition[0].close;
        let annualized = if n >= FULL_YEAR_BARS {
            total_return - 1.0
        } else {
            total_return.powf(DAYS_PER_YEAR / n as f64) - 1.0
        };
        returns.insert(year, annualized * 100.0);
    }

    AnnualReturnTable { returns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use market_data::{Bar, Interval};

    /// `count` daily bars starting January 1 of `year`, with closes taken
    /// from the iterator in order.
    fn year_bars(year: i32, count: usize, mut close_at: impl FnMut(usize) -> f64) -> Vec<Bar> {
        let first = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap();
        (0..count)
            .map(|idx| {
                let close = close_at(idx);
                Bar {
                    timestamp: first + chrono::Duration::days(idx as i64),
                    open: close,
                    high: close,
                    low: close,
                    close,
                    volume: 1,
                }
            })
            .collect()
    }

    #[test]
    fn empty_series_yields_empty_table() {
        let table = annual_returns(&PriceSeries::empty("TEST", Interval::Day));
        assert!(table.is_empty());
    }

    #[test]
    fn years_with_fewer_than_30_bars_are_skipped() {
        let mut bars = year_bars(2020, 29, |_| 100.0);
        bars.extend(year_bars(2021, 40, |idx| 100.0 + idx as f64));
        let table = annual_returns(&PriceSeries::new("TEST", Interval::Day, bars));

        assert!(table.get(2020).is_none());
        assert!(table.get(2021).is_some());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn complete_year_reports_simple_return() {
        // 365 bars from 100 to 200: n >= 360, so no annualization.
        let bars = year_bars(2020, 365, |idx| 100.0 + 100.0 * idx as f64 / 364.0);
        let table = annual_returns(&PriceSeries::new("TEST", Interval::Day, bars));

        let value = table.get(2020).unwrap();
        assert!((value - 100.0).abs() < 1e-9);
    }

    #[test]
    fn partial_year_is_annualized_geometrically() {
        // 100 bars doubling from 100 to 200: (2.0)^(365/100) - 1.
        let bars = year_bars(2021, 100, |idx| 100.0 + 100.0 * idx as f64 / 99.0);
        let table = annual_returns(&PriceSeries::new("TEST", Interval::Day, bars));

        let expected = (2.0f64.powf(365.0 / 100.0) - 1.0) * 100.0;
        let value = table.get(2021).unwrap();
        assert!((value - expected).abs() < 1e-9);
    }

    #[test]
    fn years_appear_in_chronological_order() {
        let mut bars = year_bars(2019, 365, |_| 100.0);
        bars.extend(year_bars(2020, 366, |_| 100.0));
        bars.extend(year_bars(2021, 365, |_| 100.0));
        let table = annual_returns(&PriceSeries::new("TEST", Interval::Day, bars));

        let years: Vec<i32> = table.iter().map(|(year, _)| year).collect();
        assert_eq!(years, vec![2019, 2020, 2021]);
    }

    #[test]
    fn flat_year_reports_zero_return() {
        let bars = year_bars(2020, 365, |_| 50.0);
        let table = annual_returns(&PriceSeries::new("TEST", Interval::Day, bars));
        assert!(table.get(2020).unwrap().abs() < 1e-12);
    }

    #[test]
    fn losing_year_reports_negative_return() {
        let bars = year_bars(2020, 365, |idx| 100.0 - 50.0 * idx as f64 / 364.0);
        let table = annual_returns(&PriceSeries::new("TEST", Interval::Day, bars));
        let value = table.get(2020).unwrap();
        assert!((value + 50.0).abs() < 1e-9);
    }
}
