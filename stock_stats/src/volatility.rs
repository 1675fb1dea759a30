//! Rolling historical volatility from daily log returns.
//!
//! The estimate follows the usual construction: per-bar log returns
//! `ln(close[i] / close[i-1])`, a trailing-window sample standard
//! deviation (divide by n−1), annualized by `sqrt(trading_periods)`.
//! The first `window` output positions have no full window and are
//! dropped, so the result is front-truncated by `window` entries relative
//! to the source series.

use std::num::NonZeroUsize;

use chrono::{DateTime, Utc};
use market_data::PriceSeries;

/// One rolling-volatility observation, aligned to the source bar whose
/// trailing window it closes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolatilityPoint {
    pub timestamp: DateTime<Utc>,
    /// Annualized volatility; non-negative by construction.
    pub value: f64,
}

/// An ordered rolling-volatility series on the source series' timestamp
/// axis.
#[derive(Debug, Clone, PartialEq)]
pub struct VolatilitySeries {
    window: usize,
    trading_periods: u32,
    points: Vec<VolatilityPoint>,
}

impl VolatilitySeries {
    /// The trailing window size the series was computed with.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Trading periods per year used for annualization.
    pub fn trading_periods(&self) -> u32 {
        self.trading_periods
    }

    pub fn points(&self) -> &[VolatilityPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Empty means the source had insufficient data for even one full
    /// window; callers treat this as "insufficient data", not an error.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recent annualized volatility, surfaced separately for
    /// display as a reference value. `None` when the series is empty.
    pub fn latest(&self) -> Option<f64> {
        self.points.last().map(|point| point.value)
    }
}

/// Computes rolling annualized volatility over a daily-sampled series.
///
/// Returns an empty series when the input has fewer than `window + 1`
/// bars (not enough log returns for one full window) or when `window`
/// is 1 (a single-sample standard deviation is undefined).
pub fn rolling_volatility(
    series: &PriceSeries,
    window: NonZeroUsize,
    trading_periods: u32,
) -> VolatilitySeries {
    let window = window.get();
    let bars = series.bars();
    let mut points = Vec::new();

    if window >= 2 && bars.len() > window {
        let log_returns: Vec<f64> = bars
            .windows(2)
            .map(|pair| (pair[1].close / pair[0].close).ln())
            .collect();
        let annualize = (trading_periods as f64).sqrt();

        // log_returns[k] belongs to bars[k + 1]; the window ending at
        // return index end - 1 therefore closes at bars[end].
        for end in window..=log_returns.len() {
            let value = sample_std(&log_returns[end - window..end]) * annualize;
            points.push(VolatilityPoint {
                timestamp: bars[end].timestamp,
                value,
            });
        }
    }

    VolatilitySeries {
        window,
        trading_periods,
        points,
    }
}

/// Sample standard deviation (divide by n−1). Caller guarantees n ≥ 2.
fn sample_std(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sumsq_dev = values
        .iter()
        .map(|value| {
            let dev = value - mean;
            dev * dev
        })
        .sum::<f64>();
    (sumsq_dev / (n - 1.0)).sqrt()
}
