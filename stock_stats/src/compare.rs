//! Two-series comparison on an aligned timestamp axis.
//!
//! Alignment is an inner join on bar timestamps; bars present in only one
//! series are dropped before any arithmetic. Each side is then normalized
//! against its first aligned close, so both percent tracks start at
//! exactly 0% regardless of price level.

use chrono::{DateTime, Utc};
use market_data::PriceSeries;

use crate::errors::StatsError;

/// One symbol's normalized percent-return path over the aligned axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnTrack {
    label: String,
    percent: Vec<f64>,
    final_return: f64,
}

impl ReturnTrack {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Percent return relative to the first aligned close, one value per
    /// aligned timestamp. The first entry is always exactly `0.0`.
    pub fn percent(&self) -> &[f64] {
        &self.percent
    }

    /// The last entry of [`percent`](Self::percent), the cumulative return
    /// over the aligned range.
    pub fn final_return(&self) -> f64 {
        self.final_return
    }
}

/// The result of comparing two series over their shared timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    timestamps: Vec<DateTime<Utc>>,
    left: ReturnTrack,
    right: ReturnTrack,
    correlation: Option<f64>,
}

impl Comparison {
    /// The aligned timestamp axis, ascending. Never empty.
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    pub fn left(&self) -> &ReturnTrack {
        &self.left
    }

    pub fn right(&self) -> &ReturnTrack {
        &self.right
    }

    /// Pearson correlation of the raw aligned closes. `None` when either
    /// side has zero variance, where the coefficient is undefined.
    pub fn correlation(&self) -> Option<f64> {
        self.correlation
    }
}

/// Compares two series over their overlapping timestamps.
///
/// Fails with [`StatsError::NoOverlap`] when the inner join is empty;
/// every statistic below would be undefined on zero rows.
pub fn compare(left: &PriceSeries, right: &PriceSeries) -> Result<Comparison, StatsError> {
    let (timestamps, left_closes, right_closes) = align(left, right);
    if timestamps.is_empty() {
        return Err(StatsError::NoOverlap {
            left: left.symbol().to_string(),
            right: right.symbol().to_string(),
        });
    }

    let correlation = pearson(&left_closes, &right_closes);
    Ok(Comparison {
        timestamps,
        left: percent_track(left.symbol(), &left_closes),
        right: percent_track(right.symbol(), &right_closes),
        correlation,
    })
}

/// Inner join of two sorted series on bar timestamp.
fn align(
    left: &PriceSeries,
    right: &PriceSeries,
) -> (Vec<DateTime<Utc>>, Vec<f64>, Vec<f64>) {
    let left_bars = left.bars();
    let right_bars = right.bars();
    let mut timestamps = Vec::new();
    let mut left_closes = Vec::new();
    let mut right_closes = Vec::new();

    let (mut i, mut j) = (0, 0);
    while i < left_bars.len() && j < right_bars.len() {
        let (a, b) = (&left_bars[i], &right_bars[j]);
        match a.timestamp.cmp(&b.timestamp) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                timestamps.push(a.timestamp);
                left_closes.push(a.close);
                right_closes.push(b.close);
                i += 1;
                j += 1;
            }
        }
    }

    (timestamps, left_closes, right_closes)
}

/// Normalizes closes against their first value and expresses each as a
/// percent return. Caller guarantees `closes` is non-empty.
fn percent_track(label: &str, closes: &[f64]) -> ReturnTrack {
    let first = closes[0];
    let percent: Vec<f64> = closes
        .iter()
        .map(|close| (close / first - 1.0) * 100.0)
        .collect();
    let final_return = *percent.last().unwrap_or(&0.0);
    ReturnTrack {
        label: label.to_string(),
        percent,
        final_return,
    }
}

/// Pearson correlation coefficient, `None` when either side is constant.
fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}
