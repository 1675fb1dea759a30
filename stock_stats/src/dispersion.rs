//! Dispersion of the closing-price column.

use market_data::PriceSeries;

/// Population standard deviation and variance of a series' closes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dispersion {
    pub std_dev: f64,
    /// Always `std_dev` squared exactly, never independently estimated.
    pub variance: f64,
}

impl Dispersion {
    const ZERO: Dispersion = Dispersion {
        std_dev: 0.0,
        variance: 0.0,
    };
}

/// Computes population dispersion (divide by N, not N−1) over the close
/// column.
///
/// An empty series is a valid, inert input and yields `(0.0, 0.0)` rather
/// than an error.
pub fn dispersion(series: &PriceSeries) -> Dispersion {
    let closes = series.closes();
    if closes.is_empty() {
        return Dispersion::ZERO;
    }

    let n = closes.len() as f64;
    let mean = closes.iter().sum::<f64>() / n;
    let sumsq_dev = closes
        .iter()
        .map(|close| {
            let dev = close - mean;
            dev * dev
        })
        .sum::<f64>();

    let std_dev = (sumsq_dev / n).sqrt();
    Dispersion {
        std_dev,
        variance: std_dev * std_dev,
    }
}
