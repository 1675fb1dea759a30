//! Descriptive statistics over ordered price series.
//!
//! Pure functions that turn a [`market_data::PriceSeries`] into derived
//! metrics: dispersion of the close column, rolling annualized volatility,
//! per-year annualized returns, and two-series comparison (normalized
//! percent returns + Pearson correlation).
//!
//! Edge-case policy, uniform across the crate:
//! - Empty input where a defined inert result exists (dispersion, annual
//!   table) yields that result, never an error.
//! - Data shorter than a required window (volatility window, 30-bar year
//!   minimum) is omitted from the output, never an error.
//! - Data-availability failures the caller must see (no overlapping
//!   timestamps in a comparison) are typed errors, never silent NaNs.

pub mod annual;
pub mod compare;
pub mod dispersion;
pub mod errors;
pub mod volatility;

pub use annual::{AnnualReturnTable, annual_returns};
pub use compare::{Comparison, ReturnTrack, compare};
pub use dispersion::{Dispersion, dispersion};
pub use errors::StatsError;
pub use volatility::{VolatilityPoint, VolatilitySeries, rolling_volatility};
