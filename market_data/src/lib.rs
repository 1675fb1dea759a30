//! Time-series accessor for historical stock price/volume data.
//!
//! This crate defines the canonical in-memory models (bars, price series,
//! sampling intervals, lookback periods, symbol metadata), the
//! [`DataProvider`] trait that abstracts over data vendors, and a concrete
//! provider for the Yahoo chart API.

pub mod models;
pub mod providers;

pub use models::bar::{Bar, PriceSeries};
pub use models::interval::{Interval, ParamError, Period};
pub use models::request::HistoryRequest;
pub use models::symbol_info::SymbolInfo;
pub use providers::{DataProvider, FetchedHistory, ProviderError, ProviderInitError};
