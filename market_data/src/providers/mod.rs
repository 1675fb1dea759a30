//! Provider abstraction for market data sources.
//!
//! This module defines the [`DataProvider`] trait, a unified interface for
//! fetching a symbol's price history from any market data vendor. Each
//! concrete implementation (such as the Yahoo chart provider) handles
//! vendor-specific request construction, response decoding, and validation.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn DataProvider`) so callers can select a provider at runtime and
//! tests can substitute mocks.

pub mod yahoo_chart;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    bar::PriceSeries, interval::ParamError, request::HistoryRequest, symbol_info::SymbolInfo,
};

/// The result of one successful history fetch: the series plus the
/// auxiliary symbol metadata the same response carries.
///
/// An empty `series` is a valid outcome (unknown symbol, no sessions in
/// range); callers treat it and a fetch error uniformly as "no usable
/// data".
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedHistory {
    pub series: PriceSeries,
    pub info: SymbolInfo,
}

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Error)]
pub enum ProviderInitError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

/// Errors that can occur within a `DataProvider` implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout,
    /// undecodable body).
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider's API returned a specific error message (e.g., unknown
    /// symbol, rejected range).
    #[error("API error: {0}")]
    Api(String),

    /// The request parameters were invalid for this provider.
    #[error("invalid request parameters: {0}")]
    Validation(#[from] ParamError),
}

/// Trait for fetching a symbol's price history from a market data vendor.
#[async_trait]
pub trait DataProvider {
    /// Fetches the history described by `request`.
    ///
    /// Implementations validate the request before any network call and
    /// return an empty series (not an error) when the provider simply has
    /// no rows for the symbol/range.
    async fn fetch_history(&self, request: &HistoryRequest)
    -> Result<FetchedHistory, ProviderError>;
}
