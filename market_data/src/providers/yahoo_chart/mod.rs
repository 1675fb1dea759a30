//! Provider for the Yahoo v8 chart API.
//!
//! One GET per request; the response carries the quote columns and the
//! symbol metadata in a single payload, so [`provider::YahooChartProvider`]
//! returns both at once.

pub mod provider;
pub mod response;

pub use provider::YahooChartProvider;
