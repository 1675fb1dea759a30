//! Auxiliary descriptive metadata returned alongside a history fetch.

/// Descriptive fields for a symbol, as reported by the provider.
///
/// This is presentation material only; the statistics engine never reads
/// it. Providers fill in whatever subset they know, leaving the rest
/// `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolInfo {
    pub symbol: String,
    pub currency: Option<String>,
    pub exchange: Option<String>,
    pub instrument_type: Option<String>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub regular_market_price: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub timezone: Option<String>,
}

impl SymbolInfo {
    /// The best available human-readable name, falling back to the symbol.
    pub fn display_name(&self) -> &str {
        self.long_name
            .as_deref()
            .or(self.short_name.as_deref())
            .unwrap_or(&self.symbol)
    }
}
