//! Configuration for the `stockboard` binary (`stockboard.toml`).
//!
//! Every field has a default, so an absent file and an empty file both
//! yield a working configuration. CLI flags override whatever the file
//! says.

use std::{num::NonZeroUsize, path::Path};

use anyhow::Context;
use market_data::{Interval, Period};
use serde::Deserialize;

/// Top-level configuration, normally read from `stockboard.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub defaults: Defaults,

    #[serde(default)]
    pub volatility: Volatility,
}

/// Initial selection used when the CLI does not override it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Defaults {
    #[serde(default = "default_symbol")]
    pub symbol: String,

    #[serde(default = "default_interval")]
    pub interval: Interval,

    #[serde(default = "default_period")]
    pub period: Period,

    #[serde(default = "default_symbol")]
    pub benchmark: String,
}

/// Parameters for the rolling-volatility estimate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Volatility {
    #[serde(default = "default_window")]
    pub window: NonZeroUsize,

    #[serde(default = "default_trading_periods")]
    pub trading_periods: u32,
}

fn default_symbol() -> String {
    "SPY".to_string()
}

fn default_interval() -> Interval {
    Interval::Day
}

fn default_period() -> Period {
    Period::YearToDate
}

fn default_window() -> NonZeroUsize {
    NonZeroUsize::new(30).unwrap()
}

fn default_trading_periods() -> u32 {
    252
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            interval: default_interval(),
            period: default_period(),
            benchmark: default_symbol(),
        }
    }
}

impl Default for Volatility {
    fn default() -> Self {
        Self {
            window: default_window(),
            trading_periods: default_trading_periods(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from `path` when given, otherwise from
    /// `stockboard.toml` in the working directory when present, otherwise
    /// returns the built-in defaults.
    ///
    /// An explicitly named file that is missing or malformed is an error;
    /// an absent implicit file is not.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let implicit = Path::new("stockboard.toml");
                if implicit.exists() {
                    Self::from_file(implicit)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}
