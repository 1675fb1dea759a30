use std::{num::NonZeroUsize, path::PathBuf};

use clap::{Parser, Subcommand};
use market_data::{Interval, Period};

/// Terminal stock dashboard: recent prices, performance, volatility, and
/// benchmark comparison.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the config file (stockboard.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ticker symbol (e.g. "AAPL"); overrides the configured default
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Bar interval: 1m, 1h, 1d, 1wk, 1mo
    #[arg(short, long)]
    pub interval: Option<Interval>,

    /// Lookback period: 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max
    #[arg(short, long)]
    pub period: Option<Period>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Symbol overview: metadata, recent bars, and close-price dispersion
    Summary,

    /// Annual returns and rolling volatility over the full daily history
    Performance {
        /// Volatility window in trading days
        #[arg(long)]
        window: Option<NonZeroUsize>,
    },

    /// Compare the selected symbol against a benchmark
    Compare {
        /// Benchmark ticker; overrides the configured default
        #[arg(long)]
        benchmark: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_summary_with_overrides() {
        let cli = Cli::try_parse_from([
            "stockboard",
            "--symbol",
            "aapl",
            "--interval",
            "1h",
            "--period",
            "1mo",
            "summary",
        ])
        .unwrap();

        assert_eq!(cli.symbol.as_deref(), Some("aapl"));
        assert_eq!(cli.interval, Some(Interval::Hour));
        assert_eq!(cli.period, Some(Period::OneMonth));
        assert!(matches!(cli.command, Commands::Summary));
    }

    #[test]
    fn parses_performance_window() {
        let cli = Cli::try_parse_from(["stockboard", "performance", "--window", "60"]).unwrap();
        match cli.command {
            Commands::Performance { window } => assert_eq!(window.unwrap().get(), 60),
            _ => panic!("expected performance subcommand"),
        }
    }

    #[test]
    fn rejects_unknown_interval_token() {
        let result = Cli::try_parse_from(["stockboard", "--interval", "2m", "summary"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_zero_volatility_window() {
        let result = Cli::try_parse_from(["stockboard", "performance", "--window", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_compare_benchmark() {
        let cli = Cli::try_parse_from(["stockboard", "compare", "--benchmark", "QQQ"]).unwrap();
        match cli.command {
            Commands::Compare { benchmark } => assert_eq!(benchmark.as_deref(), Some("QQQ")),
            _ => panic!("expected compare subcommand"),
        }
    }
}
