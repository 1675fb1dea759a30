use anyhow::Result;
use clap::Parser;
use market_data::providers::yahoo_chart::YahooChartProvider;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod cache;
mod cli;
mod config;
mod session;
mod views;

use cache::FetchCache;
use cli::{Cli, Commands};
use config::AppConfig;
use session::Session;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    let symbol = cli.symbol.unwrap_or(config.defaults.symbol);
    let interval = cli.interval.unwrap_or(config.defaults.interval);
    let period = cli.period.unwrap_or(config.defaults.period);
    let mut session = Session::new(symbol, interval, period);

    let provider = YahooChartProvider::new()?;
    let mut cache = FetchCache::new();

    match cli.command {
        Commands::Summary => {
            views::summary::render(&mut session, &mut cache, &provider).await;
        }
        Commands::Performance { window } => {
            views::performance::render(
                &mut session,
                &mut cache,
                &provider,
                window.unwrap_or(config.volatility.window),
                config.volatility.trading_periods,
            )
            .await;
        }
        Commands::Compare { benchmark } => {
            let benchmark = benchmark.unwrap_or(config.defaults.benchmark);
            views::compare::render(&mut session, &mut cache, &provider, &benchmark).await;
        }
    }

    Ok(())
}
