//! Annual returns and rolling volatility over the full daily history.

use std::num::NonZeroUsize;

use comfy_table::{Cell, ContentArrangement, Table, presets::UTF8_FULL};
use market_data::DataProvider;
use stock_stats::{annual_returns, rolling_volatility};
use tracing::warn;

use crate::{
    cache::FetchCache,
    session::Session,
    views::{format_timestamp, signed_percent},
};

/// Trailing volatility points shown under the latest reference value.
const RECENT_POINTS: usize = 5;

pub async fn render(
    session: &mut Session,
    cache: &mut FetchCache,
    provider: &dyn DataProvider,
    window: NonZeroUsize,
    trading_periods: u32,
) {
    let request = session.daily_max_request();
    let fetched = match cache.get_or_fetch(provider, &request).await {
        Ok(fetched) => fetched,
        Err(err) => {
            warn!(symbol = %request.symbol, error = %err, "history fetch failed");
            eprintln!("Could not fetch data for '{}': {err}", request.symbol);
            return;
        }
    };

    if fetched.series.is_empty() {
        eprintln!("Not enough data to calculate annual performance.");
        return;
    }
    session.store_daily_max(fetched.series.clone());
    let series = &fetched.series;

    println!(
        "{} | full daily history, {} bars | volatility window {} days",
        session.symbol(),
        series.len(),
        window
    );

    let table = annual_returns(series);
    if table.is_empty() {
        eprintln!("Not enough data to calculate annual performance.");
    } else {
        let mut out = Table::new();
        out.load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["Year", "Annualized return"]);
        for (year, percent) in table.iter() {
            out.add_row(vec![
                Cell::new(year.to_string()),
                Cell::new(signed_percent(percent)),
            ]);
        }
        println!("\nAnnual performance:");
        println!("{out}");
    }

    let volatility = rolling_volatility(series, window, trading_periods);
    match volatility.latest() {
        None => {
            eprintln!("Not enough data for a {window}-day volatility window.");
        }
        Some(latest) => {
            println!(
                "\nHistorical volatility (annualized, {trading_periods} periods/yr): latest {:.2}%",
                latest * 100.0
            );

            let points = volatility.points();
            let start = points.len().saturating_sub(RECENT_POINTS);
            let mut out = Table::new();
            out.load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["Date", "Volatility"]);
            for point in &points[start..] {
                out.add_row(vec![
                    Cell::new(format_timestamp(point.timestamp, series.interval())),
                    Cell::new(format!("{:.2}%", point.value * 100.0)),
                ]);
            }
            println!("{out}");
        }
    }
}
