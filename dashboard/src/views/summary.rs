//! Symbol overview: metadata header, recent bars, close-price dispersion.

use comfy_table::{Cell, ContentArrangement, Table, presets::UTF8_FULL};
use market_data::{DataProvider, SymbolInfo};
use stock_stats::dispersion;
use tracing::warn;

use crate::{
    cache::FetchCache,
    session::Session,
    views::{format_timestamp, humanize_volume},
};

const RECENT_BARS: usize = 10;

pub async fn render(session: &mut Session, cache: &mut FetchCache, provider: &dyn DataProvider) {
    let request = session.relative_request();
    let fetched = match cache.get_or_fetch(provider, &request).await {
        Ok(fetched) => fetched,
        Err(err) => {
            warn!(symbol = %request.symbol, error = %err, "history fetch failed");
            eprintln!("Could not fetch data for '{}': {err}", request.symbol);
            return;
        }
    };

    if fetched.series.is_empty() {
        eprintln!(
            "No data found for ticker '{}'. Hint: tickers are often 3-5 capital letters with no space or numbers.",
            request.symbol
        );
        return;
    }

    session.store_info(fetched.info.clone());
    session.store_relative(fetched.series.clone());

    print_header(&fetched.info, session);

    let series = &fetched.series;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Time", "Open", "High", "Low", "Close", "Volume", ""]);

    let start = series.len().saturating_sub(RECENT_BARS);
    for bar in &series.bars()[start..] {
        table.add_row(vec![
            Cell::new(format_timestamp(bar.timestamp, series.interval())),
            Cell::new(format!("{:.2}", bar.open)),
            Cell::new(format!("{:.2}", bar.high)),
            Cell::new(format!("{:.2}", bar.low)),
            Cell::new(format!("{:.2}", bar.close)),
            Cell::new(humanize_volume(bar.volume)),
            Cell::new(if bar.is_up() { "up" } else { "down" }),
        ]);
    }

    println!("\nRecent bars ({} of {}):", series.len().min(RECENT_BARS), series.len());
    println!("{table}");

    let stats = dispersion(series);
    println!(
        "Close dispersion over {} bars: std dev {:.4}, variance {:.4}",
        series.len(),
        stats.std_dev,
        stats.variance
    );
}

fn print_header(info: &SymbolInfo, session: &Session) {
    println!(
        "{} ({}) | interval {} | period {}",
        info.display_name(),
        session.symbol(),
        session.interval(),
        session.period()
    );

    if let Some(price) = info.regular_market_price {
        let currency = info.currency.as_deref().unwrap_or("");
        println!("Last price: {price:.2} {currency}");
    }
    if let (Some(low), Some(high)) = (info.fifty_two_week_low, info.fifty_two_week_high) {
        println!("52-week range: {low:.2} - {high:.2}");
    }
    if let Some(exchange) = &info.exchange {
        println!("Exchange: {exchange}");
    }
}
