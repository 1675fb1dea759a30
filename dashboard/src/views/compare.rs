//! Benchmark comparison: final returns, correlation, and a plain-language
//! reading of both.

use comfy_table::{Cell, ContentArrangement, Table, presets::UTF8_FULL};
use market_data::{DataProvider, HistoryRequest, PriceSeries};
use stock_stats::{Comparison, compare};
use tracing::warn;

use crate::{cache::FetchCache, session::Session, views::signed_percent};

pub async fn render(
    session: &mut Session,
    cache: &mut FetchCache,
    provider: &dyn DataProvider,
    benchmark: &str,
) {
    let Some(main_series) = fetch_series(cache, provider, &session.relative_request()).await
    else {
        return;
    };
    session.store_relative(main_series.clone());

    let benchmark_request =
        HistoryRequest::new(benchmark, session.period(), session.interval());
    if benchmark_request.symbol == session.symbol() {
        eprintln!("'{}' compared against itself is not informative.", benchmark_request.symbol);
    }
    let Some(benchmark_series) = fetch_series(cache, provider, &benchmark_request).await else {
        return;
    };

    let comparison = match compare(&main_series, &benchmark_series) {
        Ok(comparison) => comparison,
        Err(err) => {
            warn!(error = %err, "comparison failed");
            eprintln!("Cannot compare: {err}");
            return;
        }
    };

    print_metrics(&comparison, session);
    print_interpretation(&comparison);
}

async fn fetch_series(
    cache: &mut FetchCache,
    provider: &dyn DataProvider,
    request: &HistoryRequest,
) -> Option<PriceSeries> {
    match cache.get_or_fetch(provider, request).await {
        Ok(fetched) if fetched.series.is_empty() => {
            eprintln!(
                "No data found for ticker '{}'. Hint: tickers are often 3-5 capital letters with no space or numbers.",
                request.symbol
            );
            None
        }
        Ok(fetched) => Some(fetched.series),
        Err(err) => {
            warn!(symbol = %request.symbol, error = %err, "history fetch failed");
            eprintln!("Could not fetch data for '{}': {err}", request.symbol);
            None
        }
    }
}

fn print_metrics(comparison: &Comparison, session: &Session) {
    println!(
        "{} vs {} | interval {} | period {} | {} aligned bars",
        comparison.left().label(),
        comparison.right().label(),
        session.interval(),
        session.period(),
        comparison.timestamps().len()
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        Cell::new(format!("{} total return", comparison.left().label())),
        Cell::new(signed_percent(comparison.left().final_return())),
    ]);
    table.add_row(vec![
        Cell::new(format!("{} total return", comparison.right().label())),
        Cell::new(signed_percent(comparison.right().final_return())),
    ]);
    table.add_row(vec![
        Cell::new("Correlation"),
        Cell::new(match comparison.correlation() {
            Some(corr) => format!("{corr:.3}"),
            None => "undefined (constant prices)".to_string(),
        }),
    ]);
    println!("{table}");
}

fn print_interpretation(comparison: &Comparison) {
    println!(
        "\n{}",
        outperformance_text(
            comparison.left().label(),
            comparison.right().label(),
            comparison.left().final_return(),
            comparison.right().final_return(),
        )
    );

    match comparison.correlation() {
        Some(corr) => {
            println!("{}", correlation_text(corr));
            println!("{}", diversification_text(corr));
        }
        None => {
            println!(
                "Correlation is undefined here: one side's closes never moved over the aligned range."
            );
        }
    }
}

fn outperformance_text(main: &str, benchmark: &str, main_return: f64, bench_return: f64) -> String {
    let gap = main_return - bench_return;
    if gap.abs() < 1.0 {
        format!(
            "{main} and {benchmark} performed nearly identically, with a difference of only {:.2}%.",
            gap.abs()
        )
    } else if gap > 0.0 {
        format!("{main} outperformed {benchmark} by {gap:.2}% during this period.")
    } else {
        format!(
            "{benchmark} outperformed {main} by {:.2}% during this period.",
            gap.abs()
        )
    }
}

fn correlation_text(corr: f64) -> String {
    if corr > 0.7 {
        format!(
            "The stocks show strong positive correlation ({corr:.3}), meaning they tend to move together. This suggests similar market drivers or sector exposure."
        )
    } else if corr > 0.3 {
        format!(
            "The stocks show moderate positive correlation ({corr:.3}), meaning they sometimes move together but maintain some independence."
        )
    } else if corr > -0.3 {
        format!(
            "The stocks show weak correlation ({corr:.3}), meaning they move relatively independently of each other."
        )
    } else if corr > -0.7 {
        format!(
            "The stocks show moderate negative correlation ({corr:.3}), meaning they often move in opposite directions."
        )
    } else {
        format!(
            "The stocks show strong negative correlation ({corr:.3}), meaning they tend to move in opposite directions. This could indicate a hedging relationship."
        )
    }
}

fn diversification_text(corr: f64) -> String {
    if corr < 0.5 {
        format!(
            "These stocks could provide good diversification in a portfolio due to their low correlation ({corr:.3})."
        )
    } else {
        format!(
            "These stocks tend to move together (correlation: {corr:.3}), so they may not provide significant diversification benefits."
        )
    }
}
