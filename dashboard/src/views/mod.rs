//! Terminal views over the fetched data.
//!
//! Each view owns its error handling: fetch failures and thin data become
//! user-visible warnings and the process moves on, so no single view can
//! take the whole run down.

pub mod compare;
pub mod performance;
pub mod summary;

use chrono::{DateTime, Utc};
use market_data::Interval;

/// Volume with a k/M/B suffix, matching the axis labels of the volume
/// chart this replaces.
pub fn humanize_volume(volume: u64) -> String {
    let value = volume as f64;
    if value >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.1}k", value / 1e3)
    } else {
        volume.to_string()
    }
}

/// Timestamp rendering appropriate for the bar granularity: intraday bars
/// keep the clock time, coarser bars are just dates.
pub fn format_timestamp(timestamp: DateTime<Utc>, interval: Interval) -> String {
    match interval {
        Interval::Minute | Interval::Hour => timestamp.format("%Y-%m-%d %H:%M").to_string(),
        Interval::Day | Interval::Week | Interval::Month => {
            timestamp.format("%Y-%m-%d").to_string()
        }
    }
}

/// A percent value with an explicit sign, e.g. "+4.20%" / "-1.35%".
pub fn signed_percent(value: f64) -> String {
    format!("{value:+.2}%")
}
