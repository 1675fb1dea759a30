//! Sampling intervals and lookback periods for history requests.
//!
//! Both enums are closed sets matching what the provider accepts, with
//! `Display`/`FromStr` using the provider's own tokens (`"1d"`, `"ytd"`,
//! ...) for CLI and config ergonomics. Not every (interval, period)
//! combination is valid; [`Interval::allowed_periods`] is the fixed table
//! the request boundary validates against, and
//! [`Interval::default_period`] is the fallback when a selection change
//! leaves the current period invalid.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rejected interval/period token or combination.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("unknown interval: {0:?} (expected one of 1m, 1h, 1d, 1wk, 1mo)")]
    UnknownInterval(String),

    #[error("unknown period: {0:?} (expected one of 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max)")]
    UnknownPeriod(String),

    #[error("period {period} is not available at interval {interval}")]
    InvalidCombination { interval: Interval, period: Period },
}

/// Bar sampling granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Interval {
    Minute,
    Hour,
    Day,
    Week,
    Month,
}

/// Lookback window for a history request, intraday through full listing
/// history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Period {
    OneDay,
    FiveDay,
    OneMonth,
    ThreeMonth,
    SixMonth,
    OneYear,
    TwoYear,
    FiveYear,
    TenYear,
    YearToDate,
    Max,
}

impl Interval {
    /// The provider token for this interval.
    pub fn as_str(self) -> &'static str {
        match self {
            Interval::Minute => "1m",
            Interval::Hour => "1h",
            Interval::Day => "1d",
            Interval::Week => "1wk",
            Interval::Month => "1mo",
        }
    }

    /// The fixed set of periods the provider serves at this interval.
    ///
    /// Minute data only exists for a few recent sessions; hourly data stops
    /// at two years back; coarser intervals only make sense over longer
    /// windows.
    pub fn allowed_periods(self) -> &'static [Period] {
        use Period::*;
        match self {
            Interval::Minute => &[OneDay, FiveDay],
            Interval::Hour => &[
                OneDay, FiveDay, OneMonth, ThreeMonth, SixMonth, OneYear, TwoYear, YearToDate,
            ],
            Interval::Day => &[
                FiveDay, OneMonth, ThreeMonth, SixMonth, OneYear, TwoYear, FiveYear, TenYear,
                YearToDate, Max,
            ],
            Interval::Week => &[
                ThreeMonth, SixMonth, OneYear, TwoYear, FiveYear, TenYear, YearToDate, Max,
            ],
            Interval::Month => &[OneYear, TwoYear, FiveYear, TenYear, YearToDate, Max],
        }
    }

    /// The period a selection falls back to when its current period is not
    /// valid for this interval.
    pub fn default_period(self) -> Period {
        match self {
            Interval::Minute | Interval::Hour => Period::OneDay,
            Interval::Day | Interval::Week | Interval::Month => Period::YearToDate,
        }
    }

    /// Checks a combination against [`Self::allowed_periods`].
    pub fn validate_period(self, period: Period) -> Result<(), ParamError> {
        if self.allowed_periods().contains(&period) {
            Ok(())
        } else {
            Err(ParamError::InvalidCombination {
                interval: self,
                period,
            })
        }
    }
}

impl Period {
    /// The provider token for this period.
    pub fn as_str(self) -> &'static str {
        match self {
            Period::OneDay => "1d",
            Period::FiveDay => "5d",
            Period::OneMonth => "1mo",
            Period::ThreeMonth => "3mo",
            Period::SixMonth => "6mo",
            Period::OneYear => "1y",
            Period::TwoYear => "2y",
            Period::FiveYear => "5y",
            Period::TenYear => "10y",
            Period::YearToDate => "ytd",
            Period::Max => "max",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1m" => Ok(Interval::Minute),
            "1h" | "60m" => Ok(Interval::Hour),
            "1d" => Ok(Interval::Day),
            "1wk" => Ok(Interval::Week),
            "1mo" => Ok(Interval::Month),
            _ => Err(ParamError::UnknownInterval(s.to_string())),
        }
    }
}

impl FromStr for Period {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1d" => Ok(Period::OneDay),
            "5d" => Ok(Period::FiveDay),
            "1mo" => Ok(Period::OneMonth),
            "3mo" => Ok(Period::ThreeMonth),
            "6mo" => Ok(Period::SixMonth),
            "1y" => Ok(Period::OneYear),
            "2y" => Ok(Period::TwoYear),
            "5y" => Ok(Period::FiveYear),
            "10y" => Ok(Period::TenYear),
            "ytd" => Ok(Period::YearToDate),
            "max" => Ok(Period::Max),
            _ => Err(ParamError::UnknownPeriod(s.to_string())),
        }
    }
}

impl TryFrom<String> for Interval {
    type Error = ParamError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for Period {
    type Error = ParamError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Interval> for String {
    fn from(value: Interval) -> Self {
        value.as_str().to_string()
    }
}

impl From<Period> for String {
    fn from(value: Period) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_tokens_round_trip() {
        for interval in [
            Interval::Minute,
            Interval::Hour,
            Interval::Day,
            Interval::Week,
            Interval::Month,
        ] {
            assert_eq!(interval.as_str().parse::<Interval>().unwrap(), interval);
        }
    }

    #[test]
    fn period_tokens_round_trip() {
        for period in [
            Period::OneDay,
            Period::FiveDay,
            Period::OneMonth,
            Period::ThreeMonth,
            Period::SixMonth,
            Period::OneYear,
            Period::TwoYear,
            Period::FiveYear,
            Period::TenYear,
            Period::YearToDate,
            Period::Max,
        ] {
            assert_eq!(period.as_str().parse::<Period>().unwrap(), period);
        }
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert!(matches!(
            "2m".parse::<Interval>(),
            Err(ParamError::UnknownInterval(_))
        ));
        assert!(matches!(
            "7y".parse::<Period>(),
            Err(ParamError::UnknownPeriod(_))
        ));
    }

    #[test]
    fn minute_bars_reject_long_periods() {
        assert!(Interval::Minute.validate_period(Period::OneDay).is_ok());
        assert!(matches!(
            Interval::Minute.validate_period(Period::Max),
            Err(ParamError::InvalidCombination { .. })
        ));
    }

    #[test]
    fn daily_bars_cover_ytd_and_max() {
        assert!(Interval::Day.validate_period(Period::YearToDate).is_ok());
        assert!(Interval::Day.validate_period(Period::Max).is_ok());
        assert!(Interval::Day.validate_period(Period::OneDay).is_err());
    }

    #[test]
    fn default_period_is_always_allowed() {
        for interval in [
            Interval::Minute,
            Interval::Hour,
            Interval::Day,
            Interval::Week,
            Interval::Month,
        ] {
            assert!(interval.validate_period(interval.default_period()).is_ok());
        }
    }
}
