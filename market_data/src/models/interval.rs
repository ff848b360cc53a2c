//! Bar interval for the two timeframes the screener supports.
//!
//! [`Interval`] gives a typed alternative to passing raw feed codes (`"1d"`,
//! `"1wk"`) around. Each interval also knows the lookback window the fetch
//! layer should request: roughly one year of daily bars, and a slightly
//! longer window for weekly bars so the series still carries enough history.
//!
//! Typical usage:
//! ```
//! use market_data::models::interval::Interval;
//!
//! let tf: Interval = "1wk".parse().unwrap();
//! assert_eq!(tf, Interval::Weekly);
//! assert_eq!(tf.code(), "1wk");
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The string could not be parsed into an [`Interval`].
#[derive(Debug, Error)]
#[error("unknown interval: {0:?} (expected \"1d\"/\"daily\" or \"1wk\"/\"weekly\")")]
pub struct ParseIntervalError(pub String);

/// Bar interval (daily or weekly).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interval {
    Daily,
    Weekly,
}

impl Interval {
    /// The wire code used by the chart feed (`"1d"` / `"1wk"`).
    pub const fn code(&self) -> &'static str {
        match self {
            Interval::Daily => "1d",
            Interval::Weekly => "1wk",
        }
    }

    /// Calendar days of history to request for this interval.
    pub const fn lookback_days(&self) -> i64 {
        match self {
            Interval::Daily => 365,
            Interval::Weekly => 400,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Interval {
    type Err = ParseIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1d" | "d" | "daily" | "day" => Ok(Interval::Daily),
            "1wk" | "w" | "weekly" | "week" => Ok(Interval::Weekly),
            other => Err(ParseIntervalError(other.to_string())),
        }
    }
}
