//! Freshness policy and trailing-candle selection.
//!
//! The recurring hard problem of this tool: deciding which candle counts as
//! "the most recent completed session" when the feed's last row may be a
//! live, still-forming bar for the current session. The input is assumed to
//! be quality-filtered already (the fetch layer strips zero-volume and flat
//! placeholder rows), so date comparison is the only remaining concern here.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    errors::ScanError,
    heikin_ashi::{HaBar, HaSeries},
};

/// How to treat the feed's last row when selecting the candle pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessPolicy {
    /// Never treat the in-progress session as a completed candle: when the
    /// last row is dated today it is excluded from both roles, and the pair
    /// shifts back by one.
    #[default]
    ClosedOnly,
    /// Always compare the absolute last row against the one before it, even
    /// when the last row is today's in-progress session.
    Live,
}

impl FromStr for FreshnessPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "closed" | "closed-only" | "closed_only" => Ok(FreshnessPolicy::ClosedOnly),
            "live" => Ok(FreshnessPolicy::Live),
            other => Err(format!(
                "unknown policy: {other:?} (expected \"closed-only\" or \"live\")"
            )),
        }
    }
}

impl std::fmt::Display for FreshnessPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FreshnessPolicy::ClosedOnly => f.write_str("closed-only"),
            FreshnessPolicy::Live => f.write_str("live"),
        }
    }
}

/// Selects the `(previous, recent)` candle pair under `policy`.
///
/// `today` is passed explicitly so callers (and tests) control what counts as
/// the in-progress session; the scanner passes the current UTC date.
pub fn select_trailing_pair<'a>(
    series: &'a HaSeries,
    policy: FreshnessPolicy,
    today: NaiveDate,
) -> Result<(&'a HaBar, &'a HaBar), ScanError> {
    let n = series.len() as i64;

    let recent_idx = match policy {
        FreshnessPolicy::Live => n - 1,
        FreshnessPolicy::ClosedOnly => {
            let last_is_live = series
                .bars
                .last()
                .is_some_and(|b| b.timestamp.date_naive() >= today);
            if last_is_live { n - 2 } else { n - 1 }
        }
    };

    if recent_idx < 1 {
        return Err(ScanError::InsufficientData {
            symbol: series.symbol.clone(),
            have: series.len(),
            need: (2 + (n - 1 - recent_idx)) as usize,
        });
    }

    let recent_idx = recent_idx as usize;
    Ok((&series.bars[recent_idx - 1], &series.bars[recent_idx]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use market_data::models::interval::Interval;

    fn ha_series(dates: &[(i32, u32, u32)]) -> HaSeries {
        let bars = dates
            .iter()
            .enumerate()
            .map(|(i, &(y, m, d))| HaBar {
                timestamp: Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap(),
                open: 10.0 + i as f64,
                high: 12.0 + i as f64,
                low: 9.0 + i as f64,
                close: 11.0 + i as f64,
            })
            .collect();

        HaSeries {
            symbol: "GC=F".to_string(),
            interval: Interval::Daily,
            bars,
        }
    }

    #[test]
    fn closed_only_drops_todays_row() {
        let series = ha_series(&[(2025, 6, 11), (2025, 6, 12), (2025, 6, 13)]);
        let today = NaiveDate::from_ymd_opt(2025, 6, 13).unwrap();

        let (previous, recent) = select_trailing_pair(&series, FreshnessPolicy::ClosedOnly, today).unwrap();

        // The live row (today) must appear in neither role.
        assert_eq!(recent.timestamp, series.bars[1].timestamp);
        assert_eq!(previous.timestamp, series.bars[0].timestamp);
    }

    #[test]
    fn closed_only_uses_last_row_when_it_is_closed() {
        let series = ha_series(&[(2025, 6, 11), (2025, 6, 12), (2025, 6, 13)]);
        let today = NaiveDate::from_ymd_opt(2025, 6, 16).unwrap();

        let (previous, recent) = select_trailing_pair(&series, FreshnessPolicy::ClosedOnly, today).unwrap();

        assert_eq!(recent.timestamp, series.bars[2].timestamp);
        assert_eq!(previous.timestamp, series.bars[1].timestamp);
    }

    #[test]
    fn live_always_takes_the_last_two() {
        let series = ha_series(&[(2025, 6, 11), (2025, 6, 12), (2025, 6, 13)]);
        let today = NaiveDate::from_ymd_opt(2025, 6, 13).unwrap();

        let (previous, recent) = select_trailing_pair(&series, FreshnessPolicy::Live, today).unwrap();

        assert_eq!(recent.timestamp, series.bars[2].timestamp);
        assert_eq!(previous.timestamp, series.bars[1].timestamp);
    }

    #[test]
    fn two_bars_with_live_last_row_is_insufficient() {
        let series = ha_series(&[(2025, 6, 12), (2025, 6, 13)]);
        let today = NaiveDate::from_ymd_opt(2025, 6, 13).unwrap();

        let err = select_trailing_pair(&series, FreshnessPolicy::ClosedOnly, today).unwrap_err();
        assert!(matches!(err, ScanError::InsufficientData { have: 2, .. }));

        // Live mode is satisfied with the same two bars.
        assert!(select_trailing_pair(&series, FreshnessPolicy::Live, today).is_ok());
    }

    #[test]
    fn policy_parse_round_trip() {
        assert_eq!(
            "closed-only".parse::<FreshnessPolicy>().unwrap(),
            FreshnessPolicy::ClosedOnly
        );
        assert_eq!("Live".parse::<FreshnessPolicy>().unwrap(), FreshnessPolicy::Live);
        assert!("fresh".parse::<FreshnessPolicy>().is_err());
    }
}
