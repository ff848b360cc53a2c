use chrono::{DateTime, Duration, Utc};

use crate::models::interval::Interval;

/// Builds the query string for a chart request.
///
/// The window ends at `now` and reaches back by the interval's lookback
/// (`period1`/`period2` are epoch seconds, `period2` exclusive).
pub fn construct_params(interval: Interval, now: DateTime<Utc>) -> Vec<(String, String)> {
    let start = now - Duration::days(interval.lookback_days());

    vec![
        ("interval".to_string(), interval.code().to_string()),
        ("period1".to_string(), start.timestamp().to_string()),
        ("period2".to_string(), now.timestamp().to_string()),
        ("includePrePost".to_string(), "false".to_string()),
    ]
}
