//! Bullish reversal detection over a selected candle pair.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::heikin_ashi::{CandleColor, HaBar, HaSeries};

/// A detected red-to-green reversal for one symbol.
///
/// Holds the facts needed for the report row plus a shared reference to the
/// full Heikin-Ashi series so a chart can be rendered later without another
/// fetch. Signals live for one scan pass; nothing is persisted.
#[derive(Debug, Clone)]
pub struct Signal {
    pub symbol: String,
    pub previous_timestamp: DateTime<Utc>,
    pub previous_color: CandleColor,
    pub recent_timestamp: DateTime<Utc>,
    pub recent_color: CandleColor,
    /// Recent candle's HA open, rounded to 4 decimal places.
    pub ha_open_recent: f64,
    /// Recent candle's HA close, rounded to 4 decimal places.
    pub ha_close_recent: f64,
    pub series: Arc<HaSeries>,
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

/// Applies the reversal predicate to the `(previous, recent)` pair.
///
/// Matches only a green recent candle after a red previous candle. A neutral
/// candle (`close == open`) matches neither role, so it never produces a
/// signal in either direction.
pub fn detect_reversal(
    series: &Arc<HaSeries>,
    previous: &HaBar,
    recent: &HaBar,
) -> Option<Signal> {
    let previous_color = previous.color();
    let recent_color = recent.color();

    if recent_color != CandleColor::Green || previous_color != CandleColor::Red {
        return None;
    }

    Some(Signal {
        symbol: series.symbol.clone(),
        previous_timestamp: previous.timestamp,
        previous_color,
        recent_timestamp: recent.timestamp,
        recent_color,
        ha_open_recent: round4(recent.open),
        ha_close_recent: round4(recent.close),
        series: Arc::clone(series),
    })
}
