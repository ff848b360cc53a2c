//! Heikin-Ashi transform.
//!
//! Maps a raw OHLC series to the smoothed Heikin-Ashi representation:
//!
//! - `ha_close[i] = (open[i] + high[i] + low[i] + close[i]) / 4`
//! - `ha_open[0] = (open[0] + close[0]) / 2`
//! - `ha_open[i] = (ha_open[i-1] + ha_close[i-1]) / 2`
//! - `ha_high[i] = max(high[i], ha_open[i], ha_close[i])`
//! - `ha_low[i]  = min(low[i],  ha_open[i], ha_close[i])`
//!
//! The open recurrence carries state from the first bar onward, so the value
//! at index `i` depends on the entire prefix. Two computations over windows
//! with different starting points (say a 1-year vs a 2-year fetch) diverge;
//! a scan is only reproducible when the fetch window stays fixed.

use chrono::{DateTime, Utc};
use market_data::models::{bar_series::BarSeries, interval::Interval};

use crate::errors::ScanError;

/// Classification of a single Heikin-Ashi candle.
///
/// Exactly one of the three holds per candle. `close == open` is `Neutral`,
/// deliberately distinct from both directions: a neutral candle never
/// satisfies the reversal predicate in either role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandleColor {
    Green,
    Red,
    Neutral,
}

impl CandleColor {
    pub const fn as_str(&self) -> &'static str {
        match self {
            CandleColor::Green => "green",
            CandleColor::Red => "red",
            CandleColor::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for CandleColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single Heikin-Ashi candle.
#[derive(Debug, Clone, PartialEq)]
pub struct HaBar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl HaBar {
    pub fn color(&self) -> CandleColor {
        if self.close > self.open {
            CandleColor::Green
        } else if self.close < self.open {
            CandleColor::Red
        } else {
            CandleColor::Neutral
        }
    }
}

/// A derived Heikin-Ashi series. Same length and timestamp index as the raw
/// series it was computed from; owns its candles outright.
#[derive(Debug, Clone, PartialEq)]
pub struct HaSeries {
    pub symbol: String,
    pub interval: Interval,
    pub bars: Vec<HaBar>,
}

impl HaSeries {
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The trailing `n` candles (the whole series when shorter).
    pub fn tail(&self, n: usize) -> &[HaBar] {
        let start = self.bars.len().saturating_sub(n);
        &self.bars[start..]
    }
}

/// Computes the Heikin-Ashi series for `series`.
///
/// Builds a new owned series; the raw input is never touched. The recurrence
/// state (`ha_open[i-1]`, `ha_close[i-1]`) is carried forward explicitly
/// instead of re-reading a partially written output.
///
/// A series shorter than 2 bars cannot support any candle comparison and
/// fails with [`ScanError::InsufficientData`].
pub fn heikin_ashi(series: &BarSeries) -> Result<HaSeries, ScanError> {
    if series.len() < 2 {
        return Err(ScanError::InsufficientData {
            symbol: series.symbol.clone(),
            have: series.len(),
            need: 2,
        });
    }

    let mut bars = Vec::with_capacity(series.len());

    let first = &series.bars[0];
    let mut prev_open = (first.open + first.close) / 2.0;
    let mut prev_close = (first.open + first.high + first.low + first.close) / 4.0;

    for (i, bar) in series.bars.iter().enumerate() {
        let (ha_open, ha_close) = if i == 0 {
            (prev_open, prev_close)
        } else {
            (
                (prev_open + prev_close) / 2.0,
                (bar.open + bar.high + bar.low + bar.close) / 4.0,
            )
        };

        bars.push(HaBar {
            timestamp: bar.timestamp,
            open: ha_open,
            high: bar.high.max(ha_open).max(ha_close),
            low: bar.low.min(ha_open).min(ha_close),
            close: ha_close,
        });

        prev_open = ha_open;
        prev_close = ha_close;
    }

    Ok(HaSeries {
        symbol: series.symbol.clone(),
        interval: series.interval,
        bars,
    })
}
