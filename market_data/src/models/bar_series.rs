//! A collection of time-series bars for a specific symbol and interval.

use crate::models::{bar::Bar, interval::Interval};

/// Represents a complete set of time-series data for a single symbol.
///
/// This struct groups a vector of [`Bar`]s with their corresponding symbol
/// and [`Interval`], making the data set self-describing. Bars are ordered by
/// ascending timestamp with no duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// The symbol this data represents (e.g., "AAPL", "NQ=F").
    pub symbol: String,
    /// The time interval for each bar in the series.
    pub interval: Interval,
    /// The collection of OHLCV bars.
    pub bars: Vec<Bar>,
}

impl BarSeries {
    /// Number of bars in the series.
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Returns a copy of the series with placeholder rows removed.
    ///
    /// Daily feeds for futures and FX routinely contain rows for sessions that
    /// never traded: weekend/holiday fillers with zero volume, or degenerate
    /// rows where `high == low`. Left in place, such a row can be mistaken for
    /// the last completed session when selecting trailing candles, so the
    /// fetch layer strips them before any analysis runs. Rows with non-finite
    /// fields are dropped for the same reason.
    pub fn without_placeholder_rows(&self) -> BarSeries {
        let bars = self
            .bars
            .iter()
            .filter(|b| b.is_finite() && b.volume > 0.0 && b.high > b.low)
            .cloned()
            .collect();

        BarSeries {
            symbol: self.symbol.clone(),
            interval: self.interval,
            bars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn bar(day: u32, volume: f64, high: f64, low: f64) -> Bar {
        Bar {
            timestamp: Utc.with_ymd_and_hms(2025, 6, day, 0, 0, 0).unwrap(),
            open: (high + low) / 2.0,
            high,
            low,
            close: (high + low) / 2.0,
            volume,
        }
    }

    #[test]
    fn placeholder_rows_are_dropped() {
        let series = BarSeries {
            symbol: "NQ=F".to_string(),
            interval: Interval::Daily,
            bars: vec![
                bar(2, 1000.0, 12.0, 9.0),
                // Weekend filler: zero volume.
                bar(3, 0.0, 12.0, 9.0),
                // Degenerate session: no price movement.
                bar(4, 500.0, 10.0, 10.0),
                bar(5, 800.0, 11.5, 8.0),
            ],
        };

        let cleaned = series.without_placeholder_rows();
        assert_eq!(cleaned.len(), 2);
        assert_eq!(cleaned.bars[0].timestamp, series.bars[0].timestamp);
        assert_eq!(cleaned.bars[1].timestamp, series.bars[3].timestamp);
    }

    #[test]
    fn non_finite_rows_are_dropped() {
        let mut nan_bar = bar(2, 1000.0, 12.0, 9.0);
        nan_bar.close = f64::NAN;

        let series = BarSeries {
            symbol: "ES=F".to_string(),
            interval: Interval::Daily,
            bars: vec![nan_bar, bar(3, 900.0, 12.0, 9.0)],
        };

        let cleaned = series.without_placeholder_rows();
        assert_eq!(cleaned.len(), 1);
    }
}
