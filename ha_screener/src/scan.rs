//! Scan orchestration: fetch, transform, select, detect, per symbol.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use market_data::{cache::CachedFetcher, models::interval::Interval, providers::DataProvider};
use tracing::{debug, info};

use crate::{
    detector::{Signal, detect_reversal},
    heikin_ashi::{HaBar, HaSeries, heikin_ashi},
    policy::{FreshnessPolicy, select_trailing_pair},
};

/// Floor on filtered history before a symbol is analyzed at all. Keeps a
/// freshly listed contract with two bars of history out of the results.
pub const MIN_BARS: usize = 5;

/// Chart tail default and bounds.
pub const DEFAULT_CHART_TAIL: usize = 30;
const CHART_TAIL_MIN: usize = 20;
const CHART_TAIL_MAX: usize = 50;

/// One row of the date monitor: the last three Heikin-Ashi timestamps a
/// symbol's candle selection is actually looking at. This exists because the
/// index-selection bug class ("which row is yesterday?") is invisible without
/// seeing the trailing dates per symbol.
#[derive(Debug, Clone)]
pub struct DateMonitorRow {
    pub symbol: String,
    pub trailing_dates: Vec<DateTime<Utc>>,
}

/// The screener facade: owns the memoized fetcher and runs scans.
///
/// All selectors (symbols, interval, policy) are explicit parameters; there
/// is no ambient scan state.
pub struct Screener {
    fetcher: CachedFetcher,
}

impl Screener {
    pub fn new(provider: Arc<dyn DataProvider>) -> Self {
        Self {
            fetcher: CachedFetcher::new(provider),
        }
    }

    /// Scans `symbols` sequentially and returns the reversal signals found.
    ///
    /// Per-symbol failures (fetch errors, short series) are logged and
    /// skipped; the scan itself never aborts. Zero signals is an ordinary
    /// outcome, not an error.
    pub async fn scan(
        &self,
        symbols: &[String],
        interval: Interval,
        policy: FreshnessPolicy,
    ) -> Vec<Signal> {
        self.scan_as_of(symbols, interval, policy, Utc::now().date_naive())
            .await
    }

    /// Like [`Screener::scan`] with an explicit "today" for the closed-only
    /// date comparison. Exposed for deterministic tests.
    pub async fn scan_as_of(
        &self,
        symbols: &[String],
        interval: Interval,
        policy: FreshnessPolicy,
        today: NaiveDate,
    ) -> Vec<Signal> {
        let (signals, _) = self
            .scan_with_debug(symbols, interval, policy, today)
            .await;
        signals
    }

    /// Full scan that also reports the date monitor rows.
    pub async fn scan_with_debug(
        &self,
        symbols: &[String],
        interval: Interval,
        policy: FreshnessPolicy,
        today: NaiveDate,
    ) -> (Vec<Signal>, Vec<DateMonitorRow>) {
        let mut signals = Vec::new();
        let mut monitor = Vec::new();

        for symbol in symbols {
            let Some(series) = self.fetcher.fetch(symbol, interval).await else {
                continue;
            };

            if series.len() < MIN_BARS {
                debug!(symbol = %symbol, have = series.len(), need = MIN_BARS, "history too short");
                continue;
            }

            let ha = match heikin_ashi(&series) {
                Ok(ha) => Arc::new(ha),
                Err(err) => {
                    debug!(symbol = %symbol, error = %err, "transform failed");
                    continue;
                }
            };

            monitor.push(DateMonitorRow {
                symbol: symbol.clone(),
                trailing_dates: ha.tail(3).iter().map(|b| b.timestamp).collect(),
            });

            let (previous, recent) = match select_trailing_pair(&ha, policy, today) {
                Ok(pair) => pair,
                Err(err) => {
                    debug!(symbol = %symbol, error = %err, "candle selection failed");
                    continue;
                }
            };

            if let Some(signal) = detect_reversal(&ha, previous, recent) {
                info!(
                    symbol = %symbol,
                    recent = %signal.recent_timestamp.date_naive(),
                    "reversal signal"
                );
                signals.push(signal);
            }
        }

        (signals, monitor)
    }

    /// The computed Heikin-Ashi series for one symbol, or `None` when the
    /// symbol cannot be fetched or carries fewer than two usable bars.
    pub async fn ha_series(&self, symbol: &str, interval: Interval) -> Option<HaSeries> {
        let series = self.fetcher.fetch(symbol, interval).await?;
        heikin_ashi(&series).ok()
    }
}

/// The trailing slice of a Heikin-Ashi series for a candlestick widget.
///
/// `tail` is clamped to the supported window (20..=50 candles).
pub fn chart_data(series: &HaSeries, tail: usize) -> &[HaBar] {
    series.tail(tail.clamp(CHART_TAIL_MIN, CHART_TAIL_MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn chart_tail_is_clamped() {
        let bars: Vec<HaBar> = (0..60)
            .map(|i| HaBar {
                timestamp: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
                    + chrono::Duration::days(i),
                open: 10.0,
                high: 11.0,
                low: 9.0,
                close: 10.5,
            })
            .collect();
        let series = HaSeries {
            symbol: "SI=F".to_string(),
            interval: Interval::Daily,
            bars,
        };

        assert_eq!(chart_data(&series, 5).len(), 20);
        assert_eq!(chart_data(&series, 30).len(), 30);
        assert_eq!(chart_data(&series, 500).len(), 50);
    }
}
