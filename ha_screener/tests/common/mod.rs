#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use market_data::{
    models::{bar::Bar, bar_series::BarSeries, interval::Interval},
    providers::{DataProvider, ProviderError, UnknownSymbolSnafu},
};

pub fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

pub fn bar(
    timestamp: DateTime<Utc>,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
) -> Bar {
    Bar {
        timestamp,
        open,
        high,
        low,
        close,
        volume,
    }
}

/// In-memory provider serving canned series; unknown symbols fail the same
/// way a delisted ticker does against the real feed.
pub struct StaticProvider {
    series: HashMap<String, Vec<Bar>>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self {
            series: HashMap::new(),
        }
    }

    pub fn with_series(mut self, symbol: &str, bars: Vec<Bar>) -> Self {
        self.series.insert(symbol.to_string(), bars);
        self
    }
}

#[async_trait]
impl DataProvider for StaticProvider {
    async fn fetch_bars(
        &self,
        symbol: &str,
        interval: Interval,
    ) -> Result<BarSeries, ProviderError> {
        match self.series.get(symbol) {
            Some(bars) => Ok(BarSeries {
                symbol: symbol.to_string(),
                interval,
                bars: bars.clone(),
            }),
            None => UnknownSymbolSnafu { symbol }.fail(),
        }
    }
}

/// Six daily bars whose Heikin-Ashi colors run
/// neutral, red, red, red, red, green: four down sessions followed by two
/// strong up sessions. The trailing pair is red -> green, i.e. a reversal.
///
/// Derived HA values for the last two candles:
/// previous: open 89.5, close 89.25 (red); recent: open 89.375, close 99 (green).
pub fn reversal_bars() -> Vec<Bar> {
    vec![
        bar(day(2025, 6, 9), 100.0, 101.0, 95.0, 96.0, 1000.0),
        bar(day(2025, 6, 10), 96.0, 97.0, 91.0, 92.0, 1000.0),
        bar(day(2025, 6, 11), 92.0, 93.0, 87.0, 88.0, 1000.0),
        bar(day(2025, 6, 12), 88.0, 89.0, 83.0, 84.0, 1000.0),
        bar(day(2025, 6, 13), 84.0, 95.0, 84.0, 94.0, 1000.0),
        bar(day(2025, 6, 16), 94.0, 105.0, 93.0, 104.0, 1000.0),
    ]
}

/// Six steadily rising sessions; every HA candle after the first is green,
/// so no reversal pair exists.
pub fn uptrend_bars() -> Vec<Bar> {
    (0..6)
        .map(|i| {
            let base = 100.0 + 5.0 * i as f64;
            bar(
                day(2025, 6, 9 + i),
                base,
                base + 6.0,
                base - 1.0,
                base + 5.0,
                1000.0,
            )
        })
        .collect()
}
