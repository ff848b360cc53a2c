use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::bar::Bar;

/// Top-level envelope of the chart endpoint.
#[derive(Deserialize, Debug)]
pub struct ChartEnvelope {
    pub chart: Chart,
}

#[derive(Deserialize, Debug)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Deserialize, Debug)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Deserialize, Debug)]
pub struct Indicators {
    pub quote: Vec<Quote>,
}

/// Parallel per-field arrays; individual rows may be `null`.
#[derive(Deserialize, Debug, Default)]
pub struct Quote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

impl ChartResult {
    /// Flattens the parallel-array layout into a row-per-bar vector.
    ///
    /// A row survives only when the timestamp resolves and every quote field
    /// is present; this is where the feed's multi-level column shape is
    /// normalized and rows with missing values get dropped.
    pub fn into_bars(self) -> Vec<Bar> {
        let Some(quote) = self.indicators.quote.into_iter().next() else {
            return Vec::new();
        };

        self.timestamp
            .iter()
            .enumerate()
            .filter_map(|(i, &ts)| {
                let timestamp: DateTime<Utc> = DateTime::from_timestamp(ts, 0)?;
                Some(Bar {
                    timestamp,
                    open: (*quote.open.get(i)?)?,
                    high: (*quote.high.get(i)?)?,
                    low: (*quote.low.get(i)?)?,
                    close: (*quote.close.get(i)?)?,
                    volume: (*quote.volume.get(i)?)?,
                })
            })
            .collect()
    }
}
