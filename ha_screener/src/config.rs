//! Optional TOML configuration.
//!
//! Every field is optional; CLI flags take precedence over the file, and the
//! built-in defaults cover the rest.
//!
//! ```toml
//! # screener.toml
//! symbols = ["NQ=F", "ES=F", "GC=F"]
//! timeframe = "daily"
//! policy = "closed_only"
//! chart_tail = 30
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::policy::FreshnessPolicy;
use market_data::models::interval::Interval;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScreenerConfig {
    /// Overrides the built-in default watchlist.
    pub symbols: Option<Vec<String>>,
    pub timeframe: Option<Interval>,
    pub policy: Option<FreshnessPolicy>,
    pub chart_tail: Option<usize>,
}

impl ScreenerConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }
}
