//! Memoizing wrapper over a [`DataProvider`].
//!
//! Repeated fetches for the same `(symbol, interval)` pair within one process
//! are served from memory, so a scan followed by chart lookups does not hit
//! the network twice for the same series. Entries live for the lifetime of
//! the process; there is no TTL or durability.
//!
//! This is also the boundary where per-symbol failures stop propagating:
//! every provider error is logged and converted to `None`, which callers
//! treat as "skip this symbol", never as fatal.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use tracing::{debug, warn};

use crate::{
    models::{bar_series::BarSeries, interval::Interval},
    providers::DataProvider,
};

pub struct CachedFetcher {
    provider: Arc<dyn DataProvider>,
    entries: Mutex<HashMap<(String, Interval), Arc<BarSeries>>>,
}

impl CachedFetcher {
    pub fn new(provider: Arc<dyn DataProvider>) -> Self {
        Self {
            provider,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Fetches the quality-filtered series for `symbol`, memoized.
    ///
    /// The cached series has already been through
    /// [`BarSeries::without_placeholder_rows`], so downstream code never sees
    /// zero-volume or flat placeholder rows. Failures are not cached; a later
    /// call for the same symbol retries the provider.
    pub async fn fetch(&self, symbol: &str, interval: Interval) -> Option<Arc<BarSeries>> {
        let key = (symbol.to_string(), interval);

        if let Some(hit) = self.entries.lock().unwrap().get(&key) {
            debug!(symbol, interval = %interval, "cache hit");
            return Some(Arc::clone(hit));
        }

        match self.provider.fetch_bars(symbol, interval).await {
            Ok(raw) => {
                let cleaned = Arc::new(raw.without_placeholder_rows());
                self.entries
                    .lock()
                    .unwrap()
                    .insert(key, Arc::clone(&cleaned));
                Some(cleaned)
            }
            Err(err) => {
                warn!(symbol, interval = %interval, error = %err, "fetch failed, skipping symbol");
                None
            }
        }
    }

    /// Drops every cached series. Useful for tests.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{
        models::bar::Bar,
        providers::{ProviderError, UnknownSymbolSnafu},
    };

    struct CountingProvider {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl DataProvider for CountingProvider {
        async fn fetch_bars(
            &self,
            symbol: &str,
            interval: Interval,
        ) -> Result<BarSeries, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if symbol == "BAD" {
                return UnknownSymbolSnafu { symbol }.fail();
            }
            Ok(BarSeries {
                symbol: symbol.to_string(),
                interval,
                bars: vec![Bar {
                    timestamp: Utc.with_ymd_and_hms(2025, 6, 2, 0, 0, 0).unwrap(),
                    open: 10.0,
                    high: 12.0,
                    low: 9.0,
                    close: 11.0,
                    volume: 1000.0,
                }],
            })
        }
    }

    #[tokio::test]
    async fn second_fetch_is_served_from_memory() {
        let provider = Arc::new(CountingProvider {
            calls: AtomicUsize::new(0),
        });
        let fetcher = CachedFetcher::new(provider.clone());

        let first = fetcher.fetch("NQ=F", Interval::Daily).await.unwrap();
        let second = fetcher.fetch("NQ=F", Interval::Daily).await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);

        // Different interval is a different cache key.
        fetcher.fetch("NQ=F", Interval::Weekly).await.unwrap();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failures_become_none_and_are_retried() {
        let provider = Arc::new(CountingProvider {
            calls: AtomicUsize::new(0),
        });
        let fetcher = CachedFetcher::new(provider.clone());

        assert!(fetcher.fetch("BAD", Interval::Daily).await.is_none());
        assert!(fetcher.fetch("BAD", Interval::Daily).await.is_none());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }
}
