//! Yahoo Finance chart-API provider.
//!
//! Fetches daily/weekly OHLCV history from the public `v8/finance/chart`
//! endpoint. No authentication is required, but the endpoint rejects requests
//! without a browser-like user agent and throttles aggressive callers, so the
//! provider carries a default header set and a small rate limiter.

mod params;
mod provider;
mod response;

pub use provider::YahooProvider;
