//! Provider abstraction for market data sources.
//!
//! This module defines the [`DataProvider`] trait, which serves as a unified
//! interface for fetching time-series bar data from any market data vendor.
//!
//! Each concrete provider implementation (such as the Yahoo chart provider)
//! should implement [`DataProvider`] to handle vendor-specific API logic and
//! response normalization.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn DataProvider`) for runtime selection of providers.

pub mod yahoo;

use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::{bar_series::BarSeries, interval::Interval};

/// Trait for fetching time-series bar data from a market data provider.
///
/// Implement this trait for each concrete data vendor. One call fetches the
/// full lookback window for a single symbol; batch behavior (looping over a
/// symbol list, caching, skip-on-failure) lives above this trait.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Fetches the historical bar series for `symbol` at `interval`.
    ///
    /// # Returns
    ///
    /// * `Ok(BarSeries)` - The raw series, ordered by ascending timestamp.
    ///   Rows with missing fields are already dropped, but placeholder rows
    ///   (zero volume, flat range) may still be present.
    /// * `Err(ProviderError)` - If the request fails, the symbol is unknown,
    ///   or the feed returns no usable data.
    async fn fetch_bars(&self, symbol: &str, interval: Interval)
    -> Result<BarSeries, ProviderError>;
}

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// User agent string contains invalid characters.
    #[snafu(display("Invalid user agent: {source}"))]
    InvalidUserAgent {
        source: reqwest::header::InvalidHeaderValue,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a `DataProvider` implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[snafu(display("API request failed: {source}"))]
    Reqwest {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The provider's API returned a specific error message.
    #[snafu(display("API error: {message}"))]
    Api {
        message: String,
        backtrace: Backtrace,
    },

    /// The feed has no data for this symbol (unknown or delisted ticker).
    #[snafu(display("No data for symbol {symbol:?}"))]
    UnknownSymbol {
        symbol: String,
        backtrace: Backtrace,
    },

    /// The feed answered but the payload was empty or structurally unusable.
    #[snafu(display("Empty or malformed feed for symbol {symbol:?}: {message}"))]
    EmptyFeed {
        symbol: String,
        message: String,
        backtrace: Backtrace,
    },

    /// An error during provider configuration or initialization.
    #[snafu(display("Provider initialization error: {source}"))]
    Init {
        #[snafu(backtrace)]
        source: ProviderInitError,
    },
}
