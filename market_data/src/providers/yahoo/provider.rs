use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use nonzero_ext::nonzero;
use reqwest::{Client, header};
use snafu::ResultExt;

use crate::{
    models::{bar_series::BarSeries, interval::Interval},
    providers::{
        ApiSnafu, ClientBuildSnafu, DataProvider, EmptyFeedSnafu, InvalidUserAgentSnafu,
        ProviderError, ProviderInitError, ReqwestSnafu, UnknownSymbolSnafu,
        yahoo::{params::construct_params, response::ChartEnvelope},
    },
};

const BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// The endpoint serves browsers; requests without a browser-like UA get 429'd.
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct YahooProvider {
    client: Client,
    limiter: DefaultDirectRateLimiter,
}

impl YahooProvider {
    /// Creates a new Yahoo chart provider.
    ///
    /// The HTTP client carries a per-request timeout; a timed-out fetch
    /// surfaces as an ordinary [`ProviderError::Reqwest`] so callers treat it
    /// like any other failed symbol.
    pub fn new() -> Result<Self, ProviderInitError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(USER_AGENT).context(InvalidUserAgentSnafu)?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context(ClientBuildSnafu)?;

        // Two requests per second keeps a full default-list scan well under
        // the endpoint's throttling threshold.
        let limiter = RateLimiter::direct(Quota::per_second(nonzero!(2u32)));

        Ok(Self { client, limiter })
    }
}

#[async_trait]
impl DataProvider for YahooProvider {
    async fn fetch_bars(
        &self,
        symbol: &str,
        interval: Interval,
    ) -> Result<BarSeries, ProviderError> {
        self.limiter.until_ready().await;

        let url = format!("{BASE_URL}/{symbol}");
        let query = construct_params(interval, Utc::now());

        tracing::debug!(symbol, interval = %interval, "requesting chart data");

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .context(ReqwestSnafu)?;

        if !response.status().is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return ApiSnafu { message }.fail();
        }

        let envelope = response.json::<ChartEnvelope>().await.context(ReqwestSnafu)?;

        if let Some(err) = envelope.chart.error {
            return ApiSnafu {
                message: format!("{}: {}", err.code, err.description),
            }
            .fail();
        }

        let result = envelope
            .chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| UnknownSymbolSnafu { symbol }.build())?;

        let bars = result.into_bars();
        if bars.is_empty() {
            return EmptyFeedSnafu {
                symbol,
                message: "no complete rows in feed",
            }
            .fail();
        }

        Ok(BarSeries {
            symbol: symbol.to_string(),
            interval,
            bars,
        })
    }
}
