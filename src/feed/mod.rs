//! Bloomberg web price-history feed: URL construction, retrieval, decoding.

pub mod cleaner;
pub mod http_client;
pub mod parser;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tracing::{debug, info};
use url::form_urlencoded;

use crate::config::FeedConfig;
use crate::error::FeedError;
use crate::models::PriceSeries;
use crate::range;

use self::http_client::HttpClient;

// Fixed query parameters: a five-year daily window with the date column and
// the four price fields (last, open, high, low) in the order the feed emits
// them.
const FEED_PID: &str = "webpxta";
const FEED_TIME_PERIOD: &str = "5Y";
const FEED_OUTFIELDS: &str = "HDATE,PR005-H,PR006-H,PR007-H,PR008-H";

// ── Source trait ──────────────────────────────────────────────────────────────

/// Swappable price-history source abstraction.
#[async_trait]
pub trait PriceHistorySource: Send + Sync {
    /// Fetch the full five-year daily window for `ticker`.
    async fn fetch_history(&self, ticker: &str) -> Result<PriceSeries, FeedError>;

    /// Fetch `ticker` and truncate the result to `[start, end]`.
    ///
    /// `end` defaults to the current UTC date, resolved when the call is
    /// made. A `start` earlier than the fetched window is an error.
    async fn get_price_series(
        &self,
        ticker: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<PriceSeries, FeedError> {
        let series = self.fetch_history(ticker).await?;
        let end = end.unwrap_or_else(|| Utc::now().date_naive());
        range::truncate(series, start, end)
    }
}

// ── Bloomberg feed ────────────────────────────────────────────────────────────

pub struct BloombergFeed {
    client: HttpClient,
    base_url: String,
}

impl BloombergFeed {
    pub fn new(config: &FeedConfig) -> Result<Self, FeedError> {
        Ok(Self {
            client: HttpClient::new(config)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL for a ticker's five-year history. Only the ticker varies; it is
    /// percent-encoded into the `Securities` parameter.
    fn history_url(&self, ticker: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(ticker.as_bytes()).collect();
        format!(
            "{}/apps/data?pid={}&Securities={}&TimePeriod={}&Outfields={}",
            self.base_url, FEED_PID, encoded, FEED_TIME_PERIOD, FEED_OUTFIELDS
        )
    }
}

#[async_trait]
impl PriceHistorySource for BloombergFeed {
    async fn fetch_history(&self, ticker: &str) -> Result<PriceSeries, FeedError> {
        let ticker = normalise_ticker(ticker)?;
        let url = self.history_url(&ticker);
        debug!("Fetching history for {}", ticker);

        let body = self.client.get_text(&url).await?;
        let series = decode_history(&body)?;

        info!(
            "{}: {} rows (latest: {:?})",
            ticker,
            series.len(),
            series.latest_date()
        );
        Ok(series)
    }
}

// ── Decoding ──────────────────────────────────────────────────────────────────

/// Decode a raw feed body into a cleaned series: parse the quote-delimited
/// rows, then drop anything incomplete.
pub fn decode_history(body: &str) -> Result<PriceSeries, FeedError> {
    let rows = parser::parse_feed_body(body)?;
    Ok(cleaner::clean_rows(rows))
}

/// Trim and uppercase a ticker symbol; empty input is rejected.
pub fn normalise_ticker(ticker: &str) -> Result<String, FeedError> {
    let ticker = ticker.trim().to_uppercase();
    if ticker.is_empty() {
        return Err(FeedError::EmptyTicker);
    }
    Ok(ticker)
}

// ── Convenience entry point ───────────────────────────────────────────────────

/// Fetch up to five years of daily OHLC history for `ticker`, truncated to
/// the requested window, using a feed with default configuration.
pub async fn get_price_series(
    ticker: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<PriceSeries, FeedError> {
    let feed = BloombergFeed::new(&FeedConfig::default())?;
    feed.get_price_series(ticker, start, end).await
}

// ── Tests ─────────────────────────────────────────────────────────────────────
