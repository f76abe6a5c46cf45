use chrono::NaiveDate;
use thiserror::Error;

/// Everything that can go wrong while fetching or truncating a price series.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network failure, timeout, or non-2xx status. Propagated unchanged;
    /// the feed is tried exactly once.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Row-level failure from the delimited-text reader.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// The raw parse did not produce the known column layout.
    #[error("feed returned {got} raw columns, expected {expected}: the source format may have changed")]
    UnexpectedShape { expected: usize, got: usize },

    /// Ticker symbol was empty after trimming.
    #[error("ticker symbol must not be empty")]
    EmptyTicker,

    /// Requested start date falls before the fetched window.
    #[error("start date {start} precedes earliest available date {earliest}: the feed only serves a 5-year window")]
    OutOfRange {
        start: NaiveDate,
        earliest: NaiveDate,
    },
}
