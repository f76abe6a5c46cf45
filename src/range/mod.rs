//! Date-window truncation for fetched price series.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::FeedError;
use crate::models::PriceSeries;

/// Restrict `series` to the window `[start, end]`, returning a fresh series.
///
/// A `start` earlier than the earliest fetched date is rejected: the feed
/// only serves a five-year window, so such requests can never be satisfied.
/// An empty series has no earliest date and passes through untouched, and
/// `start > end` simply yields an empty series.
pub fn truncate(
    series: PriceSeries,
    start: Option<NaiveDate>,
    end: NaiveDate,
) -> Result<PriceSeries, FeedError> {
    if let (Some(start), Some(earliest)) = (start, series.earliest_date()) {
        if start < earliest {
            return Err(FeedError::OutOfRange { start, earliest });
        }
    }

    let before = series.len();
    let mut points = series.into_points();
    if let Some(start) = start {
        points.retain(|p| p.date >= start);
    }
    points.retain(|p| p.date <= end);
    debug!("Truncated {} rows to {}", before, points.len());

    Ok(PriceSeries::new(points))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
