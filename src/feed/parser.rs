use csv::ReaderBuilder;

use crate::error::FeedError;
use crate::models::RawFeedRow;

/// The feed separates fields with a literal quote character, not a comma.
const FIELD_DELIMITER: u8 = b'"';

/// A raw row carries nine columns: date, close, open, high, low, then four
/// header-mangled extras with no data in them.
pub const RAW_COLUMN_COUNT: usize = 9;

/// Parse a raw feed body into rows, keeping only the five data columns.
///
/// The header row must carry exactly [`RAW_COLUMN_COUNT`] columns; anything
/// else means the source format has drifted and the parse fails before any
/// row is read. Data rows of a different width fail in the reader itself.
pub fn parse_feed_body(body: &str) -> Result<Vec<RawFeedRow>, FeedError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .quoting(false)
        .has_headers(true)
        .from_reader(body.as_bytes());

    let header_len = reader.headers()?.len();
    if header_len != RAW_COLUMN_COUNT {
        return Err(FeedError::UnexpectedShape {
            expected: RAW_COLUMN_COUNT,
            got: header_len,
        });
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(RawFeedRow {
            date: record.get(0).map(|s| s.to_string()),
            close: record.get(1).map(|s| s.to_string()),
            open: record.get(2).map(|s| s.to_string()),
            high: record.get(3).map(|s| s.to_string()),
            low: record.get(4).map(|s| s.to_string()),
        });
    }

    Ok(rows)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
