use chrono::NaiveDate;
use tracing::warn;

use crate::models::{PricePoint, PriceSeries, RawFeedRow};

// ── Field parsers ─────────────────────────────────────────────────────────────

/// Parse price text: strip everything except digits, dot, minus.
/// "1,234.56" → 1234.56 | "610.00" → 610.0
pub fn parse_price(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() || s == "N/A" || s == "-" || s == "—" {
        return None;
    }
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse().ok()
}

/// Parse dates: ISO first, then the looser shapes the feed has used.
/// Month-first is tried before day-first.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%m/%d/%Y") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%b %d, %Y") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%d %b %Y") {
        return Some(d);
    }

    None
}

// ── Raw row → PricePoint ──────────────────────────────────────────────────────

/// Convert one raw row into a typed point, reordering the source's
/// date/close/open/high/low emission into canonical field order.
/// Returns `None` if any of the five fields is missing or unparseable.
pub fn clean_row(row: &RawFeedRow) -> Option<PricePoint> {
    let date = parse_date(row.date.as_deref()?)?;
    let close = parse_price(row.close.as_deref()?)?;
    let open = parse_price(row.open.as_deref()?)?;
    let high = parse_price(row.high.as_deref()?)?;
    let low = parse_price(row.low.as_deref()?)?;

    Some(PricePoint {
        date,
        open,
        high,
        low,
        close,
    })
}

/// Clean a batch of raw rows into a series, dropping incomplete rows.
pub fn clean_rows(rows: Vec<RawFeedRow>) -> PriceSeries {
    let mut points = Vec::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        match clean_row(row) {
            Some(point) => points.push(point),
            None => warn!("Dropping row {}: missing or unparseable field", i + 1),
        }
    }

    PriceSeries::new(points)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str, close: &str, open: &str, high: &str, low: &str) -> RawFeedRow {
        RawFeedRow {
            date: Some(date.to_string()),
            close: Some(close.to_string()),
            open: Some(open.to_string()),
            high: Some(high.to_string()),
            low: Some(low.to_string()),
        }
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("610.00"), Some(610.0));
        assert_eq!(parse_price("1,234.56"), Some(1234.56));
        assert_eq!(parse_price(" 98.5 "), Some(98.5));
        assert_eq!(parse_price("-1.25"), Some(-1.25));
        assert_eq!(parse_price("N/A"), None);
        assert_eq!(parse_price("-"), None);
        assert_eq!(parse_price(""), None);
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2020, 1, 3).unwrap();
        assert_eq!(parse_date("2020-01-03"), Some(expected));
        assert_eq!(parse_date("1/3/2020"), Some(expected));
        assert_eq!(parse_date("Jan 3, 2020"), Some(expected));
        assert_eq!(parse_date("3 Jan 2020"), Some(expected));
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn test_clean_row_reorders_into_canonical_fields() {
        // Raw emission order is date, close, open, high, low.
        let point = clean_row(&raw("2020-01-01", "100.5", "99.0", "101.0", "98.5")).unwrap();

        assert_eq!(point.date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert_eq!(point.open, 99.0);
        assert_eq!(point.high, 101.0);
        assert_eq!(point.low, 98.5);
        assert_eq!(point.close, 100.5);
    }

    #[test]
    fn test_clean_row_drops_any_null() {
        assert!(clean_row(&raw("2020-01-01", "N/A", "99.0", "101.0", "98.5")).is_none());
        assert!(clean_row(&raw("", "100.5", "99.0", "101.0", "98.5")).is_none());
        assert!(clean_row(&raw("2020-01-01", "100.5", "99.0", "101.0", "")).is_none());

        let mut missing = raw("2020-01-01", "100.5", "99.0", "101.0", "98.5");
        missing.high = None;
        assert!(clean_row(&missing).is_none());
    }

    #[test]
    fn test_clean_rows_keeps_source_order() {
        let rows = vec![
            raw("2020-01-01", "10.0", "9.0", "11.0", "8.0"),
            raw("2020-01-02", "junk", "9.0", "11.0", "8.0"),
            raw("2020-01-03", "12.0", "11.0", "13.0", "10.0"),
        ];
        let series = clean_rows(rows);

        assert_eq!(series.len(), 2);
        assert_eq!(
            series.points[0].date,
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
        assert_eq!(
            series.points[1].date,
            NaiveDate::from_ymd_opt(2020, 1, 3).unwrap()
        );
    }
}
