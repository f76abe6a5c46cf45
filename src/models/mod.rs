use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Price point ───────────────────────────────────────────────────────────────

/// One day of prices, fields in canonical order: Date, Open, High, Low, Close.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

// ── Price series ──────────────────────────────────────────────────────────────

/// Ordered daily price history for a single ticker.
///
/// Row order is whatever the source delivered (ascending by date); nothing
/// here re-sorts. Every transformation consumes its input and returns a
/// fresh series.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PriceSeries {
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PricePoint> {
        self.points.iter()
    }

    /// Minimum date in the series, if any.
    pub fn earliest_date(&self) -> Option<NaiveDate> {
        self.iter().map(|p| p.date).min()
    }

    /// Maximum date in the series, if any.
    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.iter().map(|p| p.date).max()
    }

    pub fn into_points(self) -> Vec<PricePoint> {
        self.points
    }
}

// ── Raw feed row ──────────────────────────────────────────────────────────────

/// The five data columns of one raw feed row, named in the order the source
/// emits them: date, close, open, high, low.
#[derive(Debug, Clone, Default)]
pub struct RawFeedRow {
    pub date: Option<String>,
    pub close: Option<String>,
    pub open: Option<String>,
    pub high: Option<String>,
    pub low: Option<String>,
}
