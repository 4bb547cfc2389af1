//! Time helpers shared by the API layer and the order pipeline.

use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` date string
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
