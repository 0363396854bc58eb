//! Time helpers
//!
//! Calendar dates cross the service boundary as `YYYY-MM-DD` strings and are
//! validated here; the history journal stores `i64` Unix millis.

use chrono::{NaiveDate, Utc};

use crate::utils::{AppError, AppResult};

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Today's date as `YYYY-MM-DD`
pub fn today_string() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid date format: {date}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2025-06-30").is_ok());
        assert!(parse_date("30/06/2025").is_err());
        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("").is_err());
    }
}
