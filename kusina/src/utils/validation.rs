//! Input validation helpers
//!
//! Centralized text length constants and validation functions. Validation is
//! performed eagerly at the service boundary, before any write is issued.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names and descriptions (discount descriptions, disability descriptors)
pub const MAX_DESC_LEN: usize = 500;

/// Member identifiers: 12-digit numeric strings
pub const MAX_MEMBER_ID_LEN: usize = 12;

/// Government-issued Senior/PWD ID numbers
pub const MAX_SPECIAL_ID_LEN: usize = 12;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that a rate lies in [0, 1].
pub fn validate_rate(value: f64, field: &str) -> Result<(), AppError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(AppError::Validation(format!(
            "{field} must be between 0 and 1 (got {value})"
        )));
    }
    Ok(())
}

/// Validate that a monetary amount is strictly positive.
pub fn validate_positive_amount(value: f64, field: &str) -> Result<(), AppError> {
    if !(value > 0.0) {
        return Err(AppError::Validation(format!(
            "{field} must be positive (got {value})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_rejects_blank() {
        assert!(validate_required_text("  ", "name", 10).is_err());
        assert!(validate_required_text("ok", "name", 10).is_ok());
    }

    #[test]
    fn test_required_text_rejects_overlong() {
        assert!(validate_required_text("1234567890123", "ID number", MAX_SPECIAL_ID_LEN).is_err());
        assert!(validate_required_text("123456789012", "ID number", MAX_SPECIAL_ID_LEN).is_ok());
    }

    #[test]
    fn test_rate_bounds() {
        assert!(validate_rate(0.0, "rate").is_ok());
        assert!(validate_rate(1.0, "rate").is_ok());
        assert!(validate_rate(-0.01, "rate").is_err());
        assert!(validate_rate(1.01, "rate").is_err());
    }

    #[test]
    fn test_positive_amount() {
        assert!(validate_positive_amount(0.01, "paid amount").is_ok());
        assert!(validate_positive_amount(0.0, "paid amount").is_err());
        assert!(validate_positive_amount(-5.0, "paid amount").is_err());
        assert!(validate_positive_amount(f64::NAN, "paid amount").is_err());
    }
}
