pub mod clothing_deposit;
pub mod dashboard;
pub mod reservation;
pub mod seed;
pub mod shift;
pub mod shift_report;
pub mod time_entry;
pub mod user;

use crate::error::{ServiceError, ServiceResult};
use sea_orm::prelude::DateTime;

/// Rejects empty or whitespace-only required text, returning it trimmed
pub(crate) fn require_text(field: &str, value: String) -> ServiceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_owned())
}

/// A time span must end after it starts
pub(crate) fn validate_range(start: DateTime, end: DateTime) -> ServiceResult<()> {
    if end <= start {
        return Err(ServiceError::validation("end must be after start"));
    }
    Ok(())
}

/// Money amounts are finite and never negative
pub(crate) fn validate_amount(field: &str, value: f64) -> ServiceResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ServiceError::validation(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(())
}
