// ==========================================
// Quadrant Engine - Request Validator
// ==========================================
// Responsibility: reject malformed assignment requests before the
// engine runs; the engine itself assumes well-formed input
// ==========================================

use chrono::{NaiveDate, NaiveTime};

use crate::api::error::{ApiError, ApiResult};
use crate::domain::assignment::AssignmentRequest;

/// Validates an assignment request.
///
/// # Rules
/// - `eventId`, `department`, `startDate`, `endDate` are required;
///   a missing one yields `InvalidInput("Missing <field>")`, the
///   message the legacy endpoint returned.
/// - Dates must be `yyyy-MM-dd`; times, when present, `HH:MM` (a
///   seconds suffix is tolerated).
///
/// # Returns
/// - `Ok(())` when the request may enter the engine
/// - `Err(ApiError::InvalidInput)` naming the first offending field
pub fn validate(request: &AssignmentRequest) -> ApiResult<()> {
    require(&request.event_id, "eventId")?;
    require(&request.department, "department")?;
    require(&request.start_date, "startDate")?;
    require(&request.end_date, "endDate")?;

    check_date(&request.start_date, "startDate")?;
    check_date(&request.end_date, "endDate")?;
    check_time(request.start_time.as_deref(), "startTime")?;
    check_time(request.end_time.as_deref(), "endTime")?;

    Ok(())
}

fn require(value: &str, field: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidInput(format!("Missing {}", field)));
    }
    Ok(())
}

fn check_date(raw: &str, field: &str) -> ApiResult<()> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        ApiError::InvalidInput(format!("{} must use the yyyy-MM-dd format", field))
    })?;
    Ok(())
}

fn check_time(raw: Option<&str>, field: &str) -> ApiResult<()> {
    let Some(raw) = raw else {
        return Ok(());
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| ApiError::InvalidInput(format!("{} must use the HH:MM format", field)))?;
    Ok(())
}
