use chrono::NaiveDate;

use crate::error::ApiError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ApiError::BadRequest(format!("Invalid {field} format, expected YYYY-MM-DD")))
}

pub fn require_non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str, ApiError> {
    if value.trim().is_empty() {
        Err(ApiError::BadRequest(format!("{field} is required")))
    } else {
        Ok(value)
    }
}

pub fn validate_capacity(value: u32) -> Result<u32, ApiError> {
    if value == 0 {
        Err(ApiError::BadRequest("capacity must be greater than 0".into()))
    } else {
        Ok(value)
    }
}

pub fn validate_range(start: NaiveDate, end: NaiveDate) -> Result<(), ApiError> {
    if start > end {
        Err(ApiError::BadRequest(
            "start date cannot be after end date".into(),
        ))
    } else {
        Ok(())
    }
}
