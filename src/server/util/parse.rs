use crate::server::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Parses a snowflake supplied by an API client.
///
/// Unlike `parse_u64_from_string`, failure here is the caller's fault and maps to a
/// 400 Bad Request naming the offending field.
///
/// # Arguments
/// - `field` - Name of the request field, used in the error message
/// - `value` - Raw value from the request
pub fn parse_snowflake(field: &str, value: &str) -> Result<u64, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Missing required fields".to_string()));
    }

    trimmed
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| AppError::BadRequest(format!("{} must be a Discord snowflake", field)))
}
