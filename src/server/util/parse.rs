use crate::server::error::AppError;

/// Parses a resource id taken from the request path.
///
/// Non-numeric or out of range ids can never match a stored row, so they are
/// reported the same way as an unknown id.
///
/// # Arguments
/// - `value` - Raw path segment
/// - `not_found` - Resource-specific message returned when parsing fails
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed id
/// - `Err(AppError::NotFound)` - The segment is not a valid id
pub fn parse_id(value: &str, not_found: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .map_err(|_| AppError::NotFound(not_found.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numeric_id() {
        assert_eq!(parse_id("42", "missing").unwrap(), 42);
    }

    #[test]
    fn non_numeric_id_is_not_found() {
        let err = parse_id("blah", "Match does not exist").unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "Match does not exist"));
    }
}
