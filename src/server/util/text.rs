use crate::server::error::AppError;

/// Trims `value` and rejects it when blank or longer than `max_len` characters.
///
/// `field` names the value in the 400 message, e.g. "Title".
pub fn require_text(field: &str, value: &str, max_len: usize) -> Result<String, AppError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }

    if trimmed.chars().count() > max_len {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, max_len
        )));
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let value = require_text("Name", "  Lakers  ", 64).unwrap();
        assert_eq!(value, "Lakers");
    }

    #[test]
    fn rejects_blank_values() {
        let result = require_text("Name", "   ", 64);
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn rejects_values_over_the_limit() {
        let result = require_text("Name", &"x".repeat(65), 64);
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
