//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} must be a non-empty string", field_name))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_strings() {
        assert!(validate_not_empty("", "HOST").is_err());
        assert!(validate_not_empty("   ", "HOST").is_err());
        assert!(validate_not_empty("127.0.0.1", "HOST").is_ok());
    }
}
