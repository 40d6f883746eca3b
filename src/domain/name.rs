//! Contact name validation.

use super::errors::ValidationError;

/// Any non-empty string is a valid name, whitespace-only included.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
}

/// Validate a name, returning `ValidationError::EmptyName` on failure.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(ValidationError::EmptyName)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_name() {
        assert!(is_valid_name("Ann"));
        assert!(is_valid_name("   "));
        assert!(is_valid_name("Анна"));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Bob").is_ok());
        assert_eq!(validate_name(""), Err(ValidationError::EmptyName));
    }
}
