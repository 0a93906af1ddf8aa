//! String validation functions
//!
//! Lengths are counted in Unicode scalar values, not bytes, so "José" is four
//! characters long.

use alloc::format;
use alloc::string::String;

/// Number of characters in `s`
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Validates that a value is present (non-empty)
///
/// Whitespace counts as content; values are never trimmed.
pub fn validate_required(s: &str, field: &str) -> Result<(), String> {
    if s.is_empty() {
        Err(format!("{} is a required field", field))
    } else {
        Ok(())
    }
}

/// Validates minimum string length
pub fn validate_min_length(s: &str, field: &str, min: usize) -> Result<(), String> {
    if char_len(s) >= min {
        Ok(())
    } else {
        Err(format!("{} must have at least {} characters", field, min))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(validate_required("x", "lastName").is_ok());
        assert!(validate_required(" ", "lastName").is_ok());
        assert_eq!(
            validate_required("", "lastName"),
            Err("lastName is a required field".into())
        );
    }

    #[test]
    fn test_min_length() {
        assert!(validate_min_length("hello", "firstName", 5).is_ok());
        assert_eq!(
            validate_min_length("abcd", "firstName", 5),
            Err("firstName must have at least 5 characters".into())
        );
        assert!(validate_min_length("", "firstName", 5).is_err());
    }

    #[test]
    fn test_length_counts_characters() {
        assert_eq!(char_len("José"), 4);
        assert!(validate_min_length("Zoë A", "firstName", 5).is_ok());
        assert!(validate_min_length("éééé", "firstName", 5).is_err());
    }
}
