use regex::Regex;
use std::sync::OnceLock;

use super::ApiError;

pub const MAX_INPUT_LENGTH: usize = 100;

fn lowercase_letters() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z]*$").expect("Invalid regex"))
}

/// Checks a calculate request's `inputString`.
///
/// All violated rules are reported together, joined by `"; "`.
pub fn validate_input_string(input: Option<&str>) -> Result<&str, ApiError> {
    let input = input.unwrap_or("");
    let mut violations = Vec::new();

    if input.trim().is_empty() {
        violations.push("Input string cannot be empty");
    }

    if input.chars().count() > MAX_INPUT_LENGTH {
        violations.push("Input string cannot exceed 100 characters");
    }

    if !lowercase_letters().is_match(input) {
        violations.push("Only lowercase letters are allowed");
    }

    if violations.is_empty() {
        Ok(input)
    } else {
        Err(ApiError::validation(violations.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<&str, ApiError>) -> String {
        match result {
            Err(ApiError::ValidationError(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_input_string_accepts_lowercase() {
        assert_eq!(validate_input_string(Some("flight")).unwrap(), "flight");
        assert!(validate_input_string(Some("a".repeat(100).as_str())).is_ok());
    }

    #[test]
    fn test_validate_input_string_rejects_empty() {
        assert_eq!(message(validate_input_string(None)), "Input string cannot be empty");
        assert_eq!(message(validate_input_string(Some(""))), "Input string cannot be empty");
    }

    #[test]
    fn test_validate_input_string_rejects_long_input() {
        assert_eq!(
            message(validate_input_string(Some("a".repeat(101).as_str()))),
            "Input string cannot exceed 100 characters"
        );
    }

    #[test]
    fn test_validate_input_string_rejects_other_characters() {
        for input in ["Flight", "flight1", "fli ght", "flïght", "flight!"] {
            assert_eq!(
                message(validate_input_string(Some(input))),
                "Only lowercase letters are allowed",
                "input {input:?}"
            );
        }
    }

    #[test]
    fn test_validate_input_string_reports_every_violation() {
        assert_eq!(
            message(validate_input_string(Some("   "))),
            "Input string cannot be empty; Only lowercase letters are allowed"
        );
        assert_eq!(
            message(validate_input_string(Some("A".repeat(101).as_str()))),
            "Input string cannot exceed 100 characters; Only lowercase letters are allowed"
        );
    }
}
