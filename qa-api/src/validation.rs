//! Field validators applied to raw request input before anything is persisted.
//!
//! Every validator takes the raw string and returns the normalized value.
//! Text validators always run the non-empty check first, so the length and
//! shape checks see trimmed text. Lengths are measured in characters, not
//! bytes.

use thiserror::Error;
use uuid::Uuid;

pub const QUESTION_TEXT_MIN_CHARS: usize = 10;
pub const QUESTION_TEXT_MAX_CHARS: usize = 1000;
pub const ANSWER_TEXT_MIN_CHARS: usize = 5;
pub const ANSWER_TEXT_MAX_CHARS: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Text must not be empty.")]
    Empty,

    #[error("Ensure this field has at least {min} characters (it has {actual}).")]
    TooShort { min: usize, actual: usize },

    #[error("Ensure this field has no more than {max} characters (it has {actual}).")]
    TooLong { max: usize, actual: usize },

    #[error("Question text must end with '?'.")]
    MissingQuestionMark,

    #[error("Must be a valid UUID.")]
    BadUuid,
}

impl ValidationError {
    /// Stable machine-readable code for the failure
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::Empty => "empty",
            ValidationError::TooShort { .. } => "too_short",
            ValidationError::TooLong { .. } => "too_long",
            ValidationError::MissingQuestionMark => "missing_question_mark",
            ValidationError::BadUuid => "bad_uuid",
        }
    }
}

pub fn validate_non_empty(text: &str) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(trimmed.to_string())
}

/// Accepts any UUID version or variant in its string forms and returns the
/// lowercase hyphenated representation.
pub fn validate_uuid(value: &str) -> Result<String, ValidationError> {
    Uuid::parse_str(value)
        .map(|uuid| uuid.hyphenated().to_string())
        .map_err(|_| ValidationError::BadUuid)
}

pub fn validate_question_text(text: &str) -> Result<String, ValidationError> {
    let text = validate_non_empty(text)?;
    check_length(&text, QUESTION_TEXT_MIN_CHARS, QUESTION_TEXT_MAX_CHARS)?;

    if !text.ends_with('?') {
        return Err(ValidationError::MissingQuestionMark);
    }

    Ok(text)
}

pub fn validate_answer_text(text: &str) -> Result<String, ValidationError> {
    let text = validate_non_empty(text)?;
    check_length(&text, ANSWER_TEXT_MIN_CHARS, ANSWER_TEXT_MAX_CHARS)?;
    Ok(text)
}

fn check_length(text: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let actual = text.chars().count();
    if actual < min {
        return Err(ValidationError::TooShort { min, actual });
    }
    if actual > max {
        return Err(ValidationError::TooLong { max, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_rejects_whitespace() {
        for text in ["", " ", "\t", "\n  \r\n", "\u{3000}"] {
            assert_eq!(validate_non_empty(text), Err(ValidationError::Empty), "{text:?}");
        }
    }

    #[test]
    fn test_non_empty_trims() {
        assert_eq!(validate_non_empty("  hello \n").unwrap(), "hello");
    }

    #[test]
    fn test_uuid_accepts_canonical_form() {
        assert_eq!(
            validate_uuid("123e4567-e89b-12d3-a456-426614174000").unwrap(),
            "123e4567-e89b-12d3-a456-426614174000"
        );
    }

    #[test]
    fn test_uuid_normalizes_case_and_simple_form() {
        assert_eq!(
            validate_uuid("123E4567-E89B-12D3-A456-426614174000").unwrap(),
            "123e4567-e89b-12d3-a456-426614174000"
        );
        assert_eq!(
            validate_uuid("123e4567e89b12d3a456426614174000").unwrap(),
            "123e4567-e89b-12d3-a456-426614174000"
        );
    }

    #[test]
    fn test_uuid_rejects_garbage() {
        for value in ["not-a-uuid", "", "123e4567-e89b-12d3-a456", "zzze4567-e89b-12d3-a456-426614174000"] {
            assert_eq!(validate_uuid(value), Err(ValidationError::BadUuid), "{value:?}");
        }
    }

    #[test]
    fn test_question_text_returns_trimmed() {
        assert_eq!(
            validate_question_text("   What is the capital of France?  ").unwrap(),
            "What is the capital of France?"
        );
    }

    #[test]
    fn test_question_text_counts_characters_not_bytes() {
        // 20 characters, 37 bytes
        assert_eq!(
            validate_question_text("Это тестовый вопрос?").unwrap(),
            "Это тестовый вопрос?"
        );
        // 9 Cyrillic characters plus '?' is exactly the minimum
        assert!(validate_question_text("Почемутак?").is_ok());
    }

    #[test]
    fn test_question_text_too_short() {
        assert_eq!(
            validate_question_text("Hi?"),
            Err(ValidationError::TooShort { min: 10, actual: 3 })
        );
        // padding does not count towards the length
        assert!(matches!(
            validate_question_text("      Hi?       "),
            Err(ValidationError::TooShort { .. })
        ));
    }

    #[test]
    fn test_question_text_length_bounds() {
        let at_max = format!("{}?", "a".repeat(QUESTION_TEXT_MAX_CHARS - 1));
        assert!(validate_question_text(&at_max).is_ok());

        let over_max = format!("{}?", "a".repeat(QUESTION_TEXT_MAX_CHARS));
        assert_eq!(
            validate_question_text(&over_max),
            Err(ValidationError::TooLong { max: 1000, actual: 1001 })
        );
    }

    #[test]
    fn test_question_text_requires_question_mark() {
        assert_eq!(
            validate_question_text("This is long enough but wrong."),
            Err(ValidationError::MissingQuestionMark)
        );
        assert_eq!(
            validate_question_text("Is the mark in the middle? no"),
            Err(ValidationError::MissingQuestionMark)
        );
    }

    #[test]
    fn test_question_text_empty_checked_first() {
        assert_eq!(validate_question_text("    "), Err(ValidationError::Empty));
    }

    #[test]
    fn test_answer_text_bounds() {
        assert_eq!(validate_answer_text("  Yes!  ").unwrap_err().code(), "too_short");
        assert_eq!(validate_answer_text(" Sure. ").unwrap(), "Sure.");
        assert_eq!(
            validate_answer_text("Тестовый ответ на вопрос").unwrap(),
            "Тестовый ответ на вопрос"
        );

        let at_max = "б".repeat(ANSWER_TEXT_MAX_CHARS);
        assert!(validate_answer_text(&at_max).is_ok());

        let over_max = "б".repeat(ANSWER_TEXT_MAX_CHARS + 1);
        assert_eq!(validate_answer_text(&over_max).unwrap_err().code(), "too_long");
    }

    #[test]
    fn test_answer_text_does_not_require_question_mark() {
        assert!(validate_answer_text("No question mark here").is_ok());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ValidationError::Empty.code(), "empty");
        assert_eq!(ValidationError::BadUuid.code(), "bad_uuid");
        assert_eq!(ValidationError::MissingQuestionMark.code(), "missing_question_mark");
    }
}
