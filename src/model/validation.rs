use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Validation errors for domain model fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("comment text cannot be empty")]
    EmptyComment,
    #[error("name cannot be empty")]
    EmptyName,
    #[error("invalid test id: {0}")]
    InvalidTestId(String),
}

static TEST_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)_(-?\d+)$").expect("valid hardcoded regex"));

/// Splits a canonical test id (`"{game_id}_{millis}"`) into its parts.
///
/// The split happens on the last underscore, so game ids may themselves
/// contain underscores.
pub(crate) fn split_test_id(raw: &str) -> Result<(String, i64), ValidationError> {
    let invalid = || ValidationError::InvalidTestId(raw.to_string());
    let caps = TEST_ID_RE.captures(raw).ok_or_else(invalid)?;
    let millis = caps[2].parse::<i64>().map_err(|_| invalid())?;
    Ok((caps[1].to_string(), millis))
}

/// Trims a user-supplied name and rejects it if nothing is left.
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    match name.trim() {
        "" => Err(ValidationError::EmptyName),
        trimmed => Ok(trimmed.to_string()),
    }
}

/// Trims comment text and rejects it if nothing is left.
pub fn validate_comment_text(text: &str) -> Result<String, ValidationError> {
    match text.trim() {
        "" => Err(ValidationError::EmptyComment),
        trimmed => Ok(trimmed.to_string()),
    }
}
