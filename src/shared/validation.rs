//! Field validation helpers
//!
//! Small structural checks shared by every request type. Each helper returns a
//! `SharedError::ValidationError` naming the offending field.

use std::sync::LazyLock;

use regex::Regex;

use crate::shared::error::SharedError;

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

/// Basic email shape check: `local@domain.tld`, no whitespace
pub fn valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// Reject empty or whitespace-only values
pub fn require(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, "is required"));
    }
    Ok(())
}

/// Require a character count within `min..=max`
pub fn require_len(field: &str, value: &str, min: usize, max: usize) -> Result<(), SharedError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(SharedError::validation(
            field,
            format!("must be between {} and {} characters", min, max),
        ));
    }
    Ok(())
}

/// Require a well-formed email address
pub fn require_email(field: &str, value: &str) -> Result<(), SharedError> {
    require(field, value)?;
    if !valid_email(value) {
        return Err(SharedError::validation(field, "invalid email format"));
    }
    Ok(())
}

/// Require a strictly positive number
pub fn require_positive<T>(field: &str, value: T) -> Result<(), SharedError>
where
    T: PartialOrd + Default,
{
    if value <= T::default() {
        return Err(SharedError::validation(field, "must be greater than zero"));
    }
    Ok(())
}

/// Require a 24-character hex object id
pub fn require_object_id(field: &str, value: &str) -> Result<(), SharedError> {
    if value.len() != 24 || !value.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(SharedError::validation(field, "must be a 24 character hex id"));
    }
    Ok(())
}
