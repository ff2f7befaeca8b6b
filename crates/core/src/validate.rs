//! Input validation helpers used by handlers on top of the derive-based
//! DTO validation.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::CoreError;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid regex")
    })
}

/// Check an email address against a pragmatic (not RFC-complete) pattern.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Require a non-blank string field, returning a `Validation` error naming
/// the field otherwise.
pub fn require_non_blank(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::Validation(format!("{field} must not be blank")))
    } else {
        Ok(())
    }
}

/// Require a score to be non-negative and, when a maximum is defined, within
/// it.
pub fn require_score_in_range(score: f64, max_score: Option<f64>) -> Result<(), CoreError> {
    if score < 0.0 {
        return Err(CoreError::Validation(format!(
            "score must be non-negative, got {score}"
        )));
    }
    if let Some(max) = max_score {
        if score > max {
            return Err(CoreError::Validation(format!(
                "score {score} exceeds the assessment maximum of {max}"
            )));
        }
    }
    Ok(())
}
