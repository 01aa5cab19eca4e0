//! Syntactic email format check.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

// local@domain.tld shape: no whitespace or extra "@", and a dot in the domain.
static EMAIL_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Outcome of an email format check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailCheck {
    pub is_valid: bool,
    pub message: String,
}

/// Check whether a candidate string looks like an email address.
///
/// This is a syntactic check only - no DNS lookup, no normalization.
pub fn validate(candidate: &str) -> EmailCheck {
    let is_valid = EMAIL_FORMAT.is_match(candidate);
    EmailCheck {
        is_valid,
        message: if is_valid {
            "Valid email format!"
        } else {
            "Invalid email format"
        }
        .to_string(),
    }
}
