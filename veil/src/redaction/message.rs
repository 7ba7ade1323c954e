//! Free-text sanitization for log messages.
//!
//! Three passes run over the whole message, always in this order:
//! 1. email addresses, each replaced by its [`mask_email`] form
//! 2. API-key-like tokens (`sk-1234567890abcdef`), replaced by [`MASK_TOKEN`]
//! 3. UUID-like identifiers (8-4-4-4-12 hex, any case), replaced by [`MASK_TOKEN`]
//!
//! Masks produced by an earlier pass contain nothing a later pass can match.

use std::sync::LazyLock;

use regex::{Captures, NoExpand, Regex};

use crate::policy::{MASK_TOKEN, mask_email};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("email pattern must compile")
});

static API_KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[a-zA-Z]{2,4}-[a-zA-Z0-9]{16,}\b").expect("api key pattern must compile")
});

static UUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}\b")
        .expect("uuid pattern must compile")
});

/// Removes emails, API keys and UUIDs from a log message.
///
/// Messages without any match come back unchanged.
///
/// # Example
/// ```
/// use veil::sanitize_log_message;
///
/// assert_eq!(
///     sanitize_log_message("User user@example.com logged in"),
///     "User u***@example.com logged in"
/// );
/// assert_eq!(sanitize_log_message("API key sk-1234567890abcdef used"), "API key *** used");
/// ```
#[must_use]
pub fn sanitize_log_message(message: &str) -> String {
    let message =
        EMAIL_PATTERN.replace_all(message, |caps: &Captures<'_>| mask_email(&caps[0]));
    let message = API_KEY_PATTERN.replace_all(&message, NoExpand(MASK_TOKEN));
    let message = UUID_PATTERN.replace_all(&message, NoExpand(MASK_TOKEN));
    message.into_owned()
}
