//! Text masking strategies for string-like values.
//!
//! This module provides [`TextRedactionPolicy`] and the [`mask_email`] transform.
//! Policies are pure string transformations: they do not inspect field names or
//! decide whether a value is sensitive.

/// Fixed replacement substituted for a redacted value.
pub const MASK_TOKEN: &str = "***";

/// Masks the local part of an email address while keeping the domain.
///
/// Only the first character of the local part survives. A local part of zero or
/// one character is kept as-is. Inputs without an `@` (including the empty
/// string) collapse to [`MASK_TOKEN`]. The domain is emitted verbatim.
///
/// # Example
/// ```
/// use veil::mask_email;
///
/// assert_eq!(mask_email("user@example.com"), "u***@example.com");
/// assert_eq!(mask_email("a@b.co"), "a***@b.co");
/// assert_eq!(mask_email("invalid-email"), "***");
/// ```
#[must_use]
pub fn mask_email(email: &str) -> String {
    let Some((local, domain)) = email.split_once('@') else {
        return MASK_TOKEN.to_string();
    };

    // Empty or single-character local parts are emitted unchanged.
    let visible = local
        .chars()
        .next()
        .map_or("", |first| &local[..first.len_utf8()]);

    format!("{visible}{MASK_TOKEN}@{domain}")
}

/// A masking strategy for string-like values.
///
/// All strategies are total and return an owned `String`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRedactionPolicy {
    /// Replace the entire value with [`MASK_TOKEN`].
    Full,
    /// Keep the first local-part character and the domain, mask the rest.
    Email,
}

impl TextRedactionPolicy {
    /// Constructs [`TextRedactionPolicy::Full`] using [`MASK_TOKEN`].
    #[must_use]
    pub const fn default_full() -> Self {
        Self::Full
    }

    /// Email-specific policy, see [`mask_email`].
    #[must_use]
    pub const fn email() -> Self {
        Self::Email
    }

    /// Applies the policy to `value`.
    ///
    /// This method is total (it does not return errors).
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        match self {
            TextRedactionPolicy::Full => MASK_TOKEN.to_string(),
            TextRedactionPolicy::Email => mask_email(value),
        }
    }
}

impl std::default::Default for TextRedactionPolicy {
    fn default() -> Self {
        Self::default_full()
    }
}
