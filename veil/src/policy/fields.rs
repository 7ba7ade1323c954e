//! Field-name classification for flat records.
//!
//! A record field is sensitive when its lower-cased name is one of
//! [`SENSITIVE_KEYS`], or when the name contains `email`/`mail` anywhere. The
//! second rule is a substring match on purpose: `contact_email`, `MailAddress`
//! and friends all receive the partial email mask.
//!
//! ```rust
//! use veil::{FieldClass, TextRedactionPolicy};
//!
//! assert_eq!(FieldClass::of("Password"), FieldClass::Secret);
//! assert_eq!(FieldClass::of("contact_email"), FieldClass::Email);
//! assert_eq!(FieldClass::of("name").policy(), None);
//! assert_eq!(FieldClass::of("token").policy(), Some(TextRedactionPolicy::default_full()));
//! ```

use super::text::TextRedactionPolicy;

/// Lower-cased field names whose values are always masked.
pub const SENSITIVE_KEYS: &[&str] = &[
    "email",
    "mail",
    "e_mail",
    "password",
    "passwd",
    "pwd",
    "token",
    "api_key",
    "secret",
    "phone",
    "tel",
    "mobile",
    "ssn",
    "social_security_number",
    "credit_card",
    "card_number",
];

const EMAIL_MARKERS: [&str; 2] = ["email", "mail"];

/// How a record field is treated, decided from its name alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldClass {
    /// Email-like field: partial mask that keeps the domain.
    Email,
    /// Confidential field: replaced by the mask token whatever its type.
    Secret,
    /// Anything else: passed through untouched.
    Plain,
}

impl FieldClass {
    /// Classifies a field name. Comparison is case-insensitive.
    #[must_use]
    pub fn of(key: &str) -> Self {
        let key = key.to_lowercase();
        if EMAIL_MARKERS.iter().any(|marker| key.contains(marker)) {
            Self::Email
        } else if SENSITIVE_KEYS.contains(&key.as_str()) {
            Self::Secret
        } else {
            Self::Plain
        }
    }

    /// Returns `true` unless the field passes through unchanged.
    #[must_use]
    pub fn is_sensitive(self) -> bool {
        !matches!(self, Self::Plain)
    }

    /// Returns the text policy for this class, or `None` for plain fields.
    #[must_use]
    pub fn policy(self) -> Option<TextRedactionPolicy> {
        match self {
            Self::Email => Some(TextRedactionPolicy::email()),
            Self::Secret => Some(TextRedactionPolicy::default_full()),
            Self::Plain => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_key_is_sensitive() {
        for key in SENSITIVE_KEYS {
            assert!(FieldClass::of(key).is_sensitive(), "{key} should be sensitive");
        }
    }

    #[test]
    fn exact_keys_are_secret() {
        assert_eq!(FieldClass::of("password"), FieldClass::Secret);
        assert_eq!(FieldClass::of("api_key"), FieldClass::Secret);
        assert_eq!(FieldClass::of("ssn"), FieldClass::Secret);
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(FieldClass::of("PASSWORD"), FieldClass::Secret);
        assert_eq!(FieldClass::of("Api_Key"), FieldClass::Secret);
        assert_eq!(FieldClass::of("EMAIL"), FieldClass::Email);
    }

    #[test]
    fn listed_mail_keys_are_email_class() {
        assert_eq!(FieldClass::of("email"), FieldClass::Email);
        assert_eq!(FieldClass::of("mail"), FieldClass::Email);
        assert_eq!(FieldClass::of("e_mail"), FieldClass::Email);
    }

    #[test]
    fn mail_substring_marks_unlisted_keys_as_email() {
        assert_eq!(FieldClass::of("contact_email"), FieldClass::Email);
        assert_eq!(FieldClass::of("MailAddress"), FieldClass::Email);
        assert_eq!(FieldClass::of("emails"), FieldClass::Email);
    }

    #[test]
    fn secret_keys_match_exactly_not_by_substring() {
        assert_eq!(FieldClass::of("password_hint"), FieldClass::Plain);
        assert_eq!(FieldClass::of("tokens"), FieldClass::Plain);
        assert_eq!(FieldClass::of("telephone"), FieldClass::Plain);
    }

    #[test]
    fn policies_follow_class() {
        assert_eq!(FieldClass::Email.policy(), Some(TextRedactionPolicy::email()));
        assert_eq!(
            FieldClass::Secret.policy(),
            Some(TextRedactionPolicy::default_full())
        );
        assert_eq!(FieldClass::Plain.policy(), None);
    }
}
