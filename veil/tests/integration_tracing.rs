//! Integration tests for the tracing adapters, through the public paths.

#![cfg(feature = "tracing")]

use veil::{SanitizedExt, tracing::TracingSanitizedExt};

mod display_values {
    use super::*;

    #[test]
    fn owned_strings_are_sanitized() {
        let message = String::from("reset sent to kim@example.net");
        let value = message.sanitized().tracing_sanitized();
        assert_eq!(format!("{value:?}"), "reset sent to k***@example.net");
    }

    #[test]
    fn default_message_errors_carry_code() {
        let error = veil::Error::from(veil::ErrorKind::Authorization);
        assert_eq!(
            format!("{:?}", error.tracing_sanitized()),
            "[AUTHORIZATION_ERROR] you do not have permission to perform this operation"
        );
    }
}

#[cfg(feature = "json")]
mod records {
    use serde::Serialize;
    use veil::MaskedJsonExt;

    use super::*;

    #[derive(Serialize)]
    struct Session {
        id: String,
        user_email: String,
        api_key: String,
    }

    #[test]
    fn serializable_values_are_masked_compact_json() {
        let session = Session {
            id: "s-1".into(),
            user_email: "lee@example.org".into(),
            api_key: "ak-ABCDEFGHIJKLMNOPQR".into(),
        };
        assert_eq!(
            format!("{:?}", session.masked_json().tracing_sanitized()),
            r#"{"id":"s-1","user_email":"l***@example.org","api_key":"***"}"#
        );
    }
}
