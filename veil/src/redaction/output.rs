//! Output types for logging boundaries.
//!
//! This module provides types for producing logging-safe output:
//!
//! - [`SanitizedOutput`]: The output enum (Text or Json)
//! - [`ToSanitizedOutput`]: Trait for types that can produce sanitized output
//! - [`MaskedJsonRef`]: Wrapper for masked JSON output of serializable values

#[cfg(feature = "json")]
use serde::Serialize;
#[cfg(feature = "json")]
use serde_json::Value as JsonValue;

#[cfg(feature = "json")]
use super::{message::sanitize_log_message, record::mask_sensitive_data};

// =============================================================================
// SanitizedOutput - Output produced at logging boundaries
// =============================================================================

/// Output produced at a logging boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SanitizedOutput {
    Text(String),
    #[cfg(feature = "json")]
    Json(JsonValue),
}

impl SanitizedOutput {
    /// Flattens the output into a single line of text.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            #[cfg(feature = "json")]
            Self::Json(json) => json.to_string(),
        }
    }
}

// =============================================================================
// ToSanitizedOutput - Trait for producing logging-safe output
// =============================================================================

/// Produces a logging-safe output representation.
pub trait ToSanitizedOutput {
    #[must_use]
    fn to_sanitized_output(&self) -> SanitizedOutput;
}

impl ToSanitizedOutput for SanitizedOutput {
    fn to_sanitized_output(&self) -> SanitizedOutput {
        self.clone()
    }
}

// =============================================================================
// MaskedJsonRef - Wrapper for masked JSON output
// =============================================================================

/// Wrapper for masked JSON output from serializable values.
///
/// The value is serialized to JSON first. A top-level object is treated as a
/// record and passed through [`mask_sensitive_data`]; a top-level string is
/// sanitized like a log message; anything else is emitted as serialized.
#[cfg(feature = "json")]
pub struct MaskedJsonRef<'a, T: ?Sized>(&'a T);

#[cfg(feature = "json")]
impl<T> MaskedJsonRef<'_, T>
where
    T: Serialize + ?Sized,
{
    /// Serializes and masks the wrapped value.
    pub fn to_value(&self) -> serde_json::Result<JsonValue> {
        let value = match serde_json::to_value(self.0)? {
            JsonValue::Object(fields) => JsonValue::Object(mask_sensitive_data(fields)),
            JsonValue::String(text) => JsonValue::String(sanitize_log_message(&text)),
            other => other,
        };
        Ok(value)
    }
}

#[cfg(feature = "json")]
impl<T> ToSanitizedOutput for MaskedJsonRef<'_, T>
where
    T: Serialize + ?Sized,
{
    fn to_sanitized_output(&self) -> SanitizedOutput {
        match self.to_value() {
            Ok(json) => SanitizedOutput::Json(json),
            Err(err) => SanitizedOutput::Text(format!("Failed to serialize masked value: {err}")),
        }
    }
}

/// Extension trait to obtain a masked JSON output wrapper.
#[cfg(feature = "json")]
pub trait MaskedJsonExt {
    /// Wraps the value for explicit masked JSON output.
    fn masked_json(&self) -> MaskedJsonRef<'_, Self>;
}

#[cfg(feature = "json")]
impl<T> MaskedJsonExt for T
where
    T: Serialize + ?Sized,
{
    fn masked_json(&self) -> MaskedJsonRef<'_, Self> {
        MaskedJsonRef(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_output_flattens_to_itself() {
        let output = SanitizedOutput::Text("hello".into());
        assert_eq!(output.to_sanitized_output(), output);
        assert_eq!(output.into_text(), "hello");
    }

    #[cfg(feature = "json")]
    mod json {
        use serde::Serialize;
        use serde_json::json;

        use super::super::*;

        #[derive(Serialize)]
        struct Signup {
            user_email: String,
            password: String,
            plan: String,
        }

        #[test]
        fn masks_serialized_struct_fields() {
            let signup = Signup {
                user_email: "dana@example.com".into(),
                password: "hunter2".into(),
                plan: "pro".into(),
            };
            assert_eq!(
                signup.masked_json().to_sanitized_output(),
                SanitizedOutput::Json(json!({
                    "user_email": "d***@example.com",
                    "password": "***",
                    "plan": "pro",
                }))
            );
        }

        #[test]
        fn sanitizes_top_level_strings() {
            let value = "request 123e4567-e89b-12d3-a456-426614174000";
            assert_eq!(
                value.masked_json().to_value().unwrap(),
                json!("request ***")
            );
        }

        #[test]
        fn passes_other_values_through() {
            assert_eq!(vec![1, 2, 3].masked_json().to_value().unwrap(), json!([1, 2, 3]));
        }

        #[test]
        fn json_output_flattens_to_compact_text() {
            let output = SanitizedOutput::Json(json!({"token": "***"}));
            assert_eq!(output.into_text(), r#"{"token":"***"}"#);
        }
    }
}
