//! Adapters for emitting sanitized values through `slog`.
//!
//! This module connects the sanitizing wrappers with `slog` by providing
//! `slog::Value` implementations. Text outputs are emitted as strings; masked
//! records are emitted as structured JSON via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is derived from the masked value,
//!   never from the original.
//! - Avoiding fallible logging APIs: serialization failures are represented as
//!   placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog`.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::redaction::{
    MaskedJsonExt, MaskedJsonRef, SanitizedDisplay, SanitizedDisplayRef, SanitizedOutput,
    SanitizedRef, ToSanitizedOutput,
};

/// Marker trait for types whose `slog` integration always emits sanitized output.
///
/// This trait is implemented only for sink adapters and wrappers that sanitize
/// before logging. It is not a blanket impl for raw types.
///
/// ```compile_fail
/// use veil::slog::SlogSanitized;
///
/// fn assert_slog_sanitized<T: SlogSanitized>() {}
///
/// assert_slog_sanitized::<String>();
/// ```
pub trait SlogSanitized: SlogValue {}

impl<T: SlogSanitized + ?Sized> SlogSanitized for &T {}

/// An owned, already-masked JSON value.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskedJson(JsonValue);

impl MaskedJson {
    #[must_use]
    pub fn value(&self) -> &JsonValue {
        &self.0
    }
}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.0.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl SlogSanitized for MaskedJson {}

fn emit_output(
    output: &SanitizedOutput,
    record: &Record<'_>,
    key: Key,
    serializer: &mut dyn Serializer,
) -> SlogResult {
    match output {
        SanitizedOutput::Text(text) => serializer.emit_str(key, text),
        SanitizedOutput::Json(json) => {
            let nested = slog::Serde(json.clone());
            SlogValue::serialize(&nested, record, key, serializer)
        }
    }
}

impl SlogValue for SanitizedOutput {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        emit_output(self, record, key, serializer)
    }
}

impl SlogSanitized for SanitizedOutput {}

/// Extension trait for ergonomic slog logging of masked values as JSON.
///
/// ## Example
/// ```ignore
/// use veil::slog::SlogMaskedExt;
///
/// info!(logger, "signup"; "user" => user.slog_masked_json());
/// ```
pub trait SlogMaskedExt: Serialize {
    /// Masks `self` and returns a `slog::Value` that serializes as structured JSON.
    ///
    /// If serialization fails, the returned value holds a JSON string with the
    /// message `"Failed to serialize masked value"`.
    fn slog_masked_json(&self) -> MaskedJson {
        let json_value = self.masked_json().to_value().unwrap_or_else(|err| {
            JsonValue::String(format!("Failed to serialize masked value: {err}"))
        });
        MaskedJson(json_value)
    }
}

impl<T> SlogMaskedExt for T where T: Serialize + ?Sized {}

impl<T> SlogValue for SanitizedRef<'_, T>
where
    T: AsRef<str> + ?Sized,
{
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        emit_output(&self.to_sanitized_output(), record, key, serializer)
    }
}

impl<T> SlogSanitized for SanitizedRef<'_, T> where T: AsRef<str> + ?Sized {}

impl<T> SlogValue for SanitizedDisplayRef<'_, T>
where
    T: SanitizedDisplay + ?Sized,
{
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_arguments(key, &format_args!("{self}"))
    }
}

impl<T> SlogSanitized for SanitizedDisplayRef<'_, T> where T: SanitizedDisplay + ?Sized {}

impl<T> SlogValue for MaskedJsonRef<'_, T>
where
    T: Serialize + ?Sized,
{
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        emit_output(&self.to_sanitized_output(), record, key, serializer)
    }
}

impl<T> SlogSanitized for MaskedJsonRef<'_, T> where T: Serialize + ?Sized {}
