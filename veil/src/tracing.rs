//! Adapters for emitting sanitized values through `tracing`.
//!
//! `TracingSanitizedExt` turns anything that produces a [`SanitizedOutput`]
//! into a `tracing` display value. Structured outputs (masked JSON records)
//! are flattened to compact JSON text, so they work with any subscriber.
//!
//! # Example
//!
//! ```ignore
//! use veil::{MaskedJsonExt, SanitizedExt, tracing::TracingSanitizedExt};
//!
//! tracing::info!(message = %raw.sanitized(), "received");
//! tracing::info!(user = user.masked_json().tracing_sanitized(), "signup");
//! ```

#[cfg(feature = "json")]
use serde::Serialize;
use tracing::field::{DisplayValue, display};

#[cfg(feature = "json")]
use crate::redaction::MaskedJsonRef;
use crate::redaction::{
    SanitizedDisplay, SanitizedDisplayRef, SanitizedOutput, SanitizedRef, ToSanitizedOutput,
};

/// Marker trait for types whose `tracing` integration always emits sanitized output.
///
/// This trait is implemented only for sink adapters and wrappers that sanitize
/// before logging. It is not a blanket impl for raw types.
pub trait TracingSanitized {}

/// Extension trait for logging sanitized values as display strings.
pub trait TracingSanitizedExt {
    /// Wraps the value for `tracing` logging as a display value.
    fn tracing_sanitized(&self) -> DisplayValue<String>;
}

impl<T> TracingSanitizedExt for T
where
    T: ToSanitizedOutput,
{
    fn tracing_sanitized(&self) -> DisplayValue<String> {
        display(self.to_sanitized_output().into_text())
    }
}

impl TracingSanitized for SanitizedOutput {}

impl<T> TracingSanitized for SanitizedRef<'_, T> where T: AsRef<str> + ?Sized {}

impl<T> TracingSanitized for SanitizedDisplayRef<'_, T> where T: SanitizedDisplay + ?Sized {}

#[cfg(feature = "json")]
impl<T> TracingSanitized for MaskedJsonRef<'_, T> where T: Serialize + ?Sized {}
