//! Sanitized display formatting support.
//!
//! This module provides types for sanitized string formatting:
//!
//! - [`SanitizedDisplay`]: Trait for types that can format a sanitized display string
//! - [`SanitizedDisplayRef`]: Display wrapper that uses `fmt_sanitized`
//! - [`SanitizedRef`]: Wrapper that sanitizes any string-like value on display

use std::fmt;

use super::{
    message::sanitize_log_message,
    output::{SanitizedOutput, ToSanitizedOutput},
};

// =============================================================================
// SanitizedDisplay - Trait for sanitized display formatting
// =============================================================================

/// Formats a sanitized string representation of `self`.
///
/// This is intended for types (often errors) that want log-safe output while
/// keeping their own `Display` implementations.
pub trait SanitizedDisplay {
    /// Formats a sanitized representation of `self`.
    fn fmt_sanitized(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Returns a wrapper that implements `Display` using `fmt_sanitized`.
    fn sanitized_display(&self) -> SanitizedDisplayRef<'_, Self>
    where
        Self: Sized,
    {
        SanitizedDisplayRef(self)
    }
}

// =============================================================================
// SanitizedDisplayRef - Display wrapper for sanitized display strings
// =============================================================================

/// Display wrapper that uses `SanitizedDisplay::fmt_sanitized`.
pub struct SanitizedDisplayRef<'a, T: ?Sized>(&'a T);

impl<T: SanitizedDisplay + ?Sized> fmt::Display for SanitizedDisplayRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_sanitized(f)
    }
}

impl<T: SanitizedDisplay + ?Sized> fmt::Debug for SanitizedDisplayRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_sanitized(f)
    }
}

impl<T> ToSanitizedOutput for T
where
    T: SanitizedDisplay,
{
    fn to_sanitized_output(&self) -> SanitizedOutput {
        SanitizedOutput::Text(format!("{}", self.sanitized_display()))
    }
}

// =============================================================================
// SanitizedRef - string-like values run through sanitize_log_message
// =============================================================================

/// Wrapper that displays a string-like value through [`sanitize_log_message`].
///
/// ```
/// use veil::SanitizedExt;
///
/// let line = format!("{}", "reset link sent to jane@example.com".sanitized());
/// assert_eq!(line, "reset link sent to j***@example.com");
/// ```
pub struct SanitizedRef<'a, T: ?Sized>(&'a T);

impl<T: AsRef<str> + ?Sized> SanitizedDisplay for SanitizedRef<'_, T> {
    fn fmt_sanitized(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&sanitize_log_message(self.0.as_ref()))
    }
}

impl<T: AsRef<str> + ?Sized> fmt::Display for SanitizedRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_sanitized(f)
    }
}

impl<T: AsRef<str> + ?Sized> fmt::Debug for SanitizedRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", sanitize_log_message(self.0.as_ref()))
    }
}

/// Extension trait to obtain a sanitizing wrapper for string-like values.
pub trait SanitizedExt {
    /// Wraps the value so that formatting it yields sanitized text.
    fn sanitized(&self) -> SanitizedRef<'_, Self>;
}

impl<T> SanitizedExt for T
where
    T: AsRef<str> + ?Sized,
{
    fn sanitized(&self) -> SanitizedRef<'_, Self> {
        SanitizedRef(self)
    }
}
