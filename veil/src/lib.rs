//! Masking and sanitization of sensitive data at logging boundaries.
//!
//! This crate separates:
//! - **Policies**: how a value is masked (a flat mask token, or a partial email
//!   mask that keeps the first local-part character and the domain).
//! - **Field classification**: which record fields are sensitive, decided by a
//!   static, case-insensitive field-name heuristic.
//! - **Redaction**: applying policies to flat records and scanning free text
//!   for emails, API-key-like tokens and UUIDs.
//!
//! It also carries the small input-hygiene helpers every caller needs next to
//! redaction (`validate_input_length`, `is_safe_filename`) and the application
//! error taxonomy ([`Error`], [`ErrorKind`]).
//!
//! What this crate does not do:
//! - perform I/O or install a logger
//! - validate that a value is actually an email, key, or identifier
//!
//! Logging integrations live behind feature flags (`tracing`, `slog`).

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
pub mod error;
#[cfg(feature = "policy")]
pub mod policy;
#[cfg(feature = "redaction")]
mod redaction;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;
pub mod validation;

pub use error::{Error, ErrorKind, Result};
// Re-exports from policy module
#[cfg(feature = "policy")]
pub use policy::{FieldClass, MASK_TOKEN, SENSITIVE_KEYS, TextRedactionPolicy, mask_email};
// Re-exports from redaction module
#[cfg(feature = "redaction")]
pub use redaction::{
    RecordValue, RedactableRecord, SanitizedDisplay, SanitizedDisplayRef, SanitizedExt,
    SanitizedOutput, SanitizedRef, ToSanitizedOutput, mask_sensitive_data, sanitize_log_message,
};
#[cfg(feature = "json")]
pub use redaction::{MaskedJsonExt, MaskedJsonRef};
pub use validation::{
    DEFAULT_MAX_INPUT_LENGTH, is_safe_filename, validate_input, validate_input_length,
};
