//! Redaction entrypoints and logging-boundary wrappers.
//!
//! This module provides the machinery for applying masks:
//!
//! - **`record`**: Field-by-field masking of flat records (`mask_sensitive_data`)
//! - **`message`**: Pattern-based sanitization of free text (`sanitize_log_message`)
//! - **`output`**: Output types for logging boundaries (`SanitizedOutput`, `ToSanitizedOutput`)
//! - **`display`**: Sanitized display support (`SanitizedDisplay`, `SanitizedRef`)
//!
//! Field classification and text policies live in `crate::policy`.

mod display;
mod message;
mod output;
mod record;

pub use display::{SanitizedDisplay, SanitizedDisplayRef, SanitizedExt, SanitizedRef};
pub use message::sanitize_log_message;
#[cfg(feature = "json")]
pub use output::{MaskedJsonExt, MaskedJsonRef};
pub use output::{SanitizedOutput, ToSanitizedOutput};
pub use record::{RecordValue, RedactableRecord, mask_sensitive_data};
