//! Masking policies: field classification and text transformations.
//!
//! This module provides:
//!
//! - **Fields** (`fields`): [`FieldClass`], which decides from a field name
//!   whether a record value is an email, a secret, or plain data.
//!
//! - **Text policies** (`text`): The [`TextRedactionPolicy`] enum and the
//!   [`mask_email`] transform.
//!
//! # Example
//!
//! ```rust
//! use veil::{FieldClass, TextRedactionPolicy};
//!
//! let policy = FieldClass::of("user_email").policy().unwrap_or_default();
//! assert_eq!(policy.apply_to("alice@example.com"), "a***@example.com");
//!
//! let secret = FieldClass::of("token").policy().unwrap_or_default();
//! assert_eq!(secret.apply_to("sensitive-data"), "***");
//! ```

pub mod fields;
pub mod text;

// Re-export everything at the module level for convenience
pub use fields::{FieldClass, SENSITIVE_KEYS};
pub use text::{MASK_TOKEN, TextRedactionPolicy, mask_email};
