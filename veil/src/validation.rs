//! Input hygiene: length enforcement and filename safety.
//!
//! Both checks are syntactic and side-effect free. Neither touches the
//! filesystem.

use crate::error::{Error, Result};

/// Length limit applied by [`validate_input`].
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 1000;

const DANGEROUS_SEQUENCES: [&str; 10] = ["/", "\\", "..", "<", ">", ":", "\"", "|", "?", "*"];

const RESERVED_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Rejects empty input and truncates anything longer than `max_length`
/// characters.
///
/// Truncation is silent and happens on character boundaries.
///
/// # Example
/// ```
/// use veil::{ErrorKind, validate_input_length};
///
/// assert_eq!(validate_input_length("hello world", 5).unwrap(), "hello");
/// assert_eq!(validate_input_length("", 10).unwrap_err().kind(), ErrorKind::Validation);
/// ```
pub fn validate_input_length(value: &str, max_length: usize) -> Result<String> {
    if value.is_empty() {
        return Err(Error::validation("input value is empty"));
    }

    match value.char_indices().nth(max_length) {
        Some((cut, _)) => Ok(value[..cut].to_string()),
        None => Ok(value.to_string()),
    }
}

/// [`validate_input_length`] with [`DEFAULT_MAX_INPUT_LENGTH`].
pub fn validate_input(value: &str) -> Result<String> {
    validate_input_length(value, DEFAULT_MAX_INPUT_LENGTH)
}

/// Returns `true` when `filename` is safe to use as a single path component.
///
/// A name is unsafe when it is empty, contains a separator, `..`, or one of
/// `< > : " | ? *`, or equals a reserved Windows device name (any case).
/// `..` is matched anywhere, so `a..b.txt` is rejected as well.
#[must_use]
pub fn is_safe_filename(filename: &str) -> bool {
    if filename.is_empty() {
        return false;
    }

    if DANGEROUS_SEQUENCES
        .iter()
        .any(|sequence| filename.contains(sequence))
    {
        return false;
    }

    !RESERVED_NAMES
        .iter()
        .any(|reserved| filename.eq_ignore_ascii_case(reserved))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn short_input_is_unchanged() {
        assert_eq!(validate_input_length("hello", 10).unwrap(), "hello");
    }

    #[test]
    fn input_at_limit_is_unchanged() {
        assert_eq!(validate_input_length("hello", 5).unwrap(), "hello");
    }

    #[test]
    fn long_input_is_truncated() {
        assert_eq!(validate_input_length("hello world", 5).unwrap(), "hello");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        assert_eq!(validate_input_length("héllo wörld", 7).unwrap(), "héllo w");
        assert_eq!(validate_input_length("日本語テキスト", 3).unwrap(), "日本語");
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = validate_input_length("", 10).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.message(), "input value is empty");
    }

    #[test]
    fn zero_limit_yields_empty_string() {
        assert_eq!(validate_input_length("abc", 0).unwrap(), "");
    }

    #[test]
    fn default_limit_is_one_thousand() {
        let long = "x".repeat(1500);
        assert_eq!(validate_input(&long).unwrap().len(), DEFAULT_MAX_INPUT_LENGTH);
        assert!(validate_input("").is_err());
    }

    #[test]
    fn ordinary_filenames_are_safe() {
        assert!(is_safe_filename("document.txt"));
        assert!(is_safe_filename("my_file.pdf"));
        assert!(is_safe_filename("data-2023.csv"));
    }

    #[test]
    fn traversal_is_unsafe() {
        assert!(!is_safe_filename("../secret.txt"));
        assert!(!is_safe_filename("folder/../file.txt"));
        assert!(!is_safe_filename("..\\boot.ini"));
    }

    #[test]
    fn double_dot_is_rejected_anywhere() {
        assert!(!is_safe_filename("a..b.txt"));
    }

    #[test]
    fn dangerous_characters_are_unsafe() {
        for name in [
            "file<script>.txt",
            "file|pipe.txt",
            "file\"quote.txt",
            "c:drive",
            "what?.txt",
            "glob*.rs",
        ] {
            assert!(!is_safe_filename(name), "{name} should be unsafe");
        }
    }

    #[test]
    fn reserved_device_names_are_unsafe_in_any_case() {
        assert!(!is_safe_filename("CON"));
        assert!(!is_safe_filename("PRN"));
        assert!(!is_safe_filename("COM1"));
        assert!(!is_safe_filename("lpt9"));
        assert!(!is_safe_filename("Aux"));
    }

    #[test]
    fn reserved_names_only_match_whole_name() {
        assert!(is_safe_filename("CON.txt"));
        assert!(is_safe_filename("COM10"));
        assert!(is_safe_filename("console"));
    }

    #[test]
    fn empty_filename_is_unsafe() {
        assert!(!is_safe_filename(""));
    }
}
