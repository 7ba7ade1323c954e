//! Masking for flat key-value records (values only, keys unchanged).
//!
//! Records are consumed and rebuilt; no value is mutated in place. Ordered
//! containers (`BTreeMap`, `Vec` of pairs, and `serde_json::Map` with
//! `preserve_order`) keep their ordering.

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use crate::policy::{FieldClass, MASK_TOKEN};

// =============================================================================
// RecordValue - values that can sit in a masked record
// =============================================================================

/// A value stored in a record that [`mask_sensitive_data`] can rewrite.
pub trait RecordValue: Sized {
    /// Returns `true` for "falsy" values: email-class fields holding one are
    /// replaced by the bare mask token instead of being email-masked.
    fn is_blank(&self) -> bool;

    /// String form fed to the text policy.
    fn as_mask_input(&self) -> Cow<'_, str>;

    /// Builds a value holding masked text.
    fn from_masked(masked: String) -> Self;
}

impl RecordValue for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }

    fn as_mask_input(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }

    fn from_masked(masked: String) -> Self {
        masked
    }
}

impl RecordValue for Option<String> {
    fn is_blank(&self) -> bool {
        self.as_deref().is_none_or(str::is_empty)
    }

    fn as_mask_input(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_deref().unwrap_or_default())
    }

    fn from_masked(masked: String) -> Self {
        Some(masked)
    }
}

#[cfg(feature = "json")]
impl RecordValue for serde_json::Value {
    #[allow(clippy::float_cmp)] // only exact zero is falsy
    fn is_blank(&self) -> bool {
        use serde_json::Value;

        match self {
            Value::Null => true,
            Value::Bool(flag) => !flag,
            Value::Number(number) => number.as_f64().is_none_or(|n| n == 0.0),
            Value::String(text) => text.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(fields) => fields.is_empty(),
        }
    }

    fn as_mask_input(&self) -> Cow<'_, str> {
        match self {
            Self::String(text) => Cow::Borrowed(text),
            other => Cow::Owned(other.to_string()),
        }
    }

    fn from_masked(masked: String) -> Self {
        Self::String(masked)
    }
}

/// Masks one value according to the class of its field name.
fn mask_value<V: RecordValue>(key: &str, value: V) -> V {
    let class = FieldClass::of(key);
    let Some(policy) = class.policy() else {
        return value;
    };
    if class == FieldClass::Email && value.is_blank() {
        return V::from_masked(MASK_TOKEN.to_string());
    }
    V::from_masked(policy.apply_to(&value.as_mask_input()))
}

// =============================================================================
// RedactableRecord - containers that can be masked field by field
// =============================================================================

/// A flat mapping from field name to value.
///
/// Implementations return a new record with the same key set, where values of
/// sensitive fields are masked and all other values pass through untouched.
pub trait RedactableRecord: Sized {
    /// Consumes the record and returns its masked copy.
    #[must_use]
    fn mask_sensitive(self) -> Self;
}

impl<K, V> RedactableRecord for BTreeMap<K, V>
where
    K: AsRef<str> + Ord,
    V: RecordValue,
{
    fn mask_sensitive(self) -> Self {
        self.into_iter()
            .map(|(k, v)| {
                let v = mask_value(k.as_ref(), v);
                (k, v)
            })
            .collect()
    }
}

impl<K, V, S> RedactableRecord for HashMap<K, V, S>
where
    K: AsRef<str> + Hash + Eq,
    V: RecordValue,
    S: BuildHasher + Clone,
{
    fn mask_sensitive(self) -> Self {
        let hasher = self.hasher().clone();
        let mut result = HashMap::with_capacity_and_hasher(self.len(), hasher);
        result.extend(self.into_iter().map(|(k, v)| {
            let v = mask_value(k.as_ref(), v);
            (k, v)
        }));
        result
    }
}

impl<K, V> RedactableRecord for Vec<(K, V)>
where
    K: AsRef<str>,
    V: RecordValue,
{
    fn mask_sensitive(self) -> Self {
        self.into_iter()
            .map(|(k, v)| {
                let v = mask_value(k.as_ref(), v);
                (k, v)
            })
            .collect()
    }
}

#[cfg(feature = "json")]
impl RedactableRecord for serde_json::Map<String, serde_json::Value> {
    fn mask_sensitive(self) -> Self {
        self.into_iter()
            .map(|(k, v)| {
                let v = mask_value(&k, v);
                (k, v)
            })
            .collect()
    }
}

/// Returns a copy of `record` with sensitive fields masked.
///
/// - email-like fields (name contains `email`/`mail`) keep the first local-part
///   character and the domain, or become `"***"` when blank
/// - other fields named in [`SENSITIVE_KEYS`](crate::SENSITIVE_KEYS) become `"***"`
/// - everything else is returned as-is
///
/// # Example
/// ```
/// use std::collections::BTreeMap;
/// use veil::mask_sensitive_data;
///
/// let record = BTreeMap::from([
///     ("email", "user@example.com".to_string()),
///     ("name", "John".to_string()),
/// ]);
/// let masked = mask_sensitive_data(record);
/// assert_eq!(masked["email"], "u***@example.com");
/// assert_eq!(masked["name"], "John");
/// ```
#[must_use]
pub fn mask_sensitive_data<R: RedactableRecord>(record: R) -> R {
    record.mask_sensitive()
}
