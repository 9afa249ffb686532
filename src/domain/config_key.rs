// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration keys and field key derivation.
//!
//! Keys in the flat map are case-insensitive, so a `ConfigKey` is always held
//! in lower case. A field's key is its rename annotation (or declared name)
//! appended to the prefix accumulated from enclosing records.

use crate::domain::record::FieldDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Annotation value that excludes a field from binding.
pub const IGNORE_FIELD: &str = "-";

/// Default delimiter between a nested record's key and its fields.
pub const DEFAULT_STRUCT_DELIMITER: &str = "__";

/// A lower-cased key into the flat configuration map.
///
/// # Examples
///
/// ```
/// use hexbind::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("DATABASE__HOST");
/// assert_eq!(key.as_str(), "database__host");
/// assert_eq!(key, ConfigKey::from("Database__Host"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey`, lower-casing the input.
    pub fn new(key: String) -> Self {
        if key.is_ascii() && !key.bytes().any(|b| b.is_ascii_uppercase()) {
            ConfigKey(key)
        } else {
            ConfigKey(key.to_lowercase())
        }
    }

    /// Derives the key for `field` beneath `prefix`.
    ///
    /// Returns `None` when the field carries the ignore annotation. Otherwise
    /// the (trimmed) rename annotation replaces the field name unless it is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexbind::domain::config_key::ConfigKey;
    /// use hexbind::domain::record::{FieldDescriptor, FieldKind};
    /// use hexbind::domain::config_value::ScalarKind;
    ///
    /// let name = FieldDescriptor::new("Name", FieldKind::Scalar(ScalarKind::String));
    /// let key = ConfigKey::derive("child__", &name).unwrap();
    /// assert_eq!(key.as_str(), "child__name");
    ///
    /// let hidden = name.with_tag("-");
    /// assert!(ConfigKey::derive("", &hidden).is_none());
    /// ```
    pub fn derive(prefix: &str, field: &FieldDescriptor) -> Option<Self> {
        let mut local = field.name.strip_prefix("r#").unwrap_or(field.name);
        if let Some(tag) = field.tag {
            let tag = tag.trim();
            if tag == IGNORE_FIELD {
                return None;
            }
            if !tag.is_empty() {
                local = tag;
            }
        }

        let mut key = String::with_capacity(prefix.len() + local.len());
        key.push_str(prefix);
        key.push_str(local);
        Some(ConfigKey::new(key))
    }

    /// Returns the prefix handed to the fields of a nested record keyed by `self`.
    pub fn nested_prefix(&self, struct_delimiter: &str) -> String {
        let mut prefix = String::with_capacity(self.0.len() + struct_delimiter.len());
        prefix.push_str(&self.0);
        prefix.push_str(&struct_delimiter.to_lowercase());
        prefix
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey::new(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey::new(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
