// SPDX-License-Identifier: MIT OR Apache-2.0

//! The struct population engine.
//!
//! Walks a [`Record`]'s descriptor table in declaration order, recursing into
//! nested records and writing converted values into scalar and sequence
//! fields. Missing or unconvertible values leave the field at its zero value;
//! only unsupported field types and inconsistent records are errors.

use crate::domain::{ConfigError, ConfigKey, ConfigValue, FieldKind, FieldMut, Record, Result};
use std::collections::HashMap;

/// Read-only view of the builder state needed during population.
pub(crate) struct Population<'a> {
    pub(crate) values: &'a HashMap<ConfigKey, ConfigValue>,
    pub(crate) struct_delimiter: &'a str,
    pub(crate) slice_delimiter: &'a str,
}

impl Population<'_> {
    /// Populates every field of `record` whose key starts with `prefix`.
    pub(crate) fn populate(&self, record: &mut dyn Record, prefix: &str) -> Result<()> {
        let fields = record.fields();
        for (index, descriptor) in fields.iter().enumerate() {
            let Some(key) = ConfigKey::derive(prefix, descriptor) else {
                tracing::trace!("Ignoring field '{}{}'", prefix, descriptor.name);
                continue;
            };

            if let FieldKind::Unsupported(type_name) = descriptor.kind {
                return Err(ConfigError::UnsupportedField {
                    key: key.into_string(),
                    type_name,
                });
            }

            let Some(field) = record.field_mut(index) else {
                return Err(ConfigError::InvalidRecord {
                    key: key.into_string(),
                    message: format!("no accessor for field index {}", index),
                });
            };

            match field {
                FieldMut::Record(nested) => {
                    let nested_prefix = key.nested_prefix(self.struct_delimiter);
                    self.populate(nested, &nested_prefix)?;
                }
                FieldMut::Sequence(target) => {
                    let kind = target.element_kind();
                    let values = match self.values.get(&key) {
                        Some(raw) => split_sequence(raw.as_str(), self.slice_delimiter)
                            .into_iter()
                            .map(|token| kind.convert(token, key.as_str()))
                            .collect(),
                        None => Vec::new(),
                    };
                    target.assign(values);
                }
                FieldMut::Scalar(target) => {
                    let kind = target.kind();
                    let value = match self.values.get(&key) {
                        Some(raw) => raw.convert(kind, key.as_str()),
                        None => kind.zero(),
                    };
                    target.assign(value);
                }
                FieldMut::Unsupported => {
                    return Err(ConfigError::UnsupportedField {
                        key: key.into_string(),
                        type_name: "unknown",
                    });
                }
            }
        }
        Ok(())
    }
}

/// Splits `raw` on `delimiter`, trimming tokens and dropping empty ones.
///
/// An all-whitespace input yields no tokens.
pub(crate) fn split_sequence<'a>(raw: &'a str, delimiter: &str) -> Vec<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed
        .split(delimiter)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}
