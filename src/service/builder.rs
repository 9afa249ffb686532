// SPDX-License-Identifier: MIT OR Apache-2.0

//! The configuration builder.
//!
//! A [`Builder`] holds the merged, case-insensitive flat map together with the
//! delimiters used during binding. Sources are merged in call order and later
//! values override earlier ones key by key.

use crate::domain::config_key::DEFAULT_STRUCT_DELIMITER;
use crate::domain::{ConfigError, ConfigKey, ConfigValue, Record, Result};
use crate::ports::{ConfigSource, ValuePreProcessor};
use crate::service::normalize::lines_to_map;
use crate::service::populate::Population;
use std::collections::HashMap;
use std::fmt;

/// Default delimiter between the elements of a sequence value.
pub const DEFAULT_SLICE_DELIMITER: &str = " ";

/// Merged configuration state, ready to bind onto records.
///
/// # Examples
///
/// ```rust
/// use hexbind::record;
/// use hexbind::service::Builder;
///
/// record! {
///     #[derive(Debug, Default)]
///     struct AppConfig {
///         database_url: String,
///         feature_flag: bool,
///         port: i64,
///     }
/// }
///
/// # fn main() -> hexbind::domain::Result<()> {
/// let mut builder = Builder::new();
/// builder.merge([
///     ("DATABASE_URL", "db://x"),
///     ("FEATURE_FLAG", "true"),
///     ("PORT", "8080"),
/// ])?;
///
/// let config: AppConfig = builder.build()?;
/// assert_eq!(config.database_url, "db://x");
/// assert!(config.feature_flag);
/// assert_eq!(config.port, 8080);
/// # Ok(())
/// # }
/// ```
pub struct Builder {
    /// Merged values, keyed case-insensitively
    values: HashMap<ConfigKey, ConfigValue>,
    /// Delimiter between a nested record's key and its fields
    struct_delimiter: String,
    /// Delimiter between sequence elements
    slice_delimiter: String,
    /// Optional hook applied to every merged value
    preprocessor: Option<Box<dyn ValuePreProcessor>>,
}

impl Builder {
    /// Creates an empty builder with the default delimiters.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            struct_delimiter: DEFAULT_STRUCT_DELIMITER.to_string(),
            slice_delimiter: DEFAULT_SLICE_DELIMITER.to_string(),
            preprocessor: None,
        }
    }

    /// Creates an empty builder that runs `preprocessor` on every merged value.
    pub fn with_preprocessor(preprocessor: impl ValuePreProcessor + 'static) -> Self {
        Self::new().with_value_preprocessor(preprocessor)
    }

    /// Creates a builder populated from the `KEY=VALUE` lines of `path`.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read.
    #[cfg(feature = "file")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Self::new().with_file(path)
    }

    /// Creates a builder populated from the process environment.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        Self::new().with_env()
    }

    /// Sets the hook applied to values merged after this call.
    pub fn with_value_preprocessor(mut self, preprocessor: impl ValuePreProcessor + 'static) -> Self {
        self.preprocessor = Some(Box::new(preprocessor));
        self
    }

    /// Sets the delimiter between a nested record's key and its fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDelimiter`] for an empty delimiter.
    pub fn with_struct_delimiter(mut self, delimiter: impl Into<String>) -> Result<Self> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(ConfigError::InvalidDelimiter {
                message: "struct delimiter must not be empty".to_string(),
            });
        }
        self.struct_delimiter = delimiter;
        Ok(self)
    }

    /// Sets the delimiter between sequence elements.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidDelimiter`] for an empty delimiter.
    pub fn with_slice_delimiter(mut self, delimiter: impl Into<String>) -> Result<Self> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(ConfigError::InvalidDelimiter {
                message: "slice delimiter must not be empty".to_string(),
            });
        }
        self.slice_delimiter = delimiter;
        Ok(self)
    }

    /// Merges the lines of `path` into the current state.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or a value cannot be pre-processed.
    #[cfg(feature = "file")]
    pub fn with_file(mut self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        use crate::adapters::LineFileAdapter;
        let adapter = LineFileAdapter::from_file(path)?;
        self.merge_source(&adapter)?;
        Ok(self)
    }

    /// Merges the process environment into the current state.
    ///
    /// # Errors
    ///
    /// Fails if a value cannot be pre-processed.
    #[cfg(feature = "env")]
    pub fn with_env(mut self) -> Result<Self> {
        use crate::adapters::EnvVarAdapter;
        self.merge_source(&EnvVarAdapter::new())?;
        Ok(self)
    }

    /// Merges the normalised lines of `source` into the current state.
    ///
    /// # Errors
    ///
    /// Fails if the source cannot be read or a value cannot be pre-processed.
    pub fn merge_source(&mut self, source: &dyn ConfigSource) -> Result<()> {
        let lines = source.lines()?;
        let entries = lines_to_map(&lines);
        tracing::debug!(
            "Merging {} entries from source '{}' ({} lines)",
            entries.len(),
            source.name(),
            lines.len()
        );
        self.merge(entries)
    }

    /// Merges `entries` into the current state, overriding existing keys.
    ///
    /// Every entry is passed through the pre-processor, if one is set. Keys are
    /// stored lower-cased; entries with an empty key or value are skipped. If
    /// the pre-processor fails, nothing from this call is stored.
    ///
    /// # Errors
    ///
    /// Returns the pre-processor's error.
    pub fn merge<I, K, V>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut staged = Vec::new();
        for (key, value) in entries {
            let (key, value) = (key.as_ref(), value.as_ref());
            if key.is_empty() || value.is_empty() {
                tracing::trace!("Skipping entry with empty key or value");
                continue;
            }
            let effective = match &self.preprocessor {
                Some(preprocessor) => preprocessor.pre_process_value(key, value)?,
                None => value.to_string(),
            };
            if effective.is_empty() {
                tracing::trace!("Skipping '{}': pre-processed value is empty", key);
                continue;
            }
            staged.push((ConfigKey::from(key), ConfigValue::from(effective)));
        }

        for (key, value) in staged {
            self.values.insert(key, value);
        }
        Ok(())
    }

    /// Populates `target` from the current state.
    ///
    /// Every bound field is overwritten: missing or unconvertible values
    /// become the field type's zero value. Ignored fields are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedField`] for the first field whose
    /// type cannot be bound; fields before it have already been written.
    pub fn to<T: Record>(&self, target: &mut T) -> Result<()> {
        Population {
            values: &self.values,
            struct_delimiter: &self.struct_delimiter,
            slice_delimiter: &self.slice_delimiter,
        }
        .populate(target, "")
    }

    /// Returns a freshly populated `T`.
    ///
    /// # Errors
    ///
    /// See [`Builder::to`].
    pub fn build<T: Record + Default>(&self) -> Result<T> {
        let mut target = T::default();
        self.to(&mut target)?;
        Ok(target)
    }

    /// Returns the stored value for `key`, case-insensitively.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(&ConfigKey::from(key))
    }

    /// Returns all stored keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &ConfigKey> {
        self.values.keys()
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing has been merged.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the delimiter between a nested record's key and its fields.
    pub fn struct_delimiter(&self) -> &str {
        &self.struct_delimiter
    }

    /// Returns the delimiter between sequence elements.
    pub fn slice_delimiter(&self) -> &str {
        &self.slice_delimiter
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Values may hold resolved secrets.
        f.debug_struct("Builder")
            .field("keys", &self.values.len())
            .field("struct_delimiter", &self.struct_delimiter)
            .field("slice_delimiter", &self.slice_delimiter)
            .field("preprocessor", &self.preprocessor.is_some())
            .finish()
    }
}
