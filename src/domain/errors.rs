// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the binding crate.
//!
//! Only definitional problems and unavailable collaborators surface as errors.
//! Malformed source lines, unparsable scalars and missing keys are absorbed by
//! the population engine and never reach the caller.

use crate::domain::duration::DurationParseError;
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// The main error type for configuration loading and binding.
///
/// This enum is marked `#[non_exhaustive]` to allow for future additions
/// without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use hexbind::domain::errors::ConfigError;
///
/// let error = ConfigError::UnsupportedField {
///     key: "limits".to_string(),
///     type_name: "map",
/// };
/// assert_eq!(
///     error.to_string(),
///     "Field 'limits' has unsupported type map"
/// );
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Failed to convert a configuration value to the requested type.
    #[error(
        "Failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An error occurred in a configuration source.
    #[error("Configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A record declares a field whose type cannot be bound.
    #[error("Field '{key}' has unsupported type {type_name}")]
    UnsupportedField {
        /// The derived key of the offending field
        key: String,
        /// A short name for the unsupported type
        type_name: &'static str,
    },

    /// A record's descriptor table does not match its field accessors.
    #[error("Invalid record definition at '{key}': {message}")]
    InvalidRecord {
        /// The derived key of the field being bound
        key: String,
        /// The error message
        message: String,
    },

    /// A value pre-processor could not resolve a secret or parameter reference.
    #[error("Failed to resolve '{reference}': {message}")]
    SecretResolution {
        /// The reference being resolved (never the resolved value)
        reference: String,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A struct or slice delimiter was rejected.
    #[error("Invalid delimiter: {message}")]
    InvalidDelimiter {
        /// The error message
        message: String,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseFloatError.
    pub fn from_parse_float_error(key: String, err: ParseFloatError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "float".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError for a token outside the boolean set.
    pub fn from_invalid_bool(key: String, token: &str) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "boolean".to_string(),
            source: format!("invalid boolean token '{}'", token).into(),
        }
    }

    /// Creates a TypeConversionError from a DurationParseError.
    pub fn from_duration_error(key: String, err: DurationParseError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "duration".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a SecretResolution error wrapping a client failure.
    pub fn secret_resolution(
        reference: impl Into<String>,
        message: impl Into<String>,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        ConfigError::SecretResolution {
            reference: reference.into(),
            message: message.into(),
            source,
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
