// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration values and the scalar type converter.
//!
//! A [`ConfigValue`] is the raw string stored in the flat map. The converter
//! is a closed set of [`ScalarKind`]s, each with a parse rule and a zero value.
//! Binding uses the lenient [`ScalarKind::convert`], which falls back to the
//! zero value; [`ScalarKind::parse`] reports the failure instead.

use crate::domain::duration::parse_duration;
use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A raw configuration value as stored in the flat map.
///
/// # Examples
///
/// ```
/// use hexbind::domain::config_value::{ConfigValue, ScalarKind, ScalarValue};
///
/// let value = ConfigValue::from("42");
/// assert_eq!(value.as_str(), "42");
/// assert_eq!(value.convert(ScalarKind::U16, "port"), ScalarValue::U16(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the value into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Parses the value as `kind`, reporting failures.
    pub fn parse_as(&self, kind: ScalarKind, key: &str) -> Result<ScalarValue> {
        kind.parse(&self.0, key)
    }

    /// Converts the value as `kind`, falling back to the zero value.
    pub fn convert(&self, kind: ScalarKind, key: &str) -> ScalarValue {
        kind.convert(&self.0, key)
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The primitive kinds a field (or sequence element) can be bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Plain text, passed through unchanged.
    String,
    /// One of `1 t T TRUE true True 0 f F FALSE false False`.
    Bool,
    /// Signed 8-bit decimal integer.
    I8,
    /// Signed 16-bit decimal integer.
    I16,
    /// Signed 32-bit decimal integer.
    I32,
    /// Signed 64-bit decimal integer.
    I64,
    /// Pointer-sized signed decimal integer.
    Isize,
    /// Unsigned 8-bit decimal integer.
    U8,
    /// Unsigned 16-bit decimal integer.
    U16,
    /// Unsigned 32-bit decimal integer.
    U32,
    /// Unsigned 64-bit decimal integer.
    U64,
    /// Pointer-sized unsigned decimal integer.
    Usize,
    /// 32-bit IEEE float.
    F32,
    /// 64-bit IEEE float.
    F64,
    /// A duration literal such as `1h30m`.
    Duration,
}

/// A converted scalar, tagged with its kind.
#[derive(Clone, Debug, PartialEq)]
pub enum ScalarValue {
    /// See [`ScalarKind::String`].
    String(String),
    /// See [`ScalarKind::Bool`].
    Bool(bool),
    /// See [`ScalarKind::I8`].
    I8(i8),
    /// See [`ScalarKind::I16`].
    I16(i16),
    /// See [`ScalarKind::I32`].
    I32(i32),
    /// See [`ScalarKind::I64`].
    I64(i64),
    /// See [`ScalarKind::Isize`].
    Isize(isize),
    /// See [`ScalarKind::U8`].
    U8(u8),
    /// See [`ScalarKind::U16`].
    U16(u16),
    /// See [`ScalarKind::U32`].
    U32(u32),
    /// See [`ScalarKind::U64`].
    U64(u64),
    /// See [`ScalarKind::Usize`].
    Usize(usize),
    /// See [`ScalarKind::F32`].
    F32(f32),
    /// See [`ScalarKind::F64`].
    F64(f64),
    /// See [`ScalarKind::Duration`].
    Duration(Duration),
}

impl ScalarValue {
    /// Returns the kind tag of this value.
    pub fn kind(&self) -> ScalarKind {
        match self {
            ScalarValue::String(_) => ScalarKind::String,
            ScalarValue::Bool(_) => ScalarKind::Bool,
            ScalarValue::I8(_) => ScalarKind::I8,
            ScalarValue::I16(_) => ScalarKind::I16,
            ScalarValue::I32(_) => ScalarKind::I32,
            ScalarValue::I64(_) => ScalarKind::I64,
            ScalarValue::Isize(_) => ScalarKind::Isize,
            ScalarValue::U8(_) => ScalarKind::U8,
            ScalarValue::U16(_) => ScalarKind::U16,
            ScalarValue::U32(_) => ScalarKind::U32,
            ScalarValue::U64(_) => ScalarKind::U64,
            ScalarValue::Usize(_) => ScalarKind::Usize,
            ScalarValue::F32(_) => ScalarKind::F32,
            ScalarValue::F64(_) => ScalarKind::F64,
            ScalarValue::Duration(_) => ScalarKind::Duration,
        }
    }
}

/// Parses one of the canonical boolean tokens.
fn parse_bool_token(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

macro_rules! parse_int {
    ($raw:expr, $key:expr, $ty:ty, $variant:ident) => {
        $raw.parse::<$ty>()
            .map(ScalarValue::$variant)
            .map_err(|e| ConfigError::from_parse_int_error($key.to_string(), e))
    };
}

macro_rules! parse_uint {
    ($raw:expr, $key:expr, $ty:ty, $variant:ident) => {
        if $raw.starts_with('+') {
            Err(ConfigError::TypeConversionError {
                key: $key.to_string(),
                target_type: "unsigned integer".to_string(),
                source: format!("unexpected sign in '{}'", $raw).into(),
            })
        } else {
            parse_int!($raw, $key, $ty, $variant)
        }
    };
}

macro_rules! parse_float {
    ($raw:expr, $key:expr, $ty:ty, $variant:ident) => {
        $raw.parse::<$ty>()
            .map(ScalarValue::$variant)
            .map_err(|e| ConfigError::from_parse_float_error($key.to_string(), e))
    };
}

impl ScalarKind {
    /// Returns a short human-readable name for the kind.
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Bool => "bool",
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::Isize => "isize",
            ScalarKind::U8 => "u8",
            ScalarKind::U16 => "u16",
            ScalarKind::U32 => "u32",
            ScalarKind::U64 => "u64",
            ScalarKind::Usize => "usize",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
            ScalarKind::Duration => "duration",
        }
    }

    /// Returns the zero value of the kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexbind::domain::config_value::{ScalarKind, ScalarValue};
    ///
    /// assert_eq!(ScalarKind::Bool.zero(), ScalarValue::Bool(false));
    /// assert_eq!(ScalarKind::String.zero(), ScalarValue::String(String::new()));
    /// ```
    pub fn zero(self) -> ScalarValue {
        match self {
            ScalarKind::String => ScalarValue::String(String::new()),
            ScalarKind::Bool => ScalarValue::Bool(false),
            ScalarKind::I8 => ScalarValue::I8(0),
            ScalarKind::I16 => ScalarValue::I16(0),
            ScalarKind::I32 => ScalarValue::I32(0),
            ScalarKind::I64 => ScalarValue::I64(0),
            ScalarKind::Isize => ScalarValue::Isize(0),
            ScalarKind::U8 => ScalarValue::U8(0),
            ScalarKind::U16 => ScalarValue::U16(0),
            ScalarKind::U32 => ScalarValue::U32(0),
            ScalarKind::U64 => ScalarValue::U64(0),
            ScalarKind::Usize => ScalarValue::Usize(0),
            ScalarKind::F32 => ScalarValue::F32(0.0),
            ScalarKind::F64 => ScalarValue::F64(0.0),
            ScalarKind::Duration => ScalarValue::Duration(Duration::ZERO),
        }
    }

    /// Parses `raw` using this kind's canonical textual representation.
    ///
    /// `key` is only used to label the error.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexbind::domain::config_value::{ScalarKind, ScalarValue};
    ///
    /// assert_eq!(ScalarKind::I8.parse("-12", "offset").unwrap(), ScalarValue::I8(-12));
    /// assert!(ScalarKind::I8.parse("300", "offset").is_err());
    /// ```
    pub fn parse(self, raw: &str, key: &str) -> Result<ScalarValue> {
        match self {
            ScalarKind::String => Ok(ScalarValue::String(raw.to_string())),
            ScalarKind::Bool => parse_bool_token(raw)
                .map(ScalarValue::Bool)
                .ok_or_else(|| ConfigError::from_invalid_bool(key.to_string(), raw)),
            ScalarKind::I8 => parse_int!(raw, key, i8, I8),
            ScalarKind::I16 => parse_int!(raw, key, i16, I16),
            ScalarKind::I32 => parse_int!(raw, key, i32, I32),
            ScalarKind::I64 => parse_int!(raw, key, i64, I64),
            ScalarKind::Isize => parse_int!(raw, key, isize, Isize),
            ScalarKind::U8 => parse_uint!(raw, key, u8, U8),
            ScalarKind::U16 => parse_uint!(raw, key, u16, U16),
            ScalarKind::U32 => parse_uint!(raw, key, u32, U32),
            ScalarKind::U64 => parse_uint!(raw, key, u64, U64),
            ScalarKind::Usize => parse_uint!(raw, key, usize, Usize),
            ScalarKind::F32 => parse_float!(raw, key, f32, F32),
            ScalarKind::F64 => parse_float!(raw, key, f64, F64),
            ScalarKind::Duration => parse_duration(raw)
                .map(ScalarValue::Duration)
                .map_err(|e| ConfigError::from_duration_error(key.to_string(), e)),
        }
    }

    /// Converts `raw`, absorbing any failure into the zero value.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexbind::domain::config_value::{ScalarKind, ScalarValue};
    ///
    /// assert_eq!(ScalarKind::U32.convert("8080", "port"), ScalarValue::U32(8080));
    /// assert_eq!(ScalarKind::U32.convert("eighty", "port"), ScalarValue::U32(0));
    /// ```
    pub fn convert(self, raw: &str, key: &str) -> ScalarValue {
        self.parse(raw, key).unwrap_or_else(|e| {
            tracing::debug!("Using zero value for '{}': {}", key, e);
            self.zero()
        })
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_value_roundtrip_string() {
        let value = ConfigValue::from("test".to_string());
        assert_eq!(value.as_str(), "test");
        assert_eq!(String::from(value), "test");
    }

    #[test]
    fn test_config_value_display() {
        let value = ConfigValue::from("test");
        assert_eq!(format!("{}", value), "test");
    }

    #[test]
    fn test_string_passes_through() {
        let value = ConfigValue::from("  spaces  ");
        assert_eq!(
            value.convert(ScalarKind::String, "k"),
            ScalarValue::String("  spaces  ".to_string())
        );
    }

    #[test]
    fn test_bool_true_tokens() {
        for token in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(
                ScalarKind::Bool.parse(token, "k").unwrap(),
                ScalarValue::Bool(true),
                "Failed for token: {}",
                token
            );
        }
    }

    #[test]
    fn test_bool_false_tokens() {
        for token in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(
                ScalarKind::Bool.parse(token, "k").unwrap(),
                ScalarValue::Bool(false),
                "Failed for token: {}",
                token
            );
        }
    }

    #[test]
    fn test_bool_rejects_other_tokens() {
        for token in ["yes", "on", "tRuE", " true", ""] {
            assert!(ScalarKind::Bool.parse(token, "k").is_err(), "{}", token);
            assert_eq!(ScalarKind::Bool.convert(token, "k"), ScalarValue::Bool(false));
        }
    }

    #[test]
    fn test_integer_widths() {
        assert_eq!(ScalarKind::I8.parse("127", "k").unwrap(), ScalarValue::I8(127));
        assert!(ScalarKind::I8.parse("128", "k").is_err());
        assert_eq!(ScalarKind::I16.parse("-32768", "k").unwrap(), ScalarValue::I16(-32768));
        assert_eq!(ScalarKind::I32.parse("+42", "k").unwrap(), ScalarValue::I32(42));
        assert_eq!(
            ScalarKind::I64.parse("-9223372036854775808", "k").unwrap(),
            ScalarValue::I64(i64::MIN)
        );
        assert_eq!(ScalarKind::U8.parse("255", "k").unwrap(), ScalarValue::U8(255));
        assert!(ScalarKind::U8.parse("256", "k").is_err());
        assert!(ScalarKind::U32.parse("-1", "k").is_err());
        assert_eq!(
            ScalarKind::U64.parse("18446744073709551615", "k").unwrap(),
            ScalarValue::U64(u64::MAX)
        );
    }

    #[test]
    fn test_unsigned_rejects_sign() {
        for kind in [
            ScalarKind::U8,
            ScalarKind::U16,
            ScalarKind::U32,
            ScalarKind::U64,
            ScalarKind::Usize,
        ] {
            let err = kind.parse("+5", "count").unwrap_err();
            assert!(matches!(
                err,
                ConfigError::TypeConversionError { ref key, .. } if key == "count"
            ));
            assert_eq!(kind.convert("+5", "count"), kind.zero());
        }
    }

    #[test]
    fn test_integer_failure_is_zero() {
        assert_eq!(ScalarKind::I8.convert("300", "k"), ScalarValue::I8(0));
        assert_eq!(ScalarKind::Isize.convert("3.14", "k"), ScalarValue::Isize(0));
        assert_eq!(ScalarKind::Usize.convert("", "k"), ScalarValue::Usize(0));
    }

    #[test]
    fn test_floats() {
        assert_eq!(ScalarKind::F64.parse("3.5", "k").unwrap(), ScalarValue::F64(3.5));
        assert_eq!(ScalarKind::F32.parse("-0.25", "k").unwrap(), ScalarValue::F32(-0.25));
        assert_eq!(ScalarKind::F64.parse("1e3", "k").unwrap(), ScalarValue::F64(1000.0));
        assert_eq!(ScalarKind::F64.convert("pi", "k"), ScalarValue::F64(0.0));
    }

    #[test]
    fn test_duration_kind() {
        assert_eq!(
            ScalarKind::Duration.parse("1m30s", "k").unwrap(),
            ScalarValue::Duration(Duration::from_secs(90))
        );
        assert_eq!(
            ScalarKind::Duration.convert("soon", "k"),
            ScalarValue::Duration(Duration::ZERO)
        );
    }

    #[test]
    fn test_parse_error_names_key() {
        let err = ScalarKind::U16.parse("abc", "server__port").unwrap_err();
        assert!(err.to_string().contains("server__port"));
    }

    #[test]
    fn test_zero_matches_kind() {
        let kinds = [
            ScalarKind::String,
            ScalarKind::Bool,
            ScalarKind::I8,
            ScalarKind::I64,
            ScalarKind::U16,
            ScalarKind::F32,
            ScalarKind::Duration,
        ];
        for kind in kinds {
            assert_eq!(kind.zero().kind(), kind);
        }
    }
}
