// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable configuration source adapter.
//!
//! This module provides an adapter that exposes the process environment as
//! `KEY=VALUE` lines.

use crate::domain::Result;
use crate::ports::ConfigSource;
use std::env;

/// Maximum length for environment variable keys (prevents DoS)
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values (prevents DoS)
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Configuration source adapter for environment variables.
///
/// The environment is read on every call to [`ConfigSource::lines`], so a
/// builder merging this source sees the environment as it is at merge time.
/// Variables whose name or value is not valid UTF-8 are skipped.
///
/// # Examples
///
/// ```rust
/// use hexbind::adapters::EnvVarAdapter;
/// use hexbind::ports::ConfigSource;
///
/// // Read all environment variables
/// let adapter = EnvVarAdapter::new();
///
/// // Read only variables with a specific prefix, stripping it
/// let adapter = EnvVarAdapter::with_prefix("APP_");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvVarAdapter {
    /// Optional prefix to filter environment variables
    prefix: Option<String>,
    /// Fixed variables used instead of the process environment
    fixed: Option<Vec<(String, String)>>,
}

impl EnvVarAdapter {
    /// Creates an adapter over the whole process environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an adapter that only reads variables starting with `prefix`.
    ///
    /// The prefix is stripped from the names it matches.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            fixed: None,
        }
    }

    /// Creates an adapter over a fixed set of variables.
    ///
    /// Useful in tests that must not touch the process environment.
    ///
    /// ```rust
    /// use hexbind::adapters::EnvVarAdapter;
    /// use hexbind::ports::ConfigSource;
    ///
    /// let adapter = EnvVarAdapter::with_vars([("PORT", "8080")]);
    /// assert_eq!(adapter.lines().unwrap(), vec!["PORT=8080"]);
    /// ```
    pub fn with_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            prefix: None,
            fixed: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Applies `prefix` filtering to this adapter.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    fn snapshot(&self) -> Vec<(String, String)> {
        match &self.fixed {
            Some(vars) => vars.clone(),
            None => env::vars_os()
                .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
                    (Ok(key), Ok(value)) => Some((key, value)),
                    _ => {
                        tracing::trace!("Skipping environment variable that is not valid UTF-8");
                        None
                    }
                })
                .collect(),
        }
    }

    fn to_line(&self, key: &str, value: &str) -> Option<String> {
        if key.len() > MAX_ENV_KEY_LEN || value.len() > MAX_ENV_VALUE_LEN {
            tracing::debug!(
                "Skipping oversized environment variable: key_len={}, value_len={} (max key={}, max value={})",
                key.len(),
                value.len(),
                MAX_ENV_KEY_LEN,
                MAX_ENV_VALUE_LEN
            );
            return None;
        }

        let key = match &self.prefix {
            Some(prefix) => key.strip_prefix(prefix.as_str())?,
            None => key,
        };
        Some(format!("{}={}", key, value))
    }
}

impl ConfigSource for EnvVarAdapter {
    fn name(&self) -> &str {
        "env"
    }

    fn lines(&self) -> Result<Vec<String>> {
        let lines: Vec<String> = self
            .snapshot()
            .iter()
            .filter_map(|(key, value)| self.to_line(key, value))
            .collect();

        tracing::debug!(
            "Loaded {} environment variables (prefix={:?})",
            lines.len(),
            self.prefix
        );
        Ok(lines)
    }
}
