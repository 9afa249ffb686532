// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities and mock implementations for testing.
//!
//! This module provides helper functions and mock implementations
//! that can be used across different test files.

#![allow(dead_code)]

use hexbind::domain::{ConfigError, Result};
use hexbind::ports::{ConfigSource, ParameterStoreClient, SecretsManagerClient, ValuePreProcessor};
use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// A mock line source for testing.
#[derive(Debug, Clone)]
pub struct MockConfigSource {
    name: String,
    lines: Vec<String>,
    fail: bool,
}

impl MockConfigSource {
    /// Creates a new, empty mock source.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
            fail: false,
        }
    }

    /// Adds a `key=value` line.
    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.lines.push(format!("{}={}", key, value));
        self
    }

    /// Adds a raw line, well-formed or not.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Makes every read fail.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl ConfigSource for MockConfigSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn lines(&self) -> Result<Vec<String>> {
        if self.fail {
            return Err(ConfigError::SourceError {
                source_name: self.name.clone(),
                message: "mock read failure".to_string(),
                source: None,
            });
        }
        Ok(self.lines.clone())
    }
}

/// A secrets manager answering from a fixed table and recording lookups.
#[derive(Debug, Clone, Default)]
pub struct MockSecretsManager {
    secrets: HashMap<String, String>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockSecretsManager {
    /// Creates an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a secret.
    pub fn with_secret(mut self, name: &str, payload: &str) -> Self {
        self.secrets.insert(name.to_string(), payload.to_string());
        self
    }

    /// Returns the names looked up so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl SecretsManagerClient for MockSecretsManager {
    fn get_secret_string(&self, name: &str) -> Result<String> {
        self.requests.lock().unwrap().push(name.to_string());
        self.secrets
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::SourceError {
                source_name: "mock-secrets-manager".to_string(),
                message: format!("secret '{}' not found", name),
                source: None,
            })
    }
}

/// A parameter store answering from a fixed table and recording lookups.
#[derive(Debug, Clone, Default)]
pub struct MockParameterStore {
    parameters: HashMap<String, String>,
    requests: Arc<Mutex<Vec<(String, bool)>>>,
}

impl MockParameterStore {
    /// Creates an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter.
    pub fn with_parameter(mut self, name: &str, value: &str) -> Self {
        self.parameters.insert(name.to_string(), value.to_string());
        self
    }

    /// Returns the `(name, with_decryption)` pairs looked up so far.
    pub fn requests(&self) -> Vec<(String, bool)> {
        self.requests.lock().unwrap().clone()
    }
}

impl ParameterStoreClient for MockParameterStore {
    fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<String> {
        self.requests
            .lock()
            .unwrap()
            .push((name.to_string(), with_decryption));
        self.parameters
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::SourceError {
                source_name: "mock-parameter-store".to_string(),
                message: format!("parameter '{}' not found", name),
                source: None,
            })
    }
}

/// A pre-processor that records every call and returns values unchanged.
#[derive(Debug, Clone, Default)]
pub struct RecordingPreProcessor {
    calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingPreProcessor {
    /// Creates a recorder with no calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the `(key, value)` pairs seen so far.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ValuePreProcessor for RecordingPreProcessor {
    fn pre_process_value(&self, key: &str, value: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((key.to_string(), value.to_string()));
        Ok(value.to_string())
    }
}

/// Writes `lines` to a temporary file, one per line.
pub fn create_temp_env_file(lines: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.flush().unwrap();
    file
}

/// Installs a fmt subscriber for test output; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
