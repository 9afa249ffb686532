// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line-oriented configuration file adapter.
//!
//! This module provides an adapter that reads `KEY=VALUE` lines from a file,
//! the same shape as a process environment dump.

use crate::domain::{ConfigError, Result};
use crate::ports::ConfigSource;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for configuration files (10MB)
const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Default file name used by [`LineFileAdapter::from_default_location`].
pub const DEFAULT_FILE_NAME: &str = "config.env";

const SOURCE_NAME: &str = "line-file";

/// Configuration source adapter for `KEY=VALUE` files.
///
/// The file is read once, when the adapter is created. Malformed lines are
/// kept and later discarded by the normaliser, so comments and blank lines
/// are harmless.
///
/// # Examples
///
/// ```rust,no_run
/// use hexbind::adapters::LineFileAdapter;
/// use hexbind::ports::ConfigSource;
///
/// // Load from a specific file
/// let adapter = LineFileAdapter::from_file("/etc/myapp/config.env").unwrap();
///
/// // Load from default OS location
/// let adapter = LineFileAdapter::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct LineFileAdapter {
    /// Canonical path of the file
    file_path: PathBuf,
    /// Raw lines, in file order
    lines: Vec<String>,
}

impl LineFileAdapter {
    /// Reads the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SourceError`] if the file is missing, unreadable
    /// or larger than 10MB. Lines that are not valid UTF-8 are skipped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref();
        let canonical_path = file_path
            .canonicalize()
            .map_err(|e| source_error("Invalid or inaccessible path", file_path, e))?;

        let metadata = fs::metadata(&canonical_path)
            .map_err(|e| source_error("Failed to read file metadata", &canonical_path, e))?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(ConfigError::SourceError {
                source_name: SOURCE_NAME.to_string(),
                message: format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_FILE_SIZE
                ),
                source: None,
            });
        }

        let content = fs::read(&canonical_path)
            .map_err(|e| source_error("Failed to read configuration file", &canonical_path, e))?;
        let lines = decode_lines(&content);

        tracing::debug!(
            "Read {} lines from {}",
            lines.len(),
            canonical_path.display()
        );

        Ok(Self {
            file_path: canonical_path,
            lines,
        })
    }

    /// Reads [`DEFAULT_FILE_NAME`] from the OS configuration directory of
    /// `app_name`.
    ///
    /// # Errors
    ///
    /// Fails if no home directory can be determined or the file cannot be read.
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, DEFAULT_FILE_NAME)
    }

    /// Reads `filename` from the OS configuration directory of `app_name`.
    ///
    /// # Errors
    ///
    /// Fails if no home directory can be determined or the file cannot be read.
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: SOURCE_NAME.to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Self::from_file(proj_dirs.config_dir().join(filename))
    }

    /// Returns the path to the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

impl ConfigSource for LineFileAdapter {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn lines(&self) -> Result<Vec<String>> {
        Ok(self.lines.clone())
    }
}

/// Splits `content` into lines, dropping any that are not valid UTF-8.
fn decode_lines(content: &[u8]) -> Vec<String> {
    let content = content.strip_suffix(b"\n").unwrap_or(content);
    if content.is_empty() {
        return Vec::new();
    }

    content
        .split(|b| *b == b'\n')
        .enumerate()
        .filter_map(|(index, line)| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            match std::str::from_utf8(line) {
                Ok(line) => Some(line.to_string()),
                Err(_) => {
                    tracing::trace!("Skipping line {} that is not valid UTF-8", index + 1);
                    None
                }
            }
        })
        .collect()
}

fn source_error(message: &str, path: &Path, err: std::io::Error) -> ConfigError {
    ConfigError::SourceError {
        source_name: SOURCE_NAME.to_string(),
        message: format!(
            "{}: {}",
            message,
            path.file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("<unknown>")
        ),
        source: Some(Box::new(err)),
    }
}
