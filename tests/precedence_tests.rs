// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for merge order and case-insensitive overriding.

mod test_helpers;

use hexbind::prelude::*;
use hexbind::record;
use hexbind::service::lines_to_map;
use std::env;
use test_helpers::*;

/// Helper to set and clean up environment variables
struct EnvGuard {
    keys: Vec<String>,
}

impl EnvGuard {
    fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
        self.keys.push(key.to_string());
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            env::remove_var(key);
        }
    }
}

record! {
    #[derive(Debug, Default)]
    struct Settings {
        hexbind_prec_host: String,
        hexbind_prec_port: u16,
        hexbind_prec_mode: String,
    }
}

#[test]
fn test_later_merge_overrides_earlier() {
    let mut builder = Builder::new();
    builder.merge([("FOO", "1")]).unwrap();
    builder.merge([("foo", "2")]).unwrap();
    assert_eq!(builder.get("FOO").unwrap().as_str(), "2");
    assert_eq!(builder.len(), 1);
}

#[test]
fn test_titlecase_keys_share_one_entry() {
    let mut builder = Builder::new();
    builder.merge([("\u{01C4}", "upper")]).unwrap();
    builder.merge([("\u{01C5}", "title")]).unwrap();
    builder.merge([("\u{01C6}", "lower")]).unwrap();

    assert_eq!(builder.len(), 1);
    assert_eq!(builder.get("\u{01C5}").unwrap().as_str(), "lower");
    assert!(lines_to_map(["\u{01C5}=x"]).contains_key(builder.keys().next().unwrap().as_str()));
}

#[test]
fn test_last_source_wins_per_key() {
    let defaults = MockConfigSource::new("defaults")
        .with_value("HEXBIND_PREC_HOST", "localhost")
        .with_value("HEXBIND_PREC_PORT", "80")
        .with_value("HEXBIND_PREC_MODE", "dev");
    let overrides = MockConfigSource::new("overrides").with_value("hexbind_prec_port", "8443");

    let mut builder = Builder::new();
    builder.merge_source(&defaults).unwrap();
    builder.merge_source(&overrides).unwrap();

    let settings: Settings = builder.build().unwrap();
    assert_eq!(settings.hexbind_prec_host, "localhost");
    assert_eq!(settings.hexbind_prec_port, 8443);
    assert_eq!(settings.hexbind_prec_mode, "dev");
}

#[test]
fn test_later_source_cannot_unset() {
    let first = MockConfigSource::new("first").with_value("HEXBIND_PREC_MODE", "prod");
    let second = MockConfigSource::new("second").with_line("HEXBIND_PREC_MODE=");

    let mut builder = Builder::new();
    builder.merge_source(&first).unwrap();
    builder.merge_source(&second).unwrap();
    assert_eq!(builder.get("hexbind_prec_mode").unwrap().as_str(), "prod");
}

#[test]
#[cfg(all(feature = "env", feature = "file"))]
fn test_env_over_file() {
    let mut env_guard = EnvGuard::new();
    let file = create_temp_env_file(&[
        "HEXBIND_PREC_HOST=file-host",
        "HEXBIND_PREC_PORT=1000",
    ]);
    env_guard.set("HEXBIND_PREC_PORT", "2000");

    let builder = Builder::from_file(file.path()).unwrap().with_env().unwrap();

    let settings: Settings = builder.build().unwrap();
    assert_eq!(settings.hexbind_prec_host, "file-host");
    assert_eq!(settings.hexbind_prec_port, 2000);
}

#[test]
#[cfg(all(feature = "env", feature = "file"))]
fn test_file_over_env() {
    let mut env_guard = EnvGuard::new();
    let file = create_temp_env_file(&["HEXBIND_PREC_MODE=from-file"]);
    env_guard.set("HEXBIND_PREC_MODE", "from-env");

    let builder = Builder::from_env().unwrap().with_file(file.path()).unwrap();

    let settings: Settings = builder.build().unwrap();
    assert_eq!(settings.hexbind_prec_mode, "from-file");
}

#[test]
#[cfg(feature = "env")]
fn test_env_prefix_is_stripped() {
    let source = EnvVarAdapter::with_vars([
        ("MYAPP_HEXBIND_PREC_HOST", "prefixed"),
        ("HEXBIND_PREC_HOST", "unprefixed"),
    ])
    .prefix("MYAPP_");

    let mut builder = Builder::new();
    builder.merge_source(&source).unwrap();
    assert_eq!(builder.get("hexbind_prec_host").unwrap().as_str(), "prefixed");
}
