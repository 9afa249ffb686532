// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bind flat key/value configuration onto strongly-typed nested structs.
//!
//! Configuration arrives as `KEY=VALUE` lines from the process environment or
//! from files, is merged into one case-insensitive map, optionally passed
//! through a value pre-processor (for example to resolve `sm://` and `ssm://`
//! secret references), and is finally written into plain Rust structs whose
//! field layout is described by the [`record!`] macro.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `ConfigValue`, `ScalarKind`,
//!   the `Record` model, errors)
//! - **Ports**: Trait definitions (`ConfigSource`, `ValuePreProcessor`,
//!   secret backend clients)
//! - **Adapters**: Environment and file sources, the secret reference
//!   pre-processor and its AWS SDK clients
//! - **Service**: The `Builder` that merges sources and binds records
//!
//! # Binding rules
//!
//! - A field's key is its name, or its tag if one is given, lower-cased.
//!   Nested records prefix their fields with `<key>__`.
//! - Missing or unconvertible values set the field to its zero value.
//! - Sequences are split on a single space by default.
//! - Map, option, pointer and array fields are rejected with
//!   [`ConfigError::UnsupportedField`](domain::ConfigError::UnsupportedField).
//!
//! # Feature Flags
//!
//! - `env`: Enable environment variable support (default)
//! - `file`: Enable line file support (default)
//! - `aws`: Enable AWS SDK backed secret clients
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use hexbind::prelude::*;
//! use hexbind::record;
//! use std::time::Duration;
//!
//! record! {
//!     #[derive(Debug, Default)]
//!     pub struct Database {
//!         pub url: String,
//!         pub timeout: Duration,
//!     }
//! }
//!
//! record! {
//!     #[derive(Debug, Default)]
//!     pub struct AppConfig {
//!         pub database: Database,
//!         pub port: u16 as "HTTP_PORT",
//!         pub hosts: Vec<String>,
//!     }
//! }
//!
//! # fn main() -> hexbind::domain::Result<()> {
//! let mut builder = Builder::new();
//! builder.merge_source(&EnvVarAdapter::with_vars([
//!     ("DATABASE__URL", "postgres://localhost/app"),
//!     ("DATABASE__TIMEOUT", "1m30s"),
//!     ("HTTP_PORT", "8080"),
//!     ("HOSTS", "a.example b.example"),
//! ]))?;
//!
//! let config: AppConfig = builder.build()?;
//! assert_eq!(config.database.url, "postgres://localhost/app");
//! assert_eq!(config.database.timeout, Duration::from_secs(90));
//! assert_eq!(config.port, 8080);
//! assert_eq!(config.hosts, ["a.example", "b.example"]);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::AwsSecretPreProcessor;
    pub use crate::domain::{ConfigError, ConfigKey, ConfigValue, Record, Result};
    pub use crate::ports::{ConfigSource, ValuePreProcessor};
    pub use crate::service::Builder;

    // Re-export adapters based on feature flags
    #[cfg(feature = "env")]
    pub use crate::adapters::EnvVarAdapter;
    #[cfg(feature = "file")]
    pub use crate::adapters::LineFileAdapter;
}
