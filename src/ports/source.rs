// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! A configuration source supplies raw `KEY=VALUE` lines. Sources never
//! interpret the lines themselves; normalisation into the flat map happens
//! when a source is merged into a [`Builder`](crate::service::Builder).

use crate::domain::Result;

/// A trait for configuration sources.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so sources can be prepared on one
/// thread and merged on another.
///
/// # Examples
///
/// ```rust
/// use hexbind::ports::ConfigSource;
/// use hexbind::domain::Result;
///
/// struct Defaults;
///
/// impl ConfigSource for Defaults {
///     fn name(&self) -> &str {
///         "defaults"
///     }
///
///     fn lines(&self) -> Result<Vec<String>> {
///         Ok(vec!["PORT=8080".to_string(), "LOG_LEVEL=info".to_string()])
///     }
/// }
///
/// let lines = Defaults.lines().unwrap();
/// assert_eq!(lines.len(), 2);
/// ```
pub trait ConfigSource: Send + Sync {
    /// Returns the name of this configuration source.
    ///
    /// This name is used for logging and error messages. It should be a short
    /// identifier like "env" or "line-file".
    fn name(&self) -> &str;

    /// Returns the source's raw lines in order.
    ///
    /// Lines are expected in `KEY=VALUE` form; malformed lines are dropped
    /// during normalisation, not here.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - The raw lines, in source order
    /// * `Err(ConfigError)` - The source could not be read
    fn lines(&self) -> Result<Vec<String>>;
}
