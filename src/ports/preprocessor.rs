// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value pre-processor trait definition.
//!
//! A pre-processor sees every key/value pair as it is merged into a
//! [`Builder`](crate::service::Builder) and may replace the value, for
//! example by resolving a reference to a remote secret.

use crate::domain::Result;

/// A hook that rewrites values before they enter the flat map.
///
/// The hook is invoked once per entry per merge, including for values it does
/// not change, so implementations must decide from the value's form whether
/// to transform it. Returning an error aborts the whole merge.
///
/// # Examples
///
/// ```rust
/// use hexbind::ports::ValuePreProcessor;
/// use hexbind::domain::Result;
///
/// struct Uppercase;
///
/// impl ValuePreProcessor for Uppercase {
///     fn pre_process_value(&self, _key: &str, value: &str) -> Result<String> {
///         Ok(value.to_uppercase())
///     }
/// }
///
/// assert_eq!(Uppercase.pre_process_value("k", "abc").unwrap(), "ABC");
/// ```
pub trait ValuePreProcessor: Send + Sync {
    /// Returns the value to store for `key`.
    fn pre_process_value(&self, key: &str, value: &str) -> Result<String>;
}

impl<P: ValuePreProcessor + ?Sized> ValuePreProcessor for Box<P> {
    fn pre_process_value(&self, key: &str, value: &str) -> Result<String> {
        (**self).pre_process_value(key, value)
    }
}
