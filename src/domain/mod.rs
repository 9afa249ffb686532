// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core binding types.
//!
//! This module contains the keys, values, scalar converter and record
//! descriptors that the population engine operates on. It is independent of
//! where configuration comes from.

pub mod config_key;
pub mod config_value;
pub mod duration;
pub mod errors;
pub mod record;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::{ConfigValue, ScalarKind, ScalarValue};
pub use errors::{ConfigError, Result};
pub use record::{FieldDescriptor, FieldKind, FieldMut, FieldType, Record};
