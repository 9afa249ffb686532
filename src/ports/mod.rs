// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) for the collaborators
//! of the binding engine: line sources, value pre-processors and remote
//! secret backends. They are implemented by adapters in the adapters layer.

pub mod preprocessor;
pub mod secrets;
pub mod source;

// Re-export commonly used types
pub use preprocessor::ValuePreProcessor;
pub use secrets::{ParameterStoreClient, SecretsManagerClient};
pub use source::ConfigSource;
