// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing source and pre-processor implementations.
//!
//! This module contains concrete implementations of the traits defined in the
//! ports layer: line sources for the process environment and for files, and
//! the `sm://` / `ssm://` secret reference pre-processor.

pub mod aws;
#[cfg(feature = "aws")]
pub mod aws_sdk;
#[cfg(feature = "env")]
pub mod env_var;
#[cfg(feature = "file")]
pub mod line_file;

// Re-export adapters based on feature flags
pub use aws::AwsSecretPreProcessor;
#[cfg(feature = "aws")]
pub use aws_sdk::{SdkParameterStoreClient, SdkSecretsManagerClient};
#[cfg(feature = "env")]
pub use env_var::EnvVarAdapter;
#[cfg(feature = "file")]
pub use line_file::LineFileAdapter;
