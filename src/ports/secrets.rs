// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote secret backend traits.
//!
//! These are the lookups the [`AwsSecretPreProcessor`](crate::adapters::AwsSecretPreProcessor)
//! dispatches to. They are synchronous; an implementation backed by an async
//! SDK blocks on its own runtime.

use crate::domain::Result;

/// Looks up secrets by name in a secrets manager.
pub trait SecretsManagerClient: Send + Sync {
    /// Returns the string payload of the secret called `name`.
    fn get_secret_string(&self, name: &str) -> Result<String>;
}

/// Looks up parameters by name in a parameter store.
pub trait ParameterStoreClient: Send + Sync {
    /// Returns the value of the parameter called `name`.
    ///
    /// `with_decryption` asks the store to decrypt secure parameters.
    fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<String>;
}
