// SPDX-License-Identifier: MIT OR Apache-2.0

//! AWS SDK backed secret clients.
//!
//! The SDK is async; these clients block on a Tokio runtime they own, so they
//! must not be used from inside another runtime's worker thread.

use crate::adapters::aws::AwsSecretPreProcessor;
use crate::domain::{ConfigError, Result};
use crate::ports::{ParameterStoreClient, SecretsManagerClient};
use aws_config::{BehaviorVersion, SdkConfig};
use std::sync::Arc;
use tokio::runtime::Runtime;

fn build_runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .map_err(ConfigError::from)
}

fn load_config(runtime: &Runtime) -> SdkConfig {
    runtime.block_on(aws_config::defaults(BehaviorVersion::latest()).load())
}

fn lookup_error(source_name: &str, name: &str, detail: String) -> ConfigError {
    ConfigError::SourceError {
        source_name: source_name.to_string(),
        message: format!("lookup of '{}' failed: {}", name, detail),
        source: None,
    }
}

/// [`SecretsManagerClient`] backed by `aws-sdk-secretsmanager`.
#[derive(Debug, Clone)]
pub struct SdkSecretsManagerClient {
    client: aws_sdk_secretsmanager::Client,
    runtime: Arc<Runtime>,
}

impl SdkSecretsManagerClient {
    /// Creates a client from the default AWS configuration chain.
    ///
    /// # Errors
    ///
    /// Fails if the Tokio runtime cannot be started.
    pub fn from_env() -> Result<Self> {
        let runtime = Arc::new(build_runtime()?);
        let config = load_config(&runtime);
        Ok(Self::from_conf(&config, runtime))
    }

    /// Creates a client from a loaded SDK configuration.
    pub fn from_conf(config: &SdkConfig, runtime: Arc<Runtime>) -> Self {
        Self {
            client: aws_sdk_secretsmanager::Client::new(config),
            runtime,
        }
    }
}

impl SecretsManagerClient for SdkSecretsManagerClient {
    fn get_secret_string(&self, name: &str) -> Result<String> {
        let output = self
            .runtime
            .block_on(self.client.get_secret_value().secret_id(name).send())
            .map_err(|err| {
                lookup_error(
                    "secrets-manager",
                    name,
                    aws_sdk_secretsmanager::error::DisplayErrorContext(&err).to_string(),
                )
            })?;

        output
            .secret_string()
            .map(str::to_string)
            .ok_or_else(|| lookup_error("secrets-manager", name, "secret has no string value".to_string()))
    }
}

/// [`ParameterStoreClient`] backed by `aws-sdk-ssm`.
#[derive(Debug, Clone)]
pub struct SdkParameterStoreClient {
    client: aws_sdk_ssm::Client,
    runtime: Arc<Runtime>,
}

impl SdkParameterStoreClient {
    /// Creates a client from the default AWS configuration chain.
    ///
    /// # Errors
    ///
    /// Fails if the Tokio runtime cannot be started.
    pub fn from_env() -> Result<Self> {
        let runtime = Arc::new(build_runtime()?);
        let config = load_config(&runtime);
        Ok(Self::from_conf(&config, runtime))
    }

    /// Creates a client from a loaded SDK configuration.
    pub fn from_conf(config: &SdkConfig, runtime: Arc<Runtime>) -> Self {
        Self {
            client: aws_sdk_ssm::Client::new(config),
            runtime,
        }
    }
}

impl ParameterStoreClient for SdkParameterStoreClient {
    fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<String> {
        let output = self
            .runtime
            .block_on(
                self.client
                    .get_parameter()
                    .name(name)
                    .with_decryption(with_decryption)
                    .send(),
            )
            .map_err(|err| {
                lookup_error(
                    "parameter-store",
                    name,
                    aws_sdk_ssm::error::DisplayErrorContext(&err).to_string(),
                )
            })?;

        output
            .parameter()
            .and_then(|parameter| parameter.value())
            .map(str::to_string)
            .ok_or_else(|| lookup_error("parameter-store", name, "parameter has no value".to_string()))
    }
}

impl AwsSecretPreProcessor {
    /// Creates a pre-processor with SDK clients for both backends, sharing one
    /// runtime and the default AWS configuration chain.
    ///
    /// # Errors
    ///
    /// Fails if the Tokio runtime cannot be started.
    pub fn from_env(decrypt_parameters: bool) -> Result<Self> {
        let runtime = Arc::new(build_runtime()?);
        let config = load_config(&runtime);
        tracing::debug!(
            "Loaded AWS configuration (region={:?})",
            config.region().map(|r| r.to_string())
        );

        Ok(Self::new(decrypt_parameters)
            .with_secrets_manager(SdkSecretsManagerClient::from_conf(&config, runtime.clone()))
            .with_parameter_store(SdkParameterStoreClient::from_conf(&config, runtime)))
    }
}
