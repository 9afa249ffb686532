// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote secret reference pre-processor.
//!
//! Values of the form `sm://<name>[#<subkey>]` are replaced by the named
//! secrets-manager secret (or one field of its JSON payload), and values of the
//! form `ssm://<name>` by the named parameter-store parameter. All other
//! values pass through unchanged.

use crate::domain::{ConfigError, Result};
use crate::ports::{ParameterStoreClient, SecretsManagerClient, ValuePreProcessor};
use std::fmt;

/// Value prefix selecting a secrets-manager lookup.
pub const SECRETS_MANAGER_PREFIX: &str = "sm://";

/// Value prefix selecting a parameter-store lookup.
pub const PARAMETER_STORE_PREFIX: &str = "ssm://";

/// Separates a secret name from the JSON field to extract.
const SUBKEY_SEPARATOR: char = '#';

/// A [`ValuePreProcessor`] resolving `sm://` and `ssm://` references.
///
/// Prefixes only match at the start of a value, so `"my sm://x"` is stored
/// as-is. A reference whose backend client is not configured is an error.
///
/// # Examples
///
/// ```rust
/// use hexbind::adapters::AwsSecretPreProcessor;
/// use hexbind::domain::Result;
/// use hexbind::ports::{SecretsManagerClient, ValuePreProcessor};
///
/// struct Fixed;
///
/// impl SecretsManagerClient for Fixed {
///     fn get_secret_string(&self, _name: &str) -> Result<String> {
///         Ok(r#"{"user":"alice","pass":"x"}"#.to_string())
///     }
/// }
///
/// let preprocessor = AwsSecretPreProcessor::new(true).with_secrets_manager(Fixed);
/// assert_eq!(
///     preprocessor.pre_process_value("foo", "sm://my_secret#user").unwrap(),
///     "alice"
/// );
/// assert_eq!(preprocessor.pre_process_value("bar", "plain").unwrap(), "plain");
/// ```
pub struct AwsSecretPreProcessor {
    /// Whether parameter-store lookups ask for decryption
    decrypt_parameters: bool,
    secrets_manager: Option<Box<dyn SecretsManagerClient>>,
    parameter_store: Option<Box<dyn ParameterStoreClient>>,
}

impl AwsSecretPreProcessor {
    /// Creates a pre-processor with no backend clients.
    ///
    /// `decrypt_parameters` is forwarded to every parameter-store lookup.
    pub fn new(decrypt_parameters: bool) -> Self {
        Self {
            decrypt_parameters,
            secrets_manager: None,
            parameter_store: None,
        }
    }

    /// Sets the client used for `sm://` references.
    pub fn with_secrets_manager(mut self, client: impl SecretsManagerClient + 'static) -> Self {
        self.secrets_manager = Some(Box::new(client));
        self
    }

    /// Sets the client used for `ssm://` references.
    pub fn with_parameter_store(mut self, client: impl ParameterStoreClient + 'static) -> Self {
        self.parameter_store = Some(Box::new(client));
        self
    }

    /// Returns whether parameter-store lookups ask for decryption.
    pub fn decrypt_parameters(&self) -> bool {
        self.decrypt_parameters
    }

    fn resolve_secret(&self, reference: &str, target: &str) -> Result<String> {
        let client = self.secrets_manager.as_deref().ok_or_else(|| {
            ConfigError::secret_resolution(reference, "no secrets manager client configured", None)
        })?;

        let (name, subkey) = match target.split_once(SUBKEY_SEPARATOR) {
            Some((name, subkey)) => (name, Some(subkey)),
            None => (target, None),
        };
        if name.is_empty() {
            return Err(ConfigError::secret_resolution(reference, "empty secret name", None));
        }

        let payload = client.get_secret_string(name).map_err(|e| {
            ConfigError::secret_resolution(reference, "secrets manager lookup failed", Some(Box::new(e)))
        })?;
        tracing::debug!("Resolved secrets manager reference '{}'", reference);

        match subkey {
            Some(subkey) => extract_subkey(reference, &payload, subkey),
            None => Ok(payload),
        }
    }

    fn resolve_parameter(&self, reference: &str, name: &str) -> Result<String> {
        let client = self.parameter_store.as_deref().ok_or_else(|| {
            ConfigError::secret_resolution(reference, "no parameter store client configured", None)
        })?;
        if name.is_empty() {
            return Err(ConfigError::secret_resolution(reference, "empty parameter name", None));
        }

        let value = client
            .get_parameter(name, self.decrypt_parameters)
            .map_err(|e| {
                ConfigError::secret_resolution(
                    reference,
                    "parameter store lookup failed",
                    Some(Box::new(e)),
                )
            })?;
        tracing::debug!(
            "Resolved parameter store reference '{}' (decrypt={})",
            reference,
            self.decrypt_parameters
        );
        Ok(value)
    }
}

impl ValuePreProcessor for AwsSecretPreProcessor {
    fn pre_process_value(&self, _key: &str, value: &str) -> Result<String> {
        if let Some(target) = value.strip_prefix(SECRETS_MANAGER_PREFIX) {
            self.resolve_secret(value, target)
        } else if let Some(name) = value.strip_prefix(PARAMETER_STORE_PREFIX) {
            self.resolve_parameter(value, name)
        } else {
            Ok(value.to_string())
        }
    }
}

impl fmt::Debug for AwsSecretPreProcessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsSecretPreProcessor")
            .field("decrypt_parameters", &self.decrypt_parameters)
            .field("secrets_manager", &self.secrets_manager.is_some())
            .field("parameter_store", &self.parameter_store.is_some())
            .finish()
    }
}

/// Selects `subkey` from a JSON object payload.
///
/// String fields are returned unquoted; other JSON values as their JSON text.
fn extract_subkey(reference: &str, payload: &str, subkey: &str) -> Result<String> {
    if subkey.is_empty() {
        return Err(ConfigError::secret_resolution(reference, "empty subkey", None));
    }

    let parsed: serde_json::Value = serde_json::from_str(payload).map_err(|e| {
        ConfigError::secret_resolution(reference, "secret payload is not JSON", Some(Box::new(e)))
    })?;
    let serde_json::Value::Object(fields) = parsed else {
        return Err(ConfigError::secret_resolution(
            reference,
            "secret payload is not a JSON object",
            None,
        ));
    };

    match fields.get(subkey) {
        Some(serde_json::Value::String(value)) => Ok(value.clone()),
        Some(other) => Ok(other.to_string()),
        None => Err(ConfigError::secret_resolution(
            reference,
            format!("subkey '{}' not found in secret payload", subkey),
            None,
        )),
    }
}
