// SPDX-License-Identifier: MIT OR Apache-2.0

//! Secret reference example for hexbind.
//!
//! Values of the form `sm://<name>[#<field>]` and `ssm://<name>` are resolved
//! while merging. This example uses in-memory backends; build with
//! `--features aws` and set `HEXBIND_DEMO_AWS=1` to use real AWS clients
//! with the default credential chain instead.
//!
//! ```bash
//! cargo run --example secret_references
//! ```

use hexbind::domain::ConfigError;
use hexbind::ports::{ParameterStoreClient, SecretsManagerClient};
use hexbind::prelude::*;
use hexbind::record;
use std::collections::HashMap;

record! {
    #[derive(Debug, Default)]
    struct Credentials {
        user: String,
        password: String as "PASS",
    }
}

record! {
    #[derive(Debug, Default)]
    struct Config {
        credentials: Credentials,
        api_token: String,
        pool_size: u32,
        region: String,
    }
}

struct InMemorySecrets(HashMap<&'static str, &'static str>);

impl SecretsManagerClient for InMemorySecrets {
    fn get_secret_string(&self, name: &str) -> Result<String> {
        self.0
            .get(name)
            .map(|s| s.to_string())
            .ok_or_else(|| ConfigError::SourceError {
                source_name: "in-memory-secrets".to_string(),
                message: format!("no secret named '{}'", name),
                source: None,
            })
    }
}

struct InMemoryParameters(HashMap<&'static str, &'static str>);

impl ParameterStoreClient for InMemoryParameters {
    fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<String> {
        tracing::info!("parameter lookup {} (decrypt={})", name, with_decryption);
        self.0
            .get(name)
            .map(|s| s.to_string())
            .ok_or_else(|| ConfigError::SourceError {
                source_name: "in-memory-parameters".to_string(),
                message: format!("no parameter named '{}'", name),
                source: None,
            })
    }
}

fn preprocessor() -> Result<AwsSecretPreProcessor> {
    #[cfg(feature = "aws")]
    if std::env::var("HEXBIND_DEMO_AWS").as_deref() == Ok("1") {
        return AwsSecretPreProcessor::from_env(true);
    }

    let secrets = InMemorySecrets(HashMap::from([
        ("prod/db", r#"{"user":"svc_billing","pass":"correct-horse"}"#),
        ("prod/api-token", "tok_live_123"),
    ]));
    let parameters = InMemoryParameters(HashMap::from([("/prod/db/pool", "24")]));

    Ok(AwsSecretPreProcessor::new(true)
        .with_secrets_manager(secrets)
        .with_parameter_store(parameters))
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== hexbind: Secret References ===\n");

    let mut builder = Builder::with_preprocessor(preprocessor()?);
    builder.merge([
        ("CREDENTIALS__USER", "sm://prod/db#user"),
        ("CREDENTIALS__PASS", "sm://prod/db#pass"),
        ("API_TOKEN", "sm://prod/api-token"),
        ("POOL_SIZE", "ssm:///prod/db/pool"),
        ("REGION", "eu-west-1"),
    ])?;

    let config: Config = builder.build()?;
    println!("user:      {}", config.credentials.user);
    println!("password:  {} characters", config.credentials.password.len());
    println!("api token: {}...", config.api_token.chars().take(4).collect::<String>());
    println!("pool size: {}", config.pool_size);
    println!("region:    {}", config.region);

    println!("\n--- Unresolvable reference ---");
    match builder.merge([("API_TOKEN", "sm://prod/missing")]) {
        Ok(()) => println!("unexpectedly resolved"),
        Err(e) => println!("merge rejected: {}", e),
    }

    Ok(())
}
