// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for hexbind.
//!
//! This example demonstrates:
//! - Declaring bindable structs with `record!`
//! - Binding the process environment onto them
//! - Nested records, renamed and ignored fields, sequences and durations
//! - Zero values for missing or malformed settings
//!
//! To run this example:
//! ```bash
//! export APP_NAME="MyApplication"
//! export DATABASE__HOST="db.internal"
//! export DATABASE__PORT="5432"
//! export DATABASE__TIMEOUT="1m30s"
//! export ENABLE_DEBUG="true"
//! export ALLOWED_ORIGINS="https://a.example https://b.example"
//!
//! cargo run --example basic_usage
//! ```

use hexbind::prelude::*;
use hexbind::record;
use std::time::Duration;

record! {
    #[derive(Debug, Default)]
    struct Database {
        host: String,
        port: u16,
        timeout: Duration,
    }
}

record! {
    #[derive(Debug, Default)]
    struct AppConfig {
        name: String as "APP_NAME",
        database: Database,
        enable_debug: bool,
        allowed_origins: Vec<String>,
        started_by: String as "-",
    }
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== hexbind: Basic Usage ===\n");

    let builder = Builder::from_env()?;
    println!("Merged {} environment variables.\n", builder.len());

    let mut config = AppConfig {
        started_by: "basic_usage demo".to_string(),
        ..AppConfig::default()
    };
    builder.to(&mut config)?;

    println!("--- Scalars ---");
    println!("app name:     {:?}", config.name);
    println!("debug:        {}", config.enable_debug);

    println!("\n--- Nested record (DATABASE__*) ---");
    println!("host:         {:?}", config.database.host);
    println!("port:         {}", config.database.port);
    println!("timeout:      {:?}", config.database.timeout);

    println!("\n--- Sequence ---");
    for origin in &config.allowed_origins {
        println!("origin:       {}", origin);
    }
    if config.allowed_origins.is_empty() {
        println!("(ALLOWED_ORIGINS not set)");
    }

    println!("\n--- Ignored field ---");
    println!("started_by:   {:?}", config.started_by);

    println!("\n--- Raw lookup ---");
    match builder.get("database__port") {
        Some(value) => println!("DATABASE__PORT = {}", value),
        None => println!("DATABASE__PORT not set; bound as 0"),
    }

    Ok(())
}
