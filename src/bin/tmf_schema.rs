// Prints the OpenAPI document describing the TMF error response.
// Usage: cargo run --bin tmf-schema > tmf-error.json

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;

use tmf_errors::config::Config;
use tmf_errors::openapi::ApiDoc;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // stdout carries the document, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let doc = ApiDoc::openapi();
    let json = serde_json::to_string_pretty(&doc).context("Failed to serialize OpenAPI document")?;

    println!("{}", json);
    info!("OpenAPI document generated");

    Ok(())
}
