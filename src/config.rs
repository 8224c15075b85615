use anyhow::{bail, Context, Result};
use std::env;

const DEFAULT_LOG_FILTER: &str = "info,tmf_errors=debug";
const DEFAULT_STATUS: u16 = 500;

#[derive(Debug, Clone)]
pub struct Config {
    pub logging: LoggingConfig,
    pub response: ResponseConfig,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: String,
    /// Log the long form (causes expanded) instead of the short form.
    pub include_stack_trace: bool,
}

#[derive(Debug, Clone)]
pub struct ResponseConfig {
    /// Status used for errors that carry none of their own.
    pub default_status: u16,
    /// Origin stamped onto outgoing responses without a source.
    pub source: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
            include_stack_trace: true,
        }
    }
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            default_status: DEFAULT_STATUS,
            source: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Ok(Config {
            logging: LoggingConfig {
                filter: env::var("LOG_FILTER").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
                include_stack_trace: env::var("ERROR_LOG_STACK_TRACE")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .context("ERROR_LOG_STACK_TRACE must be true or false")?,
            },
            response: ResponseConfig {
                default_status: parse_status(
                    &env::var("ERROR_DEFAULT_STATUS")
                        .unwrap_or_else(|_| DEFAULT_STATUS.to_string()),
                )
                .context("ERROR_DEFAULT_STATUS must be a valid HTTP status")?,
                source: resolve_source(
                    env::var("ERROR_SOURCE").ok(),
                    env::var("SERVICE_NAME").ok(),
                ),
            },
        })
    }
}

/// ERROR_SOURCE wins over SERVICE_NAME; blank values count as unset.
fn resolve_source(error_source: Option<String>, service_name: Option<String>) -> Option<String> {
    let present = |value: Option<String>| value.filter(|s| !s.trim().is_empty());
    present(error_source).or_else(|| present(service_name))
}

fn parse_status(raw: &str) -> Result<u16> {
    let status: u16 = raw.trim().parse().context("not a number")?;
    if !(100..=599).contains(&status) {
        bail!("status {} is outside 100..=599", status);
    }
    Ok(status)
}
