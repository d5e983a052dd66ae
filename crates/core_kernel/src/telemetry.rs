//! Tracing subscriber installation

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::FiscalCodeConfig;
use crate::error::CoreError;

/// Initializes the global tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over `log_level` when set.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
/// * `json` - Emit JSON lines instead of the human-readable format
///
/// # Errors
///
/// Returns `CoreError::Configuration` if a global subscriber is already installed
pub fn init_tracing(log_level: &str, json: bool) -> Result<(), CoreError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    result.map_err(|e| CoreError::configuration(format!("tracing already initialized: {}", e)))
}

/// Initializes tracing from loaded configuration
pub fn init_from_config(config: &FiscalCodeConfig) -> Result<(), CoreError> {
    init_tracing(&config.log_level, config.log_json)
}
