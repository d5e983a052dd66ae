//! Runtime configuration
//!
//! Settings are read from environment variables prefixed with `FISCAL_`
//! (for example `FISCAL_SEARCH_LIMIT=5`). A `.env` file in the working
//! directory is loaded first when present. Every key has a default, so an
//! empty environment yields `FiscalCodeConfig::default()`.

use serde::Deserialize;
use tracing::debug;

use crate::error::CoreError;

/// Environment variable prefix for all settings
pub const ENV_PREFIX: &str = "FISCAL";

/// Configuration for the fiscal code services
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FiscalCodeConfig {
    /// Maximum number of municipalities returned by a search
    pub search_limit: usize,
    /// Queries shorter than this return no municipalities
    pub min_query_length: usize,
    /// Log level: trace, debug, info, warn, error
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
}

impl Default for FiscalCodeConfig {
    fn default() -> Self {
        Self {
            search_limit: 10,
            min_query_length: 2,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl FiscalCodeConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, CoreError> {
        dotenvy::dotenv().ok();
        Self::from_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Loads configuration from an explicit set of `FISCAL_*` variables
    ///
    /// Behaves like `from_env` without touching the process environment.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map: ::config::Map<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        Self::from_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(Some(map)),
        )
    }

    fn from_source(source: ::config::Environment) -> Result<Self, CoreError> {
        let settings: Self = ::config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        debug!(
            search_limit = settings.search_limit,
            min_query_length = settings.min_query_length,
            "Configuration loaded"
        );
        Ok(settings)
    }

    /// Checks that the settings are usable
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.search_limit == 0 {
            return Err(CoreError::configuration("search_limit must be at least 1"));
        }
        if self.min_query_length == 0 {
            return Err(CoreError::configuration("min_query_length must be at least 1"));
        }
        Ok(())
    }
}
