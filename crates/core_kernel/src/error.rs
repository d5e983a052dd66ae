//! Core error types used across the workspace

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    pub fn configuration(message: impl Into<String>) -> Self {
        CoreError::Configuration(message.into())
    }
}

impl From<::config::ConfigError> for CoreError {
    fn from(err: ::config::ConfigError) -> Self {
        CoreError::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_becomes_configuration() {
        let err: CoreError = ::config::ConfigError::Message("bad value".to_string()).into();
        assert!(matches!(err, CoreError::Configuration(ref msg) if msg.contains("bad value")));
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
