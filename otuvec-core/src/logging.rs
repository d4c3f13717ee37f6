//! Tracing subscriber setup
//!
//! `OTUVEC_LOG` takes precedence over the configured level, the same way
//! `RUST_LOG` would for a plain `EnvFilter`.

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{OtuError, OtuResult};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive
pub const LOG_ENV_VAR: &str = "OTUVEC_LOG";

/// Build the filter from `OTUVEC_LOG`, falling back to the configured level
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    let level = std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| config.level.clone());
    EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(config: &LoggingConfig) -> OtuResult<()> {
    let filter = build_filter(config);

    let result = match config.format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init(),
    };

    result.map_err(|e| OtuError::Configuration(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_falls_back() {
        let config = LoggingConfig {
            level: "not a [valid directive".to_string(),
            format: LogFormat::Text,
        };
        // Building never panics, whatever the directive
        let _filter = build_filter(&config);
    }

    #[test]
    fn test_second_init_is_an_error() {
        let config = LoggingConfig::default();
        let _ = init_logging(&config);
        assert!(matches!(init_logging(&config), Err(OtuError::Configuration(_))));
    }
}
