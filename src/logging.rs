/*!
 * Logging and tracing initialization
 */

use anyhow::anyhow;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{LogConfig, LogFormat};

/// Default filter directive when `RUST_LOG` is unset
pub fn default_directive(config: &LogConfig) -> String {
    let level = config.level.to_tracing_level();
    format!("starred_restaurants={},tower_http={}", level, level).to_lowercase()
}

/// Initialize structured logging based on configuration
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(config)))
        .map_err(|e| anyhow!("Failed to create log filter: {}", e))?;

    let installed = match config.format {
        LogFormat::Compact => {
            let fmt_layer = fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_span_events(FmtSpan::NONE)
                .compact();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_span_events(FmtSpan::CLOSE)
                .json();

            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()
        }
    };

    installed.map_err(|e| anyhow!("Failed to install log subscriber: {}", e))
}

/// Initialize logging with custom format for testing
pub fn init_test_logging() {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("starred_restaurants=debug"));

        let fmt_layer = fmt::layer().with_test_writer().with_target(false).compact();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .ok(); // Ignore error if already initialized
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn test_default_directive_follows_level() {
        let config = LogConfig {
            level: LogLevel::Debug,
            format: LogFormat::Compact,
        };
        assert_eq!(
            default_directive(&config),
            "starred_restaurants=debug,tower_http=debug"
        );
    }

    #[test]
    fn test_default_directive_parses() {
        let directive = default_directive(&LogConfig::default());
        assert!(EnvFilter::try_new(directive).is_ok());
    }

    #[test]
    fn test_init_test_logging_is_idempotent() {
        init_test_logging();
        init_test_logging();
    }
}
