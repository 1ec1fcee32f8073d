//! Logging setup
//!
//! Rendering emits `tracing` events under the `acton_bootstrap` target. Host
//! applications usually install their own subscriber; [`init`] is provided
//! for binaries and tests that don't.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line human readable output
    Pretty,
    /// One JSON object per line
    Json,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Filter used when `RUST_LOG` is not set
    pub default_filter: String,

    /// Output format
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self {
                default_filter: "debug,acton_bootstrap=trace".to_string(),
                format: LogFormat::Pretty,
            }
        } else {
            Self {
                default_filter: "info".to_string(),
                format: LogFormat::Json,
            }
        }
    }
}

impl ObservabilityConfig {
    /// Override the fallback filter directive
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }

    /// Switch to JSON output
    #[must_use]
    pub const fn json(mut self) -> Self {
        self.format = LogFormat::Json;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_filter))
    }
}

/// Initialize logging with the default configuration
///
/// Pretty output in debug builds, JSON in release builds.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
///
/// # Example
///
/// ```rust,no_run
/// use acton_bootstrap::observability;
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init()?;
/// tracing::info!("Application started");
/// # Ok(())
/// # }
/// ```
pub fn init() -> anyhow::Result<()> {
    init_with(&ObservabilityConfig::default())
}

/// Initialize logging with an explicit configuration
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_with(config: &ObservabilityConfig) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    match config.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()?,
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ObservabilityConfig::default()
            .with_filter("warn,acton_bootstrap=debug")
            .json();

        assert_eq!(config.default_filter, "warn,acton_bootstrap=debug");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn test_second_init_fails() {
        // whichever call loses the race to install the global subscriber errors
        let first = init_with(&ObservabilityConfig::default().with_filter("off"));
        let second = init_with(&ObservabilityConfig::default().with_filter("off"));
        assert!(first.is_err() || second.is_err());
    }
}
