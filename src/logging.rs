use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::error::{FreqError, FreqResult};

/// Logging configuration for endpoint-freq
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub with_target: bool,
    pub with_timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            with_target: false,
            with_timestamps: false,
        }
    }
}

impl LoggingConfig {
    /// `RUST_LOG` wins over the configured level when it is set
    pub fn env_filter(&self) -> FreqResult<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.level).map_err(|e| {
                FreqError::configuration(format!("Invalid log level '{}': {}", self.level, e))
            }),
        }
    }
}

/// Initialize logging. Everything goes to stderr; stdout carries only the result.
pub fn init_logging(config: &LoggingConfig) -> FreqResult<()> {
    let env_filter = config.env_filter()?;

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(config.with_target)
        .compact();

    let registry = Registry::default().with(env_filter);
    let result = if config.with_timestamps {
        registry.with(console_layer).try_init()
    } else {
        registry.with(console_layer.without_time()).try_init()
    };

    result.map_err(|e| FreqError::configuration(format!("Logging already initialized: {}", e)))?;

    debug!("Logging initialized at level {}", config.level);
    Ok(())
}

/// Performance logging utilities
pub struct PerformanceTimer {
    start: std::time::Instant,
    operation: String,
}

impl PerformanceTimer {
    pub fn start(operation: impl Into<String>) -> Self {
        let operation = operation.into();
        debug!("⏱️  Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation,
        }
    }

    pub fn checkpoint(&self, checkpoint: &str) {
        let elapsed = self.start.elapsed();
        debug!("⏱️  {} - {}: {}µs", self.operation, checkpoint, elapsed.as_micros());
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }
}

impl Drop for PerformanceTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        debug!("⏱️  Completed {}: {}µs", self.operation, elapsed.as_micros());
    }
}
