//! Structured logging setup
//!
//! The library only emits `tracing` events and spans. A host that wants them
//! on stderr calls [`init_tracing`] once, usually with the options built from
//! the `[logging]` table of its [`EngineConfig`](crate::config::EngineConfig).

use serde::{Deserialize, Serialize};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{GraphError, Result};

/// Environment variable consulted after `RUST_LOG`
pub const LOG_ENV_VAR: &str = "GRAPHWALK_LOG";

/// Level used when the configuration names none
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "operation_name");
/// // Or with additional fields:
/// trace_time!(start, "operation_name", settled = settled.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Shape of the lines written to stderr
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One compact line per event, prefixed with the algorithm's module
    #[default]
    Compact,
    /// One JSON object per event, plus one per closed algorithm span with its timing
    Json,
}

/// What [`init_tracing`] installs
#[derive(Debug, Clone, PartialEq)]
pub struct LogOptions {
    /// Bare level ("debug") or a full filter directive ("graphwalk::graph=trace")
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogOptions {
    fn default() -> Self {
        LogOptions {
            level: DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl LogOptions {
    /// Filter directive used when neither environment variable is set.
    ///
    /// A bare level is scoped to this crate's targets, so installing the
    /// subscriber never turns on a host's other dependencies.
    pub fn directive(&self) -> String {
        let level = self.level.trim();
        if level.contains('=') {
            level.to_string()
        } else {
            format!("graphwalk={}", level)
        }
    }

    /// Check that the directive parses, without installing anything
    pub fn validate(&self) -> Result<()> {
        EnvFilter::try_new(self.directive())
            .map(|_| ())
            .map_err(|e| GraphError::invalid_value("log level", format!("{} ({})", self.level, e)))
    }

    fn filter(&self) -> Result<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV_VAR) {
            return Ok(filter);
        }
        self.validate()?;
        Ok(EnvFilter::new(self.directive()))
    }
}

/// Install a global stderr subscriber.
///
/// `RUST_LOG` wins, then `GRAPHWALK_LOG`, then `options.level`. Fails if the
/// level does not parse or a global subscriber is already installed.
pub fn init_tracing(options: &LogOptions) -> Result<()> {
    let registry = tracing_subscriber::registry().with(options.filter()?);

    let installed = match options.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init(),
    };

    installed.map_err(|e| GraphError::Other(format!("failed to install logging: {}", e)))
}
