//! Logging infrastructure for sorting runs
//!
//! Structured logging through the `tracing` crate with configurable levels
//! and formats. Works on native targets through `tracing-subscriber` and in
//! the browser through `tracing-wasm`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use sortscope::core::logging::init_logging;
//!
//! // Initialize with default settings
//! init_logging(None, None).ok();
//!
//! // Or with custom level and format
//! init_logging(Some("debug"), Some("pretty")).ok();
//! ```
//!
//! # Log Levels
//!
//! - `trace`: Very detailed information, typically only interesting when debugging
//! - `debug`: Detailed information for debugging
//! - `info`: General informational messages (default)
//! - `warn`: Warning messages
//! - `error`: Error messages
//!
//! # Log Formats
//!
//! - `compact`: Single-line format, good for production
//! - `pretty`: Multi-line format with colors, good for development
//! - `json`: JSON format, good for log aggregation systems
//!
//! # Environment Variables
//!
//! - `SORTSCOPE_LOG_LEVEL`: log level (trace|debug|info|warn|error|off)
//! - `SORTSCOPE_LOG_FORMAT`: log format (compact|pretty|json)
//! - `RUST_LOG`: standard `tracing-subscriber` filter, used as a fallback
//!
//! # What gets logged
//!
//! Runs and races open `info` spans; algorithm phases (partitions, merges,
//! passes) are `debug` events; every individual step is a `trace` event.
//! Per-module filtering works as usual:
//!
//! ```bash
//! RUST_LOG="info,sortscope::algorithms::quick=trace" sortscope run -a Quicksort
//! ```

use std::fmt as stdfmt;
use std::str::FromStr;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Compact single-line format
    #[default]
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl stdfmt::Display for LogFormat {
    fn fmt(&self, f: &mut stdfmt::Formatter<'_>) -> stdfmt::Result {
        match self {
            LogFormat::Compact => write!(f, "compact"),
            LogFormat::Pretty => write!(f, "pretty"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl LogFormat {
    /// Get all valid format names
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

/// Level filter and format after applying arguments and environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// `EnvFilter` directive, e.g. `info` or `warn,sortscope=trace`
    pub filter: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// Resolve settings from explicit arguments, then the process environment
    pub fn resolve(level: Option<&str>, format: Option<&str>) -> Result<Self, String> {
        Self::resolve_with(level, format, |key| std::env::var(key).ok())
    }

    /// Resolve settings with a custom environment lookup
    ///
    /// Level: argument, `SORTSCOPE_LOG_LEVEL`, `RUST_LOG`, then `info`.
    /// Format: argument, `SORTSCOPE_LOG_FORMAT`, then `compact`.
    pub fn resolve_with(
        level: Option<&str>,
        format: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, String> {
        let filter = level
            .map(str::to_string)
            .or_else(|| env("SORTSCOPE_LOG_LEVEL"))
            .or_else(|| env("RUST_LOG"))
            .unwrap_or_else(|| "info".to_string());

        let format = match format.map(str::to_string).or_else(|| env("SORTSCOPE_LOG_FORMAT")) {
            Some(name) => name.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self { filter, format })
    }
}

/// Initialize the tracing subscriber with the given log level and format
///
/// # Arguments
///
/// * `level` - Optional filter (trace|debug|info|warn|error|off, or any
///            `EnvFilter` directive). Falls back to `SORTSCOPE_LOG_LEVEL`,
///            then `RUST_LOG`, then `info`.
/// * `format` - Optional log format (compact|pretty|json). Falls back to
///             `SORTSCOPE_LOG_FORMAT`, then `compact`.
///
/// Events go to stderr so they never interleave with rendered frames on
/// stdout.
///
/// # Returns
///
/// Returns an error for an unknown format or if a global subscriber is
/// already installed.
///
/// # Example
///
/// ```rust,no_run
/// use sortscope::core::logging::init_logging;
///
/// init_logging(Some("debug"), Some("compact")).expect("logging already initialized");
/// ```
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(target_arch = "wasm32")]
    {
        // The browser console has its own level and format controls.
        let _ = (level, format);
        tracing_wasm::set_as_global_default();
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let settings = LogSettings::resolve(level, format)?;
        let filter = EnvFilter::try_new(&settings.filter).unwrap_or_else(|_| EnvFilter::new("info"));
        let layer = fmt::Layer::default().with_writer(std::io::stderr).with_level(true);

        match settings.format {
            LogFormat::Compact => Registry::default()
                .with(filter)
                .with(layer.compact().with_target(false))
                .try_init()?,
            LogFormat::Pretty => Registry::default()
                .with(filter)
                .with(
                    layer
                        .pretty()
                        .with_file(true)
                        .with_line_number(true)
                        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE),
                )
                .try_init()?,
            LogFormat::Json => Registry::default()
                .with(filter)
                .with(layer.json().with_current_span(true).with_span_list(false))
                .try_init()?,
        }

        Ok(())
    }
}
