//! Logging infrastructure for lineprompt.
//!
//! This module initializes the tracing subscriber for structured logging.
//! All logs are emitted to stderr: stdout carries the prompts and the
//! answers, and must not be interleaved with diagnostics.

use std::io::IsTerminal;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{AppError, AppResult};

/// Level used when neither `RUST_LOG` nor an explicit level is given.
///
/// Kept at `warn` so routine engine logs never land between a prompt and
/// the operator's answer.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Initialize the tracing subscriber with stderr output.
///
/// # Arguments
/// * `log_level` - Filter from the loaded config (e.g., "debug", "lineprompt_prompt=trace");
///   `None` falls back to [`DEFAULT_LOG_LEVEL`]
/// * `no_color` - Disable colored output
///
/// # Example
/// ```no_run
/// use lineprompt_core::logging::init_logging;
///
/// init_logging(None, false).expect("Failed to initialize logging");
/// ```
pub fn init_logging(log_level: Option<&str>, no_color: bool) -> AppResult<()> {
    let env_filter = build_filter(log_level)?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_ansi(!no_color && supports_color());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AppError::Config(format!("Failed to init logging: {}", e)))?;

    Ok(())
}

/// Resolve the filter from the configured level, or the default.
///
/// `RUST_LOG` is not read here; `AppConfig` has already folded it into
/// `log_level`.
fn build_filter(log_level: Option<&str>) -> AppResult<EnvFilter> {
    let filter_str = log_level.unwrap_or(DEFAULT_LOG_LEVEL);

    EnvFilter::try_new(filter_str)
        .map_err(|e| AppError::Config(format!("Invalid log filter: {}", e)))
}

/// Check if stderr supports color output.
fn supports_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    std::io::stderr().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_levels_and_directives() {
        assert!(build_filter(Some("debug")).is_ok());
        assert!(build_filter(Some("lineprompt_prompt=trace,warn")).is_ok());
    }

    #[test]
    fn test_build_filter_defaults_without_level() {
        let filter = build_filter(None).unwrap();
        assert_eq!(filter.to_string(), DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_build_filter_rejects_garbage() {
        let result = build_filter(Some("lineprompt_prompt=notalevel"));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_init_logging() {
        // Only the first initialization in a process can succeed
        let result = init_logging(Some("warn"), true);
        assert!(result.is_ok() || matches!(result, Err(AppError::Config(_))));
    }
}
