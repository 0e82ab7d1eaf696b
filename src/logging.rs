//! Process-wide logging bootstrap.
//!
//! The library itself only talks to the `log` facade. Binaries call
//! [`init_logging`] once to route records to stderr through `flexi_logger`.
//!
//! # Invariants
//! - Initialization happens at most once per process.
//! - Re-initialization with the same level is a no-op; a different level is rejected.
//! - Initialization never panics.

use flexi_logger::{Logger, LoggerHandle};
use log::info;
use once_cell::sync::OnceCell;

use crate::error::{SolidLabError, SolidLabResult};

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    _logger: LoggerHandle,
}

/// Starts the stderr logger at `level`.
///
/// `RUST_LOG`, when set, takes precedence over `level` for filtering.
///
/// # Errors
/// - [`SolidLabError::InvalidLogLevel`] for an unknown level string.
/// - [`SolidLabError::LoggingConflict`] if logging is already active at another level.
/// - [`SolidLabError::Logger`] if the backend fails to start.
pub fn init_logging(level: &str) -> SolidLabResult<()> {
    let requested = normalize_level(level)?;

    let state = LOGGING_STATE.get_or_try_init(|| -> SolidLabResult<LoggingState> {
        let logger = Logger::try_with_env_or_str(requested)?
            .log_to_stderr()
            .format(flexi_logger::default_format)
            .start()?;

        info!(
            "event=logging_init level={} version={}",
            requested,
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            level: requested,
            _logger: logger,
        })
    })?;

    if state.level != requested {
        return Err(SolidLabError::LoggingConflict {
            active: state.level,
            requested,
        });
    }

    Ok(())
}

/// Returns the level passed to the successful [`init_logging`] call, or `None`
/// before one succeeded.
///
/// This is the requested level, not the effective filter: when `RUST_LOG` is
/// set it overrides the level spec, and this value does not reflect that.
pub fn logging_status() -> Option<&'static str> {
    LOGGING_STATE.get().map(|state| state.level)
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn normalize_level(level: &str) -> SolidLabResult<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(SolidLabError::InvalidLogLevel(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::{default_log_level, init_logging, logging_status, normalize_level};
    use crate::error::SolidLabError;

    #[test]
    fn normalize_level_accepts_known_values() {
        assert_eq!(normalize_level("INFO").unwrap(), "info");
        assert_eq!(normalize_level(" warning ").unwrap(), "warn");
        assert_eq!(normalize_level("trace").unwrap(), "trace");
    }

    #[test]
    fn normalize_level_rejects_unknown_values() {
        let err = normalize_level("loud").unwrap_err();
        assert!(matches!(err, SolidLabError::InvalidLogLevel(ref level) if level == "loud"));
    }

    #[test]
    fn default_level_is_supported() {
        assert!(normalize_level(default_log_level()).is_ok());
    }

    // The only test in this binary that touches the global logger.
    #[test]
    fn init_logging_is_idempotent_and_rejects_conflicts() {
        init_logging("info").expect("first init should succeed");
        init_logging("INFO").expect("same level should be idempotent");

        let err = init_logging("debug").expect_err("level conflict should fail");
        assert!(matches!(
            err,
            SolidLabError::LoggingConflict {
                active: "info",
                requested: "debug"
            }
        ));
        assert!(err.to_string().contains("refusing to switch"));

        assert!(matches!(
            init_logging("nope"),
            Err(SolidLabError::InvalidLogLevel(_))
        ));
        assert_eq!(logging_status(), Some("info"));
    }
}
