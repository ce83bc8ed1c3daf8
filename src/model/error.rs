//! Error types for the roster application.
//!
//! The state core itself is total: every transition is a pure,
//! synchronous state replacement and cannot fail (non-numeric page-size
//! text coerces to `0`, removing an absent value is a no-op, empty-name
//! adds are disabled at the control). The failure modes that exist all
//! live in the shell (configuration, logging setup, and the terminal)
//! and compose into [`AppError`] via `From` so `?` propagates cleanly.

use thiserror::Error;

/// Top-level application error encompassing all shell failure modes.
///
/// Returned from `main`-level plumbing. Domain-specific errors convert
/// automatically via `From`, enabling clean propagation with `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read or parsed.
    ///
    /// Fatal at startup: the app refuses to guess at a half-parsed
    /// config rather than running with surprising settings.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber setup failed (log directory, double init).
    #[error("Logging setup error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Failures in the crossterm/ratatui layer. Fatal: without a working
    /// terminal the TUI cannot function. The terminal is restored before
    /// the error is reported on stderr.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
