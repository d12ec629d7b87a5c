// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pavelife-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pavelife and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Process logging bootstrap.
//!
//! Library code logs through the `log` facade only; the binary decides whether
//! anything listens by calling [`init_logging`] once at startup. Diagnostics go
//! to stderr so they never mix with the rendered timeline on stdout.

use std::sync::OnceLock;

use flexi_logger::{Logger, LoggerHandle};

static LOGGING_STATE: OnceLock<LoggingState> = OnceLock::new();

struct LoggingState {
    level: &'static str,
    _logger: LoggerHandle,
}

/// Initializes stderr logging at `level`.
///
/// Idempotent for the same level; re-initialization with a different level is
/// rejected. Never panics.
pub fn init_logging(level: &str) -> Result<(), String> {
    let normalized_level = normalize_level(level)?;

    if let Some(state) = LOGGING_STATE.get() {
        return check_active_level(state, normalized_level);
    }

    let logger = Logger::try_with_str(normalized_level)
        .map_err(|err| format!("invalid log level `{normalized_level}`: {err}"))?
        .log_to_stderr()
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    let state = LOGGING_STATE.get_or_init(|| LoggingState {
        level: normalized_level,
        _logger: logger,
    });

    check_active_level(state, normalized_level)
}

fn check_active_level(state: &LoggingState, requested: &'static str) -> Result<(), String> {
    if state.level != requested {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{requested}`",
            state.level
        ));
    }
    Ok(())
}

/// Returns the active log level, or `None` before initialization.
pub fn logging_status() -> Option<&'static str> {
    LOGGING_STATE.get().map(|state| state.level)
}

/// Returns the default log level for the current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `warn`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "warn"
    }
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}
