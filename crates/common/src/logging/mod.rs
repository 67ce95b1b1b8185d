// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! The logging subsystem for the monetary workspace.
//!
//! Library crates log through the [`log`] facade only. Applications install the
//! [`Logger`](logger::Logger) once, either explicitly with [`init_logging`] or lazily with
//! [`ensure_logging_initialized`], which reads its configuration from the `MONETARY_LOG`
//! environment variable.

pub mod config;
pub mod logger;
pub mod writer;

use std::{
    env,
    str::FromStr,
    sync::{
        OnceLock,
        atomic::{AtomicBool, Ordering},
    },
};

use log::LevelFilter;

pub use self::{config::LoggerConfig, logger::Logger};

/// The environment variable holding the logger spec string.
pub const LOG_ENV_VAR: &str = "MONETARY_LOG";

static LOGGING_INITIALIZED: AtomicBool = AtomicBool::new(false);
static LOGGING_BYPASSED: AtomicBool = AtomicBool::new(false);
static LAZY_INIT: OnceLock<bool> = OnceLock::new();

/// Returns whether the logger has been installed.
pub fn logging_is_initialized() -> bool {
    LOGGING_INITIALIZED.load(Ordering::Relaxed)
}

/// Sets the logging subsystem to bypass mode, dropping every subsequent record.
pub fn logging_set_bypass() {
    LOGGING_BYPASSED.store(true, Ordering::Relaxed);
}

/// Returns whether the logging subsystem is in bypass mode.
pub fn logging_is_bypassed() -> bool {
    LOGGING_BYPASSED.load(Ordering::Relaxed)
}

/// Ensures logging is initialized on first use.
///
/// If `MONETARY_LOG` is set and valid, the logger is installed with that config, otherwise
/// with the default config (INFO to stdout).
///
/// Returns `true` if logging is available, `false` if another logger already owns the
/// [`log`] facade.
pub fn ensure_logging_initialized() -> bool {
    if LOGGING_INITIALIZED.load(Ordering::SeqCst) {
        return true;
    }

    *LAZY_INIT.get_or_init(|| {
        let config = env::var(LOG_ENV_VAR)
            .ok()
            .and_then(|spec| LoggerConfig::from_spec(&spec).ok())
            .unwrap_or_default();

        Logger::init_with_config(config).is_ok()
    })
}

/// Installs the [`Logger`] with the given `config`.
///
/// Should be called once, ideally at the beginning of an application run.
///
/// # Errors
///
/// Returns an error if logging is already initialized or another logger owns the facade.
pub fn init_logging(config: LoggerConfig) -> anyhow::Result<()> {
    Logger::init_with_config(config)
}

/// Parses a string into a [`LevelFilter`], accepting `WARNING` for `WARN`.
///
/// # Errors
///
/// Returns an error if the provided string is not a valid `LevelFilter`.
pub fn parse_level_filter_str(s: &str) -> anyhow::Result<LevelFilter> {
    let mut level = s.trim().to_uppercase();
    if level == "WARNING" {
        level = "WARN".to_string();
    }
    LevelFilter::from_str(&level).map_err(|_| anyhow::anyhow!("Invalid log level: {s}"))
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("info", LevelFilter::Info)]
    #[case("WARNING", LevelFilter::Warn)]
    #[case("Warn", LevelFilter::Warn)]
    #[case(" debug ", LevelFilter::Debug)]
    #[case("OFF", LevelFilter::Off)]
    fn test_parse_level_filter_str(#[case] input: &str, #[case] expected: LevelFilter) {
        assert_eq!(parse_level_filter_str(input).unwrap(), expected);
    }

    #[rstest]
    fn test_parse_level_filter_str_invalid() {
        let err = parse_level_filter_str("loud").unwrap_err();
        assert_eq!(err.to_string(), "Invalid log level: loud");
    }

    #[rstest]
    fn test_ensure_logging_initialized_is_idempotent() {
        let first = ensure_logging_initialized();
        assert_eq!(ensure_logging_initialized(), first);
        assert!(logging_is_initialized() || !first);
        assert!(init_logging(LoggerConfig::default()).is_err());
    }
}
