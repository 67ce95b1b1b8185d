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

//! A synchronous [`log::Log`] implementation writing to stdout and stderr.

use std::{
    fmt::Display,
    sync::{Mutex, atomic::Ordering},
};

use ahash::AHashMap;
use chrono::{DateTime, SecondsFormat, Utc};
use log::{Level, LevelFilter, Log, set_boxed_logger, set_max_level};
use ustr::Ustr;

use super::{
    LOGGING_BYPASSED, LOGGING_INITIALIZED,
    config::LoggerConfig,
    writer::{LogWriter, StderrWriter, StdoutWriter},
};

const KV_COMPONENT: &str = "component";

/// A log line ready to be written.
#[derive(Clone, Debug)]
pub struct LogLine {
    /// The timestamp for the event.
    pub timestamp: DateTime<Utc>,
    /// The log level for the event.
    pub level: Level,
    /// The component the event originated from, the record target unless overridden.
    pub component: Ustr,
    /// The log message content.
    pub message: String,
}

impl LogLine {
    /// Returns the plain `timestamp [LEVEL] component: message` line.
    #[must_use]
    pub fn to_plain(&self) -> String {
        format!(
            "{} [{}] {}: {}\n",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true),
            self.level,
            self.component,
            self.message,
        )
    }

    /// Returns the line with ANSI color codes for its level.
    #[must_use]
    pub fn to_colored(&self) -> String {
        format!(
            "\x1b[1m{}\x1b[0m {}[{}] {}: {}\x1b[0m\n",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true),
            level_ansi(self.level),
            self.level,
            self.component,
            self.message,
        )
    }
}

impl Display for LogLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.component, self.message)
    }
}

const fn level_ansi(level: Level) -> &'static str {
    match level {
        Level::Error => "\x1b[1;31m",
        Level::Warn => "\x1b[1;33m",
        Level::Info => "",
        Level::Debug => "\x1b[34m",
        Level::Trace => "\x1b[36m",
    }
}

/// A logger writing each record synchronously from the calling thread.
///
/// Records pass component and module filters from the [`LoggerConfig`] before reaching
/// the writers. Errors are written to stderr, other levels up to `stdout_level` to stdout.
pub struct Logger {
    /// Configuration for logging levels and behavior.
    pub config: LoggerConfig,
    module_filters_sorted: Vec<(Ustr, LevelFilter)>,
    writers: Mutex<Vec<Box<dyn LogWriter>>>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(Logger))
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Creates a new [`Logger`] writing to stdout and stderr.
    #[must_use]
    pub fn new(config: LoggerConfig) -> Self {
        let writers: Vec<Box<dyn LogWriter>> = vec![
            Box::new(StdoutWriter::new(config.stdout_level)),
            Box::new(StderrWriter::new()),
        ];
        Self::with_writers(config, writers)
    }

    /// Creates a new [`Logger`] with the given `writers`.
    #[must_use]
    pub fn with_writers(config: LoggerConfig, writers: Vec<Box<dyn LogWriter>>) -> Self {
        Self {
            module_filters_sorted: config.sorted_module_filters(),
            config,
            writers: Mutex::new(writers),
        }
    }

    /// Initializes the logger based on the `MONETARY_LOG` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the environment variable or parsing the configuration fails.
    pub fn init_with_env() -> anyhow::Result<()> {
        let config = LoggerConfig::from_env()?;
        Self::init_with_config(config)
    }

    /// Installs a logger with the given configuration as the [`log`] facade's logger.
    ///
    /// # Errors
    ///
    /// Returns an error if logging is already initialized or another logger is installed.
    pub fn init_with_config(config: LoggerConfig) -> anyhow::Result<()> {
        if LOGGING_INITIALIZED.load(Ordering::SeqCst) {
            anyhow::bail!("Logging already initialized");
        }

        let max_level = config.stdout_level.max(LevelFilter::Error);
        set_boxed_logger(Box::new(Self::new(config)))?;
        set_max_level(max_level);

        LOGGING_INITIALIZED.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn write_line(&self, line: &LogLine) {
        let Ok(mut writers) = self.writers.lock() else {
            eprintln!("Log writers poisoned, dropping: {line}");
            return;
        };

        let mut text: Option<String> = None;
        for writer in writers.iter_mut().filter(|writer| writer.enabled(line)) {
            let text = text.get_or_insert_with(|| {
                if self.config.is_colored {
                    line.to_colored()
                } else {
                    line.to_plain()
                }
            });
            writer.write(text);
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        !LOGGING_BYPASSED.load(Ordering::Relaxed)
            && (metadata.level() == Level::Error || metadata.level() <= self.config.stdout_level)
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let component = record
            .key_values()
            .get(KV_COMPONENT.into())
            .map_or_else(
                || Ustr::from(record.target()),
                |v| Ustr::from(&v.to_string()),
            );

        if should_filter_log(
            &component,
            record.level(),
            &self.module_filters_sorted,
            &self.config.component_level,
            self.config.log_components_only,
        ) {
            return;
        }

        let line = LogLine {
            timestamp: Utc::now(),
            level: record.level(),
            component,
            message: record.args().to_string(),
        };
        self.write_line(&line);
    }

    fn flush(&self) {
        if let Ok(mut writers) = self.writers.lock() {
            writers.iter_mut().for_each(|writer| writer.flush());
        }
    }
}

/// Determines if a log line should be filtered out based on module and component filters.
///
/// Returns `true` if the line should be skipped, `false` if it should be logged.
///
/// The `module_filters_sorted` slice must be sorted by descending path length so the
/// first `starts_with` match is the longest prefix. A module filter takes precedence over
/// a component filter for the same line.
#[must_use]
pub fn should_filter_log(
    component: &Ustr,
    line_level: Level,
    module_filters_sorted: &[(Ustr, LevelFilter)],
    component_level: &AHashMap<Ustr, LevelFilter>,
    log_components_only: bool,
) -> bool {
    if module_filters_sorted.is_empty() && component_level.is_empty() {
        return log_components_only;
    }

    let module_filter = module_filters_sorted
        .iter()
        .find(|(path, _)| component.starts_with(path.as_str()))
        .map(|(_, level)| *level);

    let component_filter = component_level.get(component).copied();

    if log_components_only && module_filter.is_none() && component_filter.is_none() {
        return true;
    }

    module_filter
        .or(component_filter)
        .is_some_and(|filter_level| line_level > filter_level)
}
