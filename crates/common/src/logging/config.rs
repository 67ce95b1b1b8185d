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

//! Logger configuration and spec string parsing.
//!
//! # Spec String Format
//!
//! The `MONETARY_LOG` environment variable uses a semicolon-separated format:
//!
//! ```text
//! stdout=Info;registry=Debug;monetary_model::codec=Trace;is_colored
//! ```
//!
//! ## Supported Keys
//!
//! | Key                   | Type      | Description                                  |
//! |-----------------------|-----------|----------------------------------------------|
//! | `stdout`              | Log level | Maximum level written (errors go to stderr). |
//! | `is_colored`          | Boolean   | Enable ANSI colors (default: true).          |
//! | `log_components_only` | Boolean   | Only log components with explicit filters.   |
//! | `<component>`         | Log level | Component-specific log level (exact match).  |
//! | `<module::path>`      | Log level | Module-specific log level (prefix match).    |
//!
//! Log levels are case-insensitive and accept `Warning` for `Warn`. Boolean keys may be
//! given as a bare flag (`is_colored`) or explicitly (`is_colored=false`, `=0`, `=no`).

use std::env;

use ahash::AHashMap;
use log::LevelFilter;
use ustr::Ustr;

use super::{LOG_ENV_VAR, parse_level_filter_str};

/// Configuration for the [`Logger`](super::Logger).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Maximum log level written.
    pub stdout_level: LevelFilter,
    /// Per-component log level overrides (exact match).
    pub component_level: AHashMap<Ustr, LevelFilter>,
    /// Per-module path log level overrides (longest prefix match).
    pub module_level: AHashMap<Ustr, LevelFilter>,
    /// Log only components with explicit level filters.
    pub log_components_only: bool,
    /// Use ANSI color codes in output.
    pub is_colored: bool,
}

impl Default for LoggerConfig {
    /// Creates a new default [`LoggerConfig`] instance.
    fn default() -> Self {
        Self {
            stdout_level: LevelFilter::Info,
            component_level: AHashMap::new(),
            module_level: AHashMap::new(),
            log_components_only: false,
            is_colored: true,
        }
    }
}

impl LoggerConfig {
    /// Creates a new [`LoggerConfig`] instance.
    #[must_use]
    pub const fn new(
        stdout_level: LevelFilter,
        component_level: AHashMap<Ustr, LevelFilter>,
        module_level: AHashMap<Ustr, LevelFilter>,
        log_components_only: bool,
        is_colored: bool,
    ) -> Self {
        Self {
            stdout_level,
            component_level,
            module_level,
            log_components_only,
            is_colored,
        }
    }

    /// Parses a configuration from a spec string.
    ///
    /// # Errors
    ///
    /// Returns an error if the spec string contains invalid syntax or log levels.
    pub fn from_spec(spec: &str) -> anyhow::Result<Self> {
        let mut config = Self::default();

        for kv in spec.split(';') {
            let kv = kv.trim();
            if kv.is_empty() {
                continue;
            }

            let Some((k, v)) = kv.split_once('=') else {
                match kv.to_lowercase().as_str() {
                    "log_components_only" => config.log_components_only = true,
                    "is_colored" => config.is_colored = true,
                    _ => anyhow::bail!("Invalid spec pair: {kv}"),
                }
                continue;
            };

            let k = k.trim();
            let v = v.trim();

            match k.to_lowercase().as_str() {
                "is_colored" => config.is_colored = parse_bool_value(v),
                "log_components_only" => config.log_components_only = parse_bool_value(v),
                "stdout" => config.stdout_level = parse_level_filter_str(v)?,
                _ => {
                    if k.is_empty() {
                        anyhow::bail!("Invalid spec pair: {kv}");
                    }
                    let level = parse_level_filter_str(v)?;
                    if k.contains("::") {
                        config.module_level.insert(Ustr::from(k), level);
                    } else {
                        config.component_level.insert(Ustr::from(k), level);
                    }
                }
            }
        }

        Ok(config)
    }

    /// Parses configuration from the `MONETARY_LOG` environment variable.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is unset or contains invalid syntax.
    pub fn from_env() -> anyhow::Result<Self> {
        let spec = env::var(LOG_ENV_VAR)?;
        Self::from_spec(&spec)
    }

    /// Returns the module filters sorted by descending path length.
    ///
    /// The first `starts_with` match in the returned list is the longest prefix.
    #[must_use]
    pub fn sorted_module_filters(&self) -> Vec<(Ustr, LevelFilter)> {
        let mut filters: Vec<_> = self
            .module_level
            .iter()
            .map(|(path, level)| (*path, *level))
            .collect();
        filters.sort_by(|a, b| {
            b.0.len()
                .cmp(&a.0.len())
                .then_with(|| a.0.as_str().cmp(b.0.as_str()))
        });
        filters
    }
}

/// Returns `true` unless the value is explicitly "false", "0", or "no" (case-insensitive).
fn parse_bool_value(v: &str) -> bool {
    !matches!(v.to_lowercase().as_str(), "false" | "0" | "no")
}
