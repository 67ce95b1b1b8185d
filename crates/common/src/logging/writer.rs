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

//! Output sinks for formatted log lines.

use std::io::{self, Stderr, Stdout, Write};

use log::LevelFilter;

use super::logger::LogLine;

pub trait LogWriter: Send {
    /// Writes a formatted log line.
    fn write(&mut self, line: &str);
    /// Flushes buffered output.
    fn flush(&mut self);
    /// Checks if a line needs to be written to the writer or not.
    fn enabled(&self, line: &LogLine) -> bool;
}

#[derive(Debug)]
pub struct StdoutWriter {
    io: Stdout,
    level: LevelFilter,
}

impl StdoutWriter {
    /// Creates a new [`StdoutWriter`] instance.
    #[must_use]
    pub fn new(level: LevelFilter) -> Self {
        Self {
            io: io::stdout(),
            level,
        }
    }
}

impl LogWriter for StdoutWriter {
    fn write(&mut self, line: &str) {
        if let Err(e) = self.io.lock().write_all(line.as_bytes()) {
            eprintln!("Error writing to stdout: {e:?}");
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.io.flush() {
            eprintln!("Error flushing stdout: {e:?}");
        }
    }

    fn enabled(&self, line: &LogLine) -> bool {
        // Errors go to stderr only
        line.level > LevelFilter::Error && line.level <= self.level
    }
}

#[derive(Debug)]
pub struct StderrWriter {
    io: Stderr,
}

impl StderrWriter {
    /// Creates a new [`StderrWriter`] instance.
    #[must_use]
    pub fn new() -> Self {
        Self { io: io::stderr() }
    }
}

impl Default for StderrWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogWriter for StderrWriter {
    fn write(&mut self, line: &str) {
        if let Err(e) = self.io.lock().write_all(line.as_bytes()) {
            eprintln!("Error writing to stderr: {e:?}");
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.io.flush() {
            eprintln!("Error flushing stderr: {e:?}");
        }
    }

    fn enabled(&self, line: &LogLine) -> bool {
        line.level == LevelFilter::Error
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use chrono::Utc;
    use log::Level;
    use rstest::rstest;
    use ustr::Ustr;

    use super::*;

    fn line(level: Level) -> LogLine {
        LogLine {
            timestamp: Utc::now(),
            level,
            component: Ustr::from("test"),
            message: "message".to_string(),
        }
    }

    #[rstest]
    #[case(LevelFilter::Info, Level::Error, false)]
    #[case(LevelFilter::Info, Level::Warn, true)]
    #[case(LevelFilter::Info, Level::Info, true)]
    #[case(LevelFilter::Info, Level::Debug, false)]
    #[case(LevelFilter::Off, Level::Warn, false)]
    #[case(LevelFilter::Trace, Level::Trace, true)]
    fn test_stdout_writer_enabled(
        #[case] filter: LevelFilter,
        #[case] level: Level,
        #[case] expected: bool,
    ) {
        assert_eq!(StdoutWriter::new(filter).enabled(&line(level)), expected);
    }

    #[rstest]
    #[case(Level::Error, true)]
    #[case(Level::Warn, false)]
    #[case(Level::Trace, false)]
    fn test_stderr_writer_enabled(#[case] level: Level, #[case] expected: bool) {
        assert_eq!(StderrWriter::new().enabled(&line(level)), expected);
    }
}
