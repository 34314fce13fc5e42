// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Log events and their severity.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::Error;
use crate::kv::KeyValues;

/// An enum representing the urgency of a log event.
///
/// Variants are ordered by increasing urgency: `Trace < Debug < Info < Warn <
/// Error < Fatal < Panic`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    /// Designates very low priority, often extremely verbose, information.
    Trace,
    /// Designates lower priority information.
    Debug,
    /// Designates useful information.
    Info,
    /// Designates hazardous situations.
    Warn,
    /// Designates very serious errors.
    Error,
    /// Designates unrecoverable errors.
    Fatal,
    /// Designates errors that abort the current execution.
    Panic,
}

impl Severity {
    /// Return the string representation of the `Severity`.
    ///
    /// This returns the same string as the `fmt::Display` implementation, and
    /// doubles as the display tag: the width is fixed per level, 4 characters
    /// for `Info` and `Warn` and 5 for all others.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
            Severity::Panic => "PANIC",
        }
    }

    /// The position of this severity in the total order, starting from
    /// `Trace` at zero.
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Recover a severity from its rank.
    ///
    /// Ranks outside the closed set fall back to `Info`.
    pub fn from_rank(rank: u8) -> Severity {
        match rank {
            0 => Severity::Trace,
            1 => Severity::Debug,
            2 => Severity::Info,
            3 => Severity::Warn,
            4 => Severity::Error,
            5 => Severity::Fatal,
            6 => Severity::Panic,
            _ => Severity::Info,
        }
    }
}

impl fmt::Debug for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;
    fn from_str(s: &str) -> Result<Severity, Self::Err> {
        for (name, severity) in [
            ("trace", Severity::Trace),
            ("debug", Severity::Debug),
            ("info", Severity::Info),
            ("warn", Severity::Warn),
            ("error", Severity::Error),
            ("fatal", Severity::Fatal),
            ("panic", Severity::Panic),
        ] {
            if s.eq_ignore_ascii_case(name) {
                return Ok(severity);
            }
        }

        Err(Error::new(format!("malformed severity: {s:?}")))
    }
}

/// One structured log record.
///
/// Events are produced by the logging framework, handed to an appender
/// exactly once, and consumed read-only; appenders keep no state about past
/// events.
#[derive(Clone, Debug)]
pub struct LogEvent<'a> {
    severity: Severity,
    file: &'a str,
    line: u32,
    message: Cow<'a, str>,
    kvs: KeyValues<'a>,
}

impl<'a> LogEvent<'a> {
    /// The urgency of the event.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The source file the event was emitted from.
    pub fn file(&self) -> &'a str {
        self.file
    }

    /// The source line the event was emitted from.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The key-values attached to the event.
    pub fn key_values(&self) -> &KeyValues<'a> {
        &self.kvs
    }

    /// Returns a new builder.
    pub fn builder() -> LogEventBuilder<'a> {
        LogEventBuilder::default()
    }
}

/// Builder for [`LogEvent`].
#[derive(Debug)]
pub struct LogEventBuilder<'a> {
    event: LogEvent<'a>,
}

impl Default for LogEventBuilder<'_> {
    fn default() -> Self {
        LogEventBuilder {
            event: LogEvent {
                severity: Severity::Info,
                file: "",
                line: 0,
                message: Cow::Borrowed(""),
                kvs: KeyValues::default(),
            },
        }
    }
}

impl<'a> LogEventBuilder<'a> {
    /// Set [`severity`](LogEvent::severity).
    pub fn severity(mut self, severity: Severity) -> Self {
        self.event.severity = severity;
        self
    }

    /// Set [`file`](LogEvent::file).
    pub fn file(mut self, file: &'a str) -> Self {
        self.event.file = file;
        self
    }

    /// Set [`line`](LogEvent::line).
    pub fn line(mut self, line: u32) -> Self {
        self.event.line = line;
        self
    }

    /// Set [`message`](LogEvent::message).
    pub fn message(mut self, message: impl Into<Cow<'a, str>>) -> Self {
        self.event.message = message.into();
        self
    }

    /// Set [`key_values`](LogEvent::key_values).
    pub fn key_values(mut self, kvs: impl Into<KeyValues<'a>>) -> Self {
        self.event.kvs = kvs.into();
        self
    }

    /// Invoke the builder and return a `LogEvent`.
    pub fn build(self) -> LogEvent<'a> {
        self.event
    }
}
