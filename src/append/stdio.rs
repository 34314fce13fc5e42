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

use std::io::Write;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering;

use crate::Error;
use crate::Layout;
use crate::Severity;
use crate::append::Append;
use crate::layout::ConsoleLayout;
use crate::record::LogEvent;

/// An appender that prints rendered log events to stdout.
///
/// Each line goes out in a single `write_all` against the process-wide
/// stdout handle, so concurrent appends never tear.
#[derive(Debug)]
pub struct Stdout {
    layout: Box<dyn Layout>,
    level: AtomicU8,
}

impl Default for Stdout {
    fn default() -> Self {
        Self {
            layout: Box::new(ConsoleLayout::default()),
            level: AtomicU8::new(Severity::Trace.rank()),
        }
    }
}

impl Stdout {
    /// Sets the layout for the [`Stdout`] appender.
    ///
    /// Default to [`ConsoleLayout`].
    pub fn with_layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Sets the configured minimum severity.
    pub fn with_level(self, level: Severity) -> Self {
        self.set_level(level);
        self
    }

    /// The configured minimum severity.
    pub fn level(&self) -> Severity {
        Severity::from_rank(self.level.load(Ordering::Relaxed))
    }

    /// Update the configured minimum severity.
    pub fn set_level(&self, level: Severity) {
        self.level.store(level.rank(), Ordering::Relaxed);
    }
}

impl Append for Stdout {
    fn append(&self, event: &LogEvent) -> Result<(), Error> {
        let bytes = self.layout.format(event)?;
        std::io::stdout()
            .write_all(&bytes)
            .map_err(Error::from_io_error)
    }

    fn flush(&self) -> Result<(), Error> {
        std::io::stdout().flush().map_err(Error::from_io_error)
    }
}

/// An appender that prints rendered log events to stderr.
#[derive(Debug)]
pub struct Stderr {
    layout: Box<dyn Layout>,
    level: AtomicU8,
}

impl Default for Stderr {
    fn default() -> Self {
        Self {
            layout: Box::new(ConsoleLayout::default()),
            level: AtomicU8::new(Severity::Trace.rank()),
        }
    }
}

impl Stderr {
    /// Sets the layout for the [`Stderr`] appender.
    ///
    /// Default to [`ConsoleLayout`].
    pub fn with_layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Sets the configured minimum severity.
    pub fn with_level(self, level: Severity) -> Self {
        self.set_level(level);
        self
    }

    /// The configured minimum severity.
    pub fn level(&self) -> Severity {
        Severity::from_rank(self.level.load(Ordering::Relaxed))
    }

    /// Update the configured minimum severity.
    pub fn set_level(&self, level: Severity) {
        self.level.store(level.rank(), Ordering::Relaxed);
    }
}

impl Append for Stderr {
    fn append(&self, event: &LogEvent) -> Result<(), Error> {
        let bytes = self.layout.format(event)?;
        std::io::stderr()
            .write_all(&bytes)
            .map_err(Error::from_io_error)
    }

    fn flush(&self) -> Result<(), Error> {
        std::io::stderr().flush().map_err(Error::from_io_error)
    }
}
