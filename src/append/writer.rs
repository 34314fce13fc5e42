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

use std::fmt;
use std::io;
use std::sync::Mutex;
use std::sync::atomic::AtomicU8;
use std::sync::atomic::Ordering;

use crate::Error;
use crate::Layout;
use crate::Severity;
use crate::append::Append;
use crate::layout::ConsoleLayout;
use crate::record::LogEvent;

/// An appender that renders log events to an injected byte sink.
///
/// The sink is supplied at construction time and can be anything that
/// implements [`io::Write`]: a file, a pipe, an in-memory buffer. Lines are
/// composed without holding the sink lock, then written in one `write_all`
/// under it, so concurrent appends each produce one complete line.
///
/// # Examples
///
/// ```
/// use termlog::append::Writer;
///
/// let appender = Writer::new(std::io::sink());
/// ```
pub struct Writer {
    layout: Box<dyn Layout>,
    sink: Mutex<Box<dyn io::Write + Send>>,
    level: AtomicU8,
}

impl fmt::Debug for Writer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Writer")
            .field("layout", &self.layout)
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}

impl Writer {
    /// Creates a new `Writer` appender over the given sink.
    pub fn new(sink: impl io::Write + Send + 'static) -> Self {
        Self {
            layout: Box::new(ConsoleLayout::default()),
            sink: Mutex::new(Box::new(sink)),
            level: AtomicU8::new(Severity::Trace.rank()),
        }
    }

    /// Sets the layout for the [`Writer`] appender.
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

impl Append for Writer {
    fn append(&self, event: &LogEvent) -> Result<(), Error> {
        let bytes = self.layout.format(event)?;
        // A poisoned lock only means another appending thread panicked; the
        // sink itself is still sound.
        let mut sink = self.sink.lock().unwrap_or_else(|err| err.into_inner());
        sink.write_all(&bytes).map_err(Error::from_io_error)
    }

    fn flush(&self) -> Result<(), Error> {
        let mut sink = self.sink.lock().unwrap_or_else(|err| err.into_inner());
        sink.flush().map_err(Error::from_io_error)
    }
}
