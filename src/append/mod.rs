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

//! Appenders that render log events to byte sinks.

use std::fmt;

use crate::Error;
use crate::record::LogEvent;

mod stdio;
mod testing;
mod writer;

pub use self::stdio::Stderr;
pub use self::stdio::Stdout;
pub use self::testing::Testing;
pub use self::writer::Writer;

/// An appender that can render log events.
///
/// `append` is synchronous and may be called from any number of threads at
/// once; implementations must write each rendered line atomically so that
/// concurrent calls never interleave output. Appenders perform no severity
/// filtering of their own: every event handed to `append` is rendered, and
/// the configured minimum severity exists for the calling framework to
/// consult beforehand.
pub trait Append: fmt::Debug + Send + Sync + 'static {
    /// Render one log event to the append target.
    ///
    /// The only failure surfaced is a failed sink write; the appender stays
    /// usable after an error.
    fn append(&self, event: &LogEvent) -> Result<(), Error>;

    /// Flush any buffered output.
    ///
    /// Default to a no-op.
    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}

impl<T: Append> From<T> for Box<dyn Append> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}
