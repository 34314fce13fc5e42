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

//! Layouts for formatting log events.

use std::borrow::Cow;
use std::fmt;

use crate::Error;
use crate::record::LogEvent;

mod console;

pub use self::console::ConsoleLayout;

/// A layout for formatting log events.
pub trait Layout: fmt::Debug + Send + Sync + 'static {
    /// Formats a log event into the bytes of one output line.
    fn format(&self, event: &LogEvent) -> Result<Vec<u8>, Error>;
}

impl<T: Layout> From<T> for Box<dyn Layout> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// Shorten a source path to fit a width budget.
///
/// Walks `/`-separated segments left to right and collapses each one to its
/// first character while the running length still exceeds `max_width`. The
/// final segment is always preserved in full: the file name wins over
/// directory readability.
///
/// The result never grows, and meets the budget whenever structurally
/// possible (it cannot shrink below one character per directory plus the full
/// file name).
pub fn reduce_path(path: &str, max_width: usize) -> Cow<'_, str> {
    if path.len() <= max_width {
        return Cow::Borrowed(path);
    }

    let segments: Vec<&str> = path.split('/').collect();
    let last = segments.len() - 1;
    let mut remaining = path.len();
    let mut reduced = String::with_capacity(path.len());
    for (i, segment) in segments.iter().enumerate() {
        if remaining > max_width && i < last {
            if let Some(initial) = segment.chars().next() {
                reduced.push(initial);
                remaining -= segment.len() - initial.len_utf8();
            }
        } else {
            reduced.push_str(segment);
        }
        if i < last {
            reduced.push('/');
        }
    }
    Cow::Owned(reduced)
}
