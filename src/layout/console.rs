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

use std::borrow::Cow;
use std::fmt;
use std::fmt::Write;

use jiff::Zoned;
use jiff::tz::TimeZone;

use crate::ColorPalette;
use crate::Error;
use crate::kv::Value;
use crate::layout::Layout;
use crate::layout::reduce_path;
use crate::record::LogEvent;

/// A layout that formats log events as colorized, column-aligned lines.
///
/// Output format:
///
/// ```text
/// 22:44:57 ERROR              server/handler.rs:42  request failed                                 code=500 user=ann
/// 22:44:58 WARN                  server/pool.rs:107 retrying                                       attempt=3
/// 22:44:58 INFO                server/accept.rs:61  connection open                                peer=10.0.0.7
/// ```
///
/// The location is right-aligned in 30 columns with the line number
/// left-aligned in 3; the message occupies at least 44 columns. These widths
/// are a compatibility contract for tooling that screen-scrapes the output.
/// Longer values push the rest of the line to the right rather than being
/// cut.
///
/// Field tokens render sorted by key so that output is deterministic across
/// runs, whatever order the producer supplied them in. String-like values
/// made only of ASCII letters, digits, hyphens, and dots render bare; any
/// other string-like value renders as a quoted, escaped literal. Non-string
/// values render through their plain textual representation.
///
/// You can customize the timezone of the timestamp by setting the `tz` field
/// with a [`TimeZone`] instance. Otherwise, the system timezone is used.
#[derive(Default, Debug, Clone)]
pub struct ConsoleLayout {
    colors: ColorPalette,
    max_location_width: Option<usize>,
    tz: Option<TimeZone>,
}

impl ConsoleLayout {
    /// Sets the color palette.
    pub fn colors(mut self, colors: ColorPalette) -> Self {
        self.colors = colors;
        self
    }

    /// Sets a width budget for the source location; longer paths are
    /// shortened with [`reduce_path`] before alignment.
    pub fn max_location_width(mut self, max_width: usize) -> Self {
        self.max_location_width = Some(max_width);
        self
    }

    /// Sets the timezone for timestamps.
    ///
    /// # Examples
    ///
    /// ```
    /// use jiff::tz::TimeZone;
    /// use termlog::ConsoleLayout;
    ///
    /// let layout = ConsoleLayout::default().timezone(TimeZone::UTC);
    /// ```
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.tz = Some(tz);
        self
    }
}

impl Layout for ConsoleLayout {
    fn format(&self, event: &LogEvent) -> Result<Vec<u8>, Error> {
        let severity = event.severity();
        let colors = &self.colors;

        let time = match self.tz.clone() {
            Some(tz) => Zoned::now().with_time_zone(tz),
            None => Zoned::now(),
        };
        let time = time.strftime("%H:%M:%S").to_string();

        let file = match self.max_location_width {
            Some(max_width) => reduce_path(event.file(), max_width),
            None => Cow::Borrowed(event.file()),
        };

        // Each span is padded to its column first, then wrapped in its color
        // so the escape codes never count against the width.
        let mut line = String::new();
        write!(
            line,
            "{} {} {} {}",
            colors.time_color(severity).paint(&time),
            colors
                .level_color(severity)
                .paint(&format!("{:<5}", severity.as_str())),
            colors
                .file_color(severity)
                .paint(&format!("{:>30}:{:<3}", file, event.line())),
            colors
                .text_color(severity)
                .paint(&format!("{:<44}", event.message())),
        )
        .map_err(Error::from_fmt_error)?;

        let mut pairs: Vec<_> = event.key_values().iter().collect();
        pairs.sort_by_key(|(key, _)| key.as_str());
        for (key, value) in pairs {
            write!(line, " {}=", colors.key_color().paint(key.as_str()))
                .map_err(Error::from_fmt_error)?;
            append_value(&mut line, value).map_err(Error::from_fmt_error)?;
        }
        line.push('\n');

        Ok(line.into_bytes())
    }
}

// Bare only if every character is an ASCII letter, digit, hyphen, or dot;
// the empty string qualifies.
fn bare_safe(text: &str) -> bool {
    text.chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '.')
}

fn append_value(out: &mut String, value: &Value) -> fmt::Result {
    if let Some(text) = value.to_borrowed_str() {
        if bare_safe(text) {
            out.push_str(text);
        } else {
            write!(out, "{text:?}")?;
        }
    } else if let Some(err) = value.to_borrowed_error() {
        let message = err.to_string();
        if bare_safe(&message) {
            out.push_str(&message);
        } else {
            write!(out, "{message:?}")?;
        }
    } else {
        write!(out, "{value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_safe_charset() {
        assert!(bare_safe("ann"));
        assert!(bare_safe("v1.2.3-rc1"));
        assert!(bare_safe(""));

        assert!(!bare_safe("two words"));
        assert!(!bare_safe("a=b"));
        assert!(!bare_safe("tab\there"));
        assert!(!bare_safe("naïve"));
    }

    #[test]
    fn test_append_value_quotes_unsafe_strings() {
        let mut out = String::new();
        append_value(&mut out, &Value::from("request failed: \"timeout\"")).unwrap();
        assert_eq!(out, "\"request failed: \\\"timeout\\\"\"");

        let mut out = String::new();
        append_value(&mut out, &Value::from("ok")).unwrap();
        assert_eq!(out, "ok");
    }

    #[test]
    fn test_append_value_passes_numbers_through() {
        let mut out = String::new();
        append_value(&mut out, &Value::from(500)).unwrap();
        assert_eq!(out, "500");

        let mut out = String::new();
        append_value(&mut out, &Value::from(true)).unwrap();
        assert_eq!(out, "true");
    }

    #[test]
    fn test_append_value_uses_error_message() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let mut out = String::new();
        append_value(&mut out, &Value::capture_error(&err)).unwrap();
        assert_eq!(out, "boom");
    }
}
