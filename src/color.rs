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

//! Color roles for rendered lines.

use colored::Color;
use colored::ColoredString;
use colored::Colorize;

use crate::Severity;

/// How one span of a rendered line is styled.
///
/// A spec wraps already-padded text with a start sequence and a single reset;
/// specs are never nested or stacked. An empty spec renders plain text with
/// no escape codes at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorSpec {
    fg: Option<Color>,
    bg: Option<Color>,
    bold: bool,
}

impl ColorSpec {
    /// A spec that leaves text unstyled.
    pub const fn plain() -> Self {
        ColorSpec {
            fg: None,
            bg: None,
            bold: false,
        }
    }

    /// A spec with the given foreground color.
    pub const fn fg(color: Color) -> Self {
        ColorSpec {
            fg: Some(color),
            bg: None,
            bold: false,
        }
    }

    /// A spec with the given background color.
    pub const fn bg(color: Color) -> Self {
        ColorSpec {
            fg: None,
            bg: Some(color),
            bold: false,
        }
    }

    /// Render this spec in bold.
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Apply the spec to a span of text.
    pub fn paint(&self, text: &str) -> ColoredString {
        let mut styled = ColoredString::from(text);
        if let Some(color) = self.fg {
            styled = styled.color(color);
        }
        if let Some(color) = self.bg {
            styled = styled.on_color(color);
        }
        if self.bold {
            styled = styled.bold();
        }
        styled
    }
}

/// The severity-to-color mapping of a rendered line.
///
/// Four independent roles are colorized per severity: the timestamp, the
/// level tag, the message text, and the source location. The location is
/// dimmed for `Trace`/`Debug`/`Info` and emphasized for anything more urgent,
/// so the eye is drawn to provenance exactly when something is wrong.
///
/// A palette is constructed once and shared by reference; it is never mutated
/// after construction. `Default` gives the canonical palette.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    /// Level tag color for trace events.
    pub trace: ColorSpec,
    /// Level tag color for debug events.
    pub debug: ColorSpec,
    /// Level tag color for info events; also the fallback tag color.
    pub info: ColorSpec,
    /// Level tag color for warn events.
    pub warn: ColorSpec,
    /// Level tag color for error events.
    pub error: ColorSpec,
    /// Level tag color for fatal and panic events.
    pub fatal: ColorSpec,

    /// Timestamp color on escalated events.
    pub time: ColorSpec,
    /// Timestamp color on routine events.
    pub time_dim: ColorSpec,

    /// Location color on escalated events.
    pub file: ColorSpec,
    /// Location color on routine events.
    pub file_dim: ColorSpec,

    /// Message text color for warn events.
    pub text_warn: ColorSpec,
    /// Message text color for error, fatal and panic events.
    pub text_error: ColorSpec,

    /// Color of every field key, independent of the event severity.
    pub key: ColorSpec,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            trace: ColorSpec::fg(Color::Blue),
            debug: ColorSpec::fg(Color::Magenta),
            info: ColorSpec::fg(Color::Green),
            warn: ColorSpec::fg(Color::Yellow).bold(),
            error: ColorSpec::fg(Color::Red).bold(),
            fatal: ColorSpec::bg(Color::BrightRed),
            time: ColorSpec::fg(Color::Blue).bold(),
            time_dim: ColorSpec::fg(Color::Blue),
            file: ColorSpec::fg(Color::Cyan).bold(),
            file_dim: ColorSpec::fg(Color::Cyan),
            text_warn: ColorSpec::fg(Color::Yellow).bold(),
            text_error: ColorSpec::fg(Color::Red).bold(),
            key: ColorSpec::fg(Color::Green),
        }
    }
}

impl ColorPalette {
    /// The timestamp color for the given severity.
    pub fn time_color(&self, severity: Severity) -> ColorSpec {
        match severity {
            Severity::Debug | Severity::Info => self.time_dim,
            _ => self.time,
        }
    }

    /// The level tag color for the given severity.
    pub fn level_color(&self, severity: Severity) -> ColorSpec {
        match severity {
            Severity::Trace => self.trace,
            Severity::Debug => self.debug,
            Severity::Warn => self.warn,
            Severity::Error => self.error,
            Severity::Fatal | Severity::Panic => self.fatal,
            Severity::Info => self.info,
        }
    }

    /// The message text color for the given severity.
    pub fn text_color(&self, severity: Severity) -> ColorSpec {
        match severity {
            Severity::Warn => self.text_warn,
            Severity::Error | Severity::Fatal | Severity::Panic => self.text_error,
            _ => ColorSpec::plain(),
        }
    }

    /// The source location color for the given severity.
    pub fn file_color(&self, severity: Severity) -> ColorSpec {
        match severity {
            Severity::Trace | Severity::Debug | Severity::Info => self.file_dim,
            _ => self.file,
        }
    }

    /// The color of field keys.
    pub fn key_color(&self) -> ColorSpec {
        self.key
    }
}
