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

//! Termlog renders structured log events as colorized, column-aligned text
//! lines for terminals.
//!
//! # Overview
//!
//! Termlog is an appender component for a logging framework: the framework
//! constructs [`LogEvent`]s and decides which of them to emit; termlog turns
//! each event into exactly one ANSI-colorized line and writes it to a byte
//! sink. Severity maps to a fixed palette of color roles, event fields render
//! as deterministically ordered `key=value` tokens, and source locations can
//! be shortened to fit a width budget.
//!
//! Whether color escapes are emitted at all is the caller's decision, made
//! through [`colored::control`] (the `NO_COLOR` convention is honored by
//! default).
//!
//! # Examples
//!
//! Render an event to stdout:
//!
//! ```
//! use termlog::Append;
//! use termlog::LogEvent;
//! use termlog::Severity;
//! use termlog::append::Stdout;
//! use termlog::kv::Key;
//! use termlog::kv::Value;
//!
//! let appender = Stdout::default();
//!
//! let fields = [
//!     (Key::new("user"), Value::from("ann")),
//!     (Key::new("code"), Value::from(500)),
//! ];
//! let event = LogEvent::builder()
//!     .severity(Severity::Error)
//!     .file("server/handler.rs")
//!     .line(42)
//!     .message("request failed")
//!     .key_values(&fields[..])
//!     .build();
//!
//! appender.append(&event).unwrap();
//! ```

pub mod append;
pub mod kv;
pub mod layout;

mod color;
mod error;
mod record;

pub use append::Append;
pub use color::ColorPalette;
pub use color::ColorSpec;
pub use error::Error;
pub use layout::ConsoleLayout;
pub use layout::Layout;
pub use record::LogEvent;
pub use record::LogEventBuilder;
pub use record::Severity;
