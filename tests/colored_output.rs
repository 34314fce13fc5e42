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

// The color override is process-global, so everything exercising forced-on
// colors lives in this one test function.

use termlog::ConsoleLayout;
use termlog::Layout;
use termlog::LogEvent;
use termlog::Severity;
use termlog::kv::Key;
use termlog::kv::Value;

const RESET: &str = "\x1b[0m";

fn strip_ansi(text: &str) -> String {
    let mut out = String::new();
    let mut rest = text;
    while let Some(i) = rest.find('\x1b') {
        out.push_str(&rest[..i]);
        rest = &rest[i..];
        match rest.find('m') {
            Some(j) => rest = &rest[j + 1..],
            None => rest = "",
        }
    }
    out.push_str(rest);
    out
}

#[test]
fn test_escape_wrapping() {
    let fields = [
        (Key::new("user"), Value::from("ann")),
        (Key::new("code"), Value::from(500)),
    ];
    let error_event = LogEvent::builder()
        .severity(Severity::Error)
        .file("server/handler.go")
        .line(42)
        .message("request failed")
        .key_values(&fields[..])
        .build();
    let info_event = LogEvent::builder()
        .severity(Severity::Info)
        .file("server/handler.go")
        .line(43)
        .message("request ok")
        .key_values(&fields[..])
        .build();
    let layout = ConsoleLayout::default();

    colored::control::set_override(true);
    let colored_line = String::from_utf8(layout.format(&error_event).unwrap()).unwrap();

    // time, tag, location, message, and two field keys: six colored spans,
    // each closed by exactly one shared reset
    assert_eq!(colored_line.matches(RESET).count(), 6, "{colored_line:?}");
    assert_eq!(colored_line.matches('\x1b').count(), 12, "{colored_line:?}");

    // never nested: between two resets there is at most one start code
    for chunk in colored_line.split(RESET) {
        assert!(chunk.matches('\x1b').count() <= 1, "{colored_line:?}");
    }

    // an info message is unstyled, so one fewer span
    let info_line = String::from_utf8(layout.format(&info_event).unwrap()).unwrap();
    assert_eq!(info_line.matches(RESET).count(), 5, "{info_line:?}");

    // stripping the escapes leaves exactly the plain rendition
    colored::control::set_override(false);
    let plain_line = String::from_utf8(layout.format(&error_event).unwrap()).unwrap();
    // timestamps may straddle a second boundary between the two renders
    assert_eq!(strip_ansi(&colored_line)[8..], plain_line[8..]);
}
