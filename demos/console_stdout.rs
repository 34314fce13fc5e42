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

use termlog::Append;
use termlog::ConsoleLayout;
use termlog::LogEvent;
use termlog::Severity;
use termlog::append::Stdout;
use termlog::kv::Key;
use termlog::kv::Value;

fn main() {
    let appender = Stdout::default().with_layout(ConsoleLayout::default().max_location_width(30));

    let severities = [
        Severity::Trace,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
        Severity::Panic,
    ];
    for severity in severities {
        let fields = [
            (Key::new("user"), Value::from("ann")),
            (Key::new("code"), Value::from(500)),
            (Key::new("detail"), Value::from("connection reset by peer")),
        ];
        let event = LogEvent::builder()
            .severity(severity)
            .file("github.com/acme/gateway/server/handler.rs")
            .line(42)
            .message(format!("Hello {severity}!"))
            .key_values(&fields[..])
            .build();
        appender.append(&event).unwrap();
    }
}
