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

use std::fs::File;

use termlog::Append;
use termlog::LogEvent;
use termlog::Severity;
use termlog::append::Writer;
use termlog::kv::Key;
use termlog::kv::Value;

fn main() {
    // Plain lines for a non-terminal sink.
    colored::control::set_override(false);

    let file = File::create("app.log").expect("failed to create app.log");
    let appender = Writer::new(file).with_level(Severity::Info);

    for i in 0..5 {
        let fields = [(Key::new("iteration"), Value::from(i))];
        let event = LogEvent::builder()
            .severity(Severity::Info)
            .file("demos/file_sink.rs")
            .line(35)
            .message("work unit done")
            .key_values(&fields[..])
            .build();
        appender.append(&event).unwrap();
    }
    appender.flush().unwrap();

    println!("wrote 5 lines to app.log");
}
