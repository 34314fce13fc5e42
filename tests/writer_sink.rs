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

use std::fs;
use std::io;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use termlog::Append;
use termlog::LogEvent;
use termlog::Severity;
use termlog::append::Writer;
use termlog::kv::Key;
use termlog::kv::Value;

fn event<'a>(message: &'a str, fields: &'a [(Key<'a>, Value<'a>)]) -> LogEvent<'a> {
    LogEvent::builder()
        .severity(Severity::Info)
        .file("server/main.rs")
        .line(12)
        .message(message)
        .key_values(fields)
        .build()
}

struct FlakySink {
    fail_next: AtomicBool,
}

impl io::Write for &FlakySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            Err(io::Error::other("sink unavailable"))
        } else {
            Ok(buf.len())
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_failures_propagate_and_appender_survives() {
    colored::control::set_override(false);

    static SINK: FlakySink = FlakySink {
        fail_next: AtomicBool::new(true),
    };
    let appender = Writer::new(&SINK);

    let err = appender.append(&event("first", &[])).unwrap_err();
    assert!(err.to_string().contains("failed to perform io"), "{err}");
    assert!(err.sources().len() > 0);

    // the appender stays usable after a transient sink failure
    appender.append(&event("second", &[])).unwrap();
    appender.flush().unwrap();
}

#[test]
fn test_writer_appends_lines_to_a_file() {
    colored::control::set_override(false);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.log");
    let file = fs::File::create(&path).unwrap();
    let appender = Writer::new(file);

    let fields = [(Key::new("attempt"), Value::from(1))];
    appender.append(&event("starting up", &[])).unwrap();
    appender.append(&event("retrying", &fields)).unwrap();
    appender.flush().unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("starting up"));
    assert!(lines[1].contains("retrying"));
    assert!(lines[1].ends_with(" attempt=1"));
}
