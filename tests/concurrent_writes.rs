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

use std::io;
use std::sync::Arc;
use std::sync::Mutex;
use std::thread;

use termlog::Append;
use termlog::LogEvent;
use termlog::Severity;
use termlog::append::Writer;
use termlog::kv::Key;
use termlog::kv::Value;

#[derive(Clone, Default)]
struct SharedBuf {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.bytes.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_concurrent_appends_do_not_interleave() {
    colored::control::set_override(false);

    let buf = SharedBuf::default();
    let appender = Arc::new(Writer::new(buf.clone()));

    let threads: usize = 8;
    let per_thread: usize = 25;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let appender = appender.clone();
            thread::spawn(move || {
                let message = format!("message from caller {t}");
                for i in 0..per_thread {
                    let fields = [
                        (Key::new("caller"), Value::from(t)),
                        (Key::new("seq"), Value::from(i)),
                    ];
                    let event = LogEvent::builder()
                        .severity(Severity::Info)
                        .file("server/worker.rs")
                        .line(10)
                        .message(message.as_str())
                        .key_values(&fields[..])
                        .build();
                    appender.append(&event).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let output = buf.contents();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), threads * per_thread);

    for line in &lines {
        // a complete line carries exactly one intact message and both fields
        assert_eq!(line.matches("message from caller").count(), 1, "{line:?}");
        assert!(line.contains(" caller="), "{line:?}");
        assert!(line.contains(" seq="), "{line:?}");
    }

    // every (caller, seq) pair came out exactly once
    for t in 0..threads {
        for i in 0..per_thread {
            let token = format!(" caller={t} seq={i}\n");
            assert_eq!(
                output.matches(token.as_str()).count(),
                1,
                "missing or torn {token}"
            );
        }
    }
}

#[test]
fn test_set_level_is_visible_across_threads() {
    let appender = Arc::new(Writer::new(io::sink()));
    assert_eq!(appender.level(), Severity::Trace);

    let setter = {
        let appender = appender.clone();
        thread::spawn(move || appender.set_level(Severity::Warn))
    };
    setter.join().unwrap();

    assert_eq!(appender.level(), Severity::Warn);
}
