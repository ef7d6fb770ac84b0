//! `LogSink` forwards rejected operations to the `log` facade.
//!
//! The logger is process-global, so this binary holds a single test.

#![cfg(feature = "log")]

use std::sync::Mutex;

use bstack::{BoundedStack, LogSink};
use log::{LevelFilter, Log, Metadata, Record};

struct CaptureLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let line = format!("{}|{}|{}", record.level(), record.target(), record.args());
        self.lines.lock().unwrap().push(line);
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};

#[test]
fn test_rejections_reach_log_at_warn() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut stack = BoundedStack::builder().capacity(1).sink(LogSink).build().unwrap();
    stack.push(1);
    stack.push(2);
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.pop(), None);

    let lines = LOGGER.lines.lock().unwrap().clone();
    assert_eq!(
        lines,
        vec![
            "WARN|bstack|Error: Stack is full. Cannot push item. \
             (kind=stack_full, len=1, capacity=Some(1))"
                .to_string(),
            "WARN|bstack|Error: Stack is empty. Cannot pop item. \
             (kind=stack_empty, len=0, capacity=Some(1))"
                .to_string(),
        ]
    );
}
