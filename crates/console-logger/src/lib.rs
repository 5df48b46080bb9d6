//! Console Logger
//!
//! A `log` backend for WASM frontends. Records go to the browser console
//! and the most recent ones are kept in a circular buffer so they can be
//! inspected after the fact.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Number of records kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 200;

/// A formatted log record
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    pub fn format_line(&self) -> String {
        format!("{} [{} {}] {}", self.timestamp, self.level, self.target, self.message)
    }
}

/// Fixed-size buffer that drops the oldest entry when full
#[derive(Debug)]
pub struct RingBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct ConsoleLogger {
    level: LevelFilter,
    buffer: Mutex<RingBuffer>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            buffer: Mutex::new(RingBuffer::new(capacity)),
        }
    }

    pub fn recent(&self) -> Vec<LogEntry> {
        self.buffer.lock().map(|b| b.snapshot()).unwrap_or_default()
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let entry = LogEntry {
            timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };

        write_console(&entry);

        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(entry);
        }
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(entry: &LogEntry) {
    let line = wasm_bindgen::JsValue::from_str(&entry.format_line());
    match entry.level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(entry: &LogEntry) {
    eprintln!("{}", entry.format_line());
}

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Install the console logger as the global `log` backend
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), log::SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Records kept by the installed logger, oldest first
pub fn recent() -> Vec<LogEntry> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: "12:00:00.000".to_string(),
            level: Level::Info,
            target: "test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_ring_buffer_evicts_oldest() {
        let mut buffer = RingBuffer::new(2);
        buffer.push(entry("a"));
        buffer.push(entry("b"));
        buffer.push(entry("c"));

        let messages: Vec<_> = buffer.snapshot().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["b", "c"]);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut buffer = RingBuffer::new(0);
        assert!(buffer.is_empty());
        buffer.push(entry("a"));
        buffer.push(entry("b"));
        assert_eq!(buffer.snapshot(), vec![entry("b")]);
    }

    #[test]
    fn test_logger_respects_level() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 10);
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("board")
                .args(format_args!("hidden"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Warn)
                .target("board")
                .args(format_args!("shown"))
                .build(),
        );

        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].message, "shown");
        assert_eq!(recent[0].target, "board");
    }

    #[test]
    fn test_format_line() {
        assert_eq!(entry("hi").format_line(), "12:00:00.000 [INFO test] hi");
    }
}
