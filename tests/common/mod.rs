//! Shared test helpers
//!
//! The in-memory sink is a test-only double; production code only knows the
//! `Sink` trait.
#![allow(dead_code)] // not every test binary uses every helper

use parking_lot::Mutex;
use simple_logger_system::core::{Level, Result, Sink};
use std::sync::Arc;

/// Sink that appends every written line to a shared list.
#[derive(Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured lines, one entry per log call.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write_line(&mut self, _level: Level, line: &str) -> Result<()> {
        self.lines.lock().push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Serializes tests that touch the global configuration.
///
/// Cargo runs tests on parallel threads; tests using local `LoggerConfig`
/// instances do not need this.
pub static GLOBAL_CONFIG_LOCK: Mutex<()> = Mutex::new(());
