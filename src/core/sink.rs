//! Sink trait for log output destinations

use super::{error::Result, log_level::Level};
use parking_lot::Mutex;
use std::sync::Arc;

/// Destination for formatted log lines.
///
/// A sink receives one fully formatted line per log call and appends the line
/// separator itself. The level accompanies the line as metadata only (console
/// sinks use it for color selection); it must not change the line content.
pub trait Sink: Send + Sync {
    fn write_line(&mut self, level: Level, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

/// Shared handle to the active sink.
///
/// Loggers hold a clone of this handle; the mutex keeps concurrent writers
/// from interleaving bytes within a single line.
pub type SharedSink = Arc<Mutex<Box<dyn Sink>>>;

/// Wrap a sink into a [`SharedSink`] handle.
pub fn shared(sink: impl Sink + 'static) -> SharedSink {
    Arc::new(Mutex::new(Box::new(sink)))
}
