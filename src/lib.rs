//! # Simple Logger System
//!
//! A minimal, synchronous logging backend implementing a standard logging
//! facade: level-tagged calls are filtered against a configured threshold,
//! formatted into a single line, and written to a configured output sink.
//!
//! ## Features
//!
//! - **Level Filtering**: Per-logger thresholds resolved from a shared configuration
//! - **Message Templating**: `{}` placeholder substitution with graceful mismatch handling
//! - **Pluggable Sinks**: Console (stdout/stderr) and file destinations
//! - **Never Fails the Caller**: Logging calls do not return errors or panic

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        format_message, ErrorDetails, Level, LogRecord, Logger, LoggerConfig, LoggerError, Result,
        SharedSink, Sink, TimestampFormat,
    };
    pub use crate::sinks::{ConsoleSink, FileSink};
}

pub use core::{
    config, format_message, ErrorDetails, Level, LogRecord, Logger, LoggerConfig, LoggerError,
    Result, SharedSink, Sink, TimestampFormat,
};
pub use sinks::{ConsoleSink, FileSink};
