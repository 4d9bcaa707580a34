//! Core logger types and traits

pub mod config;
pub mod error;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod message_format;
pub mod sink;
pub mod timestamp;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use log_level::Level;
pub use log_record::{ErrorDetails, LogRecord};
pub use logger::Logger;
pub use message_format::{format_message, PLACEHOLDER};
pub use sink::{shared, SharedSink, Sink};
pub use timestamp::TimestampFormat;
