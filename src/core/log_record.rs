//! Log record structure
//!
//! A record is built per log call, rendered into a single line, and discarded.
//! It is never queued or persisted, so it borrows the logger's display name
//! instead of owning a copy.

use super::log_level::Level;
use chrono::{DateTime, Utc};

/// Sanitize a message to prevent log injection attacks
///
/// Replaces newlines, carriage returns, and tabs with escape sequences
/// to prevent attackers from injecting fake log entries.
pub(crate) fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Details of an error attached to a log call.
///
/// Captures the concrete error type name and the full `source()` chain at the
/// call site, so the rendered trailer does not borrow from the error.
#[derive(Debug, Clone)]
pub struct ErrorDetails {
    pub type_name: &'static str,
    pub message: String,
    pub chain: Vec<String>,
}

impl ErrorDetails {
    pub fn from_error<E: std::error::Error + ?Sized>(error: &E) -> Self {
        let mut chain = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            chain.push(sanitize_message(&cause.to_string()));
            source = cause.source();
        }

        Self {
            type_name: std::any::type_name::<E>(),
            message: sanitize_message(&error.to_string()),
            chain,
        }
    }
}

#[derive(Debug)]
pub struct LogRecord<'a> {
    pub logger_name: &'a str,
    pub level: Level,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub error: Option<ErrorDetails>,
}

impl<'a> LogRecord<'a> {
    pub fn new(logger_name: &'a str, level: Level, message: &str) -> Self {
        Self {
            logger_name,
            level,
            message: sanitize_message(message),
            timestamp: Utc::now(),
            error: None,
        }
    }

    pub fn with_error(mut self, details: ErrorDetails) -> Self {
        self.error = Some(details);
        self
    }
}
