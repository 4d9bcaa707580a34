//! Main logger implementation
//!
//! A logger is constructed by name and captures its settings from the shared
//! configuration at construction time. Every call runs the same synchronous
//! pipeline on the calling thread: threshold check, record construction, line
//! rendering, sink write. Logging calls never return errors and never panic;
//! a failing application because of a failing logger is the one outcome this
//! crate exists to rule out.

use super::{
    config::{self, LoggerConfig},
    log_level::Level,
    log_record::{ErrorDetails, LogRecord},
    message_format::format_message,
    sink::SharedSink,
    timestamp::TimestampFormat,
};
use std::fmt::{Display, Write as _};

/// Facade-facing logger handle.
///
/// # Example
///
/// ```
/// use simple_logger_system::prelude::*;
///
/// let logger = Logger::new("app.server");
/// logger.info("Server started");
/// logger.info_fmt("Listening on port {}", &[&8080]);
/// ```
pub struct Logger {
    name: String,
    short_name: String,
    min_level: Level,
    show_timestamp: bool,
    timestamp_format: TimestampFormat,
    show_short_name: bool,
    level_in_brackets: bool,
    level_labels: [Option<String>; 5],
    sink: SharedSink,
}

impl Logger {
    /// Construct a logger by name, capturing a snapshot of the global
    /// configuration.
    ///
    /// Configuration changes made after this call do not affect the returned
    /// instance.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, &config::global().read())
    }

    /// Construct a logger against an explicit configuration instance.
    ///
    /// This is the dependency-injection seam: tests and embedders that avoid
    /// process-wide state pass their own resolved [`LoggerConfig`] here.
    #[must_use]
    pub fn with_config(name: impl Into<String>, config: &LoggerConfig) -> Self {
        let name = name.into();
        let short_name = name.rsplit('.').next().unwrap_or(&name).to_string();
        let min_level = config.resolve_level(&name);

        Self {
            short_name,
            min_level,
            show_timestamp: config.show_timestamp,
            timestamp_format: config.timestamp_format.clone(),
            show_short_name: config.show_short_name,
            level_in_brackets: config.level_in_brackets,
            level_labels: config.labels().clone(),
            sink: config.sink(),
            name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn min_level(&self) -> Level {
        self.min_level
    }

    /// Whether a call at `level` would produce output.
    #[inline]
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    #[inline]
    pub fn is_trace_enabled(&self) -> bool {
        self.is_enabled(Level::Trace)
    }

    #[inline]
    pub fn is_debug_enabled(&self) -> bool {
        self.is_enabled(Level::Debug)
    }

    #[inline]
    pub fn is_info_enabled(&self) -> bool {
        self.is_enabled(Level::Info)
    }

    #[inline]
    pub fn is_warn_enabled(&self) -> bool {
        self.is_enabled(Level::Warn)
    }

    #[inline]
    pub fn is_error_enabled(&self) -> bool {
        self.is_enabled(Level::Error)
    }

    /// Log a plain message at `level`.
    pub fn log(&self, level: Level, message: &str) {
        if !self.is_enabled(level) {
            return;
        }
        self.emit(LogRecord::new(self.display_name(), level, message));
    }

    /// Log a `{}` template substituted with `args` at `level`.
    pub fn log_fmt(&self, level: Level, template: &str, args: &[&dyn Display]) {
        if !self.is_enabled(level) {
            return;
        }
        let message = format_message(template, args);
        self.emit(LogRecord::new(self.display_name(), level, &message));
    }

    /// Log a message with an attached error at `level`.
    ///
    /// The rendered line is followed by an error trailer: the error's type
    /// name and message, then one `Caused by:` line per entry in its
    /// `source()` chain.
    pub fn log_err<E>(&self, level: Level, message: &str, error: &E)
    where
        E: std::error::Error + ?Sized,
    {
        if !self.is_enabled(level) {
            return;
        }
        let record = LogRecord::new(self.display_name(), level, message)
            .with_error(ErrorDetails::from_error(error));
        self.emit(record);
    }

    #[inline]
    pub fn trace(&self, message: &str) {
        self.log(Level::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    #[inline]
    pub fn trace_fmt(&self, template: &str, args: &[&dyn Display]) {
        self.log_fmt(Level::Trace, template, args);
    }

    #[inline]
    pub fn debug_fmt(&self, template: &str, args: &[&dyn Display]) {
        self.log_fmt(Level::Debug, template, args);
    }

    #[inline]
    pub fn info_fmt(&self, template: &str, args: &[&dyn Display]) {
        self.log_fmt(Level::Info, template, args);
    }

    #[inline]
    pub fn warn_fmt(&self, template: &str, args: &[&dyn Display]) {
        self.log_fmt(Level::Warn, template, args);
    }

    #[inline]
    pub fn error_fmt(&self, template: &str, args: &[&dyn Display]) {
        self.log_fmt(Level::Error, template, args);
    }

    #[inline]
    pub fn trace_err<E: std::error::Error + ?Sized>(&self, message: &str, error: &E) {
        self.log_err(Level::Trace, message, error);
    }

    #[inline]
    pub fn debug_err<E: std::error::Error + ?Sized>(&self, message: &str, error: &E) {
        self.log_err(Level::Debug, message, error);
    }

    #[inline]
    pub fn info_err<E: std::error::Error + ?Sized>(&self, message: &str, error: &E) {
        self.log_err(Level::Info, message, error);
    }

    #[inline]
    pub fn warn_err<E: std::error::Error + ?Sized>(&self, message: &str, error: &E) {
        self.log_err(Level::Warn, message, error);
    }

    #[inline]
    pub fn error_err<E: std::error::Error + ?Sized>(&self, message: &str, error: &E) {
        self.log_err(Level::Error, message, error);
    }

    fn display_name(&self) -> &str {
        if self.show_short_name {
            &self.short_name
        } else {
            &self.name
        }
    }

    fn level_label(&self, level: Level) -> &str {
        self.level_labels[level as usize]
            .as_deref()
            .unwrap_or_else(|| level.to_str())
    }

    /// Render the formatted line: `[timestamp] LEVEL loggerName - message`,
    /// with the error trailer appended when one is attached.
    fn render(&self, record: &LogRecord<'_>) -> String {
        let mut line = String::with_capacity(record.message.len() + 48);

        if self.show_timestamp {
            let _ = write!(
                line,
                "[{}] ",
                self.timestamp_format.format(&record.timestamp)
            );
        }

        let label = self.level_label(record.level);
        if self.level_in_brackets {
            let _ = write!(line, "[{}] ", label);
        } else {
            let _ = write!(line, "{} ", label);
        }

        let _ = write!(line, "{} - {}", record.logger_name, record.message);

        if let Some(ref error) = record.error {
            let _ = write!(line, "\n{}: {}", error.type_name, error.message);
            for cause in &error.chain {
                let _ = write!(line, "\nCaused by: {}", cause);
            }
        }

        line
    }

    fn emit(&self, record: LogRecord<'_>) {
        let line = self.render(&record);
        let mut sink = self.sink.lock();
        if let Err(e) = sink.write_line(record.level, &line) {
            eprintln!("[LOGGER ERROR] Sink '{}' write failed: {}", sink.name(), e);
        }
    }
}
