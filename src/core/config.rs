//! Process-wide logger configuration
//!
//! Settings live in a single mutable [`LoggerConfig`] consulted when loggers
//! are constructed. Loggers capture a snapshot of the resolved settings at
//! construction time; changes apply to loggers created afterwards.
//!
//! Configuration is expected to stabilize before logging traffic starts, so
//! the global instance is guarded by a plain `RwLock` with no further
//! discipline. Settings can be mutated directly, applied from an
//! environment-style key/value map, or loaded from a JSON file.

use super::error::Result;
use super::log_level::Level;
use super::sink::{self, SharedSink, Sink};
use super::timestamp::TimestampFormat;
use crate::sinks::{ConsoleSink, FileSink};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

static GLOBAL_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Access the global configuration instance.
pub fn global() -> &'static RwLock<LoggerConfig> {
    &GLOBAL_CONFIG
}

/// Reset the global configuration to documented defaults.
///
/// Used at startup and between test scenarios; afterwards no trace of prior
/// settings remains (level, label overrides, sink, render options).
pub fn init() {
    *GLOBAL_CONFIG.write() = LoggerConfig::default();
}

pub struct LoggerConfig {
    /// Minimum level for loggers without a name-specific override
    pub default_level: Level,
    /// Whether lines start with a `[timestamp]` block
    pub show_timestamp: bool,
    /// Timestamp rendering for the line prefix
    pub timestamp_format: TimestampFormat,
    /// Render the short logger name (text after the last `.`) instead of the full name
    pub show_short_name: bool,
    /// Wrap the level label in brackets (`[INFO]` instead of `INFO`)
    pub level_in_brackets: bool,
    logger_levels: HashMap<String, Level>,
    level_labels: [Option<String>; 5],
    sink: SharedSink,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            default_level: Level::default(),
            show_timestamp: true,
            timestamp_format: TimestampFormat::default(),
            show_short_name: true,
            level_in_brackets: false,
            logger_levels: HashMap::new(),
            level_labels: Default::default(),
            sink: sink::shared(ConsoleSink::stdout()),
        }
    }
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all settings to documented defaults.
    pub fn init(&mut self) {
        *self = Self::default();
    }

    pub fn set_default_level(&mut self, level: Level) {
        self.default_level = level;
    }

    /// Set the minimum level for loggers whose dotted name starts with `name`.
    pub fn set_logger_level(&mut self, name: impl Into<String>, level: Level) {
        self.logger_levels.insert(name.into(), level);
    }

    /// Resolve the minimum level for a logger name.
    ///
    /// Looks for the longest configured dotted prefix of `name` ("a.b.c" is
    /// checked before "a.b" before "a"), falling back to the default level.
    #[must_use]
    pub fn resolve_level(&self, name: &str) -> Level {
        if let Some(level) = self.logger_levels.get(name) {
            return *level;
        }

        let mut prefix = name;
        while let Some(idx) = prefix.rfind('.') {
            prefix = &prefix[..idx];
            if let Some(level) = self.logger_levels.get(prefix) {
                return *level;
            }
        }

        self.default_level
    }

    /// Override the display label for one level (e.g. render WARN as "WXYZ").
    pub fn set_level_label(&mut self, level: Level, label: impl Into<String>) {
        self.level_labels[level as usize] = Some(label.into());
    }

    pub fn clear_level_labels(&mut self) {
        self.level_labels = Default::default();
    }

    /// The configured label override for `level`, if any.
    #[must_use]
    pub fn level_label(&self, level: Level) -> Option<&str> {
        self.level_labels[level as usize].as_deref()
    }

    pub(crate) fn labels(&self) -> &[Option<String>; 5] {
        &self.level_labels
    }

    /// Replace the active sink.
    pub fn set_sink(&mut self, sink: impl Sink + 'static) {
        self.sink = sink::shared(sink);
    }

    /// Replace the active sink with an existing shared handle.
    pub fn set_shared_sink(&mut self, sink: SharedSink) {
        self.sink = sink;
    }

    /// Handle to the active sink.
    #[must_use]
    pub fn sink(&self) -> SharedSink {
        SharedSink::clone(&self.sink)
    }

    /// Select the sink from a configuration value: `stdout`, `stderr`, or a
    /// file path.
    ///
    /// An unopenable file path leaves the current sink in place with a note
    /// on stderr; sink selection is a configuration concern and never fatal.
    pub fn select_sink(&mut self, choice: &str) {
        match choice {
            "stdout" => self.set_sink(ConsoleSink::stdout()),
            "stderr" => self.set_sink(ConsoleSink::stderr()),
            path => match FileSink::new(path) {
                Ok(file_sink) => self.set_sink(file_sink),
                Err(e) => eprintln!("[LOGGER ERROR] cannot open log file '{}': {}", path, e),
            },
        }
    }

    /// Apply settings from an environment-style key/value map.
    ///
    /// Recognized keys: `default_level`, `show_timestamp`, `timestamp_format`,
    /// `show_short_name`, `level_in_brackets`, `sink`, `label.<LEVEL>`, and
    /// `level.<logger.name>`. Unknown keys are ignored; unparseable values
    /// leave the current setting untouched.
    pub fn apply_map<K, V, I>(&mut self, entries: I)
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            let (key, value) = (key.as_ref(), value.as_ref());
            match key {
                "default_level" => self.default_level = Level::from_config_str(value),
                "show_timestamp" => {
                    if let Ok(flag) = value.parse() {
                        self.show_timestamp = flag;
                    }
                }
                "timestamp_format" => {
                    self.timestamp_format = TimestampFormat::from_config_str(value);
                }
                "show_short_name" => {
                    if let Ok(flag) = value.parse() {
                        self.show_short_name = flag;
                    }
                }
                "level_in_brackets" => {
                    if let Ok(flag) = value.parse() {
                        self.level_in_brackets = flag;
                    }
                }
                "sink" => self.select_sink(value),
                _ => {
                    if let Some(level_name) = key.strip_prefix("label.") {
                        if let Ok(level) = level_name.parse::<Level>() {
                            self.set_level_label(level, value);
                        }
                    } else if let Some(logger_name) = key.strip_prefix("level.") {
                        self.set_logger_level(logger_name, Level::from_config_str(value));
                    }
                }
            }
        }
    }

    /// Load settings from a JSON file.
    ///
    /// The file supplies the same settings as [`apply_map`](Self::apply_map),
    /// with label and per-logger overrides as nested objects. Values inside a
    /// parseable file follow the same never-fatal fallback rules; only an
    /// unreadable or malformed file is reported as an error.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let text = std::fs::read_to_string(path)?;
        let file: ConfigFile = serde_json::from_str(&text)?;
        self.apply_file(file);
        Ok(())
    }

    fn apply_file(&mut self, file: ConfigFile) {
        if let Some(level) = file.default_level {
            self.default_level = Level::from_config_str(&level);
        }
        if let Some(flag) = file.show_timestamp {
            self.show_timestamp = flag;
        }
        if let Some(format) = file.timestamp_format {
            self.timestamp_format = TimestampFormat::from_config_str(&format);
        }
        if let Some(flag) = file.show_short_name {
            self.show_short_name = flag;
        }
        if let Some(flag) = file.level_in_brackets {
            self.level_in_brackets = flag;
        }
        if let Some(choice) = file.sink {
            self.select_sink(&choice);
        }
        for (level_name, label) in file.labels {
            if let Ok(level) = level_name.parse::<Level>() {
                self.set_level_label(level, label);
            }
        }
        for (logger_name, level) in file.loggers {
            self.set_logger_level(logger_name, Level::from_config_str(&level));
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    default_level: Option<String>,
    show_timestamp: Option<bool>,
    timestamp_format: Option<String>,
    show_short_name: Option<bool>,
    level_in_brackets: Option<bool>,
    sink: Option<String>,
    labels: HashMap<String, String>,
    loggers: HashMap<String, String>,
}
