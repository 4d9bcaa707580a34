//! Console sink implementation

use crate::core::{Level, Result, Sink};
use std::io::{self, Write};

/// Which standard stream the console sink writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleTarget {
    Stdout,
    Stderr,
}

pub struct ConsoleSink {
    target: ConsoleTarget,
    #[cfg_attr(not(feature = "console"), allow(dead_code))]
    use_colors: bool,
}

impl ConsoleSink {
    /// Create a sink writing to standard output.
    pub fn stdout() -> Self {
        Self {
            target: ConsoleTarget::Stdout,
            use_colors: true,
        }
    }

    /// Create a sink writing to standard error.
    pub fn stderr() -> Self {
        Self {
            target: ConsoleTarget::Stderr,
            use_colors: true,
        }
    }

    /// Enable or disable colored output.
    ///
    /// Colors are applied per line based on the record's level. Has no effect
    /// when the `console` feature is disabled.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }

    #[cfg(feature = "console")]
    fn render(&self, level: Level, line: &str) -> String {
        use colored::Colorize;
        if self.use_colors {
            line.color(level.color_code()).to_string()
        } else {
            line.to_string()
        }
    }

    #[cfg(not(feature = "console"))]
    fn render(&self, _level: Level, line: &str) -> String {
        line.to_string()
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Sink for ConsoleSink {
    fn write_line(&mut self, level: Level, line: &str) -> Result<()> {
        let rendered = self.render(level, line);
        match self.target {
            ConsoleTarget::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(rendered.as_bytes())?;
                out.write_all(b"\n")?;
            }
            ConsoleTarget::Stderr => {
                let mut out = io::stderr().lock();
                out.write_all(rendered.as_bytes())?;
                out.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.target {
            ConsoleTarget::Stdout => io::stdout().flush()?,
            ConsoleTarget::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.target {
            ConsoleTarget::Stdout => "stdout",
            ConsoleTarget::Stderr => "stderr",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets() {
        assert_eq!(ConsoleSink::stdout().target(), ConsoleTarget::Stdout);
        assert_eq!(ConsoleSink::stderr().target(), ConsoleTarget::Stderr);
        assert_eq!(ConsoleSink::default().target(), ConsoleTarget::Stdout);
    }

    #[test]
    fn test_names() {
        assert_eq!(ConsoleSink::stdout().name(), "stdout");
        assert_eq!(ConsoleSink::stderr().name(), "stderr");
    }

    #[test]
    fn test_write_does_not_fail() {
        let mut sink = ConsoleSink::stdout().with_colors(false);
        sink.write_line(Level::Info, "console sink test line")
            .expect("stdout write");
        sink.flush().expect("stdout flush");
    }
}
