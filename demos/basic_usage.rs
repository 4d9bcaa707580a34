//! Basic logger usage example
//!
//! Demonstrates threshold filtering, message templating, level label
//! overrides and the attached-error form.
//!
//! Run with: cargo run --example basic_usage

use simple_logger_system::core::config;
use simple_logger_system::prelude::*;

fn main() {
    println!("=== Simple Logger System - Basic Usage Example ===\n");

    // Configure the process-wide defaults before constructing loggers
    {
        let mut cfg = config::global().write();
        cfg.set_default_level(Level::Trace);
        cfg.set_sink(ConsoleSink::stdout());
    }

    let logger = Logger::new("demo.basic.Main");

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Threshold filtering (INFO and above):");
    config::global().write().set_default_level(Level::Info);
    let quieter = Logger::new("demo.basic.Quieter");
    quieter.trace("Trace message (hidden)");
    quieter.debug("Debug message (hidden)");
    quieter.info("Info message (visible)");

    println!("\n3. Message templating:");
    logger.info_fmt("User {} performed action: {}", &[&42, &"login"]);
    logger.info_fmt("Arguments may run out: {} {}", &[&"only-one"]);

    println!("\n4. Custom level label:");
    config::global().write().set_level_label(Level::Warn, "WXYZ");
    let labeled = Logger::new("demo.basic.Labeled");
    labeled.warn("Rendered with the override label");

    println!("\n5. Attached errors:");
    let error = LoggerError::other("disk full");
    logger.error_err("Failed to persist state", &error);

    println!("\n=== Example completed successfully! ===");
}
