//! Criterion benchmarks for simple_logger_system

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use simple_logger_system::prelude::*;

/// Sink that discards every line; benchmarks measure the pipeline, not IO.
struct NullSink;

impl Sink for NullSink {
    fn write_line(&mut self, _level: Level, line: &str) -> Result<()> {
        black_box(line);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

fn null_logger(level: Level) -> Logger {
    let mut config = LoggerConfig::new();
    config.set_default_level(level);
    config.set_sink(NullSink);
    Logger::with_config("bench.pipeline.Logger", &config)
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    let config = LoggerConfig::new();

    group.bench_function("with_config", |b| {
        b.iter(|| {
            let logger = Logger::with_config(black_box("bench.created.Logger"), &config);
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_disabled_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("disabled_logging");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger(Level::Error);

    group.bench_function("plain", |b| {
        b.iter(|| {
            logger.debug(black_box("Dropped message"));
        });
    });

    group.bench_function("templated", |b| {
        b.iter(|| {
            logger.debug_fmt(black_box("Dropped {} message"), &[&42]);
        });
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_enabled_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("enabled_logging");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger(Level::Trace);

    group.bench_function("plain", |b| {
        b.iter(|| {
            logger.info(black_box("Info message"));
        });
    });

    group.bench_function("templated", |b| {
        b.iter(|| {
            logger.info_fmt(black_box("User {} performed {}"), &[&42, &"login"]);
        });
    });

    group.bench_function("with_error", |b| {
        let error = LoggerError::other("bench error");
        b.iter(|| {
            logger.error_err(black_box("Operation failed"), &error);
        });
    });

    group.finish();
}

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn bench_message_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_formatting");
    group.throughput(Throughput::Elements(1));

    group.bench_function("two_placeholders", |b| {
        b.iter(|| {
            black_box(format_message(
                black_box("User {} performed action: {}"),
                &[&42, &"login"],
            ))
        });
    });

    group.bench_function("no_placeholders", |b| {
        b.iter(|| black_box(format_message(black_box("Plain message with no holes"), &[])));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_disabled_logging,
    bench_enabled_logging,
    bench_message_formatting
);
criterion_main!(benches);
