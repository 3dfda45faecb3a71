//! Criterion benchmarks for ns_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ns_logger::core::format::{self, Dialect};
use ns_logger::core::Renderer;
use ns_logger::prelude::*;
use serde_json::json;

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.throughput(Throughput::Elements(1));

    let plain = Renderer::new(&LoggerConfig::resolve(
        &LoggerOptions::new().colors(false).namespace("bench").ns_width(8),
    ))
    .expect("valid config");
    let colored = Renderer::new(&LoggerConfig::resolve(
        &LoggerOptions::new().namespace("bench").ns_width(8),
    ))
    .expect("valid config");
    let args = [LogArg::from("world"), LogArg::from(42)];

    group.bench_function("plain", |b| {
        b.iter(|| plain.render(LogLevel::Info, black_box("hello %s #%d"), &args, None));
    });

    group.bench_function("colored", |b| {
        b.iter(|| colored.render(LogLevel::Info, black_box("hello %s #%d"), &args, None));
    });

    group.bench_function("event", |b| {
        b.iter(|| colored.render(LogLevel::Event, black_box("hello %s #%d"), &args, Some("ID")));
    });

    group.bench_function("suppressed_debug", |b| {
        b.iter(|| plain.render(LogLevel::Debug, black_box("hello %s #%d"), &args, None));
    });

    group.finish();
}

// ============================================================================
// Substitution Benchmarks
// ============================================================================

fn bench_substitution(c: &mut Criterion) {
    let mut group = c.benchmark_group("substitution");
    group.throughput(Throughput::Elements(1));

    let scalars = [LogArg::from("text"), LogArg::from(-7), LogArg::from(3.25)];
    let object = [LogArg::from(json!({"user": "alice", "roles": ["admin", "ops"]}))];

    group.bench_function("scalars", |b| {
        b.iter(|| format::substitute(black_box("%s %05d %.2f"), &scalars, Dialect::File));
    });

    group.bench_function("object_compact", |b| {
        b.iter(|| format::substitute(black_box("obj %j"), &object, Dialect::File));
    });

    group.bench_function("object_pretty", |b| {
        b.iter(|| format::substitute(black_box("obj %O"), &object, Dialect::Console));
    });

    group.bench_function("normalize_for_file", |b| {
        b.iter(|| format::normalize_for_file(black_box("a %O b %o c %J d %s")));
    });

    group.finish();
}

// ============================================================================
// End-to-end Benchmarks
// ============================================================================

fn bench_file_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_logging");
    group.throughput(Throughput::Elements(1));

    let temp_dir = tempfile::TempDir::new().expect("temp dir");
    let registry = Registry::new();
    let log = registry
        .acquire(
            LoggerOptions::new()
                .directory(temp_dir.path())
                .namespace("bench")
                .to_console(false),
        )
        .expect("acquire");

    group.bench_function("info", |b| {
        b.iter(|| log.info(black_box("request %d served"), &[LogArg::from(200)]));
    });

    group.bench_function("event", |b| {
        b.iter(|| log.event(Some("REQ"), black_box("request %d served"), &[LogArg::from(200)]));
    });

    group.bench_function("reacquire", |b| {
        b.iter(|| {
            registry.acquire(
                LoggerOptions::new()
                    .directory(temp_dir.path())
                    .namespace("bench")
                    .to_console(false),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_substitution, bench_file_logging);
criterion_main!(benches);
