//! Criterion benchmarks for rust_kv_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_kv_logger::prelude::*;
use rust_kv_logger::record;
use rust_kv_logger::sinks::{json, logfmt, prefix};
use std::io;
use std::sync::Arc;
use std::thread;

fn sample_record() -> Record {
    record!("method", "GET", "path", "/api/users", "status", 200, "elapsed_ms", 12.5)
}

// ============================================================================
// Record Construction Benchmarks
// ============================================================================

fn bench_record_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("builder", |b| {
        b.iter(|| {
            let record = Record::new()
                .with("method", black_box("GET"))
                .with("status", black_box(200));
            black_box(record)
        });
    });

    group.bench_function("macro", |b| {
        b.iter(|| black_box(sample_record()));
    });

    group.finish();
}

// ============================================================================
// Encoding Benchmarks
// ============================================================================

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");
    group.throughput(Throughput::Elements(1));
    let record = sample_record();

    group.bench_function("logfmt", |b| {
        b.iter(|| black_box(logfmt::encode(black_box(&record))));
    });

    group.bench_function("prefix", |b| {
        b.iter(|| black_box(prefix::encode(black_box(&record))));
    });

    group.bench_function("json", |b| {
        b.iter(|| black_box(json::to_json(black_box(record.clone()))));
    });

    group.finish();
}

// ============================================================================
// Synchronous Wrapper Benchmarks
// ============================================================================

fn bench_sync_wrappers(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync_wrappers");
    group.throughput(Throughput::Elements(1));

    let swap = SwapLogger::new(NopSink);
    group.bench_function("swap_logger", |b| {
        b.iter(|| swap.emit(sample_record()));
    });

    let serializing = SerializingLogger::new(NopSink);
    group.bench_function("serializing_logger", |b| {
        b.iter(|| serializing.emit(sample_record()));
    });

    let logfmt_logger = LogfmtLogger::new(SyncWriter::new(io::sink()));
    group.bench_function("logfmt_sync_writer", |b| {
        b.iter(|| logfmt_logger.emit(sample_record()));
    });

    group.finish();
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let async_logger = AsyncLogger::new(NopSink, 10_000).expect("async logger");
    group.bench_function("async_emit", |b| {
        b.iter(|| async_logger.emit(sample_record()));
    });

    // Overflow is an expected outcome here; the cost of reporting it is measured too
    let nonblocking = NonblockingLogger::new(NopSink, 10_000).expect("nonblocking logger");
    group.bench_function("nonblocking_emit", |b| {
        b.iter(|| black_box(nonblocking.emit(sample_record()).is_ok()));
    });

    group.finish();
}

fn bench_concurrent_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_dispatch");
    const THREADS: usize = 4;
    const PER_THREAD: usize = 1_000;
    group.throughput(Throughput::Elements((THREADS * PER_THREAD) as u64));

    let logger = Arc::new(AsyncLogger::new(NopSink, 1_000).expect("async logger"));
    group.bench_function("async_4_threads", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    thread::spawn(move || {
                        for i in 0..PER_THREAD {
                            let _ = logger.emit(record!("seq", i));
                        }
                    })
                })
                .collect();
            for handle in handles {
                let _ = handle.join();
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_record_creation,
    bench_encoding,
    bench_sync_wrappers,
    bench_dispatch,
    bench_concurrent_dispatch,
);

criterion_main!(benches);
