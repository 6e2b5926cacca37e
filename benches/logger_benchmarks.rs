//! Criterion benchmarks for conlog

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use conlog::prelude::*;

/// Sink that discards everything, isolating queue and formatting cost.
struct NullSink;

impl Sink for NullSink {
    fn write_line(&mut self, _line: &str) -> Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

fn bench_format_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_line");
    group.throughput(Throughput::Elements(1));

    group.bench_function("no_args", |b| {
        b.iter(|| format_line(Severity::Info, black_box("plain message"), &[]));
    });

    group.bench_function("interpolated", |b| {
        let args = [LogValue::from("alice"), LogValue::from(42)];
        b.iter(|| format_line(Severity::Warn, black_box("user {} has {} items"), &args));
    });

    group.bench_function("appended", |b| {
        let args = [LogValue::from("retry"), LogValue::from(3)];
        b.iter(|| format_line(Severity::Error, black_box("careful"), &args));
    });

    group.finish();
}

fn bench_enqueue(c: &mut Criterion) {
    let mut group = c.benchmark_group("enqueue");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder().capacity(100_000).sink(NullSink).build();

    group.bench_function("info", |b| {
        b.iter(|| logger.info(black_box("benchmark message"), &[]));
    });

    group.bench_function("info_with_args", |b| {
        let args = [LogValue::from(7u64)];
        b.iter(|| logger.info(black_box("benchmark message {}"), &args));
    });

    group.finish();
    logger.shutdown();
}

fn bench_overload_drop(c: &mut Criterion) {
    let mut group = c.benchmark_group("overload_drop");
    group.throughput(Throughput::Elements(1));

    // Tiny queue with no consumer progress to speak of: measures the cost
    // of the try-send-and-drop path.
    struct BlockedSink;

    impl Sink for BlockedSink {
        fn write_line(&mut self, _line: &str) -> Result<()> {
            std::thread::sleep(std::time::Duration::from_millis(50));
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "blocked"
        }
    }

    let logger = Logger::builder().capacity(2).sink(BlockedSink).build();
    // Prime the queue to full.
    for _ in 0..10 {
        logger.info("primer", &[]);
    }

    group.bench_function("dropped_send", |b| {
        b.iter(|| logger.info(black_box("dropped message"), &[]));
    });

    group.finish();
    logger.shutdown();
}

criterion_group!(
    benches,
    bench_format_line,
    bench_enqueue,
    bench_overload_drop
);
criterion_main!(benches);
