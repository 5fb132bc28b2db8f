//! Criterion benchmarks for game_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use game_logger::core::formatter::{render_console, render_file};
use game_logger::prelude::*;
use game_logger::origin;

// ============================================================================
// Caller-side Cost Benchmarks
// ============================================================================

fn bench_enqueue(c: &mut Criterion) {
    let mut group = c.benchmark_group("enqueue");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder()
        .console_writer(std::io::sink())
        .min_level(LogLevel::Trace)
        .build();

    group.bench_function("console_record", |b| {
        b.iter(|| {
            logger.log(LogLevel::Info, origin!(), format_args!("frame {}", black_box(42)));
        });
    });

    group.bench_function("filtered_record", |b| {
        logger.set_level(LogLevel::Error);
        b.iter(|| {
            logger.log(LogLevel::Debug, origin!(), format_args!("frame {}", black_box(42)));
        });
        logger.set_level(LogLevel::Trace);
    });

    group.finish();
    logger.shutdown();
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    group.throughput(Throughput::Elements(1));

    let origin = Origin::new("/home/dev/game/src/world/spawn.rs", 42, "game::world::spawn");

    group.bench_function("console_form", |b| {
        b.iter(|| render_console(LogLevel::Warn, black_box(&origin), format_args!("hp {}", 7)));
    });

    group.bench_function("file_form", |b| {
        b.iter(|| {
            render_file(
                LogLevel::Warn,
                black_box(&origin),
                format_args!("hp {}", 7),
                "Sun Oct 18 09:05:03 2026",
            )
        });
    });

    group.bench_function("file_form_with_clock", |b| {
        let formatter = RecordFormatter::default();
        b.iter(|| {
            formatter.render(
                LogLevel::Warn,
                black_box(&origin),
                format_args!("hp {}", 7),
                Destination::File,
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_enqueue, bench_rendering);
criterion_main!(benches);
