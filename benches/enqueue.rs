use criterion::{Criterion, criterion_group, criterion_main};
use rotolog::{Handler, Level, Logger, RotateStrategy};
use std::hint::black_box;
use tempfile::TempDir;

fn bench_filtered(c: &mut Criterion) {
    let mut group = c.benchmark_group("Logger::log/filtered");

    let disabled = Logger::builder().handler(Handler::NONE).build();
    group.bench_function("no_handler", |b| {
        b.iter(|| disabled.log(black_box(Level::Error), black_box("dropped")));
    });

    let quiet = Logger::builder()
        .handler(Handler::STDOUT)
        .level(Level::Error)
        .build();
    group.bench_function("below_threshold", |b| {
        b.iter(|| quiet.log(black_box(Level::Debug), black_box("dropped")));
    });

    group.finish();
    disabled.close();
    quiet.close();
}

fn bench_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("Logger::log/file");
    let tmp = TempDir::new().unwrap();

    let hourly = Logger::builder()
        .handler(Handler::FILE)
        .dir(tmp.path().join("hour").to_string_lossy())
        .rotate(RotateStrategy::Hour)
        .build();
    group.bench_function("hour", |b| {
        b.iter(|| hourly.info(black_box("request served in 12ms")));
    });

    let sized = Logger::builder()
        .handler(Handler::FILE)
        .dir(tmp.path().join("size").to_string_lossy())
        .rotate(RotateStrategy::Size)
        .rotate_size(1 << 20)
        .build();
    group.bench_function("size_1MB", |b| {
        b.iter(|| sized.info(black_box("request served in 12ms")));
    });

    group.finish();
    for logger in [&hourly, &sized] {
        logger.close();
        logger.wait();
    }
}

criterion_group!(benches, bench_filtered, bench_file);
criterion_main!(benches);
