use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use escape_field::{
    BandedPalette, EscapeFieldRequest, Schedule, ScheduleKind, WorkerPoolConfig,
    compute_escape_field, generate_fractal_serial, generate_raster_buffer,
};
use std::num::NonZeroUsize;

fn request() -> EscapeFieldRequest {
    EscapeFieldRequest {
        width: 400,
        height: 300,
        rmin: -2.0,
        rmax: 1.0,
        imin: -1.5,
        imax: 1.5,
        max_iterations: 2000,
    }
}

fn bench_escape_field(c: &mut Criterion) {
    let request = request();
    let mut group = c.benchmark_group("escape_field");
    group.sample_size(10);

    let algorithm = request.algorithm().unwrap();
    group.bench_function("serial", |b| {
        b.iter(|| generate_fractal_serial(algorithm.size(), black_box(&algorithm)).unwrap())
    });

    for schedule in [
        Schedule::default(),
        Schedule::new(ScheduleKind::Dynamic, None),
        Schedule::new(ScheduleKind::Dynamic, NonZeroUsize::new(8)),
    ] {
        let pool = WorkerPoolConfig::new(None, schedule).build_pool().unwrap();

        group.bench_with_input(
            BenchmarkId::new("rayon", schedule),
            &schedule,
            |b, &schedule| {
                b.iter(|| compute_escape_field(black_box(&request), &pool, schedule).unwrap())
            },
        );
    }

    group.finish();
}

fn bench_colour_mapping(c: &mut Criterion) {
    let pool = WorkerPoolConfig::default().build_pool().unwrap();
    let grid = compute_escape_field(&request(), &pool, Schedule::default()).unwrap();

    c.bench_function("colour_mapping", |b| {
        b.iter(|| generate_raster_buffer(black_box(&grid), &BandedPalette, &pool).unwrap())
    });
}

criterion_group!(benches, bench_escape_field, bench_colour_mapping);
criterion_main!(benches);
