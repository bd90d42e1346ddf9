use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use geocircle::hash::{self, Direction, Quadrant};
use geocircle::{Config, HashCircle, Point};

fn sample_points(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let lon = -179.0 + ((i * 37) % 358) as f64 + 0.123;
            let lat = -80.0 + ((i * 53) % 160) as f64 + 0.456;
            Point::new(lon, lat)
        })
        .collect()
}

fn benchmark_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let points = sample_points(1000);

    for precision in [5, 8, 12] {
        group.bench_with_input(
            BenchmarkId::new("encode", precision),
            &precision,
            |b, &precision| {
                let mut i = 0;
                b.iter(|| {
                    let point = &points[i % points.len()];
                    i += 1;
                    hash::encode(black_box(point), precision).unwrap()
                })
            },
        );
    }

    let codes: Vec<String> = points
        .iter()
        .map(|p| hash::encode(p, 12).unwrap())
        .collect();

    group.bench_function("decode_box", |b| {
        let mut i = 0;
        b.iter(|| {
            let code = &codes[i % codes.len()];
            i += 1;
            hash::decode_box(black_box(code)).unwrap()
        })
    });

    group.bench_function("increment_with_carry", |b| {
        b.iter(|| hash::increment(black_box("dqcjqczzzzzz")).unwrap())
    });

    group.finish();
}

fn benchmark_navigation(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    group.bench_function("neighbor_north", |b| {
        b.iter(|| hash::neighbor(black_box("dqcjqcr8yqxd"), Direction::North).unwrap())
    });

    // border digits at every level force a full carry
    group.bench_function("neighbor_east_wrap", |b| {
        b.iter(|| hash::neighbor(black_box("zzzzzzzzzzzz"), Direction::East).unwrap())
    });

    group.bench_function("neighbors", |b| {
        b.iter(|| hash::neighbors(black_box("u26q7454172n")).unwrap())
    });

    group.bench_function("halve_and_quarter", |b| {
        b.iter(|| {
            let half = hash::halve(black_box("9q8yy"), Direction::West).unwrap();
            let quarter = hash::quarter(black_box("9q8yy"), Quadrant::NorthEast).unwrap();
            (half, quarter)
        })
    });

    group.finish();
}

fn benchmark_circles(c: &mut Criterion) {
    let mut group = c.benchmark_group("circles");
    let washington = Point::new(-77.036541, 38.898632);
    let config = Config::default();

    for radius_km in [1.0, 10.0, 100.0] {
        group.bench_with_input(
            BenchmarkId::new("covering", radius_km),
            &radius_km,
            |b, &radius_km| {
                b.iter(|| HashCircle::covering(black_box(&washington), radius_km, &config).unwrap())
            },
        );
    }

    let circle = HashCircle::covering(&washington, 10.0, &config).unwrap();
    let probes = sample_points(100);
    group.bench_function("region_contains", |b| {
        let mut i = 0;
        b.iter(|| {
            let probe = &probes[i % probes.len()];
            i += 1;
            circle.contains(black_box(probe)).unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_codec,
    benchmark_navigation,
    benchmark_circles
);
criterion_main!(benches);
