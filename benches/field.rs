use criterion::{criterion_group, criterion_main, Criterion, black_box};

use seashore::buoyancy::{BuoyancyParams, BuoyantBody};
use seashore::shore::noise::fbm1d;
use seashore::shore::{ShoreConfig, ShorelineField};

use glam::Vec3;

fn field() -> ShorelineField {
    ShorelineField::new(ShoreConfig::default(), 1234.5).expect("default config is valid")
}

fn bench_fbm_3_octaves(c: &mut Criterion) {
    c.bench_function("fbm1d_3_octaves", |b| {
        let mut x = 0.0f32;
        b.iter(|| {
            x += 0.013;
            fbm1d(black_box(x), black_box(7), 3)
        });
    });
}

fn bench_height_swash(c: &mut Criterion) {
    let field = field();

    c.bench_function("height_swash_zone", |b| {
        let mut t = 0.0f64;
        b.iter(|| {
            t += 1.0 / 60.0;
            field.height(black_box(Vec3::new(-2.0, 0.0, 3.0)), black_box(t))
        });
    });
}

fn bench_height_surf(c: &mut Criterion) {
    let field = field();

    c.bench_function("height_surf_zone", |b| {
        let mut t = 0.0f64;
        b.iter(|| {
            t += 1.0 / 60.0;
            field.height(black_box(Vec3::new(25.0, 0.0, 3.0)), black_box(t))
        });
    });
}

fn bench_height_open_sea(c: &mut Criterion) {
    let field = field();

    c.bench_function("height_open_sea", |b| {
        b.iter(|| field.height(black_box(Vec3::new(200.0, 0.0, 3.0)), black_box(12.5)));
    });
}

fn bench_surface_normal(c: &mut Criterion) {
    let field = field();

    c.bench_function("surface_normal_surf_zone", |b| {
        b.iter(|| field.surface_normal(black_box(Vec3::new(25.0, 0.0, 3.0)), black_box(12.5), 0.01));
    });
}

fn bench_transect_1000(c: &mut Criterion) {
    let field = field();
    let points: Vec<Vec3> = (0..1000)
        .map(|i| Vec3::new(-20.0 + i as f32 * 0.1, 0.0, 0.0))
        .collect();

    c.bench_function("sample_transect_1000", |b| {
        b.iter(|| field.sample_transect(black_box(&points), black_box(12.5)));
    });
}

fn bench_buoyant_bodies_100(c: &mut Criterion) {
    let field = field();

    c.bench_function("buoyant_bodies_100_frame", |b| {
        let mut bodies: Vec<BuoyantBody> = (0..100)
            .map(|i| BuoyantBody::new(BuoyancyParams::default(), Vec3::new(10.0 + i as f32, 0.5, 0.0)).expect("valid params"))
            .collect();
        let mut t = 0.0f64;
        b.iter(|| {
            t += 1.0 / 60.0;
            for body in &mut bodies {
                body.update(&field, t, 1.0 / 60.0, Vec3::ZERO);
            }
            black_box(bodies[0].position());
        });
    });
}

criterion_group!(
    benches,
    bench_fbm_3_octaves,
    bench_height_swash,
    bench_height_surf,
    bench_height_open_sea,
    bench_surface_normal,
    bench_transect_1000,
    bench_buoyant_bodies_100,
);
criterion_main!(benches);
