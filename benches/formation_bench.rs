//! Per-frame cost of formation stepping, collision relaxation and the full
//! engine update.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tableau::animation::EasingFunction;
use tableau::collision::{resolve_collisions, CollisionParams};
use tableau::engine::DeckEngine;
use tableau::formation::FormationLibrary;
use tableau::layout::compute_grid_layout;
use tableau::mode::Mode;
use tableau::options::{FormationOptions, LayoutOptions, Options};

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::SmoothStep;
    let _ = c.bench_function("smoothstep_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))));
    });
}

fn formation_step_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("formation_step");
    let layout = LayoutOptions::default();
    let params = FormationOptions::default();

    for count in [52, 520, 5200] {
        let grid = compute_grid_layout(count, &layout);
        let mut rng = StdRng::seed_from_u64(0);
        let mut library =
            FormationLibrary::create(count, &grid.bounds(), &mut rng);
        for mode in [Mode::Float, Mode::Spiral, Mode::Fountain, Mode::Flip] {
            let _ = group.bench_function(format!("{mode}_{count}"), |b| {
                b.iter(|| {
                    let _ = black_box(library.step(
                        mode,
                        black_box(1.5),
                        &grid.positions,
                        &params,
                    ));
                });
            });
        }
    }
    group.finish();
}

fn collision_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("collision");
    let params = CollisionParams::default();

    for count in [52, 520, 5200] {
        let grid = compute_grid_layout(count, &LayoutOptions::default());
        let packed: Vec<Vec3> =
            grid.positions.iter().map(|p| *p * 0.9).collect();
        let mut rng = StdRng::seed_from_u64(0);
        let _ = group.bench_function(format!("{count}_cards"), |b| {
            b.iter(|| {
                let mut positions = packed.clone();
                black_box(resolve_collisions(
                    &mut positions,
                    0.7,
                    &params,
                    &mut rng,
                ))
            });
        });
    }
    group.finish();
}

fn engine_update_benchmark(c: &mut Criterion) {
    let mut engine = DeckEngine::with_rng(
        52,
        Options::default(),
        Mode::Float,
        StdRng::seed_from_u64(0),
    );
    let mut time = 0.0f32;
    let _ = c.bench_function("engine_update_float_52", |b| {
        b.iter(|| {
            time += 1.0 / 60.0;
            engine.update(black_box(time));
        });
    });
}

criterion_group!(
    benches,
    easing_benchmark,
    formation_step_benchmark,
    collision_benchmark,
    engine_update_benchmark
);
criterion_main!(benches);
