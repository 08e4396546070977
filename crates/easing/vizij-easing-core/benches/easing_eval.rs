use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vizij_easing_core::{in_out_elastic_unit, out_in_bounce_unit, EasingKind, ShapeParams};

const SAMPLES: usize = 1_000;

fn bench_direct(c: &mut Criterion) {
    c.bench_function("direct/in_out_elastic_f64", |b| {
        b.iter(|| {
            let mut acc = 0.0f64;
            for i in 0..=SAMPLES {
                let t = i as f64 / SAMPLES as f64;
                acc += in_out_elastic_unit(black_box(t)).unwrap_or_default();
            }
            acc
        })
    });

    c.bench_function("direct/out_in_bounce_f32", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for i in 0..=SAMPLES {
                let t = i as f32 / SAMPLES as f32;
                acc += out_in_bounce_unit(black_box(t)).unwrap_or_default();
            }
            acc
        })
    });
}

fn bench_catalog(c: &mut Criterion) {
    let params = ShapeParams::default();
    c.bench_function("catalog/all_kinds_f64", |b| {
        b.iter(|| {
            let mut acc = 0.0f64;
            for kind in EasingKind::ALL {
                for i in 0..=100 {
                    let t = i as f64 / 100.0;
                    acc += kind
                        .ease(black_box(t), 0.0, 1.0, 1.0, &params)
                        .unwrap_or_default();
                }
            }
            acc
        })
    });
}

criterion_group!(benches, bench_direct, bench_catalog);
criterion_main!(benches);
