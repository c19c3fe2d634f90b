use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordrec_dtw::{align, FeatureSequence};

fn pseudo_sequence(frames: usize, width: usize, seed: u64) -> FeatureSequence {
    let mut state = seed;
    (0..frames)
        .map(|_| {
            (0..width)
                .map(|_| {
                    state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
                    ((state >> 33) as f32) / (u32::MAX as f32) * 40.0 - 20.0
                })
                .collect()
        })
        .collect()
}

fn bench_align_40x40(c: &mut Criterion) {
    let a = pseudo_sequence(40, 13, 1);
    let b = pseudo_sequence(40, 13, 2);

    c.bench_function("dtw_align_40x40_13mfcc", |bench| {
        bench.iter(|| {
            let _ = black_box(align(black_box(&a), black_box(&b)));
        });
    });
}

fn bench_align_uneven(c: &mut Criterion) {
    let a = pseudo_sequence(70, 13, 3);
    let b = pseudo_sequence(25, 13, 4);

    c.bench_function("dtw_align_70x25_13mfcc", |bench| {
        bench.iter(|| {
            let _ = black_box(align(black_box(&a), black_box(&b)));
        });
    });
}

criterion_group!(benches, bench_align_40x40, bench_align_uneven);
criterion_main!(benches);
