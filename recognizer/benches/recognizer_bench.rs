use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wordrec_recognizer::{Classifier, Config, Corpus, FeatureSequence, Recognizer, Vocabulary};

fn pseudo_utterance(center: f32, frames: usize, width: usize, seed: u64) -> FeatureSequence {
    let mut state = seed;
    (0..frames)
        .map(|_| {
            (0..width)
                .map(|_| {
                    state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
                    center + ((state >> 33) as f32) / (u32::MAX as f32) - 0.25
                })
                .collect()
        })
        .collect()
}

fn trained_corpus(per_word: usize) -> (Config, Corpus) {
    let cfg = Config {
        vocabulary: Vocabulary::new(["one", "two", "three"]),
        ..Config::default()
    };
    let mut rec = Recognizer::new(cfg.clone());
    for i in 0..per_word as u64 {
        rec.train(pseudo_utterance(0.0, 40, 13, 100 + i), "one");
        rec.train(pseudo_utterance(5.0, 40, 13, 200 + i), "two");
        rec.train(pseudo_utterance(10.0, 40, 13, 300 + i), "three");
    }
    (cfg, rec.into_corpus())
}

fn bench_evaluate(c: &mut Criterion) {
    let (cfg, corpus) = trained_corpus(10);
    let query = pseudo_utterance(5.0, 40, 13, 999);

    c.bench_function("classify_30_examples_40x13", |b| {
        b.iter(|| {
            let _ = black_box(Classifier::new(&cfg).evaluate(&corpus, black_box(&query)));
        });
    });
}

fn bench_classify_reinforcing(c: &mut Criterion) {
    c.bench_function("classify_reinforcing_30_examples", |b| {
        b.iter_with_setup(
            || {
                let (cfg, corpus) = trained_corpus(10);
                (Recognizer::with_corpus(cfg, corpus), pseudo_utterance(10.0, 40, 13, 777))
            },
            |(mut rec, query)| {
                let _ = black_box(rec.classify(query));
            },
        );
    });
}

criterion_group!(benches, bench_evaluate, bench_classify_reinforcing);
criterion_main!(benches);
