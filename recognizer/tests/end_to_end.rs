use wordrec_recognizer::{
    gaussian_kernel, Config, Corpus, CorpusStore, FeatureSequence, FrameWindow, JsonFileStore,
    Recognizer, Rejection, Verdict, Vocabulary,
};

/// Five 2-coefficient frames wobbling around `(cx, cy)`.
fn cluster(cx: f32, cy: f32, seed: u32) -> FeatureSequence {
    let offsets = [0.0f32, 0.12, -0.08, 0.05, -0.1, 0.15, -0.03];
    (0..5)
        .map(|i| {
            let a = offsets[(seed as usize + i) % offsets.len()];
            let b = offsets[(seed as usize + 2 * i + 1) % offsets.len()];
            vec![cx + a, cy + b]
        })
        .collect()
}

fn scenario_config() -> Config {
    Config {
        vocabulary: Vocabulary::new(["one", "two"]),
        k: 3,
        min_variants: 2,
        min_confidence: 0.75,
        bandwidth: 10.0,
        ..Config::default()
    }
}

fn trained() -> Recognizer {
    let mut rec = Recognizer::new(scenario_config());
    for seed in 0..3 {
        assert!(rec.train(cluster(0.0, 0.0, seed), "one"));
        assert!(rec.train(cluster(10.0, 10.0, seed), "two"));
    }
    rec
}

#[test]
fn two_clusters_recognized_and_midpoint_rejected() {
    let mut rec = trained();

    let one = rec.classify(cluster(0.0, 0.0, 4)).unwrap().expect("near [0,0]");
    assert_eq!(one.label, "one");
    assert!(one.confidence >= 0.75, "confidence {}", one.confidence);

    let two = rec.classify(cluster(10.0, 10.0, 5)).unwrap().expect("near [10,10]");
    assert_eq!(two.label, "two");
    assert!(two.confidence >= 0.75, "confidence {}", two.confidence);

    let before = rec.corpus().len();
    assert_eq!(rec.classify(cluster(5.0, 5.0, 6)).unwrap(), None);
    assert_eq!(rec.corpus().len(), before);
}

#[test]
fn default_bandwidth_does_not_separate_toy_clusters() {
    let mut rec = Recognizer::with_corpus(
        Config {
            bandwidth: Config::default().bandwidth,
            ..scenario_config()
        },
        trained().into_corpus(),
    );
    let mid = rec.classify(cluster(5.0, 5.0, 6)).unwrap().expect("accepted at bandwidth 1000");
    assert!(mid.confidence > 0.99, "confidence {}", mid.confidence);
}

#[test]
fn two_entries_never_classify() {
    let mut rec = Recognizer::new(scenario_config());
    rec.train(cluster(0.0, 0.0, 0), "one");
    rec.train(cluster(0.0, 0.0, 1), "one");

    for input in [cluster(0.0, 0.0, 0), cluster(0.0, 0.0, 2), cluster(10.0, 10.0, 0)] {
        let verdict = rec.classify_verdict(input).unwrap();
        assert_eq!(
            verdict,
            Verdict::Rejected(Rejection::InsufficientCorpus { available: 2, k: 3 })
        );
    }
    assert_eq!(rec.corpus().len(), 2);
}

#[test]
fn empty_training_leaves_corpus_unchanged() {
    let mut rec = trained();
    assert!(!rec.train(FeatureSequence::new(), "one"));
    assert_eq!(rec.corpus().len(), 6);
    assert_eq!(rec.corpus().count("one"), 3);
}

#[test]
fn training_counts_only_grow_for_their_label() {
    let mut rec = trained();
    let two_before = rec.corpus().count("two");
    for seed in 10..14 {
        rec.train(cluster(0.0, 0.0, seed), "one");
    }
    assert_eq!(rec.corpus().count("one"), 3 + 4);
    assert_eq!(rec.corpus().count("two"), two_before);
}

#[test]
fn accepted_result_appends_exactly_one_example() {
    let mut rec = trained();
    let before = rec.corpus().len();
    let result = rec.classify(cluster(10.0, 10.0, 2)).unwrap().unwrap();
    assert_eq!(rec.corpus().len(), before + 1);

    let last = rec.corpus().examples().last().unwrap();
    assert_eq!(last.label(), result.label);
    assert_eq!(last.sequence(), &cluster(10.0, 10.0, 2));
}

#[test]
fn result_does_not_depend_on_corpus_order() {
    let forward = trained().into_corpus();
    let reversed = Corpus::from_examples(forward.examples().iter().rev().cloned());

    let query = cluster(0.0, 0.0, 3);
    let a = Recognizer::with_corpus(scenario_config(), forward)
        .classify(query.clone())
        .unwrap()
        .unwrap();
    let b = Recognizer::with_corpus(scenario_config(), reversed)
        .classify(query)
        .unwrap()
        .unwrap();
    assert_eq!(a.label, b.label);
    assert!((a.confidence - b.confidence).abs() < 1e-12);
}

#[test]
fn out_of_vocabulary_training_is_inert() {
    let mut rec = Recognizer::new(scenario_config());
    for seed in 0..5 {
        rec.train(cluster(0.0, 0.0, seed), "three");
    }
    let verdict = rec.classify_verdict(cluster(0.0, 0.0, 1)).unwrap();
    assert_eq!(
        verdict,
        Verdict::Rejected(Rejection::InsufficientCorpus { available: 0, k: 3 })
    );
    assert_eq!(rec.corpus().count("three"), 5);
}

#[test]
fn confidence_tracks_mean_distance() {
    let close = gaussian_kernel(1.0, 10.0);
    let far = gaussian_kernel(5.0, 10.0);
    assert!(close >= far);
}

#[test]
fn persisted_corpus_recognizes_after_reload() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("corpus.json"));
    store.save(trained().corpus()).unwrap();

    let mut rec = Recognizer::with_corpus(scenario_config(), store.load().unwrap());
    let result = rec.classify(cluster(10.0, 10.0, 1)).unwrap().unwrap();
    assert_eq!(result.label, "two");
}

#[test]
fn frame_window_feeds_recognizer() {
    // Frames of 4 samples; the extractor reports (mean, mean) so each
    // frame's features sit at the frame's DC level.
    let extract = |f: &[f32]| {
        let m = f.iter().sum::<f32>() / f.len() as f32;
        vec![m, m]
    };
    let utterance = |level: f32, jitter: f32| {
        let mut w = FrameWindow::new(4, 5);
        for i in 0..8 {
            let x = level + jitter * (i % 3) as f32;
            w.push(vec![x; 4]);
        }
        w.sequence(&extract)
    };

    let mut rec = Recognizer::new(scenario_config());
    for j in [0.0, 0.05, 0.1] {
        assert_eq!(utterance(0.0, j).len(), 5);
        rec.train(utterance(0.0, j), "one");
        rec.train(utterance(10.0, j), "two");
    }

    let result = rec.classify(utterance(10.0, 0.02)).unwrap().unwrap();
    assert_eq!(result.label, "two");
}
