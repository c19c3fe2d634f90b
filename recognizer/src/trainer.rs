use tracing::{debug, warn};
use wordrec_dtw::FeatureSequence;

use crate::corpus::{Corpus, TrainingExample};

/// Adds a supervised example to the corpus.
///
/// Returns false, leaving the corpus untouched, if `sequence` is empty.
/// The label is not checked against the vocabulary: out-of-vocabulary
/// examples are stored but never compared.
pub(crate) fn train(corpus: &mut Corpus, sequence: FeatureSequence, label: &str) -> bool {
    if sequence.is_empty() {
        warn!(label = %label, "train: empty feature sequence rejected");
        return false;
    }

    let frames = sequence.len();
    corpus.push(TrainingExample::new(label, sequence));
    debug!(
        label = %label,
        frames,
        count = corpus.count(label),
        corpus = corpus.len(),
        "train: example saved"
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(n: usize) -> FeatureSequence {
        (0..n).map(|i| vec![i as f32, 0.0]).collect()
    }

    #[test]
    fn train_appends_and_counts() {
        let mut corpus = Corpus::new();
        assert!(train(&mut corpus, seq(3), "one"));
        assert!(train(&mut corpus, seq(4), "one"));
        assert!(train(&mut corpus, seq(2), "two"));

        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.count("one"), 2);
        assert_eq!(corpus.count("two"), 1);
    }

    #[test]
    fn train_n_times_increments_by_n() {
        let mut corpus = Corpus::new();
        train(&mut corpus, seq(2), "two");
        for _ in 0..5 {
            assert!(train(&mut corpus, seq(2), "one"));
        }
        assert_eq!(corpus.count("one"), 5);
        assert_eq!(corpus.count("two"), 1);
    }

    #[test]
    fn train_empty_is_rejected() {
        let mut corpus = Corpus::new();
        train(&mut corpus, seq(1), "one");

        assert!(!train(&mut corpus, FeatureSequence::new(), "one"));
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.count("one"), 1);
    }

    #[test]
    fn train_out_of_vocabulary_label() {
        let mut corpus = Corpus::new();
        assert!(train(&mut corpus, seq(2), "banana"));
        assert_eq!(corpus.count("banana"), 1);
    }
}
