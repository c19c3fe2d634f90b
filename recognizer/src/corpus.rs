use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use wordrec_dtw::FeatureSequence;

/// A labeled utterance. Immutable once created.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    label: String,
    sequence: FeatureSequence,
}

impl TrainingExample {
    pub fn new(label: impl Into<String>, sequence: FeatureSequence) -> Self {
        Self {
            label: label.into(),
            sequence,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn sequence(&self) -> &FeatureSequence {
        &self.sequence
    }
}

impl fmt::Debug for TrainingExample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrainingExample")
            .field("label", &self.label)
            .field("frames", &self.sequence.len())
            .finish()
    }
}

/// Append-only store of labeled utterances.
///
/// The per-label count always equals the number of examples carrying that
/// label: the only way in is [`Corpus::push`], which updates both.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    examples: Vec<TrainingExample>,
    counts: HashMap<String, usize>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a corpus from existing examples, in order.
    pub fn from_examples<I: IntoIterator<Item = TrainingExample>>(examples: I) -> Self {
        let mut corpus = Self::new();
        for ex in examples {
            corpus.push(ex);
        }
        corpus
    }

    pub(crate) fn push(&mut self, example: TrainingExample) {
        *self.counts.entry(example.label.clone()).or_insert(0) += 1;
        self.examples.push(example);
    }

    /// Number of examples carrying `label`.
    pub fn count(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Label counts, in no particular order.
    pub fn counts(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(l, &c)| (l.as_str(), c))
    }

    /// Distinct labels, sorted.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.counts.keys().map(|l| l.as_str()).collect();
        labels.sort_unstable();
        labels
    }

    pub fn examples(&self) -> &[TrainingExample] {
        &self.examples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrainingExample> {
        self.examples.iter()
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn into_examples(self) -> Vec<TrainingExample> {
        self.examples
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a TrainingExample;
    type IntoIter = std::slice::Iter<'a, TrainingExample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
