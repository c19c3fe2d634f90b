use std::collections::HashMap;
use std::fmt;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, warn};
use wordrec_dtw::{align, DtwError, FeatureSequence};

use crate::config::Config;
use crate::corpus::Corpus;
use crate::RecognizerError;

/// Distances below this vote as if they were this far away, so an exact
/// match gets the largest finite weight instead of an infinite one.
pub const ZERO_DISTANCE_FLOOR: f64 = 1e-9;

/// Distance from the input to one corpus entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceSample<'a> {
    pub label: &'a str,
    pub distance: f64,
}

/// An accepted recognition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub label: String,
    /// Gaussian kernel of the label's mean corpus distance, in `[0, 1]`.
    pub confidence: f64,
    pub process_time_ms: f64,
}

/// Why an utterance was not recognized.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// The input had no frames.
    EmptySequence,
    /// Fewer than `k` in-vocabulary examples could be compared.
    InsufficientCorpus { available: usize, k: usize },
    /// Every one of the k nearest neighbors was beyond the distance cutoff.
    NoVotes,
    /// The winning label has too few examples in the corpus.
    InsufficientVariants { label: String, count: usize, min: usize },
    /// The winning label's confidence is below the threshold.
    LowConfidence { label: String, confidence: f64, min: f64 },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::EmptySequence => write!(f, "empty feature sequence"),
            Rejection::InsufficientCorpus { available, k } => {
                write!(f, "insufficient corpus: {available} comparable examples, need {k}")
            }
            Rejection::NoVotes => write!(f, "no neighbor within distance cutoff"),
            Rejection::InsufficientVariants { label, count, min } => {
                write!(f, "insufficient variants of {label:?}: {count}, need {min}")
            }
            Rejection::LowConfidence {
                label,
                confidence,
                min,
            } => write!(f, "low confidence for {label:?}: {confidence:.4} < {min}"),
        }
    }
}

/// Outcome of a single classification.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Accepted(ClassificationResult),
    Rejected(Rejection),
}

impl Verdict {
    pub fn accepted(self) -> Option<ClassificationResult> {
        match self {
            Verdict::Accepted(r) => Some(r),
            Verdict::Rejected(_) => None,
        }
    }
}

/// Weighted k-nearest-neighbor classifier over DTW distances.
///
/// # Algorithm
///
/// 1. Align the input against every corpus entry whose label is in the
///    vocabulary. Entries that fail alignment are skipped.
/// 2. Sort by distance (stable, so ties keep corpus order) and take the
///    first `k`.
/// 3. Each neighbor within `max_distance` adds `weight_scale / distance`
///    to its label. The first label to reach the highest weight wins.
/// 4. Reject if the winner has fewer than `min_variants` corpus examples.
/// 5. Confidence is the Gaussian kernel of the winner's mean distance over
///    all comparisons from step 1, not just the neighbors. Reject below
///    `min_confidence`.
///
/// The classifier never mutates the corpus; see
/// [`Recognizer`](crate::Recognizer) for self-reinforcement.
pub struct Classifier<'a> {
    cfg: &'a Config,
}

impl<'a> Classifier<'a> {
    pub fn new(cfg: &'a Config) -> Self {
        Self { cfg }
    }

    /// Classifies `sequence` against `corpus`.
    ///
    /// Returns `Err` only when every comparable entry failed alignment,
    /// which points at a feature width change rather than an unknown word.
    pub fn evaluate(
        &self,
        corpus: &Corpus,
        sequence: &FeatureSequence,
    ) -> Result<Verdict, RecognizerError> {
        let started = Instant::now();
        let k = self.cfg.k;

        if sequence.is_empty() {
            return Ok(Verdict::Rejected(Rejection::EmptySequence));
        }

        let eligible = corpus
            .iter()
            .filter(|e| self.cfg.vocabulary.contains(e.label()))
            .count();
        if eligible < k {
            return Ok(Verdict::Rejected(Rejection::InsufficientCorpus {
                available: eligible,
                k,
            }));
        }

        let mut samples = self.distances(corpus, sequence)?;
        if samples.len() < k {
            return Ok(Verdict::Rejected(Rejection::InsufficientCorpus {
                available: samples.len(),
                k,
            }));
        }

        samples.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        debug!(
            compared = samples.len(),
            nearest = ?&samples[..k],
            "classify: ranked corpus"
        );

        let Some((label, weight)) = self.vote(&samples[..k]) else {
            return Ok(Verdict::Rejected(Rejection::NoVotes));
        };

        let count = corpus.count(label);
        if count < self.cfg.min_variants {
            return Ok(Verdict::Rejected(Rejection::InsufficientVariants {
                label: label.to_string(),
                count,
                min: self.cfg.min_variants,
            }));
        }

        let mean = mean_distance(&samples, label);
        let confidence = gaussian_kernel(mean, self.cfg.bandwidth);
        debug!(label, weight, mean, confidence, "classify: winner");

        // Written so that a NaN confidence is rejected.
        if !(confidence >= self.cfg.min_confidence) {
            return Ok(Verdict::Rejected(Rejection::LowConfidence {
                label: label.to_string(),
                confidence,
                min: self.cfg.min_confidence,
            }));
        }

        Ok(Verdict::Accepted(ClassificationResult {
            label: label.to_string(),
            confidence,
            process_time_ms: started.elapsed().as_secs_f64() * 1000.0,
        }))
    }

    /// Aligns `sequence` against every in-vocabulary entry, in corpus order.
    ///
    /// Entries that fail alignment or align to a NaN or infinite distance
    /// are logged and skipped. If every entry fails alignment, the last
    /// error is returned.
    pub fn distances<'c>(
        &self,
        corpus: &'c Corpus,
        sequence: &FeatureSequence,
    ) -> Result<Vec<DistanceSample<'c>>, RecognizerError> {
        let mut samples = Vec::with_capacity(corpus.len());
        let mut failed = 0usize;
        let mut last_err: Option<DtwError> = None;

        for (idx, entry) in corpus.iter().enumerate() {
            if !self.cfg.vocabulary.contains(entry.label()) {
                continue;
            }
            match align(entry.sequence(), sequence) {
                Ok(distance) if distance.is_finite() => samples.push(DistanceSample {
                    label: entry.label(),
                    distance,
                }),
                Ok(distance) => {
                    warn!(index = idx, label = %entry.label(), distance, "classify: skipping non-finite distance");
                }
                Err(e) => {
                    warn!(index = idx, label = %entry.label(), error = %e, "classify: skipping corpus entry");
                    failed += 1;
                    last_err = Some(e);
                }
            }
        }

        if samples.is_empty() {
            if let Some(source) = last_err {
                return Err(RecognizerError::AllEntriesFailed {
                    compared: failed,
                    source,
                });
            }
        }
        Ok(samples)
    }

    /// Distance-weighted vote over the nearest neighbors.
    /// Returns the winning label and its weight, or None if nobody voted.
    pub fn vote<'s>(&self, neighbors: &[DistanceSample<'s>]) -> Option<(&'s str, f64)> {
        let mut weights: HashMap<&str, f64> = HashMap::with_capacity(neighbors.len());
        let mut best: Option<(&'s str, f64)> = None;

        for s in neighbors {
            if s.distance > self.cfg.max_distance {
                continue;
            }
            let w = weights.entry(s.label).or_insert(0.0);
            *w += self.cfg.weight_scale / s.distance.max(ZERO_DISTANCE_FLOOR);
            let total = *w;

            // Strictly greater: on equal weight the first label seen keeps the lead.
            if best.is_none_or(|(_, bw)| total > bw) {
                best = Some((s.label, total));
            }
        }
        best
    }
}

/// Maps a distance to `(0, 1]`: `exp(-0.5 * (distance / bandwidth)^2)`.
pub fn gaussian_kernel(distance: f64, bandwidth: f64) -> f64 {
    let t = distance / bandwidth;
    (-0.5 * t * t).exp()
}

fn mean_distance(samples: &[DistanceSample<'_>], label: &str) -> f64 {
    let (sum, n) = samples
        .iter()
        .filter(|s| s.label == label)
        .fold((0.0f64, 0usize), |(sum, n), s| (sum + s.distance, n + 1));
    if n == 0 { 0.0 } else { sum / n as f64 }
}
