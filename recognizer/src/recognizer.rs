use std::fmt;
use std::time::Instant;

use tracing::{debug, info};
use wordrec_dtw::FeatureSequence;

use crate::classifier::{ClassificationResult, Classifier, Verdict};
use crate::config::Config;
use crate::corpus::{Corpus, TrainingExample};
use crate::trainer;
use crate::RecognizerError;

/// Progress of a train or classify call, reported to a [`PhaseListener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Training,
    TrainingSaved,
    TrainingFailed,
    Recognizing,
    Recognized,
    NotRecognized,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Training => "training",
            Phase::TrainingSaved => "training saved",
            Phase::TrainingFailed => "training failed",
            Phase::Recognizing => "recognizing",
            Phase::Recognized => "recognized",
            Phase::NotRecognized => "not recognized",
        };
        f.write_str(s)
    }
}

/// Receives [`Phase`] updates, e.g. to drive a status display.
///
/// Implemented for any `FnMut(Phase) + Send`.
pub trait PhaseListener: Send {
    fn on_phase(&mut self, phase: Phase);
}

impl<F> PhaseListener for F
where
    F: FnMut(Phase) + Send,
{
    fn on_phase(&mut self, phase: Phase) {
        self(phase)
    }
}

/// An isolated-word recognizer session: configuration plus the corpus it
/// learns into.
///
/// Both [`train`](Self::train) and [`classify`](Self::classify) take
/// `&mut self` and run to completion; a session shared between threads
/// needs a `Mutex` around it.
pub struct Recognizer {
    cfg: Config,
    corpus: Corpus,
    listener: Option<Box<dyn PhaseListener>>,
}

impl Recognizer {
    /// Creates a session with an empty corpus.
    pub fn new(cfg: Config) -> Self {
        Self::with_corpus(cfg, Corpus::new())
    }

    /// Creates a session over an existing corpus (e.g. loaded from a store).
    pub fn with_corpus(cfg: Config, corpus: Corpus) -> Self {
        Self {
            cfg: cfg.with_defaults(),
            corpus,
            listener: None,
        }
    }

    pub fn set_listener(&mut self, listener: impl PhaseListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn into_corpus(self) -> Corpus {
        self.corpus
    }

    /// Adds a labeled example. Returns false for an empty sequence.
    pub fn train(&mut self, sequence: FeatureSequence, label: &str) -> bool {
        self.report(Phase::Training);
        let ok = trainer::train(&mut self.corpus, sequence, label);
        self.report(if ok {
            Phase::TrainingSaved
        } else {
            Phase::TrainingFailed
        });
        ok
    }

    /// Recognizes an utterance.
    ///
    /// Returns `Ok(None)` when the utterance is not recognized for any
    /// ordinary reason (see [`classify_verdict`](Self::classify_verdict) for
    /// which). On acceptance the utterance is appended to the corpus under
    /// the recognized label, unless `reinforce` is off.
    pub fn classify(
        &mut self,
        sequence: FeatureSequence,
    ) -> Result<Option<ClassificationResult>, RecognizerError> {
        Ok(self.classify_verdict(sequence)?.accepted())
    }

    /// Like [`classify`](Self::classify) but keeps the rejection reason.
    ///
    /// The corpus is mutated only when the verdict is `Accepted`.
    pub fn classify_verdict(
        &mut self,
        sequence: FeatureSequence,
    ) -> Result<Verdict, RecognizerError> {
        let started = Instant::now();
        self.report(Phase::Recognizing);

        let verdict = match Classifier::new(&self.cfg).evaluate(&self.corpus, &sequence) {
            Ok(v) => v,
            Err(e) => {
                self.report(Phase::NotRecognized);
                return Err(e);
            }
        };

        match verdict {
            Verdict::Accepted(mut result) => {
                if self.cfg.reinforce {
                    self.corpus
                        .push(TrainingExample::new(result.label.as_str(), sequence));
                }
                result.process_time_ms = started.elapsed().as_secs_f64() * 1000.0;
                info!(
                    label = %result.label,
                    confidence = result.confidence,
                    ms = result.process_time_ms,
                    corpus = self.corpus.len(),
                    "recognized"
                );
                self.report(Phase::Recognized);
                Ok(Verdict::Accepted(result))
            }
            Verdict::Rejected(reason) => {
                debug!(
                    reason = %reason,
                    ms = started.elapsed().as_secs_f64() * 1000.0,
                    "not recognized"
                );
                self.report(Phase::NotRecognized);
                Ok(Verdict::Rejected(reason))
            }
        }
    }

    fn report(&mut self, phase: Phase) {
        if let Some(l) = self.listener.as_mut() {
            l.on_phase(phase);
        }
    }
}
