//! Isolated-word recognition from spectral feature sequences.
//!
//! Each utterance arrives as a [`FeatureSequence`] (one MFCC-style vector
//! per audio frame). The recognizer compares it against a growing corpus of
//! labeled utterances with dynamic time warping and picks a label by
//! distance-weighted k-nearest-neighbor voting, gated on a Gaussian
//! confidence score.
//!
//! # Usage
//!
//! ```
//! use wordrec_recognizer::{Config, FeatureSequence, Recognizer, Vocabulary};
//!
//! let mut rec = Recognizer::new(Config {
//!     vocabulary: Vocabulary::new(["yes", "no"]),
//!     bandwidth: 10.0,
//!     ..Config::default()
//! });
//!
//! let yes = |d: f32| FeatureSequence::from(vec![vec![d, 0.0], vec![1.0 + d, 1.0]]);
//! let no = |d: f32| FeatureSequence::from(vec![vec![9.0 + d, 9.0], vec![8.0, 8.0 + d]]);
//! for d in [0.0, 0.1, 0.2] {
//!     rec.train(yes(d), "yes");
//!     rec.train(no(d), "no");
//! }
//!
//! let result = rec.classify(yes(0.05)).unwrap().expect("recognized");
//! assert_eq!(result.label, "yes");
//! ```
//!
//! # Guided training
//!
//! [`TrainingSession`] walks the vocabulary round-robin for a fixed number
//! of passes, repeating a word until it trains successfully. Once it is
//! finished the corpus holds enough examples per word to start
//! recognizing.
//!
//! # Self-reinforcement
//!
//! Every accepted recognition is appended to the corpus under the
//! recognized label, so the corpus keeps growing during normal use. A
//! confident misrecognition therefore reinforces itself; set
//! [`Config::reinforce`] to false to learn from explicit training only.
//!
//! # Concurrency
//!
//! A [`Recognizer`] holds no locks. Keep one per session, or wrap a shared
//! one in a `Mutex`.

mod classifier;
mod config;
mod corpus;
mod error;
mod frames;
mod recognizer;
mod session;
mod store;
mod trainer;

pub use classifier::{
    gaussian_kernel, ClassificationResult, Classifier, DistanceSample, Rejection, Verdict,
    ZERO_DISTANCE_FLOOR,
};
pub use config::{Config, Vocabulary};
pub use corpus::{Corpus, TrainingExample};
pub use error::RecognizerError;
pub use frames::{FeatureExtractor, FrameWindow};
pub use recognizer::{Phase, PhaseListener, Recognizer};
pub use session::TrainingSession;
pub use store::{CorpusStore, JsonFileStore, MemoryStore, SNAPSHOT_VERSION};
pub use wordrec_dtw::{align, DtwError, FeatureSequence, FeatureVector};
