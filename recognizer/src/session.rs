use tracing::{debug, info};

use crate::config::{Config, Vocabulary};
use crate::corpus::Corpus;

/// Guided training schedule.
///
/// Prompts for the vocabulary words round-robin, `passes` times over. A
/// failed training attempt keeps the same word; a successful one moves to
/// the next. The session is finished after `passes * vocabulary.len()`
/// successes, at which point the caller switches to recognizing.
///
/// ```
/// use wordrec_recognizer::{TrainingSession, Vocabulary};
///
/// let mut session = TrainingSession::new(Vocabulary::new(["yes", "no"]), 1);
/// assert_eq!(session.next_word(), Some("yes"));
/// session.record(false);
/// assert_eq!(session.next_word(), Some("yes"));
/// session.record(true);
/// session.record(true);
/// assert!(session.is_finished());
/// ```
#[derive(Debug, Clone)]
pub struct TrainingSession {
    vocabulary: Vocabulary,
    passes: usize,
    completed: usize,
}

impl TrainingSession {
    pub fn new(vocabulary: Vocabulary, passes: usize) -> Self {
        Self {
            vocabulary,
            passes,
            completed: 0,
        }
    }

    /// Starts a session over the config's vocabulary and `training_passes`.
    pub fn from_config(cfg: &Config) -> Self {
        let cfg = cfg.clone().with_defaults();
        Self::new(cfg.vocabulary, cfg.training_passes)
    }

    /// Picks up a schedule from the examples already in `corpus`.
    ///
    /// Full rounds are counted by the least-trained vocabulary word; within
    /// the current round, words that already reached that round's count
    /// are skipped. For a corpus built by following the schedule this is
    /// exactly where it left off.
    pub fn resume(cfg: &Config, corpus: &Corpus) -> Self {
        let mut session = Self::from_config(cfg);
        let counts: Vec<usize> = session
            .vocabulary
            .words()
            .iter()
            .map(|w| corpus.count(w))
            .collect();
        let round = counts.iter().copied().min().unwrap_or(0);
        let within = counts.iter().take_while(|&&c| c > round).count();

        session.completed = (round * counts.len() + within).min(session.total());
        debug!(
            completed = session.completed,
            total = session.total(),
            "session: resumed from corpus"
        );
        session
    }

    /// The word to train next, or None once the session is finished.
    pub fn next_word(&self) -> Option<&str> {
        if self.is_finished() {
            return None;
        }
        let words = self.vocabulary.words();
        Some(words[self.completed % words.len()].as_str())
    }

    /// Records the outcome of training the current word.
    ///
    /// Returns true if this success finished the session.
    pub fn record(&mut self, success: bool) -> bool {
        if !success || self.is_finished() {
            return false;
        }
        self.completed += 1;
        let finished = self.is_finished();
        if finished {
            info!(trained = self.completed, "session: training complete");
        }
        finished
    }

    pub fn is_finished(&self) -> bool {
        self.completed >= self.total()
    }

    /// Successful trainings so far.
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Successful trainings needed to finish.
    pub fn total(&self) -> usize {
        self.passes * self.vocabulary.len()
    }
}
