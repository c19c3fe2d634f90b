use std::collections::VecDeque;

use wordrec_dtw::{FeatureSequence, FeatureVector};

use crate::config::Config;

/// Turns one captured audio frame into a feature vector (e.g. MFCCs).
///
/// Implemented for any `Fn(&[f32]) -> FeatureVector`.
pub trait FeatureExtractor {
    fn extract(&self, frame: &[f32]) -> FeatureVector;
}

impl<F> FeatureExtractor for F
where
    F: Fn(&[f32]) -> FeatureVector,
{
    fn extract(&self, frame: &[f32]) -> FeatureVector {
        self(frame)
    }
}

/// Sliding window over the most recent audio frames of an utterance.
///
/// The capture side pushes every frame; once the window is full the oldest
/// frame is dropped. When the utterance ends, [`FrameWindow::sequence`]
/// turns the retained frames into a [`FeatureSequence`].
pub struct FrameWindow {
    frames: VecDeque<Vec<f32>>,
    capacity: usize,
    frame_len: usize,
}

impl FrameWindow {
    /// Creates a window keeping `capacity` frames of `frame_len` samples.
    /// Panics if either is 0.
    pub fn new(frame_len: usize, capacity: usize) -> Self {
        assert!(frame_len > 0, "frames: frame_len must be positive");
        assert!(capacity > 0, "frames: capacity must be positive");
        Self {
            frames: VecDeque::with_capacity(capacity),
            capacity,
            frame_len,
        }
    }

    /// Uses `buffer_size` and `window_frames` from the config. Zero values
    /// take their defaults, as in [`Config::with_defaults`].
    pub fn from_config(cfg: &Config) -> Self {
        let cfg = cfg.clone().with_defaults();
        Self::new(cfg.buffer_size, cfg.window_frames)
    }

    /// Adds a frame, evicting the oldest one if the window is full.
    ///
    /// Frames of the wrong length are kept (they occupy a slot, as a
    /// truncated capture buffer would) but are skipped by [`Self::sequence`].
    pub fn push(&mut self, frame: Vec<f32>) {
        if self.frames.len() >= self.capacity {
            self.frames.pop_front();
        }
        self.frames.push_back(frame);
    }

    /// Extracts features from every full-length frame, oldest first.
    pub fn sequence<E: FeatureExtractor + ?Sized>(&self, extractor: &E) -> FeatureSequence {
        self.frames
            .iter()
            .filter(|f| f.len() == self.frame_len)
            .map(|f| extractor.extract(f))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops all frames, ready for the next utterance.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}
