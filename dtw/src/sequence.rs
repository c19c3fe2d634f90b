use serde::{Deserialize, Serialize};

/// Coefficients of a single audio frame (e.g. 13 MFCCs).
pub type FeatureVector = Vec<f32>;

/// One utterance: feature vectors in temporal order.
///
/// Serializes as a plain nested array: `[[c0, c1, ...], ...]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSequence {
    frames: Vec<FeatureVector>,
}

impl FeatureSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a frame at the end of the sequence.
    pub fn push(&mut self, frame: FeatureVector) {
        self.frames.push(frame);
    }

    pub fn frames(&self) -> &[FeatureVector] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Width of the first frame, or None for an empty sequence.
    pub fn width(&self) -> Option<usize> {
        self.frames.first().map(|f| f.len())
    }

    /// Returns the width of the first frame that does not have exactly
    /// `width` coefficients.
    pub(crate) fn mismatched_width(&self, width: usize) -> Option<usize> {
        self.frames.iter().map(|f| f.len()).find(|&w| w != width)
    }

    pub fn into_frames(self) -> Vec<FeatureVector> {
        self.frames
    }
}

impl From<Vec<FeatureVector>> for FeatureSequence {
    fn from(frames: Vec<FeatureVector>) -> Self {
        Self { frames }
    }
}

impl FromIterator<FeatureVector> for FeatureSequence {
    fn from_iter<I: IntoIterator<Item = FeatureVector>>(iter: I) -> Self {
        Self {
            frames: iter.into_iter().collect(),
        }
    }
}
