use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::RecognizerError;

/// The recognizable word list.
///
/// Keeps the configured order; duplicate words are dropped on construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for w in words {
            let w = w.into();
            if !out.contains(&w) {
                out.push(w);
            }
        }
        Self { words: out }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(["one", "two", "three"])
    }
}

impl From<Vec<String>> for Vocabulary {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(v: Vocabulary) -> Self {
        v.words
    }
}

/// Controls recognizer behavior.
///
/// Every field has a default, so a YAML file only needs the values it
/// changes:
///
/// ```yaml
/// vocabulary: [left, right, up, down]
/// k: 5
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Labels the recognizer may output. Corpus entries with other labels
    /// are kept but never compared.
    pub vocabulary: Vocabulary,

    /// Samples per captured frame. Frames of any other length are skipped
    /// when assembling a sequence. Default: 2048.
    pub buffer_size: usize,

    /// Maximum frames per utterance; older frames fall out of the window.
    /// Default: 40.
    pub window_frames: usize,

    /// Neighbor count for voting. Default: 3.
    pub k: usize,

    /// Minimum corpus occurrences of the winning label. Default: 2.
    pub min_variants: usize,

    /// Confidence below this is rejected. Default: 0.75.
    pub min_confidence: f64,

    /// Neighbors farther than this do not vote. Default: 1000.
    pub max_distance: f64,

    /// Gaussian kernel bandwidth for confidence. Default: 1000.
    pub bandwidth: f64,

    /// Vote weight is `weight_scale / distance`. Default: 1000.
    pub weight_scale: f64,

    /// Append accepted recognitions to the corpus. Default: true.
    pub reinforce: bool,

    /// Rounds over the vocabulary in a guided training session. Default: 2.
    pub training_passes: usize,
}

const DEFAULT_BUFFER_SIZE: usize = 2048;
const DEFAULT_WINDOW_FRAMES: usize = 40;
const DEFAULT_K: usize = 3;
const DEFAULT_MIN_VARIANTS: usize = 2;
const DEFAULT_MIN_CONFIDENCE: f64 = 0.75;
const DEFAULT_MAX_DISTANCE: f64 = 1000.0;
const DEFAULT_BANDWIDTH: f64 = 1000.0;
const DEFAULT_WEIGHT_SCALE: f64 = 1000.0;
const DEFAULT_TRAINING_PASSES: usize = 2;

impl Default for Config {
    fn default() -> Self {
        Self {
            vocabulary: Vocabulary::default(),
            buffer_size: DEFAULT_BUFFER_SIZE,
            window_frames: DEFAULT_WINDOW_FRAMES,
            k: DEFAULT_K,
            min_variants: DEFAULT_MIN_VARIANTS,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            max_distance: DEFAULT_MAX_DISTANCE,
            bandwidth: DEFAULT_BANDWIDTH,
            weight_scale: DEFAULT_WEIGHT_SCALE,
            reinforce: true,
            training_passes: DEFAULT_TRAINING_PASSES,
        }
    }
}

impl Config {
    /// Replaces zero, negative, and NaN tuning values with defaults.
    pub fn with_defaults(mut self) -> Self {
        if self.buffer_size == 0 {
            self.buffer_size = DEFAULT_BUFFER_SIZE;
        }
        if self.window_frames == 0 {
            self.window_frames = DEFAULT_WINDOW_FRAMES;
        }
        if self.k == 0 {
            self.k = DEFAULT_K;
        }
        if self.min_variants == 0 {
            self.min_variants = DEFAULT_MIN_VARIANTS;
        }
        if self.training_passes == 0 {
            self.training_passes = DEFAULT_TRAINING_PASSES;
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            self.min_confidence = DEFAULT_MIN_CONFIDENCE;
        }
        self.max_distance = positive_or(self.max_distance, DEFAULT_MAX_DISTANCE);
        self.bandwidth = positive_or(self.bandwidth, DEFAULT_BANDWIDTH);
        self.weight_scale = positive_or(self.weight_scale, DEFAULT_WEIGHT_SCALE);
        self
    }

    /// Parses a YAML document. Missing fields take their defaults.
    pub fn from_yaml(s: &str) -> Result<Self, RecognizerError> {
        let cfg: Config =
            serde_yaml::from_str(s).map_err(|e| RecognizerError::Config(e.to_string()))?;
        Ok(cfg.with_defaults())
    }

    /// Reads a YAML config file.
    pub fn load(path: &Path) -> Result<Self, RecognizerError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RecognizerError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    pub fn to_yaml(&self) -> Result<String, RecognizerError> {
        serde_yaml::to_string(self).map_err(|e| RecognizerError::Config(e.to_string()))
    }
}

fn positive_or(v: f64, default: f64) -> f64 {
    if v > 0.0 { v } else { default }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_drops_duplicates_keeps_order() {
        let v = Vocabulary::new(["up", "down", "up", "left"]);
        assert_eq!(v.words(), ["up", "down", "left"]);
        assert!(v.contains("left"));
        assert!(!v.contains("right"));
    }

    #[test]
    fn default_vocabulary() {
        let v = Vocabulary::default();
        assert_eq!(v.words(), ["one", "two", "three"]);
    }

    #[test]
    fn partial_yaml_takes_defaults() {
        let cfg = Config::from_yaml("vocabulary: [left, right]\nk: 5\n").unwrap();
        assert_eq!(cfg.vocabulary.words(), ["left", "right"]);
        assert_eq!(cfg.k, 5);
        assert_eq!(cfg.min_variants, 2);
        assert_eq!(cfg.buffer_size, 2048);
        assert_eq!(cfg.window_frames, 40);
        assert_eq!(cfg.min_confidence, 0.75);
        assert_eq!(cfg.bandwidth, 1000.0);
        assert_eq!(cfg.training_passes, 2);
        assert!(cfg.reinforce);
    }

    #[test]
    fn zero_values_replaced() {
        let cfg = Config {
            k: 0,
            min_variants: 0,
            training_passes: 0,
            bandwidth: 0.0,
            max_distance: -1.0,
            weight_scale: f64::NAN,
            min_confidence: 2.0,
            ..Config::default()
        }
        .with_defaults();
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn zero_min_confidence_is_kept() {
        let cfg = Config {
            min_confidence: 0.0,
            ..Config::default()
        }
        .with_defaults();
        assert_eq!(cfg.min_confidence, 0.0);
    }

    #[test]
    fn yaml_round_trip() {
        let cfg = Config {
            vocabulary: Vocabulary::new(["yes", "no"]),
            k: 4,
            reinforce: false,
            ..Config::default()
        };
        let yaml = cfg.to_yaml().unwrap();
        assert_eq!(Config::from_yaml(&yaml).unwrap(), cfg);
    }

    #[test]
    fn invalid_yaml_is_config_error() {
        let err = Config::from_yaml("k: [not, a, number]").unwrap_err();
        assert!(matches!(err, RecognizerError::Config(_)));
    }
}
