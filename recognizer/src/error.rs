use thiserror::Error;
use wordrec_dtw::DtwError;

/// Errors returned by recognizer operations.
///
/// Ordinary "not recognized" outcomes are not errors; see
/// [`Rejection`](crate::Rejection).
#[derive(Debug, Error)]
pub enum RecognizerError {
    #[error("recognizer: {0}")]
    Align(#[from] DtwError),

    /// Every in-vocabulary corpus entry failed alignment against the input.
    /// Usually the feature extractor width changed between training and
    /// recognition.
    #[error("recognizer: all {compared} corpus entries failed alignment: {source}")]
    AllEntriesFailed { compared: usize, source: DtwError },

    #[error("recognizer: store: {0}")]
    Store(String),

    #[error("recognizer: config: {0}")]
    Config(String),
}
