//! Elastic distance between spectral feature sequences.
//!
//! Two utterances of the same word rarely line up frame for frame: one
//! speaker stretches the vowel, another clips the ending. Dynamic time
//! warping finds the cheapest monotonic correspondence between the frames
//! of two sequences and reports its total cost.
//!
//! # Usage
//!
//! ```
//! use wordrec_dtw::{align, FeatureSequence};
//!
//! let a = FeatureSequence::from(vec![vec![0.0, 0.0], vec![1.0, 1.0]]);
//! let b = FeatureSequence::from(vec![vec![0.0, 0.0], vec![0.0, 0.0], vec![1.0, 1.0]]);
//!
//! let d = align(&a, &b).unwrap();
//! assert_eq!(d, 0.0);
//! ```
//!
//! # Element distance
//!
//! Frames are compared with the Euclidean distance over their coefficients.
//! Frames of different width cannot be compared; [`align`] reports
//! [`DtwError::DimensionMismatch`] instead of producing a distance.

mod distance;
mod dtw;
mod error;
mod sequence;

pub use distance::euclidean;
pub use dtw::align;
pub use error::DtwError;
pub use sequence::{FeatureSequence, FeatureVector};
