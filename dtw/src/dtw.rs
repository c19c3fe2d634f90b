use crate::distance::euclidean_unchecked;
use crate::{DtwError, FeatureSequence};

/// Computes the dynamic time warping distance between two sequences.
///
/// The cumulative cost of cell `(i, j)` is the Euclidean distance between
/// `a[i]` and `b[j]` plus the cheapest of its left, upper and diagonal
/// neighbors; cell `(0, 0)` starts from the bare element distance and the
/// first row and column accumulate along the border. The result is the
/// cost of the last cell.
///
/// Only two rows of the matrix are kept, laid along the shorter sequence,
/// so memory is `O(min(|a|, |b|))`.
///
/// # Errors
///
/// - [`DtwError::EmptySequence`] if either sequence has no frames.
/// - [`DtwError::DimensionMismatch`] if any frame differs in width from
///   the first frame of `a`.
pub fn align(a: &FeatureSequence, b: &FeatureSequence) -> Result<f64, DtwError> {
    let width = a.width().ok_or(DtwError::EmptySequence)?;
    if b.is_empty() {
        return Err(DtwError::EmptySequence);
    }
    for seq in [a, b] {
        if let Some(got) = seq.mismatched_width(width) {
            return Err(DtwError::DimensionMismatch {
                expected: width,
                got,
            });
        }
    }

    // The matrix transposed has the same last cell, so iterate rows over
    // the longer sequence and keep rows as long as the shorter one.
    let (rows, cols) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let n = cols.len();

    let mut prev = vec![0.0f64; n];
    let mut curr = vec![0.0f64; n];

    for (i, r) in rows.frames().iter().enumerate() {
        for (j, c) in cols.frames().iter().enumerate() {
            let cost = euclidean_unchecked(r, c);
            let best = match (i, j) {
                (0, 0) => 0.0,
                (0, _) => curr[j - 1],
                (_, 0) => prev[0],
                _ => prev[j].min(curr[j - 1]).min(prev[j - 1]),
            };
            curr[j] = cost + best;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    Ok(prev[n - 1])
}
