use crate::DtwError;

/// Euclidean distance between two feature vectors.
/// Uses f64 intermediate precision; vectors of different length are an error.
pub fn euclidean(a: &[f32], b: &[f32]) -> Result<f64, DtwError> {
    if a.len() != b.len() {
        return Err(DtwError::DimensionMismatch {
            expected: a.len(),
            got: b.len(),
        });
    }
    Ok(euclidean_unchecked(a, b))
}

/// Caller guarantees `a.len() == b.len()`.
pub(crate) fn euclidean_unchecked(a: &[f32], b: &[f32]) -> f64 {
    let mut sum: f64 = 0.0;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let d = x as f64 - y as f64;
        sum += d * d;
    }
    sum.sqrt()
}
