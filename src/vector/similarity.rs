//! Cosine similarity with dimension checking.

use crate::error::{LecternError, Result};

/// Compute the cosine similarity between two equal-length vectors.
///
/// Returns a value in `[-1, 1]`: the dot product divided by the product of
/// Euclidean norms. If either vector has zero norm the similarity is 0.0
/// rather than NaN or an error; a zero vector carries no directional
/// information, so it compares as maximally dissimilar to everything,
/// including another zero vector.
///
/// # Errors
///
/// Returns [`LecternError::DimensionMismatch`] if the vectors differ in
/// length. Mismatched vectors cannot be compared; callers scoring a corpus
/// skip the offending chunk and continue.
///
/// # Examples
///
/// ```
/// use lectern::vector::cosine_similarity;
///
/// let similarity = cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]).unwrap();
/// assert!((similarity - 1.0).abs() < 1e-6);
///
/// assert!(cosine_similarity(&[1.0, 0.0], &[1.0, 0.0, 0.0]).is_err());
/// ```
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(LecternError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot_product / (norm_a * norm_b))
}
