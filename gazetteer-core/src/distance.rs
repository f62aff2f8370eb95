//! Squared Euclidean distance between embedding vectors.

use crate::error::{CoreError, CoreResult};
use ndarray::ArrayView1;

/// Calculates the squared L2 distance between two vectors.
///
/// # Returns
/// The squared distance as `f32` (lower is more similar, range [0, inf)).
/// Returns `CoreError::DimensionMismatch` if the vectors have different
/// lengths.
///
/// # Notes
/// The square root is deliberately NOT taken: the confidence transform
/// (`1 - distance`) downstream is defined over squared distances, so
/// rooting here would change observable scores.
pub fn squared_l2(v1: ArrayView1<f32>, v2: ArrayView1<f32>) -> CoreResult<f32> {
    if v1.len() != v2.len() {
        return Err(CoreError::DimensionMismatch {
            expected: v1.len(),
            actual: v2.len(),
        });
    }

    let diff = &v1 - &v2;
    Ok(diff.dot(&diff))
}
