//! Exact nearest-neighbor index over squared L2 distance.

use crate::distance::squared_l2;
use crate::error::{CoreError, CoreResult};
use crate::vector::Embedding;
use std::cmp::Ordering;

/// A flat, exhaustively-scanned vector index.
///
/// Positions are assigned in insertion order and never reused; a
/// position returned by [`search`](FlatIndex::search) IS the join key
/// back to whatever external row produced the vector. Callers that
/// depend on that join must insert in row order and never remove
/// entries.
///
/// The corpus here is a few hundred city names, so an exact scan beats
/// any approximate structure on both simplicity and recall.
#[derive(Debug)]
pub struct FlatIndex {
    dimensions: usize,
    vectors: Vec<Embedding>,
}

impl FlatIndex {
    pub fn new(dimensions: usize) -> CoreResult<Self> {
        if dimensions == 0 {
            return Err(CoreError::InvalidArgument(
                "dimensions must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            dimensions,
            vectors: Vec::new(),
        })
    }

    /// Appends a vector and returns its assigned position.
    pub fn add(&mut self, vector: Embedding) -> CoreResult<usize> {
        if vector.len() != self.dimensions {
            return Err(CoreError::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            });
        }
        self.vectors.push(vector);
        Ok(self.vectors.len() - 1)
    }

    /// Returns the `min(k, len)` nearest positions to `query`, ordered by
    /// non-decreasing squared L2 distance.
    ///
    /// Ties resolve to the lowest position, so duplicate vectors rank
    /// deterministically. An empty index yields an empty result set.
    pub fn search(&self, query: &Embedding, k: usize) -> CoreResult<Vec<(usize, f32)>> {
        if k == 0 {
            return Err(CoreError::InvalidArgument(
                "k must be at least 1".to_string(),
            ));
        }
        if query.len() != self.dimensions {
            return Err(CoreError::DimensionMismatch {
                expected: self.dimensions,
                actual: query.len(),
            });
        }

        let mut scored: Vec<(usize, f32)> = Vec::with_capacity(self.vectors.len());
        for (position, vector) in self.vectors.iter().enumerate() {
            let distance = squared_l2(query.view(), vector.view())?;
            scored.push((position, distance));
        }
        scored.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        scored.truncate(k.min(self.vectors.len()));
        Ok(scored)
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}
