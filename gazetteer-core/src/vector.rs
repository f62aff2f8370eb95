use ndarray::Array1;

/// The embedding vector representation.
/// Uses `ndarray::Array1<f32>` for efficient numerical operations.
/// The dimension is fixed by the embedding model at load time and is
/// constant for the process lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct Embedding(pub Array1<f32>);

// Implement Deref to allow easy access to Array1 methods
impl std::ops::Deref for Embedding {
    type Target = Array1<f32>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// Implement From<Vec<f32>> for convenience
impl From<Vec<f32>> for Embedding {
    fn from(vec: Vec<f32>) -> Self {
        Embedding(Array1::from(vec))
    }
}

impl From<Embedding> for Vec<f32> {
    fn from(embedding: Embedding) -> Self {
        embedding.0.to_vec()
    }
}
