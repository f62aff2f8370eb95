pub mod dataset;
pub mod distance;
pub mod embedder;
pub mod error;
pub mod index;
pub mod lookup;
pub mod vector;

// Re-export key types/traits for easier use
pub use dataset::{load_records, CityRecord};
pub use embedder::{Embedder, MiniLmEmbedder};
pub use error::{CoreError, CoreResult};
pub use index::FlatIndex;
pub use lookup::{LookupService, SearchResult};
pub use vector::Embedding;
