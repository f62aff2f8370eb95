//! Text embedding behind a trait seam, with a fastembed-backed
//! production implementation.

use crate::error::{CoreError, CoreResult};
use crate::vector::Embedding;
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use std::path::Path;
use tracing::info;

/// Converts a batch of strings into fixed-dimension vectors.
///
/// Implementations must be deterministic (identical text always yields
/// the identical vector) and safe for concurrent calls through `&self`;
/// the instance is shared read-only across request handlers after
/// startup. The same implementation must be used for the corpus and for
/// queries so that distances in embedding space are meaningful.
pub trait Embedder: Send + Sync {
    fn embed(&self, texts: &[String]) -> CoreResult<Vec<Embedding>>;
}

/// all-MiniLM-L6-v2 running on fastembed's bundled ONNX runtime.
///
/// Model weights are downloaded on first load into `cache_dir` and
/// reused afterwards.
pub struct MiniLmEmbedder {
    model: TextEmbedding,
}

impl MiniLmEmbedder {
    pub fn load(cache_dir: &Path) -> CoreResult<Self> {
        info!(cache_dir = ?cache_dir, "Loading embedding model");
        let model = TextEmbedding::try_new(
            InitOptions::new(EmbeddingModel::AllMiniLML6V2)
                .with_cache_dir(cache_dir.to_path_buf())
                .with_show_download_progress(false),
        )
        .map_err(|e| CoreError::Embedding(format!("failed to load model: {}", e)))?;
        info!("Embedding model loaded");
        Ok(Self { model })
    }
}

impl Embedder for MiniLmEmbedder {
    fn embed(&self, texts: &[String]) -> CoreResult<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let raw = self
            .model
            .embed(texts.to_vec(), None)
            .map_err(|e| CoreError::Embedding(e.to_string()))?;
        Ok(raw.into_iter().map(Embedding::from).collect())
    }
}
