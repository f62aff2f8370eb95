//! The lookup service: embeds a city-name query and resolves the nearest
//! corpus entries to their states.

use crate::dataset::CityRecord;
use crate::embedder::Embedder;
use crate::error::{CoreError, CoreResult};
use crate::index::FlatIndex;
use serde::Serialize;
use tracing::info;

/// One ranked candidate for a query.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchResult {
    pub city: String,
    pub state: String,
    /// Squared L2 distance between the query and corpus embeddings.
    pub distance: f32,
}

impl SearchResult {
    /// `1 - distance`. A plain linear transform of the raw squared
    /// distance, not a calibrated probability: values below 0 or above 1
    /// are possible and are reported as-is.
    pub fn confidence(&self) -> f32 {
        1.0 - self.distance
    }
}

/// Read-only lookup state built once at startup: the embedder, the flat
/// index over all corpus embeddings, and the corpus rows themselves.
///
/// Index position `i` always refers to `records[i]` — the index is
/// populated in row order and neither side is ever mutated afterwards,
/// which is what makes the positional join in [`lookup`] sound.
pub struct LookupService {
    embedder: Box<dyn Embedder>,
    index: Option<FlatIndex>,
    records: Vec<CityRecord>,
}

impl LookupService {
    /// Embeds every city name and builds the index.
    ///
    /// An empty corpus is allowed; the service then answers every lookup
    /// with zero candidates. The embedding dimension is taken from the
    /// model's output, never configured.
    pub fn build(embedder: Box<dyn Embedder>, records: Vec<CityRecord>) -> CoreResult<Self> {
        if records.is_empty() {
            info!("City corpus is empty; lookups will return no candidates");
            return Ok(Self {
                embedder,
                index: None,
                records,
            });
        }

        let names: Vec<String> = records.iter().map(|r| r.city.clone()).collect();
        info!(count = names.len(), "Encoding city names");
        let embeddings = embedder.embed(&names)?;
        if embeddings.len() != records.len() {
            return Err(CoreError::Embedding(format!(
                "embedder returned {} vectors for {} city names",
                embeddings.len(),
                records.len()
            )));
        }

        let dimensions = embeddings[0].len();
        let mut index = FlatIndex::new(dimensions)?;
        for embedding in embeddings {
            index.add(embedding)?;
        }
        if index.len() != records.len() {
            return Err(CoreError::Internal(format!(
                "index holds {} vectors for {} records",
                index.len(),
                records.len()
            )));
        }
        info!(count = index.len(), dimensions, "Flat index built");

        Ok(Self {
            embedder,
            index: Some(index),
            records,
        })
    }

    /// Returns the `min(k, corpus_size)` closest corpus entries to
    /// `query`, nearest first.
    ///
    /// The query is embedded with the same embedder and the same
    /// (non-existent) preprocessing as the corpus; any normalization
    /// asymmetry would make the distances meaningless. Pure function of
    /// the immutable service state and the query string.
    pub fn lookup(&self, query: &str, k: usize) -> CoreResult<Vec<SearchResult>> {
        if k == 0 {
            return Err(CoreError::InvalidArgument(
                "k must be at least 1".to_string(),
            ));
        }
        let Some(index) = &self.index else {
            return Ok(Vec::new());
        };

        let mut embedded = self.embedder.embed(&[query.to_string()])?;
        if embedded.len() != 1 {
            return Err(CoreError::Embedding(format!(
                "embedder returned {} vectors for a single query",
                embedded.len()
            )));
        }
        let query_vector = embedded.remove(0);

        let hits = index.search(&query_vector, k)?;
        hits.into_iter()
            .map(|(position, distance)| {
                let record = self.records.get(position).ok_or_else(|| {
                    CoreError::Internal(format!(
                        "index returned position {} outside the {}-row corpus",
                        position,
                        self.records.len()
                    ))
                })?;
                Ok(SearchResult {
                    city: record.city.clone(),
                    state: record.state.clone(),
                    distance,
                })
            })
            .collect()
    }

    /// Number of corpus entries.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Embedding dimension, or `None` for an empty corpus.
    pub fn dimensions(&self) -> Option<usize> {
        self.index.as_ref().map(|i| i.dimensions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Embedding;

    /// Maps each text to a deterministic low-dimensional point; identical
    /// text (case-sensitive) reproduces the identical vector.
    struct StubEmbedder;

    impl Embedder for StubEmbedder {
        fn embed(&self, texts: &[String]) -> CoreResult<Vec<Embedding>> {
            Ok(texts.iter().map(|t| stub_vector(t)).collect())
        }
    }

    fn stub_vector(text: &str) -> Embedding {
        let mut acc: u32 = 0;
        for b in text.bytes() {
            acc = acc.wrapping_mul(31).wrapping_add(u32::from(b));
        }
        Embedding::from(vec![
            (acc % 97) as f32 / 97.0,
            (acc % 89) as f32 / 89.0,
            (acc % 83) as f32 / 83.0,
        ])
    }

    fn record(city: &str, state: &str) -> CityRecord {
        CityRecord {
            city: city.to_string(),
            state: state.to_string(),
        }
    }

    fn service() -> LookupService {
        LookupService::build(
            Box::new(StubEmbedder),
            vec![
                record("Paris", "Ile-de-France"),
                record("Lyon", "Auvergne-Rhone-Alpes"),
                record("Marseille", "Provence-Alpes-Cote d'Azur"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_exact_query_is_top_match_at_distance_zero() {
        let service = service();
        let results = service.lookup("Lyon", 1).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].city, "Lyon");
        assert_eq!(results[0].state, "Auvergne-Rhone-Alpes");
        assert_eq!(results[0].distance, 0.0);
        assert_eq!(results[0].confidence(), 1.0);
    }

    #[test]
    fn test_returns_min_of_k_and_corpus_size() {
        let service = service();
        assert_eq!(service.lookup("Paris", 2).unwrap().len(), 2);
        assert_eq!(service.lookup("Paris", 50).unwrap().len(), 3);
    }

    #[test]
    fn test_results_are_nearest_first() {
        let service = service();
        let results = service.lookup("Marseille", 3).unwrap();
        assert_eq!(results[0].city, "Marseille");
        assert!(results[0].distance <= results[1].distance);
        assert!(results[1].distance <= results[2].distance);
    }

    #[test]
    fn test_confidence_is_one_minus_distance() {
        let service = service();
        for result in service.lookup("Pariss", 3).unwrap() {
            assert_eq!(result.confidence(), 1.0 - result.distance);
        }
    }

    #[test]
    fn test_zero_k_is_rejected() {
        let service = service();
        assert!(matches!(
            service.lookup("Paris", 0),
            Err(CoreError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_corpus_yields_no_candidates() {
        let service = LookupService::build(Box::new(StubEmbedder), Vec::new()).unwrap();
        assert!(service.lookup("Paris", 1).unwrap().is_empty());
        assert_eq!(service.len(), 0);
        assert_eq!(service.dimensions(), None);
    }

    #[test]
    fn test_duplicate_city_names_resolve_by_position() {
        // Two rows with the same city name but different states: the
        // lower row index wins the tie, and both rows stay reachable.
        let service = LookupService::build(
            Box::new(StubEmbedder),
            vec![
                record("Springfield", "Illinois"),
                record("Springfield", "Missouri"),
            ],
        )
        .unwrap();
        let results = service.lookup("Springfield", 2).unwrap();
        assert_eq!(results[0].state, "Illinois");
        assert_eq!(results[1].state, "Missouri");
        assert_eq!(results[0].distance, results[1].distance);
    }

    #[test]
    fn test_positional_join_invariant() {
        // Every corpus entry must resolve back to its own row.
        let service = service();
        for city in ["Paris", "Lyon", "Marseille"] {
            let results = service.lookup(city, 1).unwrap();
            assert_eq!(results[0].city, city);
        }
    }
}
