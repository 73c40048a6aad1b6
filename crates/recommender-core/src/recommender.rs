/// Catalogue ranking by TF-IDF cosine similarity.
///
/// Each call builds a vector space over every catalogue description plus the
/// query as the last document. The query therefore takes part in the idf
/// weights: scores shift with every query and are only comparable within a
/// single call. Known quirk of the scoring; leave it unless the product
/// owners agree to a global vocabulary.
use std::sync::Arc;

use tracing::debug;

use crate::catalogue::{Catalogue, CatalogueEntry};
use crate::error::RecommendError;
use crate::tfidf::{cosine_similarity, TfidfSpace};

pub const DEFAULT_TOP_K: usize = 5;
pub const GENERIC_REASON: &str = "Matches job role and required competencies.";

/// A catalogue entry paired with its score for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredResult<'a> {
    pub entry: &'a CatalogueEntry,
    /// Cosine similarity in `[0, 1]`, rounded to two decimals.
    pub similarity_score: f64,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct Recommender {
    catalogue: Arc<Catalogue>,
}

impl Recommender {
    pub fn new(catalogue: Arc<Catalogue>) -> Self {
        Self { catalogue }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// Rank the catalogue against `query` and return the best `k` entries.
    ///
    /// `k` larger than the catalogue is clamped. Ties keep catalogue order.
    /// `skills` only influence the generated reason, never the score.
    pub fn recommend<S: AsRef<str>>(
        &self,
        query: &str,
        skills: &[S],
        k: usize,
    ) -> Result<Vec<ScoredResult<'_>>, RecommendError> {
        if query.trim().is_empty() {
            return Err(RecommendError::InvalidInput(
                "query must not be empty".to_string(),
            ));
        }
        if k < 1 {
            return Err(RecommendError::InvalidInput(
                "k must be at least 1".to_string(),
            ));
        }
        let k = k.min(self.catalogue.len());

        let mut corpus: Vec<&str> = self
            .catalogue
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        corpus.push(query);

        let space = TfidfSpace::fit_transform(&corpus);
        let query_index = corpus.len() - 1;
        let query_row = space.row(query_index).unwrap_or(&[]);

        let mut scored: Vec<(usize, f64)> = (0..query_index)
            .map(|i| {
                let row = space.row(i).unwrap_or(&[]);
                (i, round2(cosine_similarity(query_row, row)))
            })
            .collect();
        // Stable sort: equal scores stay in catalogue order.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(k);

        let entries = self.catalogue.entries();
        let results: Vec<ScoredResult<'_>> = scored
            .into_iter()
            .map(|(i, similarity_score)| {
                let entry = &entries[i];
                ScoredResult {
                    entry,
                    similarity_score,
                    reason: generate_reason(&entry.description, skills),
                }
            })
            .collect();

        debug!(
            vocabulary = space.vocabulary_size(),
            top_k = k,
            top_score = results.first().map(|r| r.similarity_score),
            "recommendation computed"
        );

        Ok(results)
    }
}

/// Explain a match by the skills mentioned in the description.
///
/// A skill matches when it is a case-insensitive substring of the
/// description. Unlike a bare substring test, skills are trimmed before
/// matching and reported trimmed, and blank skills never match (an empty
/// string would otherwise match every description).
pub fn generate_reason<S: AsRef<str>>(description: &str, skills: &[S]) -> String {
    let description = description.to_lowercase();
    let matched: Vec<&str> = skills
        .iter()
        .map(|s| s.as_ref().trim())
        .filter(|s| !s.is_empty() && description.contains(&s.to_lowercase()))
        .collect();

    if matched.is_empty() {
        GENERIC_REASON.to_string()
    } else {
        format!("Highly relevant due to focus on {}.", matched.join(", "))
    }
}

/// Rounds halves away from zero, not half-to-even; exact `.xx5` scores are
/// not reachable in practice.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
