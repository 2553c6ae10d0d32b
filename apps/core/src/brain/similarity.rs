//! Similarity Classification over the intent catalog.
//!
//! Every pattern is vectorized once at construction. A query is vectorized with
//! the same space and scored against each intent as the best cosine similarity
//! over that intent's patterns.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

use super::catalog::Catalog;
use super::vector_space::{cosine_similarity, VectorSpace};
use crate::error::ClassificationError;

/// Winning intent for a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentMatch {
    /// Tag of the matched intent
    pub tag: String,
    /// Best cosine similarity between the query and one of the intent's patterns
    pub similarity: f32,
}

/// Nearest-pattern intent classifier
pub struct SimilarityClassifier {
    catalog: Arc<Catalog>,
    space: VectorSpace,
    /// Pattern vectors, indexed like `catalog.entries()`
    pattern_vectors: Vec<Vec<Vec<f32>>>,
    threshold: f32,
}

impl SimilarityClassifier {
    /// Fit the vector space on the catalog and pre-compute every pattern vector.
    pub fn fit(catalog: Arc<Catalog>, threshold: f32) -> Result<Self, ClassificationError> {
        let space = VectorSpace::fit(catalog.all_patterns())?;

        let pattern_vectors: Vec<Vec<Vec<f32>>> = catalog
            .entries()
            .iter()
            .map(|entry| entry.patterns.iter().map(|p| space.transform(p)).collect())
            .collect();

        info!(
            "Fitted vector space: {} terms across {} intents",
            space.dimension(),
            catalog.len()
        );

        Ok(Self {
            catalog,
            space,
            pattern_vectors,
            threshold,
        })
    }

    /// Per-intent best similarity, in catalog order
    fn scores(&self, text: &str) -> Vec<f32> {
        let query = self.space.transform(text);
        self.pattern_vectors
            .iter()
            .map(|patterns| {
                patterns
                    .iter()
                    .map(|p| cosine_similarity(&query, p))
                    .fold(0.0f32, f32::max)
            })
            .collect()
    }

    /// Classify a query.
    ///
    /// Returns `None` when the best similarity does not exceed the threshold.
    /// Ties go to the intent that appears first in the catalog.
    pub fn classify(&self, text: &str) -> Option<IntentMatch> {
        let mut best: Option<(usize, f32)> = None;
        for (index, score) in self.scores(text).into_iter().enumerate() {
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }

        let (index, similarity) = best?;
        let tag = &self.catalog.entries()[index].tag;

        if similarity <= self.threshold {
            debug!(
                "No intent above threshold {:.2} (best: {} at {:.3})",
                self.threshold, tag, similarity
            );
            return None;
        }

        debug!("Matched intent {} ({:.3})", tag, similarity);
        Some(IntentMatch {
            tag: tag.clone(),
            similarity,
        })
    }

    /// Top-k intents by similarity, ignoring the threshold
    pub fn rank(&self, text: &str, k: usize) -> Vec<IntentMatch> {
        let mut results: Vec<IntentMatch> = self
            .scores(text)
            .into_iter()
            .zip(self.catalog.entries())
            .map(|(similarity, entry)| IntentMatch {
                tag: entry.tag.clone(),
                similarity,
            })
            .collect();

        results.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(k);
        results
    }
}
