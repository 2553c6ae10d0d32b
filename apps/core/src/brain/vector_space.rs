//! TF-IDF vector space.
//!
//! Fitted once on every catalog pattern, then used read-only to turn both
//! patterns and user input into comparable L2-normalized vectors.
//! Tokens are lower-cased runs of two or more word characters; weights are raw
//! term counts times the smoothed inverse document frequency
//! `ln((1 + n) / (1 + df)) + 1`. Terms outside the vocabulary are ignored.

use regex::Regex;
use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use crate::error::ClassificationError;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("Invalid regex: token pattern"));

/// Split text into lower-cased vocabulary tokens
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Fitted vocabulary and idf weights
#[derive(Debug, Clone)]
pub struct VectorSpace {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl VectorSpace {
    /// Fit the vocabulary on a set of documents.
    ///
    /// Vocabulary indices follow the sorted term order, so fitting the same
    /// documents always produces the same space.
    pub fn fit<'a, I>(documents: I) -> Result<Self, ClassificationError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let tokenized: Vec<BTreeSet<String>> = documents
            .into_iter()
            .map(|doc| tokenize(doc).into_iter().collect())
            .collect();

        let terms: BTreeSet<&String> = tokenized.iter().flatten().collect();
        if terms.is_empty() {
            return Err(ClassificationError::EmptyVocabulary);
        }

        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(index, term)| (term.clone(), index))
            .collect();

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for doc in &tokenized {
            for term in doc {
                if let Some(&index) = vocabulary.get(term) {
                    document_frequency[index] += 1;
                }
            }
        }

        let n = tokenized.len() as f32;
        let idf = document_frequency
            .into_iter()
            .map(|df| ((1.0 + n) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        Ok(Self { vocabulary, idf })
    }

    /// Vectorize text. Returns the zero vector when no token is in the vocabulary.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.idf.len()];
        for token in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                vector[index] += 1.0;
            }
        }

        for (weight, idf) in vector.iter_mut().zip(&self.idf) {
            *weight *= idf;
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for weight in &mut vector {
                *weight /= norm;
            }
        }
        vector
    }

    /// Number of terms in the vocabulary
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }
}

/// Calculate cosine similarity between two vectors
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let magnitude_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    dot_product / (magnitude_a * magnitude_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 0.001);

        let c = vec![0.0, 1.0, 0.0];
        assert!((cosine_similarity(&a, &c) - 0.0).abs() < 0.001);

        let zero = vec![0.0, 0.0, 0.0];
        assert_eq!(cosine_similarity(&a, &zero), 0.0);
    }

    #[test]
    fn test_tokenize_drops_single_characters() {
        assert_eq!(tokenize("I can't go, OK?"), vec!["can", "go", "ok"]);
    }

    #[test]
    fn test_fit_builds_sorted_vocabulary() {
        let space = VectorSpace::fit(["library hours", "exam stress", "library"]).unwrap();
        assert_eq!(space.dimension(), 4);
        assert!(space.contains("library"));
        assert!(!space.contains("pizza"));
    }

    #[test]
    fn test_rarer_terms_weigh_more() {
        let space = VectorSpace::fit(["library hours", "library books", "library"]).unwrap();
        let vector = space.transform("library hours");
        let library = vector[space.vocabulary["library"]];
        let hours = vector[space.vocabulary["hours"]];
        assert!(hours > library);
    }

    #[test]
    fn test_transform_is_normalized() {
        let space = VectorSpace::fit(["good morning", "good evening"]).unwrap();
        let vector = space.transform("good good morning");
        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_unknown_text_is_zero_vector() {
        let space = VectorSpace::fit(["good morning"]).unwrap();
        assert!(space.transform("quantum pizza").iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_empty_vocabulary_rejected() {
        assert_eq!(
            VectorSpace::fit(["?", "a b c"]).unwrap_err(),
            ClassificationError::EmptyVocabulary
        );
    }
}
