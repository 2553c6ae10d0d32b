//! Keyword Extraction.
//!
//! Splits text into words, drops stopwords, short tokens and numbers, and
//! reduces what remains to lemmas.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::lemma::lemmatize;

/// Stopwords for English language
const STOPWORDS_EN: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "nor", "for", "yet", "so", "i", "you", "he", "she", "it",
    "we", "they", "me", "him", "her", "us", "them", "my", "your", "his", "her", "its", "our",
    "their", "mine", "yours", "hers", "ours", "theirs", "this", "that", "these", "those", "who",
    "whom", "which", "what", "whose", "is", "am", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "having", "do", "does", "did", "doing", "will", "would", "shall",
    "should", "can", "could", "may", "might", "must", "in", "on", "at", "to", "from", "by", "with",
    "about", "against", "between", "into", "through", "during", "before", "after", "above",
    "below", "up", "down", "out", "off", "over", "under", "again", "further", "here", "there",
    "where", "when", "why", "how", "all", "each", "every", "both", "few", "more", "most", "other",
    "some", "any", "no", "not", "only", "own", "same", "than", "too", "very", "just", "also",
    "now", "then", "once", "always", "never", "if", "because", "as", "until", "while", "although",
    "though", "yes", "no", "maybe", "s", "t", "ve", "re", "ll", "d", "m", "of", "im", "ive",
    "don", "didn", "doesn", "isn", "wasn", "aren", "won", "couldn", "shouldn", "wouldn", "hasn",
    "haven", "really", "myself", "yourself", "get", "got", "please",
];

static STOPWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS_EN.iter().copied().collect());

/// Check if a lower-cased word is an English stopword
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Keyword extractor producing lemmas
pub struct KeywordExtractor {
    min_word_length: usize,
    max_keywords: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Create a new keyword extractor with default settings
    pub fn new() -> Self {
        Self::with_config(2, 16)
    }

    /// Create a keyword extractor with custom configuration
    pub fn with_config(min_word_length: usize, max_keywords: usize) -> Self {
        Self {
            min_word_length,
            max_keywords,
        }
    }

    /// Tokenize text into words, filtering out non-words
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric() && c != '_' && c != '-')
            .map(|word| word.trim_matches('-'))
            .filter(|w| {
                w.chars().count() >= self.min_word_length
                    && !is_stopword(w)
                    && !w.chars().all(|c| c.is_numeric())
            })
            .map(|s| s.to_string())
            .collect()
    }

    /// Lemmatized keywords, de-duplicated, in order of first appearance
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.tokenize(text)
            .into_iter()
            .map(|word| lemmatize(&word))
            .filter(|lemma| !is_stopword(lemma))
            .filter(|lemma| seen.insert(lemma.clone()))
            .take(self.max_keywords)
            .collect()
    }
}
