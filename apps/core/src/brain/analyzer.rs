//! Lexical Analyzer - entities, sentiment and keywords for one message.
//!
//! Coordinates entity extraction, sentiment scoring and keyword extraction.
//! All three run over the raw text independently of intent classification.

use super::analysis::AnalysisRecord;
use super::entities::EntityExtractor;
use super::keywords::KeywordExtractor;
use super::sentiment::SentimentScorer;

/// Lexical analyzer that orchestrates all analysis components
pub struct LexicalAnalyzer {
    entity_extractor: EntityExtractor,
    sentiment_scorer: SentimentScorer,
    keyword_extractor: KeywordExtractor,
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexicalAnalyzer {
    /// Create a new analyzer with default settings
    pub fn new() -> Self {
        Self {
            entity_extractor: EntityExtractor::new(),
            sentiment_scorer: SentimentScorer::new(),
            keyword_extractor: KeywordExtractor::new(),
        }
    }

    /// Analyze a message. Never fails; blank input yields an empty record.
    pub fn analyze(&self, text: &str) -> AnalysisRecord {
        if text.trim().is_empty() {
            return AnalysisRecord::empty();
        }

        AnalysisRecord {
            entities: self.entity_extractor.extract(text),
            sentiment: self.sentiment_scorer.score(text),
            keywords: self.keyword_extractor.extract(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::analysis::{Entity, EntityCategory};

    #[test]
    fn test_empty_input() {
        let analyzer = LexicalAnalyzer::new();

        assert_eq!(analyzer.analyze(""), AnalysisRecord::empty());
        assert_eq!(analyzer.analyze(" \t\n"), AnalysisRecord::empty());
    }

    #[test]
    fn test_full_analysis() {
        let analyzer = LexicalAnalyzer::new();

        let record = analyzer.analyze("I'm so worried, my chemistry exam with Professor Smith is on Friday");

        assert_eq!(
            record.entities,
            vec![
                Entity::new("Professor Smith", EntityCategory::Person),
                Entity::new("Friday", EntityCategory::Date),
            ]
        );
        assert!(record.sentiment < 0.0);
        assert!(record.keywords.contains(&"worry".to_string()));
        assert!(record.keywords.contains(&"exam".to_string()));
    }

    #[test]
    fn test_sentiment_is_bounded() {
        let analyzer = LexicalAnalyzer::new();

        for text in ["great great great!!!", "awful awful awful", "the library"] {
            let sentiment = analyzer.analyze(text).sentiment;
            assert!((-1.0..=1.0).contains(&sentiment), "{} -> {}", text, sentiment);
        }
    }
}
