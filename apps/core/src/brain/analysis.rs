//! Analysis Record - per-request output of the lexical analyzer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityCategory {
    /// Temporal reference ("Friday", "next week", "March 5")
    Date,
    /// Named individual ("Sam", "Professor Smith")
    Person,
    /// Bare number
    Cardinal,
}

impl EntityCategory {
    pub fn label(&self) -> &'static str {
        match self {
            EntityCategory::Date => "DATE",
            EntityCategory::Person => "PERSON",
            EntityCategory::Cardinal => "CARDINAL",
        }
    }

    /// Lower wins when two spans cover the same text
    pub(crate) fn priority(&self) -> u8 {
        match self {
            EntityCategory::Date => 0,
            EntityCategory::Person => 1,
            EntityCategory::Cardinal => 2,
        }
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A recognized span of the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Text of the span, as typed
    pub text: String,
    pub category: EntityCategory,
}

impl Entity {
    pub fn new(text: impl Into<String>, category: EntityCategory) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

/// Complete lexical reading of one user message
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Entities in text order
    pub entities: Vec<Entity>,

    /// Polarity in [-1, 1]; negative means distressed
    pub sentiment: f32,

    /// Lemmatized keywords in order of first appearance
    pub keywords: Vec<String>,
}

impl AnalysisRecord {
    /// Record for empty input: no entities, neutral sentiment, no keywords
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_sentiment(sentiment: f32) -> Self {
        Self {
            sentiment,
            ..Self::default()
        }
    }

    pub fn with_entities(entities: Vec<Entity>) -> Self {
        Self {
            entities,
            ..Self::default()
        }
    }
}
