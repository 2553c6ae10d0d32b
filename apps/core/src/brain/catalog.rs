//! Intent Catalog - tag → trigger phrases and candidate replies.
//!
//! Loaded once at startup from a JSON definition and never mutated afterwards.
//! Loading validates every entry and either yields a complete catalog or an
//! error; partial catalogs are never produced.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::CatalogLoadError;

/// Campus catalog compiled into the binary
const BUNDLED_CATALOG: &str = include_str!("../../data/intents.json");

/// A single intent: trigger phrases plus the replies it can produce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentEntry {
    /// Unique identifier of the intent
    pub tag: String,
    /// Example phrases that trigger this intent
    pub patterns: Vec<String>,
    /// Candidate replies
    pub responses: Vec<String>,
    /// Replies preferred when the user sounds distressed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supportive_responses: Option<Vec<String>>,
}

impl IntentEntry {
    fn validate(&self) -> Result<(), CatalogLoadError> {
        let invalid = |reason: &str| CatalogLoadError::InvalidIntent {
            tag: self.tag.clone(),
            reason: reason.to_string(),
        };

        if self.tag.trim().is_empty() {
            return Err(invalid("tag is blank"));
        }
        if self.patterns.is_empty() {
            return Err(invalid("no patterns"));
        }
        if self.patterns.iter().any(|p| p.trim().is_empty()) {
            return Err(invalid("blank pattern"));
        }
        if self.responses.is_empty() {
            return Err(invalid("no responses"));
        }
        if self.responses.iter().any(|r| r.trim().is_empty()) {
            return Err(invalid("blank response"));
        }
        if let Some(supportive) = &self.supportive_responses {
            if supportive.is_empty() {
                return Err(invalid("supportive_responses is present but empty"));
            }
            if supportive.iter().any(|r| r.trim().is_empty()) {
                return Err(invalid("blank supportive response"));
            }
        }
        Ok(())
    }

    /// Supportive pool, if this intent defines one
    pub fn supportive(&self) -> Option<&[String]> {
        self.supportive_responses.as_deref()
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    intents: Vec<IntentEntry>,
}

/// Immutable, ordered set of intents. Order is file order and drives tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<IntentEntry>,
}

impl Catalog {
    /// Load and validate a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        info!("Loaded {} intents from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// Parse and validate an in-memory catalog definition.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogLoadError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::from_entries(file.intents)
    }

    /// Build a catalog from entries, applying the same validation as `load`.
    pub fn from_entries(entries: Vec<IntentEntry>) -> Result<Self, CatalogLoadError> {
        if entries.is_empty() {
            return Err(CatalogLoadError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            entry.validate()?;
            if !seen.insert(entry.tag.as_str()) {
                return Err(CatalogLoadError::DuplicateTag(entry.tag.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// The campus catalog shipped with the crate.
    pub fn bundled() -> Result<Self, CatalogLoadError> {
        let catalog = Self::from_json_str(BUNDLED_CATALOG)?;
        info!("Loaded {} bundled intents", catalog.len());
        Ok(catalog)
    }

    pub fn entries(&self) -> &[IntentEntry] {
        &self.entries
    }

    pub fn get(&self, tag: &str) -> Option<&IntentEntry> {
        self.entries.iter().find(|e| e.tag == tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.tag.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every pattern in catalog order, used to fit the vector space
    pub fn all_patterns(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|e| e.patterns.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(tag: &str, patterns: &[&str], responses: &[&str]) -> IntentEntry {
        IntentEntry {
            tag: tag.to_string(),
            patterns: patterns.iter().map(|s| s.to_string()).collect(),
            responses: responses.iter().map(|s| s.to_string()).collect(),
            supportive_responses: None,
        }
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = Catalog::bundled().expect("bundled catalog must be valid");
        assert!(catalog.len() >= 5);
        assert!(catalog.get("greeting").is_some());
        assert!(catalog
            .entries()
            .iter()
            .any(|e| e.supportive_responses.is_some()));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = Catalog::from_json_str(r#"{"intents": []}"#).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Empty));
    }

    #[test]
    fn test_duplicate_tag_rejected() {
        let err = Catalog::from_entries(vec![
            entry("greeting", &["hi"], &["Hello!"]),
            entry("greeting", &["hey"], &["Hey!"]),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogLoadError::DuplicateTag(tag) if tag == "greeting"));
    }

    #[test]
    fn test_missing_responses_rejected() {
        let err = Catalog::from_entries(vec![entry("thanks", &["thank you"], &[])]).unwrap_err();
        assert!(matches!(err, CatalogLoadError::InvalidIntent { .. }));
    }

    #[test]
    fn test_empty_supportive_pool_rejected() {
        let mut e = entry("exam_stress", &["exams"], &["Good luck!"]);
        e.supportive_responses = Some(vec![]);
        assert!(Catalog::from_entries(vec![e]).is_err());
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Catalog::from_json_str(r#"{"intents": [{"tag": "x"}"#).unwrap_err();
        assert!(matches!(err, CatalogLoadError::Malformed(_)));
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let catalog = Catalog::from_json_str(
            r#"{"intents": [{"tag": "hi", "patterns": ["hello"], "responses": ["Hey"], "context": [""]}]}"#,
        )
        .expect("extra keys should be ignored");
        assert_eq!(catalog.tags().collect::<Vec<_>>(), vec!["hi"]);
    }
}
