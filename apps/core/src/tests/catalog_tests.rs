//! Catalog Loading Tests
//!
//! Loading intent catalogs from disk, and how bad files surface as errors.

use crate::brain::{Catalog, Chatbot};
use crate::config::ChatbotConfig;
use crate::error::{AppError, CatalogLoadError};
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

// ============================================================================
// Test Fixtures
// ============================================================================

const SMALL_CATALOG: &str = r#"{
  "intents": [
    {
      "tag": "wifi",
      "patterns": ["the wifi is down", "how do i connect to campus wifi"],
      "responses": ["Try forgetting the network and reconnecting."]
    },
    {
      "tag": "parking",
      "patterns": ["where can i park", "parking permit"],
      "responses": ["Student parking is behind the sports complex."],
      "supportive_responses": ["Parking stress is real. Lot C usually has space."]
    }
  ]
}"#;

/// Write a catalog file into a fresh temp dir
fn write_catalog(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("intents.json");
    fs::write(&path, contents).expect("Failed to write catalog");
    (dir, path)
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_load_from_disk() {
    let (_dir, path) = write_catalog(SMALL_CATALOG);
    let catalog = Catalog::load(&path).expect("catalog should load");

    assert_eq!(catalog.tags().collect::<Vec<_>>(), vec!["wifi", "parking"]);
    assert!(catalog.get("wifi").unwrap().supportive().is_none());
    assert_eq!(catalog.get("parking").unwrap().supportive().map(|s| s.len()), Some(1));
}

#[test]
fn test_loading_twice_is_identical() {
    let (_dir, path) = write_catalog(SMALL_CATALOG);

    let first = Catalog::load(&path).unwrap();
    let second = Catalog::load(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.json");

    match Catalog::load(&path) {
        Err(CatalogLoadError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_intent_without_patterns() {
    let (_dir, path) = write_catalog(
        r#"{"intents": [{"tag": "empty", "patterns": [], "responses": ["Hi."]}]}"#,
    );

    match Catalog::load(&path) {
        Err(CatalogLoadError::InvalidIntent { tag, .. }) => assert_eq!(tag, "empty"),
        other => panic!("Expected InvalidIntent, got {:?}", other),
    }
}

#[test]
fn test_truncated_file() {
    let (_dir, path) = write_catalog(&SMALL_CATALOG[..SMALL_CATALOG.len() / 2]);
    assert!(matches!(
        Catalog::load(&path),
        Err(CatalogLoadError::Malformed(_))
    ));
}

#[test]
fn test_no_intents() {
    let (_dir, path) = write_catalog(r#"{"intents": []}"#);
    assert!(matches!(Catalog::load(&path), Err(CatalogLoadError::Empty)));
}

// ============================================================================
// Chatbot startup
// ============================================================================

#[test]
fn test_chatbot_uses_configured_catalog() {
    let (_dir, path) = write_catalog(SMALL_CATALOG);
    let chatbot = Chatbot::new(ChatbotConfig {
        catalog_path: Some(path),
        ..ChatbotConfig::default()
    })
    .expect("chatbot should start");

    assert_eq!(chatbot.catalog().len(), 2);
    assert_eq!(
        chatbot.classify("the wifi is down").map(|m| m.tag),
        Some("wifi".to_string())
    );
}

#[test]
fn test_bad_catalog_stops_startup() {
    let (_dir, path) = write_catalog("not json at all");
    let result = Chatbot::new(ChatbotConfig {
        catalog_path: Some(path),
        ..ChatbotConfig::default()
    });

    assert!(matches!(
        result,
        Err(AppError::Catalog(CatalogLoadError::Malformed(_)))
    ));
}

#[test]
fn test_catalog_without_vocabulary_stops_startup() {
    let (_dir, path) = write_catalog(
        r#"{"intents": [{"tag": "punct", "patterns": ["?", "!"], "responses": ["..."]}]}"#,
    );
    let result = Chatbot::new(ChatbotConfig {
        catalog_path: Some(path),
        ..ChatbotConfig::default()
    });

    assert!(matches!(result, Err(AppError::Classification(_))));
}
