//! # Brain Module
//!
//! Response pipeline for the campus buddy. Every stage is deterministic apart
//! from the injected random source, and nothing here calls out to a model.
//!
//! ## Components
//! - `catalog`: Intent catalog loading and validation
//! - `vector_space`: TF-IDF vectorizer and cosine similarity
//! - `similarity`: Nearest-pattern intent classification
//! - `entities`, `sentiment`, `keywords`, `lemma`: Lexical analysis pieces
//! - `analyzer`: Runs the lexical analysis pieces over one message
//! - `analysis`: Output data structures
//! - `selector`: Base reply selection
//! - `enhancer`: Personality flourishes and entity callbacks
//! - `pacing`: Typing delay for the final reply
//! - `chatbot`: Main orchestrator

pub mod analysis;
pub mod analyzer;
pub mod catalog;
pub mod chatbot;
pub mod enhancer;
pub mod entities;
pub mod keywords;
pub mod lemma;
pub mod pacing;
pub mod selector;
pub mod sentiment;
pub mod similarity;
pub mod vector_space;

// Re-export main types for convenience
pub use analysis::{AnalysisRecord, Entity, EntityCategory};
pub use analyzer::LexicalAnalyzer;
pub use catalog::{Catalog, IntentEntry};
pub use chatbot::{global, init_global, ChatTurn, Chatbot};
pub use enhancer::{Personality, ResponseEnhancer};
pub use pacing::{PacingFormatter, ResponsePayload};
pub use selector::ResponseSelector;
pub use similarity::{IntentMatch, SimilarityClassifier};
pub use vector_space::VectorSpace;
