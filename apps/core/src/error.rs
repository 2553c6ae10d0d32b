use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating the intent catalog.
///
/// Loading is all-or-nothing: any of these aborts the load and no catalog is
/// produced.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The catalog file could not be read.
    #[error("Failed to read intent catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The catalog is not valid JSON or does not match the expected shape.
    #[error("Malformed intent catalog: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The catalog parsed but defines no intents.
    #[error("Intent catalog defines no intents")]
    Empty,

    /// Two intents share the same tag.
    #[error("Duplicate intent tag '{0}'")]
    DuplicateTag(String),

    /// An intent violates its invariants (blank tag, no patterns, no responses...).
    #[error("Invalid intent '{tag}': {reason}")]
    InvalidIntent { tag: String, reason: String },
}

/// Errors raised while fitting the similarity classifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    /// No catalog pattern produced an indexable term, so no vector space exists.
    #[error("Vector space has an empty vocabulary: the catalog patterns contain no indexable terms")]
    EmptyVocabulary,
}

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// The intent catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogLoadError),

    /// The classifier could not be built from the catalog.
    #[error("Classification error: {0}")]
    Classification(#[from] ClassificationError),

    /// Represents configuration-related errors (e.g., unparsable environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Config(format!("Validation errors: {}", err))
    }
}
