//! Chatbot - Main orchestrator for the response pipeline.
//!
//! Raw text goes through the lexical analyzer and, independently, the
//! similarity classifier; the selector, enhancer and pacing formatter then
//! turn the result into a [`ResponsePayload`].
//!
//! Everything expensive (catalog, vector space, analyzer tables) is built once
//! in [`Chatbot::new`] and only read afterwards, so one instance can serve
//! concurrent requests. [`init_global`] keeps a process-wide instance that
//! lives until the process exits.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use std::sync::{Arc, OnceLock};
use std::time::Instant;
use tracing::{debug, info};
use validator::Validate;

use super::analysis::AnalysisRecord;
use super::analyzer::LexicalAnalyzer;
use super::catalog::Catalog;
use super::enhancer::ResponseEnhancer;
use super::pacing::{PacingFormatter, ResponsePayload};
use super::selector::ResponseSelector;
use super::similarity::{IntentMatch, SimilarityClassifier};
use crate::config::ChatbotConfig;
use crate::error::AppError;

const WELCOME_MESSAGE: &str = "Hi there! I'm your AI campus buddy. I can:\n\
- Help with academic stress 📚\n\
- Tell dad jokes (the good kind) 😄\n\
- Be your personal cheerleader 🎉\n\n\
What's on your mind today?";

/// Process-wide instance, built once at startup
static CHATBOT: OnceLock<Chatbot> = OnceLock::new();

/// Build the process-wide chatbot, or return it if it already exists.
///
/// The configuration is only used by the first successful call.
pub fn init_global(config: ChatbotConfig) -> Result<&'static Chatbot, AppError> {
    if let Some(chatbot) = CHATBOT.get() {
        return Ok(chatbot);
    }
    let chatbot = Chatbot::new(config)?;
    Ok(CHATBOT.get_or_init(|| chatbot))
}

/// The process-wide chatbot, if [`init_global`] has run
pub fn global() -> Option<&'static Chatbot> {
    CHATBOT.get()
}

/// Trace of one request through the pipeline
#[derive(Debug, Clone, Serialize)]
pub struct ChatTurn {
    /// Original user message
    pub input: String,
    pub analysis: AnalysisRecord,
    /// Winning intent, if any cleared the threshold
    pub matched: Option<IntentMatch>,
    pub payload: ResponsePayload,
    pub processing_time_ms: u64,
    pub timestamp: DateTime<Utc>,
}

pub struct Chatbot {
    config: ChatbotConfig,
    catalog: Arc<Catalog>,
    analyzer: LexicalAnalyzer,
    classifier: SimilarityClassifier,
    selector: ResponseSelector,
    enhancer: ResponseEnhancer,
    pacing: PacingFormatter,
}

impl Chatbot {
    /// Validate the configuration, load the catalog and build every stage.
    ///
    /// Uses the catalog at `config.catalog_path`, or the bundled catalog when
    /// no path is set. A configured path that fails to load is an error.
    pub fn new(config: ChatbotConfig) -> Result<Self, AppError> {
        config.validate()?;
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::bundled()?,
        };
        Self::with_catalog(catalog, config)
    }

    /// Build every stage around an already loaded catalog.
    pub fn with_catalog(catalog: Catalog, config: ChatbotConfig) -> Result<Self, AppError> {
        config.validate()?;
        let catalog = Arc::new(catalog);

        let classifier = SimilarityClassifier::fit(Arc::clone(&catalog), config.match_threshold)?;
        let selector = ResponseSelector::new(
            Arc::clone(&catalog),
            config.support_cutoff,
            config.response_style,
        );
        let enhancer = ResponseEnhancer::for_tone(config.personality_tone);
        let pacing = PacingFormatter::new(config.pacing);

        info!(
            "Campus buddy ready: {} intents, threshold {:.2}, tone {}, style {}",
            catalog.len(),
            config.match_threshold,
            config.personality_tone,
            config.response_style
        );

        Ok(Self {
            config,
            catalog,
            analyzer: LexicalAnalyzer::new(),
            classifier,
            selector,
            enhancer,
            pacing,
        })
    }

    /// Greeting shown before the first message
    pub fn welcome_message() -> &'static str {
        WELCOME_MESSAGE
    }

    /// Generate a reply using a thread-local random source.
    pub fn generate_response(&self, text: &str) -> ResponsePayload {
        self.generate_response_with(text, &mut rand::thread_rng())
    }

    /// Generate a reply with an injected random source.
    pub fn generate_response_with<R: Rng>(&self, text: &str, rng: &mut R) -> ResponsePayload {
        self.respond_with(text, rng).payload
    }

    /// Run the full pipeline and keep every intermediate result.
    pub fn respond_with<R: Rng>(&self, text: &str, rng: &mut R) -> ChatTurn {
        let start = Instant::now();

        let analysis = self.analyzer.analyze(text);
        let matched = self.classifier.classify(text);

        let base = self
            .selector
            .select(matched.as_ref().map(|m| m.tag.as_str()), &analysis, rng);
        let enhanced = self.enhancer.enhance(&base, &analysis, rng);
        let payload = self.pacing.format(enhanced);

        let processing_time_ms = start.elapsed().as_millis() as u64;
        debug!(
            "Responded to {} chars: intent {:?}, sentiment {:.2}, {} entities in {}ms",
            text.len(),
            matched.as_ref().map(|m| m.tag.as_str()),
            analysis.sentiment,
            analysis.entities.len(),
            processing_time_ms
        );

        ChatTurn {
            input: text.to_string(),
            analysis,
            matched,
            payload,
            processing_time_ms,
            timestamp: Utc::now(),
        }
    }

    /// Intent classification alone
    pub fn classify(&self, text: &str) -> Option<IntentMatch> {
        self.classifier.classify(text)
    }

    /// Top-k intents for a message, ignoring the threshold
    pub fn rank(&self, text: &str, k: usize) -> Vec<IntentMatch> {
        self.classifier.rank(text, k)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &ChatbotConfig {
        &self.config
    }
}
