//! Pacing Formatter - per-word reveal delay for the final reply.
//!
//! The delay spreads a fixed reveal budget over the words of the reply, within
//! configured bounds. Revealing and sleeping is left to the caller.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::PacingConfig;

/// Final reply handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsePayload {
    /// Text to display
    pub text: String,
    /// Seconds to wait between revealed words
    pub typing_delay: f32,
}

impl ResponsePayload {
    /// Words in reveal order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }

    /// Delay between two revealed words
    pub fn word_interval(&self) -> Duration {
        Duration::from_secs_f32(self.typing_delay)
    }

    /// Total time a word-by-word reveal takes
    pub fn reveal_duration(&self) -> Duration {
        self.word_interval() * self.words().count().max(1) as u32
    }
}

pub struct PacingFormatter {
    config: PacingConfig,
}

impl Default for PacingFormatter {
    fn default() -> Self {
        Self::new(PacingConfig::default())
    }
}

impl PacingFormatter {
    pub fn new(config: PacingConfig) -> Self {
        Self { config }
    }

    /// `numerator / word_count` clamped to the configured bounds. Blank text
    /// counts as one word.
    pub fn typing_delay(&self, text: &str) -> f32 {
        let word_count = text.split_whitespace().count().max(1);
        (self.config.numerator / word_count as f32)
            .max(self.config.min_delay)
            .min(self.config.max_delay)
    }

    pub fn format(&self, text: impl Into<String>) -> ResponsePayload {
        let text = text.into();
        let typing_delay = self.typing_delay(&text);
        ResponsePayload { text, typing_delay }
    }
}
