//! Response Selector - picks the base reply for a classified message.

use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, warn};

use super::analysis::AnalysisRecord;
use super::catalog::Catalog;
use crate::config::ResponseStyle;

/// Generic replies for messages that match no intent
pub const STILL_LEARNING_REPLIES: &[&str] = &[
    "I'm still learning! Could you say that another way?",
    "Hmm, I'm still learning and didn't quite catch that. Try asking about exams, the library, or outpasses.",
];

/// Fun facts offered when nothing matched
pub const FUN_FACT_REPLIES: &[&str] = &[
    "I'm still learning! Here's a fun fact: Cows have best friends!",
    "I'm still learning! Here's a fun fact: Honey never spoils.",
    "I'm still learning! Here's a fun fact: Octopuses have three hearts.",
    "I'm still learning! Here's a fun fact: A group of owls is called a parliament.",
    "I'm still learning! Here's a fun fact: Bananas are berries, but strawberries aren't.",
];

/// Every reply the fallback path can produce
pub fn fallback_replies() -> impl Iterator<Item = &'static str> {
    STILL_LEARNING_REPLIES
        .iter()
        .chain(FUN_FACT_REPLIES)
        .copied()
}

/// Chooses a reply from the catalog, the supportive pool or the fallback set
pub struct ResponseSelector {
    catalog: Arc<Catalog>,
    support_cutoff: f32,
    style: ResponseStyle,
    fallback: Vec<&'static str>,
}

impl ResponseSelector {
    pub fn new(catalog: Arc<Catalog>, support_cutoff: f32, style: ResponseStyle) -> Self {
        Self {
            catalog,
            support_cutoff,
            style,
            fallback: fallback_replies().collect(),
        }
    }

    fn fallback<R: Rng>(&self, rng: &mut R) -> String {
        self.fallback
            .choose(rng)
            .copied()
            .unwrap_or(STILL_LEARNING_REPLIES[0])
            .to_string()
    }

    /// Select a base reply.
    ///
    /// With no tag, or a tag the catalog does not know, the reply comes from
    /// the fallback set. Otherwise distressed users (sentiment strictly below
    /// the cutoff) get the intent's supportive pool when it has one.
    pub fn select<R: Rng>(&self, tag: Option<&str>, analysis: &AnalysisRecord, rng: &mut R) -> String {
        let Some(tag) = tag else {
            return self.fallback(rng);
        };
        let Some(entry) = self.catalog.get(tag) else {
            warn!("Tag '{}' is not in the catalog, using fallback reply", tag);
            return self.fallback(rng);
        };

        let wants_support =
            self.style == ResponseStyle::Empathetic && analysis.sentiment < self.support_cutoff;

        let pool = match entry.supportive() {
            Some(supportive) if wants_support => {
                debug!(
                    "Sentiment {:.2} below {:.2}, using supportive replies for {}",
                    analysis.sentiment, self.support_cutoff, tag
                );
                supportive
            }
            _ => entry.responses.as_slice(),
        };

        match pool.choose(rng) {
            Some(reply) => reply.clone(),
            None => self.fallback(rng),
        }
    }

    pub fn fallback_set(&self) -> &[&'static str] {
        &self.fallback
    }
}
