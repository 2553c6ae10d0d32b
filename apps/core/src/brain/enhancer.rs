//! Response Enhancer - personality flourishes and entity callbacks.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use super::analysis::{AnalysisRecord, EntityCategory};
use crate::config::PersonalityTone;

/// Sign-offs used by the witty personality
pub const WITTY_FRAGMENTS: &[&str] = &[" 😄", " You're awesome!", " BTW, did you smile today?"];

/// Decides which flourish, if any, a reply gets
pub trait Personality: Send + Sync {
    fn flourish(&self, rng: &mut dyn RngCore) -> Option<&'static str>;
}

pub struct WittyPersonality;

impl Personality for WittyPersonality {
    fn flourish(&self, rng: &mut dyn RngCore) -> Option<&'static str> {
        WITTY_FRAGMENTS.choose(rng).copied()
    }
}

pub struct NeutralPersonality;

impl Personality for NeutralPersonality {
    fn flourish(&self, _rng: &mut dyn RngCore) -> Option<&'static str> {
        None
    }
}

/// Personality policy for a configured tone
pub fn personality_for(tone: PersonalityTone) -> Box<dyn Personality> {
    match tone {
        PersonalityTone::Witty => Box::new(WittyPersonality),
        PersonalityTone::Neutral => Box::new(NeutralPersonality),
    }
}

pub fn calendar_fragment(when: &str) -> String {
    format!(" 📅 Don't forget to add {} to your calendar!", when)
}

pub fn greeting_fragment(who: &str) -> String {
    format!(" 👋 Say hi to {} for me!", who)
}

pub struct ResponseEnhancer {
    personality: Box<dyn Personality>,
}

impl ResponseEnhancer {
    pub fn new(personality: Box<dyn Personality>) -> Self {
        Self { personality }
    }

    pub fn for_tone(tone: PersonalityTone) -> Self {
        Self::new(personality_for(tone))
    }

    /// Append the personality flourish, then one callback per date or person
    /// entity in record order.
    pub fn enhance<R: Rng>(&self, reply: &str, analysis: &AnalysisRecord, rng: &mut R) -> String {
        let mut enhanced = reply.to_string();

        if let Some(flourish) = self.personality.flourish(rng) {
            enhanced.push_str(flourish);
        }

        for entity in &analysis.entities {
            match entity.category {
                EntityCategory::Date => enhanced.push_str(&calendar_fragment(&entity.text)),
                EntityCategory::Person => enhanced.push_str(&greeting_fragment(&entity.text)),
                EntityCategory::Cardinal => {}
            }
        }

        enhanced
    }
}
