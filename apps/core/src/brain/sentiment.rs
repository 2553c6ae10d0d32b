//! Lexicon-based sentiment scoring.
//!
//! Word valences sit roughly on a -4..4 scale. Boosters and dampeners in the
//! three preceding words shift a valence away from or toward zero, a negation
//! in the same window flips and damps it, and exclamation marks add emphasis.
//! The summed valence is normalized into [-1, 1] with `x / sqrt(x² + 15)`.

use std::collections::{HashMap, HashSet};

use super::lemma::lemmatize;

/// Normalization constant: a raw sum of ±2.24 maps to ±0.5
const NORMALIZATION_ALPHA: f32 = 15.0;
const BOOSTER_INCREMENT: f32 = 0.293;
const NEGATION_SCALAR: f32 = -0.74;
const EXCLAMATION_INCREMENT: f32 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
/// Modifier influence by distance from the scored word
const WINDOW_DECAY: [f32; 3] = [1.0, 0.95, 0.9];

const LEXICON: &[(&str, f32)] = &[
    // Positive
    ("good", 1.9),
    ("great", 3.1),
    ("awesome", 3.1),
    ("amazing", 2.8),
    ("wonderful", 2.7),
    ("fantastic", 2.6),
    ("beautiful", 2.9),
    ("happy", 2.7),
    ("glad", 2.0),
    ("love", 3.2),
    ("enjoy", 2.2),
    ("excited", 2.2),
    ("exciting", 2.2),
    ("fun", 2.3),
    ("nice", 1.8),
    ("cool", 1.3),
    ("thanks", 1.9),
    ("thank", 1.5),
    ("helpful", 1.8),
    ("calm", 1.3),
    ("relaxed", 1.8),
    ("relieved", 1.6),
    ("confident", 2.2),
    ("proud", 2.2),
    ("hope", 1.9),
    ("hopeful", 2.3),
    ("better", 1.9),
    ("best", 3.2),
    ("win", 2.8),
    ("passed", 1.5),
    ("smile", 1.5),
    ("laugh", 2.6),
    ("yay", 2.4),
    ("okay", 0.9),
    ("ok", 0.9),
    ("fine", 0.8),
    // Negative
    ("bad", -2.5),
    ("terrible", -2.5),
    ("horrible", -2.5),
    ("awful", -2.5),
    ("worst", -3.1),
    ("hate", -2.7),
    ("sad", -2.1),
    ("unhappy", -1.8),
    ("depressed", -2.3),
    ("miserable", -2.7),
    ("hopeless", -2.7),
    ("helpless", -2.0),
    ("lonely", -2.0),
    ("alone", -1.0),
    ("homesick", -1.7),
    ("miss", -1.1),
    ("anxious", -1.8),
    ("anxiety", -1.8),
    ("nervous", -1.5),
    ("worried", -1.8),
    ("worry", -1.7),
    ("scared", -1.9),
    ("afraid", -1.9),
    ("terrified", -2.7),
    ("panic", -2.5),
    ("stressed", -2.0),
    ("stress", -1.8),
    ("overwhelmed", -2.2),
    ("overwhelming", -2.0),
    ("tired", -1.2),
    ("exhausted", -1.9),
    ("angry", -2.3),
    ("upset", -1.6),
    ("frustrated", -2.0),
    ("annoyed", -1.6),
    ("confused", -1.3),
    ("fail", -2.3),
    ("failed", -2.3),
    ("failing", -2.3),
    ("cry", -2.1),
    ("crying", -2.1),
    ("hurt", -2.4),
    ("struggle", -1.7),
    ("struggling", -1.7),
    ("lost", -1.3),
    ("quit", -1.4),
    ("sick", -1.8),
    ("boring", -1.3),
    ("bored", -1.1),
    ("problem", -1.7),
    ("die", -2.9),
];

const BOOSTERS: &[&str] = &[
    "very",
    "really",
    "so",
    "extremely",
    "super",
    "totally",
    "too",
    "incredibly",
    "absolutely",
    "completely",
    "seriously",
    "deeply",
];

const DAMPENERS: &[&str] = &["slightly", "somewhat", "kinda", "kind", "sort", "barely", "little"];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "none", "neither", "nor", "cannot", "without",
    "dont", "cant", "wont", "isnt", "wasnt", "didnt", "doesnt",
];

/// Sentiment scorer with a fixed word-valence lexicon
pub struct SentimentScorer {
    lexicon: HashMap<&'static str, f32>,
    boosters: HashSet<&'static str>,
    dampeners: HashSet<&'static str>,
    negations: HashSet<&'static str>,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
            boosters: BOOSTERS.iter().copied().collect(),
            dampeners: DAMPENERS.iter().copied().collect(),
            negations: NEGATIONS.iter().copied().collect(),
        }
    }

    /// Lower-cased words with edge punctuation removed; inner apostrophes kept
    fn tokenize(text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|w| {
                w.trim_matches(|c: char| !c.is_alphanumeric())
                    .replace('’', "'")
                    .to_lowercase()
            })
            .filter(|w| !w.is_empty())
            .collect()
    }

    fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(token) || token.ends_with("n't")
    }

    fn valence(&self, token: &str) -> Option<f32> {
        self.lexicon
            .get(token)
            .or_else(|| self.lexicon.get(lemmatize(token).as_str()))
            .copied()
    }

    /// Polarity of `text` in [-1, 1]; 0 for empty or neutral text.
    pub fn score(&self, text: &str) -> f32 {
        let tokens = Self::tokenize(text);
        let mut sum = 0.0f32;

        for (i, token) in tokens.iter().enumerate() {
            let Some(mut valence) = self.valence(token) else {
                continue;
            };

            let mut negated = false;
            for (distance, decay) in WINDOW_DECAY.iter().enumerate() {
                let Some(prev) = i.checked_sub(distance + 1).map(|j| tokens[j].as_str()) else {
                    break;
                };
                let shift = BOOSTER_INCREMENT * decay * valence.signum();
                if self.boosters.contains(prev) {
                    valence += shift;
                } else if self.dampeners.contains(prev) {
                    valence -= shift;
                } else if self.is_negation(prev) {
                    negated = true;
                }
            }
            if negated {
                valence *= NEGATION_SCALAR;
            }

            sum += valence;
        }

        if sum != 0.0 {
            let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS) as f32;
            sum += exclamations * EXCLAMATION_INCREMENT * sum.signum();
        }

        normalize(sum)
    }
}

fn normalize(sum: f32) -> f32 {
    if sum == 0.0 {
        return 0.0;
    }
    (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}
