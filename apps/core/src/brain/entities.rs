//! Named entity extraction with regex patterns.
//!
//! Recognizes temporal references (`DATE`), named individuals (`PERSON`) and
//! bare numbers (`CARDINAL`). Names are only taken after an introduction or
//! relational cue, or after a title, so ordinary capitalized words are not
//! mistaken for people.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use super::analysis::{Entity, EntityCategory};
use super::keywords::is_stopword;

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        \b(?:
            (?:next|this|last|coming)\s+
                (?:monday|tuesday|wednesday|thursday|friday|saturday|sunday|weekend|week|month|semester|term|year)
          | (?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)
                (?:\s+(?:morning|afternoon|evening|night))?
          | today | tonight | tomorrow | yesterday | weekend
          | in\s+\d{1,3}\s+(?:days?|weeks?)
          | (?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?
              |sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)
                \.?\s+\d{1,2}(?:st|nd|rd|th)?
          | \d{1,2}(?:st|nd|rd|th)?\s+(?:of\s+)?
                (?:january|february|march|april|may|june|july|august|september|october|november|december)
          | \d{4}-\d{2}-\d{2}
          # slash dates need a year so fractions like 1/2 stay out
          | (?:0?[1-9]|[12]\d|3[01])/(?:0?[1-9]|[12]\d|3[01])/(?:\d{4}|\d{2})
        )\b",
    )
    .expect("Invalid regex: date pattern")
});

static TITLED_PERSON_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:(?:Dr|Mr|Mrs|Ms|Prof)\.?|Professor)\s+[A-Z][a-z]+(?:\s+[A-Z][a-z]+)?")
        .expect("Invalid regex: titled person pattern")
});

static CUED_PERSON_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i:\b(?:my\s+name\s+is|name's|i['’]m|i\s+am|call\s+me|tell|meet|met|my\s+(?:friend|roommate|roomie|mate|brother|sister|mom|dad|cousin|advisor|mentor|tutor))\s+)([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)",
    )
    .expect("Invalid regex: cued person pattern")
});

static CARDINAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+(?:\.\d+)?\b").expect("Invalid regex: cardinal pattern"));

/// Capitalized words that are never names
const NON_NAMES: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "january",
    "february", "march", "april", "may", "june", "july", "august", "september", "october",
    "november", "december", "today", "tonight", "tomorrow", "yesterday", "hi", "hello", "hey",
    "thanks", "okay", "ok", "yes", "please", "sorry", "good", "happy", "sad", "stressed",
    "tired", "fine", "campus", "library", "hostel",
];

#[derive(Debug, Clone)]
struct Span {
    start: usize,
    end: usize,
    category: EntityCategory,
}

/// Regex-driven entity extractor
pub struct EntityExtractor {
    non_names: HashSet<&'static str>,
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityExtractor {
    pub fn new() -> Self {
        Self {
            non_names: NON_NAMES.iter().copied().collect(),
        }
    }

    fn is_name_word(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        !self.non_names.contains(lower.as_str()) && !is_stopword(&lower)
    }

    /// Trim a captured name to its leading run of plausible name words
    fn name_span(&self, text: &str, start: usize, end: usize) -> Option<Span> {
        let candidate = &text[start..end];
        let mut name_end = start;
        let mut offset = 0;
        for word in candidate.split_whitespace() {
            let word_start = start + offset + candidate[offset..].find(word)?;
            if !self.is_name_word(word) {
                break;
            }
            name_end = word_start + word.len();
            offset = name_end - start;
        }
        (name_end > start).then_some(Span {
            start,
            end: name_end,
            category: EntityCategory::Person,
        })
    }

    fn candidate_spans(&self, text: &str) -> Vec<Span> {
        let mut spans: Vec<Span> = DATE_PATTERN
            .find_iter(text)
            .map(|m| Span {
                start: m.start(),
                end: m.end(),
                category: EntityCategory::Date,
            })
            .collect();

        spans.extend(TITLED_PERSON_PATTERN.find_iter(text).map(|m| Span {
            start: m.start(),
            end: m.end(),
            category: EntityCategory::Person,
        }));

        spans.extend(
            CUED_PERSON_PATTERN
                .captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .filter_map(|m| self.name_span(text, m.start(), m.end())),
        );

        spans.extend(CARDINAL_PATTERN.find_iter(text).map(|m| Span {
            start: m.start(),
            end: m.end(),
            category: EntityCategory::Cardinal,
        }));

        spans
    }

    /// Extract entities in text order. Overlapping spans keep the earliest,
    /// then the longest, then the most specific category.
    pub fn extract(&self, text: &str) -> Vec<Entity> {
        let mut spans = self.candidate_spans(text);
        spans.sort_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then((b.end - b.start).cmp(&(a.end - a.start)))
                .then(a.category.priority().cmp(&b.category.priority()))
        });

        let mut entities = Vec::new();
        let mut covered_until = 0;
        for span in spans {
            if span.start < covered_until {
                continue;
            }
            covered_until = span.end;
            entities.push(Entity {
                text: text[span.start..span.end].to_string(),
                category: span.category,
            });
        }
        entities
    }
}
