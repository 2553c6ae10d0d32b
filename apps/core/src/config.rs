//! Chatbot configuration.
//!
//! Defaults are overridden by `CAMPUS_BUDDY_*` environment variables, and the
//! binary layers its command-line flags on top. Every source ends in
//! [`ChatbotConfig::validate`].

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use validator::{Validate, ValidationError};

use crate::error::AppError;

pub const CATALOG_ENV: &str = "CAMPUS_BUDDY_CATALOG";
pub const MATCH_THRESHOLD_ENV: &str = "CAMPUS_BUDDY_MATCH_THRESHOLD";
pub const TONE_ENV: &str = "CAMPUS_BUDDY_TONE";
pub const RESPONSE_STYLE_ENV: &str = "CAMPUS_BUDDY_RESPONSE_STYLE";
pub const SUPPORT_CUTOFF_ENV: &str = "CAMPUS_BUDDY_SUPPORT_CUTOFF";
pub const PACING_NUMERATOR_ENV: &str = "CAMPUS_BUDDY_PACING_NUMERATOR";
pub const PACING_MIN_ENV: &str = "CAMPUS_BUDDY_PACING_MIN";
pub const PACING_MAX_ENV: &str = "CAMPUS_BUDDY_PACING_MAX";

/// Personality used when decorating replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonalityTone {
    /// Playful sign-offs after every reply
    #[default]
    Witty,
    /// Replies are left as selected
    Neutral,
}

impl fmt::Display for PersonalityTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersonalityTone::Witty => write!(f, "witty"),
            PersonalityTone::Neutral => write!(f, "neutral"),
        }
    }
}

impl FromStr for PersonalityTone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "witty" => Ok(PersonalityTone::Witty),
            "neutral" => Ok(PersonalityTone::Neutral),
            other => Err(format!("unknown personality tone '{}'", other)),
        }
    }
}

/// Whether distressed users get the supportive reply pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStyle {
    #[default]
    Empathetic,
    Plain,
}

impl fmt::Display for ResponseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseStyle::Empathetic => write!(f, "empathetic"),
            ResponseStyle::Plain => write!(f, "plain"),
        }
    }
}

impl FromStr for ResponseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "empathetic" => Ok(ResponseStyle::Empathetic),
            "plain" => Ok(ResponseStyle::Plain),
            other => Err(format!("unknown response style '{}'", other)),
        }
    }
}

/// Bounds for the per-word reveal delay, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_pacing_bounds"))]
pub struct PacingConfig {
    /// Total reveal budget spread over the words of a reply
    #[validate(range(exclusive_min = 0.0))]
    pub numerator: f32,
    #[validate(range(exclusive_min = 0.0))]
    pub min_delay: f32,
    #[validate(range(exclusive_min = 0.0))]
    pub max_delay: f32,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            numerator: 1.5,
            min_delay: 0.03,
            max_delay: 0.1,
        }
    }
}

fn validate_pacing_bounds(pacing: &PacingConfig) -> Result<(), ValidationError> {
    // NaN slips through range checks
    if ![pacing.numerator, pacing.min_delay, pacing.max_delay]
        .iter()
        .all(|v| v.is_finite())
    {
        return Err(ValidationError::new("pacing_not_finite"));
    }
    if pacing.min_delay > pacing.max_delay {
        return Err(ValidationError::new("min_delay_exceeds_max_delay"));
    }
    Ok(())
}

/// Tunables for the response pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_finite_scores"))]
pub struct ChatbotConfig {
    /// Intent catalog on disk; the bundled catalog is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Best similarity must be strictly above this to count as a match
    #[validate(range(min = 0.0, max = 1.0))]
    pub match_threshold: f32,
    pub personality_tone: PersonalityTone,
    pub response_style: ResponseStyle,
    /// Sentiment strictly below this selects supportive replies
    pub support_cutoff: f32,
    #[validate(nested)]
    pub pacing: PacingConfig,
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            match_threshold: 0.4,
            personality_tone: PersonalityTone::Witty,
            response_style: ResponseStyle::Empathetic,
            support_cutoff: -0.5,
            pacing: PacingConfig::default(),
        }
    }
}

fn validate_finite_scores(config: &ChatbotConfig) -> Result<(), ValidationError> {
    if !config.match_threshold.is_finite() {
        return Err(ValidationError::new("match_threshold_not_finite"));
    }
    if !(-1.0..=1.0).contains(&config.support_cutoff) {
        return Err(ValidationError::new("support_cutoff_out_of_range"));
    }
    Ok(())
}

impl ChatbotConfig {
    /// Build a configuration from defaults overridden by environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(path) = read_env(CATALOG_ENV)? {
            config.catalog_path = Some(PathBuf::from(path));
        }
        if let Some(threshold) = parse_env(MATCH_THRESHOLD_ENV)? {
            config.match_threshold = threshold;
        }
        if let Some(tone) = parse_env(TONE_ENV)? {
            config.personality_tone = tone;
        }
        if let Some(style) = parse_env(RESPONSE_STYLE_ENV)? {
            config.response_style = style;
        }
        if let Some(cutoff) = parse_env(SUPPORT_CUTOFF_ENV)? {
            config.support_cutoff = cutoff;
        }
        if let Some(numerator) = parse_env(PACING_NUMERATOR_ENV)? {
            config.pacing.numerator = numerator;
        }
        if let Some(min_delay) = parse_env(PACING_MIN_ENV)? {
            config.pacing.min_delay = min_delay;
        }
        if let Some(max_delay) = parse_env(PACING_MAX_ENV)? {
            config.pacing.max_delay = max_delay;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Read an environment variable, treating unset and blank the same way.
fn read_env(key: &str) -> Result<Option<String>, AppError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(AppError::Config(format!(
            "{} is not valid unicode",
            key
        ))),
    }
}

fn parse_env<T>(key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match read_env(key)? {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{}={:?}: {}", key, raw, e))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_VARS: [&str; 8] = [
        CATALOG_ENV,
        MATCH_THRESHOLD_ENV,
        TONE_ENV,
        RESPONSE_STYLE_ENV,
        SUPPORT_CUTOFF_ENV,
        PACING_NUMERATOR_ENV,
        PACING_MIN_ENV,
        PACING_MAX_ENV,
    ];

    fn unset_all() -> Vec<(&'static str, Option<&'static str>)> {
        ALL_VARS.iter().map(|k| (*k, None)).collect()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = ChatbotConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.match_threshold, 0.4);
        assert_eq!(config.support_cutoff, -0.5);
        assert_eq!(config.personality_tone, PersonalityTone::Witty);
        assert_eq!(config.pacing, PacingConfig::default());
    }

    #[test]
    fn test_from_env_without_overrides() {
        temp_env::with_vars(unset_all(), || {
            let config = ChatbotConfig::from_env().expect("defaults should load");
            assert_eq!(config, ChatbotConfig::default());
        });
    }

    #[test]
    fn test_from_env_overrides() {
        let mut vars = unset_all();
        vars.retain(|(k, _)| {
            ![MATCH_THRESHOLD_ENV, TONE_ENV, PACING_MAX_ENV, CATALOG_ENV].contains(k)
        });
        vars.push((MATCH_THRESHOLD_ENV, Some("0.55")));
        vars.push((TONE_ENV, Some("Neutral")));
        vars.push((PACING_MAX_ENV, Some("0.2")));
        vars.push((CATALOG_ENV, Some("/tmp/intents.json")));

        temp_env::with_vars(vars, || {
            let config = ChatbotConfig::from_env().expect("overrides should load");
            assert_eq!(config.match_threshold, 0.55);
            assert_eq!(config.personality_tone, PersonalityTone::Neutral);
            assert_eq!(config.pacing.max_delay, 0.2);
            assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/intents.json")));
        });
    }

    #[test]
    fn test_unparsable_env_value_is_config_error() {
        let mut vars = unset_all();
        vars.retain(|(k, _)| *k != MATCH_THRESHOLD_ENV);
        vars.push((MATCH_THRESHOLD_ENV, Some("high")));

        temp_env::with_vars(vars, || {
            let err = ChatbotConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Config(_)));
        });
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let config = ChatbotConfig {
            match_threshold: 1.5,
            ..ChatbotConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_support_cutoff_range() {
        let config = ChatbotConfig {
            support_cutoff: -1.2,
            ..ChatbotConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ChatbotConfig {
            support_cutoff: -0.9,
            ..ChatbotConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_finite_env_values_rejected() {
        let numeric = [
            MATCH_THRESHOLD_ENV,
            SUPPORT_CUTOFF_ENV,
            PACING_NUMERATOR_ENV,
            PACING_MIN_ENV,
            PACING_MAX_ENV,
        ];

        for key in numeric {
            for raw in ["NaN", "inf", "-inf"] {
                let mut vars = unset_all();
                vars.retain(|(k, _)| *k != key);
                vars.push((key, Some(raw)));

                temp_env::with_vars(vars, || {
                    let result = ChatbotConfig::from_env();
                    assert!(
                        matches!(result, Err(AppError::Config(_))),
                        "{}={} should be rejected, got {:?}",
                        key,
                        raw,
                        result
                    );
                });
            }
        }
    }

    #[test]
    fn test_nan_threshold_rejected_without_env() {
        let config = ChatbotConfig {
            match_threshold: f32::NAN,
            ..ChatbotConfig::default()
        };
        assert!(config.validate().is_err());

        let pacing = PacingConfig {
            max_delay: f32::NAN,
            ..PacingConfig::default()
        };
        assert!(pacing.validate().is_err());
    }

    #[test]
    fn test_inverted_pacing_bounds_rejected() {
        let config = ChatbotConfig {
            pacing: PacingConfig {
                numerator: 1.5,
                min_delay: 0.2,
                max_delay: 0.1,
            },
            ..ChatbotConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_pacing_rejected() {
        let config = ChatbotConfig {
            pacing: PacingConfig {
                numerator: 0.0,
                ..PacingConfig::default()
            },
            ..ChatbotConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_tone_and_style_parsing() {
        assert_eq!("WITTY".parse::<PersonalityTone>(), Ok(PersonalityTone::Witty));
        assert!("sarcastic".parse::<PersonalityTone>().is_err());
        assert_eq!("plain".parse::<ResponseStyle>(), Ok(ResponseStyle::Plain));
        assert_eq!(ResponseStyle::Empathetic.to_string(), "empathetic");
    }

    #[test]
    fn test_config_deserializes_with_partial_fields() {
        let config: ChatbotConfig =
            serde_json::from_str(r#"{"match_threshold": 0.3, "personality_tone": "neutral"}"#)
                .expect("partial config should deserialize");
        assert_eq!(config.match_threshold, 0.3);
        assert_eq!(config.personality_tone, PersonalityTone::Neutral);
        assert_eq!(config.support_cutoff, -0.5);
    }
}
