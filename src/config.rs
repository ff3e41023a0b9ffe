use serde::{Deserialize, Serialize};

use crate::{AnchorRule, Calculator, DEFAULT_POINTS_PER_CORRECT, DEFAULT_TIME_LIMIT_SECS, Difficulty};

/// Settings for a game: which century anchor rule to teach and how quiz
/// rounds are played. Every field has a default, so an empty document is valid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub anchor_rule: AnchorRule,
    pub quiz: QuizConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub difficulty: Difficulty,
    pub time_limit_secs: u32,
    pub points_per_correct: u32,
    /// Fixed seed for reproducible rounds; a fresh one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            points_per_correct: DEFAULT_POINTS_PER_CORRECT,
            seed: None,
        }
    }
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Quiz time limit must be at least one second")]
    ZeroTimeLimit,
}

impl Config {
    /// Parses a TOML document.
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` for malformed TOML or unknown values and
    /// `ConfigError::ZeroTimeLimit` for a quiz without time on the clock.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        if config.quiz.time_limit_secs == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(config)
    }

    pub const fn calculator(&self) -> Calculator {
        Calculator::new(self.anchor_rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.anchor_rule, AnchorRule::Gregorian);
        assert_eq!(config.quiz.time_limit_secs, 120);
        assert_eq!(config.quiz.points_per_correct, 10);
        assert_eq!(config.quiz.seed, None);
    }

    #[test]
    fn test_full_document() {
        let config = Config::from_toml_str(
            r#"
            anchor_rule = "legacy"

            [quiz]
            difficulty = "hard"
            time_limit_secs = 60
            points_per_correct = 5
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(config.anchor_rule, AnchorRule::Legacy);
        assert_eq!(config.calculator(), Calculator::new(AnchorRule::Legacy));
        assert_eq!(config.quiz.difficulty, Difficulty::Hard);
        assert_eq!(config.quiz.time_limit_secs, 60);
        assert_eq!(config.quiz.points_per_correct, 5);
        assert_eq!(config.quiz.seed, Some(42));
    }

    #[test]
    fn test_unknown_rule_rejected() {
        let result = Config::from_toml_str(r#"anchor_rule = "julian""#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_zero_time_limit_rejected() {
        let result = Config::from_toml_str("[quiz]\ntime_limit_secs = 0");
        assert!(matches!(result, Err(ConfigError::ZeroTimeLimit)));
    }
}
