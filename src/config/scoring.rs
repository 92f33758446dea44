// ABOUTME: Menu match scoring configuration with weights and category thresholds
// ABOUTME: Defaults reproduce the production heuristic; validation guards custom values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Menu Match Scoring Configuration
//!
//! Weights applied by the preference match scorer and the thresholds that
//! bucket a final score into a [`MatchCategory`](platewise_core::models::MatchCategory).
//! The upper bound of a score is fixed at 100 and is not configurable.

use super::error::ConfigError;
use platewise_core::constants::scoring;
use platewise_core::models::CategoryThresholds;
use serde::{Deserialize, Serialize};

/// Menu match scoring configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Points applied by each check
    #[serde(default)]
    pub weights: ScoringWeights,
    /// Category boundaries
    #[serde(default)]
    pub thresholds: CategoryThresholds,
}

/// Points applied by each scoring check
///
/// `*_score` values move the running score; `*_bonus` values feed a
/// separate bonus counter added once at the end, before clamping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Starting score
    pub base_score: u32,
    /// Score an item is reset to on a dietary violation
    pub violation_score: u32,
    /// Added for compliance with a restriction that rewards it
    pub compliant_bonus: u32,
    /// Added on a favorite protein match
    pub protein_score: u32,
    /// Bonus on a favorite protein match
    pub protein_bonus: u32,
    /// Added on a favorite cuisine match
    pub cuisine_score: u32,
    /// Bonus on a favorite cuisine match
    pub cuisine_bonus: u32,
    /// Added on a favorite ingredient match
    pub ingredient_score: u32,
    /// Bonus on a favorite ingredient match
    pub ingredient_bonus: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base_score: scoring::BASE_SCORE,
            violation_score: scoring::VIOLATION_SCORE,
            compliant_bonus: scoring::COMPLIANT_BONUS,
            protein_score: scoring::PROTEIN_MATCH_SCORE,
            protein_bonus: scoring::PROTEIN_MATCH_BONUS,
            cuisine_score: scoring::CUISINE_MATCH_SCORE,
            cuisine_bonus: scoring::CUISINE_MATCH_BONUS,
            ingredient_score: scoring::INGREDIENT_MATCH_SCORE,
            ingredient_bonus: scoring::INGREDIENT_MATCH_BONUS,
        }
    }
}

impl ScoringConfig {
    /// Validate weights and thresholds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if a starting score exceeds 100 or
    /// the thresholds are not ordered `warning_below <= good < perfect <= 100`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weights.base_score > scoring::MAX_SCORE {
            return Err(ConfigError::InvalidRange("base_score must be <= 100"));
        }
        if self.weights.violation_score > scoring::MAX_SCORE {
            return Err(ConfigError::InvalidRange("violation_score must be <= 100"));
        }

        let thresholds = &self.thresholds;
        if thresholds.perfect > scoring::MAX_SCORE {
            return Err(ConfigError::InvalidRange("perfect threshold must be <= 100"));
        }
        if thresholds.good >= thresholds.perfect {
            return Err(ConfigError::InvalidRange(
                "good threshold must be < perfect threshold",
            ));
        }
        if thresholds.warning_below > thresholds.good {
            return Err(ConfigError::InvalidRange(
                "warning threshold must be <= good threshold",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ScoringConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.weights.base_score, 50);
        assert_eq!(config.thresholds.perfect, 90);
    }

    #[test]
    fn test_unordered_thresholds_rejected() {
        let mut config = ScoringConfig::default();
        config.thresholds.good = 95;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));

        let mut config = ScoringConfig::default();
        config.thresholds.warning_below = 80;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ScoringConfig =
            serde_json::from_str(r#"{"thresholds":{"perfect":95,"good":70,"warning_below":30}}"#)
                .unwrap();
        assert_eq!(config.thresholds.perfect, 95);
        assert_eq!(config.weights, ScoringWeights::default());
        assert!(config.validate().is_ok());
    }
}
