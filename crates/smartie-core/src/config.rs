//! Scoring configuration
//!
//! Every threshold and adjustment the decision engine applies lives here, so
//! the heuristics can be tuned without touching the pipeline.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. Check for an override file (explicit path, else ~/.local/share/smartie/config/decision.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! Override files may be partial; missing keys keep their default values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Largest magnitude any single bonus or penalty may have
const MAX_ADJUSTMENT: i32 = 100;

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/decision.toml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrgencyRules {
    pub low_max: u8,
    pub patient_bonus: i32,
    pub high_min: u8,
    pub genuine_need_bonus: i32,
    pub ambiguous_penalty: i32,
}

impl Default for UrgencyRules {
    fn default() -> Self {
        Self {
            low_max: 3,
            patient_bonus: 15,
            high_min: 8,
            genuine_need_bonus: 10,
            ambiguous_penalty: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilityRules {
    pub high_ratio: f64,
    pub high_bonus: i32,
    pub low_ratio: f64,
    pub low_penalty: i32,
}

impl Default for UtilityRules {
    fn default() -> Self {
        Self {
            high_ratio: 1.2,
            high_bonus: 20,
            low_ratio: 0.7,
            low_penalty: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetRules {
    pub over_budget_penalty: i32,
    pub heavy_ratio: f64,
    pub heavy_penalty: i32,
    pub light_ratio: f64,
    pub light_bonus: i32,
    /// Floor for the remaining budget when computing the impact ratio
    pub epsilon: f64,
    /// Upper bound of the impact ratio
    pub ratio_ceiling: f64,
    /// Remaining budget assumed for categories with no budget set
    pub unbudgeted_remaining: f64,
}

impl Default for BudgetRules {
    fn default() -> Self {
        Self {
            over_budget_penalty: 25,
            heavy_ratio: 0.30,
            heavy_penalty: 10,
            light_ratio: 0.10,
            light_bonus: 5,
            epsilon: 0.01,
            ratio_ceiling: 10.0,
            unbudgeted_remaining: 1_000_000_000.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalRules {
    pub impact_threshold_percent: f64,
    pub setback_penalty: i32,
    pub default_horizon_weeks: f64,
    pub impact_percent_ceiling: f64,
    /// Upper bound of a goal delay estimate, in weeks
    pub delay_weeks_ceiling: f64,
}

impl Default for GoalRules {
    fn default() -> Self {
        Self {
            impact_threshold_percent: 10.0,
            setback_penalty: 15,
            default_horizon_weeks: 20.0,
            impact_percent_ceiling: 1000.0,
            delay_weeks_ceiling: 520.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegretRules {
    /// Regret rate assumed for categories with no spending history
    pub neutral_rate: f64,
    /// Points of regret risk per point of desire above usefulness
    pub desire_gap_weight: f64,
    pub threshold: f64,
    pub penalty: i32,
}

impl Default for RegretRules {
    fn default() -> Self {
        Self {
            neutral_rate: 0.3,
            desire_gap_weight: 5.0,
            threshold: 60.0,
            penalty: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionRules {
    pub negative_penalty: i32,
    pub positive_bonus: i32,
}

impl Default for EmotionRules {
    fn default() -> Self {
        Self {
            negative_penalty: 15,
            positive_bonus: 5,
        }
    }
}

/// Score cut-offs between recommendation tiers (lower bound inclusive)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub buy_threshold: u8,
    pub wait_threshold: u8,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            buy_threshold: 70,
            wait_threshold: 40,
        }
    }
}

/// Full tuning for the decision engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub base_score: i32,
    pub urgency: UrgencyRules,
    pub utility: UtilityRules,
    pub budget: BudgetRules,
    pub goals: GoalRules,
    pub regret: RegretRules,
    pub emotion: EmotionRules,
    pub tiers: TierThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 50,
            urgency: UrgencyRules::default(),
            utility: UtilityRules::default(),
            budget: BudgetRules::default(),
            goals: GoalRules::default(),
            regret: RegretRules::default(),
            emotion: EmotionRules::default(),
            tiers: TierThresholds::default(),
        }
    }
}

impl ScoringConfig {
    /// Config compiled into the binary
    pub fn embedded() -> Result<Self> {
        parse_config(DEFAULT_CONFIG)
    }

    /// Load configuration (override first, then embedded default)
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let path = match override_path {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path(),
        };

        match path {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", path.display(), e))
                })?;
                tracing::debug!(path = %path.display(), "Using scoring config override");
                parse_config(&content)
            }
            Some(path) if override_path.is_some() => {
                tracing::warn!(
                    path = %path.display(),
                    "Scoring config override not found, using defaults"
                );
                Self::embedded()
            }
            _ => Self::embedded(),
        }
    }

    /// Reject configurations that would make the classifier or context math meaningless
    pub fn validate(&self) -> Result<()> {
        let tiers = &self.tiers;
        if tiers.buy_threshold > 100 || tiers.wait_threshold >= tiers.buy_threshold {
            return Err(Error::Config(format!(
                "Tier thresholds must satisfy wait < buy <= 100 (wait={}, buy={})",
                tiers.wait_threshold, tiers.buy_threshold
            )));
        }
        if self.urgency.low_max >= self.urgency.high_min {
            return Err(Error::Config(format!(
                "Urgency low_max ({}) must be below high_min ({})",
                self.urgency.low_max, self.urgency.high_min
            )));
        }
        if self.utility.low_ratio > self.utility.high_ratio {
            return Err(Error::Config(
                "Utility low_ratio must not exceed high_ratio".to_string(),
            ));
        }
        if self.budget.epsilon <= 0.0 || self.budget.ratio_ceiling <= 0.0 {
            return Err(Error::Config(
                "Budget epsilon and ratio_ceiling must be positive".to_string(),
            ));
        }
        if self.goals.default_horizon_weeks <= 0.0
            || self.goals.impact_percent_ceiling <= 0.0
            || self.goals.delay_weeks_ceiling <= 0.0
        {
            return Err(Error::Config(
                "Goal default_horizon_weeks and ceilings must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.regret.neutral_rate) {
            return Err(Error::Config(
                "Regret neutral_rate must be between 0 and 1".to_string(),
            ));
        }
        if !(0..=100).contains(&self.base_score) {
            return Err(Error::Config(format!(
                "base_score must be between 0 and 100 (got {})",
                self.base_score
            )));
        }
        // Penalties are subtracted by the scorer, so every value here is a magnitude
        for (name, value) in self.adjustments() {
            if !(0..=MAX_ADJUSTMENT).contains(&value) {
                return Err(Error::Config(format!(
                    "{} must be between 0 and {} (got {})",
                    name, MAX_ADJUSTMENT, value
                )));
            }
        }
        Ok(())
    }

    fn adjustments(&self) -> [(&'static str, i32); 12] {
        [
            ("urgency.patient_bonus", self.urgency.patient_bonus),
            ("urgency.genuine_need_bonus", self.urgency.genuine_need_bonus),
            ("urgency.ambiguous_penalty", self.urgency.ambiguous_penalty),
            ("utility.high_bonus", self.utility.high_bonus),
            ("utility.low_penalty", self.utility.low_penalty),
            ("budget.over_budget_penalty", self.budget.over_budget_penalty),
            ("budget.heavy_penalty", self.budget.heavy_penalty),
            ("budget.light_bonus", self.budget.light_bonus),
            ("goals.setback_penalty", self.goals.setback_penalty),
            ("regret.penalty", self.regret.penalty),
            ("emotion.negative_penalty", self.emotion.negative_penalty),
            ("emotion.positive_bonus", self.emotion.positive_bonus),
        ]
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("smartie").join("config").join("decision.toml"))
}

/// Parse config from TOML content, filling gaps with defaults
fn parse_config(content: &str) -> Result<ScoringConfig> {
    let config: ScoringConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
