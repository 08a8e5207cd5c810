//! Core types for the decision pipeline

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::GoalPriority;

/// What Smartie advises the user to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Buy,
    Wait,
    Skip,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Buy => "buy",
            Recommendation::Wait => "wait",
            Recommendation::Skip => "skip",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Recommendation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Recommendation::Buy),
            "wait" => Ok(Recommendation::Wait),
            "skip" => Ok(Recommendation::Skip),
            _ => Err(format!("Unknown recommendation: {}", s)),
        }
    }
}

/// Projected effect of the purchase on one savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalImpact {
    pub goal_name: String,
    pub priority: GoalPriority,
    /// Heuristic projection, not a guarantee
    pub delay_weeks_estimate: f64,
    /// Cost as a percentage of the goal target
    pub impact_percent: f64,
}

/// Everything the scorer needs to know about the user's finances for one request.
///
/// Built fresh for every call and never retained.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionContext {
    /// Budget left in the purchase's category (negative when overspent)
    pub remaining_budget: f64,
    /// Cost divided by remaining budget, always finite and capped
    pub budget_impact_ratio: f64,
    /// False when the category has no budget and defaults were used
    pub has_budget: bool,
    pub goal_impacts: Vec<GoalImpact>,
    /// Mean historical regret in [0, 1]
    pub category_regret_rate: f64,
    /// False when no past purchases matched and the neutral rate was used
    pub has_spending_history: bool,
}

/// A scoring rule that fired for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    /// Low urgency, the purchase can wait
    PatientUrgency,
    /// High urgency, presumed genuine need
    GenuineNeed,
    /// Mid-range urgency
    AmbiguousUrgency,
    /// Usefulness comfortably outweighs desire
    HighUtility,
    /// Desire comfortably outweighs usefulness
    LowUtility,
    /// Cost exceeds what is left in the category budget
    OverBudget,
    /// Cost takes a large share of the remaining budget
    HeavyBudgetImpact,
    /// Cost is a small share of the remaining budget
    LightBudgetImpact,
    /// A high-priority goal would be set back noticeably
    GoalSetback,
    /// History and desire gap suggest likely regret
    RegretRisk,
    /// Shopping while stressed or bored
    EmotionalSpending,
    /// Shopping while happy or calm
    PositiveMindset,
}

impl FactorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FactorKind::PatientUrgency => "patient_urgency",
            FactorKind::GenuineNeed => "genuine_need",
            FactorKind::AmbiguousUrgency => "ambiguous_urgency",
            FactorKind::HighUtility => "high_utility",
            FactorKind::LowUtility => "low_utility",
            FactorKind::OverBudget => "over_budget",
            FactorKind::HeavyBudgetImpact => "heavy_budget_impact",
            FactorKind::LightBudgetImpact => "light_budget_impact",
            FactorKind::GoalSetback => "goal_setback",
            FactorKind::RegretRisk => "regret_risk",
            FactorKind::EmotionalSpending => "emotional_spending",
            FactorKind::PositiveMindset => "positive_mindset",
        }
    }
}

impl fmt::Display for FactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fired rule and the signed adjustment it applied to the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreFactor {
    pub kind: FactorKind,
    pub delta: i32,
}

/// Scorer output: the clamped score and the rules that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    /// Smartness score in [0, 100]
    pub score: u8,
    /// Projected regret risk in [0, 100]
    pub regret_risk: u8,
    /// Fired rules, in evaluation order
    pub factors: Vec<ScoreFactor>,
}

impl ScoreBreakdown {
    pub fn fired(&self, kind: FactorKind) -> bool {
        self.factors.iter().any(|f| f.kind == kind)
    }

    /// The factor with the largest absolute adjustment, if any fired
    pub fn dominant(&self) -> Option<&ScoreFactor> {
        self.factors.iter().max_by_key(|f| f.delta.abs())
    }
}

/// Explainer output, ready to be folded into a [`Decision`]
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub reasoning: Vec<String>,
    pub emotional_insight: String,
    pub financial_impact: String,
    pub alternatives: Vec<String>,
    pub wait_suggestion: Option<String>,
}

/// The engine's verdict on a purchase. Immutable once built; the caller owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub recommendation: Recommendation,
    /// Confidence in the recommendation, in [0, 100]
    pub confidence: u8,
    /// The smartness score the recommendation was classified from
    pub score: u8,
    pub reasoning: Vec<String>,
    pub emotional_insight: String,
    pub financial_impact: String,
    /// Empty when the recommendation is `buy`
    pub alternatives: Vec<String>,
    pub wait_suggestion: Option<String>,
    pub regret_risk: u8,
    pub goal_impacts: Vec<GoalImpact>,
    pub factors: Vec<ScoreFactor>,
}
