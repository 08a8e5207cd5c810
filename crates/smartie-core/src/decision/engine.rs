//! Decision engine - runs the pipeline end to end

use crate::config::ScoringConfig;
use crate::error::Result;
use crate::models::{FinancialSnapshot, PurchaseRequest};

use super::builder::build;
use super::classifier::classify;
use super::context::build_context;
use super::explainer::explain;
use super::normalize::{normalize, RawPurchaseInput};
use super::scorer::score;
use super::types::Decision;

/// Purchase decision engine.
///
/// Holds only immutable tuning, so one engine can serve concurrent callers.
/// Nothing is cached between calls: every decision reads the snapshot it is
/// given and nothing else.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    config: ScoringConfig,
}

impl DecisionEngine {
    /// Create an engine with the given tuning
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Validate raw input, then evaluate it.
    ///
    /// Validation failures are returned before any scoring runs.
    pub fn decide(&self, raw: &RawPurchaseInput, snapshot: &FinancialSnapshot) -> Result<Decision> {
        let request = normalize(raw)?;
        Ok(self.evaluate(&request, snapshot))
    }

    /// Evaluate an already-validated request
    pub fn evaluate(&self, request: &PurchaseRequest, snapshot: &FinancialSnapshot) -> Decision {
        let context = build_context(request, snapshot, &self.config);
        tracing::debug!(
            remaining = context.remaining_budget,
            ratio = context.budget_impact_ratio,
            regret_rate = context.category_regret_rate,
            goals = context.goal_impacts.len(),
            "Built decision context"
        );

        let breakdown = score(request, &context, &self.config);
        let (recommendation, confidence) = classify(breakdown.score, &self.config.tiers);
        let explanation = explain(request, &context, &breakdown, recommendation, &self.config);

        tracing::info!(
            item = request.item_name(),
            category = request.category().as_str(),
            recommendation = recommendation.as_str(),
            confidence,
            "Purchase decision made"
        );

        build(recommendation, confidence, breakdown, explanation, context)
    }
}
