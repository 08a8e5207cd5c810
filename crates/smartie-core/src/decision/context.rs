//! Context aggregator
//!
//! Reduces the caller's read-only snapshot to the handful of numbers the scorer
//! needs for one request. Gaps in the snapshot (no budget for the category, no
//! spending history) are filled with configured defaults and flagged so the
//! explainer can mention them.

use crate::config::ScoringConfig;
use crate::models::{FinancialSnapshot, GoalSnapshot, PurchaseRequest};

use super::types::{DecisionContext, GoalImpact};

/// Build the decision context for a request
pub fn build_context(
    request: &PurchaseRequest,
    snapshot: &FinancialSnapshot,
    config: &ScoringConfig,
) -> DecisionContext {
    let cost = request.cost();
    let budget_rules = &config.budget;

    let (remaining_budget, has_budget) = match snapshot.budget_for(request.category()) {
        Some(budget) => (budget.remaining(), true),
        None => {
            tracing::debug!(
                category = request.category().as_str(),
                "No budget for category, treating as unconstrained"
            );
            (budget_rules.unbudgeted_remaining, false)
        }
    };

    let budget_impact_ratio = impact_ratio(
        cost,
        remaining_budget,
        budget_rules.epsilon,
        budget_rules.ratio_ceiling,
    );

    let goal_impacts = snapshot
        .goals
        .iter()
        .map(|goal| goal_impact(cost, goal, config))
        .collect();

    let regret_levels: Vec<f64> = snapshot
        .spending_in(request.category())
        .map(|entry| f64::from(entry.regret_level.min(10)) / 10.0)
        .collect();
    let has_spending_history = !regret_levels.is_empty();
    let category_regret_rate = if has_spending_history {
        regret_levels.iter().sum::<f64>() / regret_levels.len() as f64
    } else {
        config.regret.neutral_rate
    };

    DecisionContext {
        remaining_budget,
        budget_impact_ratio,
        has_budget,
        goal_impacts,
        category_regret_rate,
        has_spending_history,
    }
}

/// Cost relative to what is left, bounded so overspent budgets stay finite
fn impact_ratio(cost: f64, remaining: f64, epsilon: f64, ceiling: f64) -> f64 {
    bounded(cost / remaining.max(epsilon), ceiling)
}

/// Clamp to `[0, ceiling]`; overflow to infinity lands on the ceiling
fn bounded(value: f64, ceiling: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, ceiling)
    } else {
        ceiling
    }
}

fn goal_impact(cost: f64, goal: &GoalSnapshot, config: &ScoringConfig) -> GoalImpact {
    let rules = &config.goals;
    let outstanding = (goal.target_amount - goal.current_amount).max(0.0);

    let weekly_rate = goal
        .weekly_contribution
        .filter(|rate| *rate > 0.0)
        .unwrap_or(outstanding / rules.default_horizon_weeks);

    // A reached goal has nothing left to delay
    let delay_weeks_estimate = if weekly_rate > 0.0 && outstanding > 0.0 {
        bounded(cost / weekly_rate, rules.delay_weeks_ceiling)
    } else {
        0.0
    };

    let impact_percent = if goal.target_amount > 0.0 {
        bounded(cost / goal.target_amount * 100.0, rules.impact_percent_ceiling)
    } else {
        0.0
    };

    GoalImpact {
        goal_name: goal.name.clone(),
        priority: goal.priority,
        delay_weeks_estimate,
        impact_percent,
    }
}
