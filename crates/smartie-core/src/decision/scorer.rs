//! Smartness scorer
//!
//! Starts from a base score and applies a fixed sequence of bounded rules.
//! Every rule that fires is recorded as a [`ScoreFactor`] so the explainer can
//! describe exactly what moved the score and nothing else.

use crate::config::ScoringConfig;
use crate::models::{Emotion, GoalPriority, PurchaseRequest};

use super::types::{DecisionContext, FactorKind, ScoreBreakdown, ScoreFactor};

/// Score a validated request against its context
pub fn score(
    request: &PurchaseRequest,
    context: &DecisionContext,
    config: &ScoringConfig,
) -> ScoreBreakdown {
    let mut factors = Vec::new();
    let mut push = |kind: FactorKind, delta: i32| factors.push(ScoreFactor { kind, delta });

    // Urgency
    let urgency = &config.urgency;
    if request.urgency() <= urgency.low_max {
        push(FactorKind::PatientUrgency, urgency.patient_bonus);
    } else if request.urgency() >= urgency.high_min {
        push(FactorKind::GenuineNeed, urgency.genuine_need_bonus);
    } else {
        push(FactorKind::AmbiguousUrgency, -urgency.ambiguous_penalty);
    }

    // Usefulness vs desire
    let ratio = rationality_ratio(request);
    if ratio > config.utility.high_ratio {
        push(FactorKind::HighUtility, config.utility.high_bonus);
    } else if ratio < config.utility.low_ratio {
        push(FactorKind::LowUtility, -config.utility.low_penalty);
    }

    // Budget; unbudgeted categories arrive with the sentinel remaining budget
    let budget = &config.budget;
    if request.cost() > context.remaining_budget {
        push(FactorKind::OverBudget, -budget.over_budget_penalty);
    } else if context.budget_impact_ratio > budget.heavy_ratio {
        push(FactorKind::HeavyBudgetImpact, -budget.heavy_penalty);
    } else if context.budget_impact_ratio < budget.light_ratio {
        push(FactorKind::LightBudgetImpact, budget.light_bonus);
    }

    // Goals: applied once no matter how many high-priority goals are hit
    let goal_setback = context.goal_impacts.iter().any(|g| {
        g.priority == GoalPriority::High && g.impact_percent > config.goals.impact_threshold_percent
    });
    if goal_setback {
        push(FactorKind::GoalSetback, -config.goals.setback_penalty);
    }

    // Regret
    let regret = regret_quantity(request, context, config);
    if regret > config.regret.threshold {
        push(FactorKind::RegretRisk, -config.regret.penalty);
    }

    // Emotional state
    match request.emotional_state() {
        Some(Emotion::Stressed) | Some(Emotion::Bored) => {
            push(
                FactorKind::EmotionalSpending,
                -config.emotion.negative_penalty,
            );
        }
        Some(Emotion::Happy) | Some(Emotion::Calm) => {
            push(FactorKind::PositiveMindset, config.emotion.positive_bonus);
        }
        _ => {}
    }

    let total = factors
        .iter()
        .fold(config.base_score, |acc, f| acc.saturating_add(f.delta));
    let score = total.clamp(0, 100) as u8;
    let regret_risk = regret.round().clamp(0.0, 100.0) as u8;

    tracing::debug!(
        score,
        raw = total,
        regret_risk,
        fired = factors.len(),
        "Scored purchase"
    );

    ScoreBreakdown {
        score,
        regret_risk,
        factors,
    }
}

/// Usefulness divided by desire (desire floored at 1)
pub fn rationality_ratio(request: &PurchaseRequest) -> f64 {
    f64::from(request.usefulness()) / f64::from(request.desire().max(1))
}

/// Historical regret (as a percentage) plus a penalty for desire exceeding usefulness
fn regret_quantity(
    request: &PurchaseRequest,
    context: &DecisionContext,
    config: &ScoringConfig,
) -> f64 {
    let desire_gap = f64::from(request.desire()) - f64::from(request.usefulness());
    context.category_regret_rate * 100.0 + desire_gap * config.regret.desire_gap_weight
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::types::GoalImpact;
    use crate::models::Category;
    use crate::test_utils::request;

    fn context(remaining: f64, ratio: f64) -> DecisionContext {
        DecisionContext {
            remaining_budget: remaining,
            budget_impact_ratio: ratio,
            has_budget: true,
            goal_impacts: vec![],
            category_regret_rate: 0.3,
            has_spending_history: false,
        }
    }

    fn kinds(breakdown: &ScoreBreakdown) -> Vec<FactorKind> {
        breakdown.factors.iter().map(|f| f.kind).collect()
    }

    #[test]
    fn test_overrun_scenario() {
        let req = request(120.0, Category::Food, 9, 8, 3, Some(Emotion::Stressed));
        let result = score(&req, &context(50.0, 2.4), &ScoringConfig::default());

        // 50 + 10 - 15 - 25 - 15
        assert_eq!(result.score, 5);
        assert_eq!(
            kinds(&result),
            vec![
                FactorKind::GenuineNeed,
                FactorKind::LowUtility,
                FactorKind::OverBudget,
                FactorKind::EmotionalSpending,
            ]
        );
        // 30 + (9 - 3) * 5 = 60, not above the threshold
        assert_eq!(result.regret_risk, 60);
        assert!(!result.fired(FactorKind::RegretRisk));
    }

    #[test]
    fn test_sensible_purchase_scenario() {
        let req = request(15.0, Category::Transport, 4, 2, 8, Some(Emotion::Calm));
        let result = score(&req, &context(400.0, 15.0 / 400.0), &ScoringConfig::default());

        // 50 + 15 + 20 + 5 + 5
        assert_eq!(result.score, 95);
        assert_eq!(
            kinds(&result),
            vec![
                FactorKind::PatientUrgency,
                FactorKind::HighUtility,
                FactorKind::LightBudgetImpact,
                FactorKind::PositiveMindset,
            ]
        );
    }

    #[test]
    fn test_mid_urgency_penalized() {
        let req = request(10.0, Category::Other, 5, 5, 5, None);
        let result = score(&req, &context(100.0, 0.2), &ScoringConfig::default());
        assert_eq!(kinds(&result), vec![FactorKind::AmbiguousUrgency]);
        assert_eq!(result.score, 45);
    }

    #[test]
    fn test_heavy_budget_impact() {
        let req = request(40.0, Category::Other, 5, 5, 5, None);
        let result = score(&req, &context(100.0, 0.4), &ScoringConfig::default());
        assert!(result.fired(FactorKind::HeavyBudgetImpact));
        assert_eq!(result.score, 35);
    }

    #[test]
    fn test_unbudgeted_category_counts_as_light_impact() {
        let req = request(40.0, Category::Other, 5, 5, 5, None);
        let mut ctx = context(1_000_000_000.0, 40.0 / 1_000_000_000.0);
        ctx.has_budget = false;
        let result = score(&req, &ctx, &ScoringConfig::default());

        // 50 - 5 + 5
        assert!(result.fired(FactorKind::LightBudgetImpact));
        assert_eq!(result.score, 50);
    }

    #[test]
    fn test_unbudgeted_patient_purchase_reaches_buy() {
        let req = request(10.0, Category::Tech, 5, 2, 5, None);
        let mut ctx = context(1_000_000_000.0, 10.0 / 1_000_000_000.0);
        ctx.has_budget = false;
        let result = score(&req, &ctx, &ScoringConfig::default());

        // 50 + 15 + 5
        assert_eq!(result.score, 70);
    }

    #[test]
    fn test_goal_setback_applied_once() {
        let req = request(300.0, Category::Tech, 5, 5, 5, None);
        let mut ctx = context(1000.0, 0.2);
        for name in ["House", "Wedding"] {
            ctx.goal_impacts.push(GoalImpact {
                goal_name: name.to_string(),
                priority: GoalPriority::High,
                delay_weeks_estimate: 3.0,
                impact_percent: 25.0,
            });
        }
        let result = score(&req, &ctx, &ScoringConfig::default());

        let setbacks = kinds(&result)
            .into_iter()
            .filter(|k| *k == FactorKind::GoalSetback)
            .count();
        assert_eq!(setbacks, 1);
        assert_eq!(result.score, 30);
    }

    #[test]
    fn test_low_priority_goal_ignored() {
        let req = request(300.0, Category::Tech, 5, 5, 5, None);
        let mut ctx = context(1000.0, 0.2);
        ctx.goal_impacts.push(GoalImpact {
            goal_name: "Guitar".to_string(),
            priority: GoalPriority::Low,
            delay_weeks_estimate: 10.0,
            impact_percent: 80.0,
        });
        let result = score(&req, &ctx, &ScoringConfig::default());
        assert!(!result.fired(FactorKind::GoalSetback));
    }

    #[test]
    fn test_regret_penalty() {
        let req = request(20.0, Category::Entertainment, 8, 5, 5, None);
        let mut ctx = context(200.0, 0.1);
        ctx.category_regret_rate = 0.6;
        let result = score(&req, &ctx, &ScoringConfig::default());

        // 60 + 3 * 5 = 75
        assert_eq!(result.regret_risk, 75);
        assert!(result.fired(FactorKind::RegretRisk));
    }

    #[test]
    fn test_score_clamped_at_zero() {
        let req = request(500.0, Category::Food, 10, 5, 1, Some(Emotion::Bored));
        let mut ctx = context(10.0, 10.0);
        ctx.category_regret_rate = 1.0;
        ctx.goal_impacts.push(GoalImpact {
            goal_name: "Rent".to_string(),
            priority: GoalPriority::High,
            delay_weeks_estimate: 20.0,
            impact_percent: 50.0,
        });
        let result = score(&req, &ctx, &ScoringConfig::default());

        // 50 - 5 - 15 - 25 - 15 - 10 - 15 = -35
        assert_eq!(result.score, 0);
        assert_eq!(result.regret_risk, 100);
    }

    #[test]
    fn test_extreme_adjustments_saturate() {
        let mut config = ScoringConfig::default();
        config.utility.high_bonus = i32::MAX;
        let req = request(10.0, Category::Other, 1, 5, 10, None);
        let result = score(&req, &context(100.0, 0.2), &config);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_neutral_emotions_do_not_adjust() {
        for emotion in [Emotion::Excited, Emotion::Sad, Emotion::Anxious, Emotion::Tired] {
            let req = request(10.0, Category::Other, 5, 5, 5, Some(emotion));
            let result = score(&req, &context(100.0, 0.2), &ScoringConfig::default());
            assert_eq!(result.score, 45, "{} should be neutral", emotion);
        }
    }
}
