//! Decision explainer
//!
//! Builds the human-readable side of a decision. Reasoning bullets come only
//! from the factors the scorer recorded, so the explanation can never cite a
//! rule that did not affect the score.

use crate::config::ScoringConfig;
use crate::models::{Category, GoalPriority, PurchaseRequest};

use super::types::{
    DecisionContext, Explanation, FactorKind, GoalImpact, Recommendation, ScoreBreakdown,
    ScoreFactor,
};

/// Impulsiveness at or above this is called out as risky
const HIGH_IMPULSIVENESS: u8 = 7;
/// Impulsiveness at or below this is called out as a good state to decide in
const LOW_IMPULSIVENESS: u8 = 3;

const GENERIC_ALTERNATIVES: &[&str] = &[
    "Add it to a 30-day wishlist and see if you still want it",
    "Look for a cheaper alternative that does the same job",
    "Ask whether you could borrow it from a friend",
];

/// Category-specific alternatives; categories missing here use the generic list
const CATEGORY_ALTERNATIVES: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &[
            "Cook something similar at home",
            "Check for meal deals or discount codes",
            "Save it as a planned weekend treat",
        ],
    ),
    (
        Category::Tech,
        &[
            "Look for a refurbished or previous-generation model",
            "Wait for a seasonal sale",
            "Check whether a device you own already covers this",
        ],
    ),
    (
        Category::Entertainment,
        &[
            "Look for free local events",
            "Share a subscription with family or friends",
            "Borrow it from a library",
        ],
    ),
    (
        Category::Clothing,
        &[
            "Check the second-hand market",
            "Try a clothing swap",
            "Restyle something already in your wardrobe",
        ],
    ),
    (
        Category::Transport,
        &[
            "Walk, cycle or take public transport",
            "Share the journey with someone heading the same way",
        ],
    ),
    (
        Category::Home,
        &[
            "Rent or borrow instead of buying",
            "Look for second-hand furniture",
            "Try a DIY fix first",
        ],
    ),
];

/// Explain a scored and classified request
pub fn explain(
    request: &PurchaseRequest,
    context: &DecisionContext,
    breakdown: &ScoreBreakdown,
    recommendation: Recommendation,
    config: &ScoringConfig,
) -> Explanation {
    let mut reasoning: Vec<String> = breakdown
        .factors
        .iter()
        .map(|factor| reason_for(factor, request, context, breakdown, config))
        .collect();
    if reasoning.is_empty() {
        reasoning.push("No strong signals either way, so this one is a judgement call".to_string());
    }

    let alternatives = if recommendation == Recommendation::Buy {
        Vec::new()
    } else {
        alternatives_for(request.category())
            .iter()
            .map(|s| s.to_string())
            .collect()
    };

    let wait_suggestion = if request.is_time_sensitive() {
        None
    } else {
        wait_suggestion(request, recommendation)
    };

    Explanation {
        reasoning,
        emotional_insight: emotional_insight(request),
        financial_impact: financial_impact(request, context),
        alternatives,
        wait_suggestion,
    }
}

/// Alternatives shown for a category when the answer is not `buy`
pub fn alternatives_for(category: Category) -> &'static [&'static str] {
    CATEGORY_ALTERNATIVES
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, list)| *list)
        .unwrap_or(GENERIC_ALTERNATIVES)
}

fn reason_for(
    factor: &ScoreFactor,
    request: &PurchaseRequest,
    context: &DecisionContext,
    breakdown: &ScoreBreakdown,
    config: &ScoringConfig,
) -> String {
    let label = request.category().label();
    match factor.kind {
        FactorKind::PatientUrgency => {
            "Low urgency: there is time to compare options before buying".to_string()
        }
        FactorKind::GenuineNeed => "High urgency suggests this meets a genuine need".to_string(),
        FactorKind::AmbiguousUrgency => {
            "Moderate urgency: it is unclear whether this is needed right now".to_string()
        }
        FactorKind::HighUtility => format!(
            "High utility, controlled desire: usefulness {}/10 against desire {}/10",
            request.usefulness(),
            request.desire()
        ),
        FactorKind::LowUtility => format!(
            "Desire ({}/10) is running well ahead of usefulness ({}/10)",
            request.desire(),
            request.usefulness()
        ),
        FactorKind::OverBudget => {
            if !context.has_budget {
                format!("{} is beyond any sensible unbudgeted spend", money(request.cost()))
            } else if context.remaining_budget <= 0.0 {
                format!("Your {} budget is already used up this month", label)
            } else {
                format!(
                    "{} is more than the {} left in your {} budget",
                    money(request.cost()),
                    money(context.remaining_budget),
                    label
                )
            }
        }
        FactorKind::HeavyBudgetImpact => format!(
            "This would use {:.0}% of what is left in your {} budget",
            context.budget_impact_ratio * 100.0,
            label
        ),
        FactorKind::LightBudgetImpact => {
            if context.has_budget {
                format!(
                    "Only {:.0}% of your remaining {} budget",
                    context.budget_impact_ratio * 100.0,
                    label
                )
            } else {
                format!("No {} budget set, so there is no limit to strain", label)
            }
        }
        FactorKind::GoalSetback => match worst_high_priority_goal(context, config) {
            Some(goal) => format!(
                "Sets back your high-priority goal '{}' ({:.0}% of its target, about {:.1} weeks)",
                goal.goal_name, goal.impact_percent, goal.delay_weeks_estimate
            ),
            None => "Sets back one of your high-priority goals".to_string(),
        },
        FactorKind::RegretRisk => {
            if context.has_spending_history {
                format!(
                    "Regret risk is high ({}%): past {} purchases were often regretted",
                    breakdown.regret_risk, label
                )
            } else {
                format!(
                    "Regret risk is high ({}%): wanting it this much more than you need it rarely ends well",
                    breakdown.regret_risk
                )
            }
        }
        FactorKind::EmotionalSpending => match request.emotional_state() {
            Some(emotion) => format!(
                "Feeling {} makes impulse purchases more likely",
                emotion
            ),
            None => "Your current mood makes impulse purchases more likely".to_string(),
        },
        FactorKind::PositiveMindset => match request.emotional_state() {
            Some(emotion) => format!("You are feeling {}, a good state for clear decisions", emotion),
            None => "You are in a good state for clear decisions".to_string(),
        },
    }
}

fn worst_high_priority_goal<'a>(
    context: &'a DecisionContext,
    config: &ScoringConfig,
) -> Option<&'a GoalImpact> {
    context
        .goal_impacts
        .iter()
        .filter(|g| {
            g.priority == GoalPriority::High
                && g.impact_percent > config.goals.impact_threshold_percent
        })
        .max_by(|a, b| a.impact_percent.total_cmp(&b.impact_percent))
}

fn emotional_insight(request: &PurchaseRequest) -> String {
    let Some(emotion) = request.emotional_state() else {
        return "No mood logged. Noticing how you feel helps catch impulse buys".to_string();
    };

    let weight = emotion.impulsiveness_weight();
    if weight >= HIGH_IMPULSIVENESS {
        format!(
            "Feeling {} (impulse risk {}/10): purchases made in this state are often regretted, so pause before committing",
            emotion, weight
        )
    } else if weight <= LOW_IMPULSIVENESS {
        format!(
            "Feeling {} (impulse risk {}/10): a clear head for weighing this up",
            emotion, weight
        )
    } else {
        format!(
            "Feeling {} (impulse risk {}/10): moderate pull towards impulse buying",
            emotion, weight
        )
    }
}

fn financial_impact(request: &PurchaseRequest, context: &DecisionContext) -> String {
    let cost = request.cost();
    let label = request.category().label();

    let mut summary = if !context.has_budget {
        format!(
            "No budget set for {}, so this {} purchase can't be checked against a limit.",
            label,
            money(cost)
        )
    } else if context.remaining_budget <= 0.0 {
        format!(
            "Your {} budget is already overspent by {}; this would add {} more.",
            label,
            money(-context.remaining_budget),
            money(cost)
        )
    } else if cost > context.remaining_budget {
        format!(
            "{} exceeds the {} left in {} by {}.",
            money(cost),
            money(context.remaining_budget),
            label,
            money(cost - context.remaining_budget)
        )
    } else {
        format!(
            "Uses {:.0}% of the {} left in your {} budget, leaving {}.",
            context.budget_impact_ratio * 100.0,
            money(context.remaining_budget),
            label,
            money(context.remaining_budget - cost)
        )
    };

    let most_delayed = context
        .goal_impacts
        .iter()
        .filter(|g| g.delay_weeks_estimate > 0.0)
        .max_by(|a, b| a.delay_weeks_estimate.total_cmp(&b.delay_weeks_estimate));
    if let Some(goal) = most_delayed {
        summary.push_str(&format!(
            " Could delay '{}' by about {:.1} weeks.",
            goal.goal_name, goal.delay_weeks_estimate
        ));
    }

    summary
}

fn wait_suggestion(request: &PurchaseRequest, recommendation: Recommendation) -> Option<String> {
    match recommendation {
        Recommendation::Buy => None,
        Recommendation::Wait => {
            let hours = if request.impulsiveness() >= HIGH_IMPULSIVENESS {
                72
            } else {
                48
            };
            Some(format!(
                "Add {} to your wishlist and revisit in {} hours. If you still want it then, it is a considered purchase",
                request.item_name(),
                hours
            ))
        }
        Recommendation::Skip => Some(format!(
            "Give it a week. Most urges for something like {} fade within 7 days",
            request.item_name()
        )),
    }
}

fn money(amount: f64) -> String {
    format!("£{:.2}", amount)
}
