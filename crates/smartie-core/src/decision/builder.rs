//! Decision record builder

use super::types::{Decision, DecisionContext, Explanation, Recommendation, ScoreBreakdown};

/// Assemble the final decision. No computation happens here beyond enforcing
/// that `buy` never carries alternatives or a wait suggestion.
pub fn build(
    recommendation: Recommendation,
    confidence: u8,
    breakdown: ScoreBreakdown,
    explanation: Explanation,
    context: DecisionContext,
) -> Decision {
    let (alternatives, wait_suggestion) = match recommendation {
        Recommendation::Buy => (Vec::new(), None),
        _ => (explanation.alternatives, explanation.wait_suggestion),
    };

    Decision {
        recommendation,
        confidence,
        score: breakdown.score,
        reasoning: explanation.reasoning,
        emotional_insight: explanation.emotional_insight,
        financial_impact: explanation.financial_impact,
        alternatives,
        wait_suggestion,
        regret_risk: breakdown.regret_risk,
        goal_impacts: context.goal_impacts,
        factors: breakdown.factors,
    }
}
