//! Score to recommendation mapping

use crate::config::TierThresholds;

use super::types::Recommendation;

/// Classify a smartness score, returning the recommendation and its confidence.
///
/// Tier lower bounds are inclusive: a score equal to the buy threshold is a
/// buy, a score equal to the wait threshold is a wait. Confidence is the score
/// itself for buys and its complement otherwise.
pub fn classify(score: u8, tiers: &TierThresholds) -> (Recommendation, u8) {
    let score = score.min(100);
    if score >= tiers.buy_threshold {
        (Recommendation::Buy, score)
    } else if score >= tiers.wait_threshold {
        (Recommendation::Wait, 100 - score)
    } else {
        (Recommendation::Skip, 100 - score)
    }
}
