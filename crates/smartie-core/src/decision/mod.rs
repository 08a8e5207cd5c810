//! Purchase Decision Engine
//!
//! Takes a prospective purchase plus a read-only snapshot of the user's
//! budgets, goals and recent spending, and produces a buy / wait / skip
//! recommendation that explains itself.
//!
//! ## Pipeline
//!
//! Every stage is a pure function of its inputs:
//!
//! - **Normalizer** - validates raw input into a `PurchaseRequest`
//! - **Context** - reduces the snapshot to budget, goal and regret figures
//! - **Scorer** - applies the tunable rules, recording each one that fires
//! - **Classifier** - maps the score to a recommendation and confidence
//! - **Explainer** - turns the fired rules into reasoning and suggestions
//! - **Builder** - assembles the immutable `Decision`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use smartie_core::decision::DecisionEngine;
//!
//! let engine = DecisionEngine::new(ScoringConfig::load(None)?);
//! let decision = engine.decide(&raw_input, &snapshot)?;
//! ```

pub mod builder;
pub mod classifier;
pub mod context;
pub mod engine;
pub mod explainer;
pub mod normalize;
pub mod scorer;
pub mod types;

pub use builder::build;
pub use classifier::classify;
pub use context::build_context;
pub use engine::DecisionEngine;
pub use explainer::{alternatives_for, explain};
pub use normalize::{normalize, RawAmount, RawPurchaseInput};
pub use scorer::{rationality_ratio, score};
pub use types::{
    Decision, DecisionContext, Explanation, FactorKind, GoalImpact, Recommendation,
    ScoreBreakdown, ScoreFactor,
};
