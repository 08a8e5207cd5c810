//! Smartie Core Library
//!
//! Purchase decision analysis for the Smartie finance coach:
//! - Domain models for purchases, budgets, goals and spending history
//! - Decision pipeline (normalize, context, score, classify, explain, build)
//! - Tunable scoring configuration with file overrides
//! - Snapshot source and decision sink seams for callers

pub mod config;
pub mod decision;
pub mod error;
pub mod models;
pub mod store;

/// Test utilities: request builders and sample snapshots
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{default_config_path, ScoringConfig};
pub use decision::{Decision, DecisionEngine, RawAmount, RawPurchaseInput, Recommendation};
pub use error::{Error, FieldViolation, Result, ValidationError};
pub use models::{
    BudgetSnapshot, Category, Emotion, FinancialSnapshot, GoalPriority, GoalSnapshot,
    PurchaseRequest, SpendingEntry,
};
pub use store::{
    default_log_path, DecisionRecord, DecisionSink, JsonSnapshotFile, JsonlDecisionLog,
    SnapshotSource,
};
