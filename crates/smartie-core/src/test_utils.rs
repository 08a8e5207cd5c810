//! Test utilities for smartie-core
//!
//! Builders for validated requests and ready-made snapshots, shared by unit
//! tests, integration tests and the CLI tests.

use crate::models::{
    BudgetSnapshot, Category, Emotion, FinancialSnapshot, GoalPriority, GoalSnapshot,
    PurchaseRequest, SpendingEntry,
};

/// Build a request directly, skipping the normalizer (sliders must be in range)
pub fn request(
    cost: f64,
    category: Category,
    desire: u8,
    urgency: u8,
    usefulness: u8,
    emotion: Option<Emotion>,
) -> PurchaseRequest {
    request_named(
        "Test item", cost, category, desire, urgency, usefulness, emotion, false,
    )
}

/// Like [`request`], with a name and time-sensitivity flag
#[allow(clippy::too_many_arguments)]
pub fn request_named(
    name: &str,
    cost: f64,
    category: Category,
    desire: u8,
    urgency: u8,
    usefulness: u8,
    emotion: Option<Emotion>,
    is_time_sensitive: bool,
) -> PurchaseRequest {
    PurchaseRequest::from_parts(
        name.to_string(),
        cost,
        category,
        desire.clamp(1, 10),
        urgency.clamp(1, 10),
        usefulness.clamp(1, 10),
        emotion,
        is_time_sensitive,
    )
}

/// A month part-way through: food nearly spent, transport comfortable,
/// one high-priority and one low-priority goal, mixed regret history
pub fn sample_snapshot() -> FinancialSnapshot {
    FinancialSnapshot {
        budgets: vec![
            BudgetSnapshot {
                category: Category::Food,
                monthly_limit: 200.0,
                spent: 150.0,
            },
            BudgetSnapshot {
                category: Category::Transport,
                monthly_limit: 150.0,
                spent: 30.0,
            },
            BudgetSnapshot {
                category: Category::Tech,
                monthly_limit: 400.0,
                spent: 100.0,
            },
        ],
        goals: vec![
            GoalSnapshot {
                name: "Emergency fund".to_string(),
                target_amount: 3000.0,
                current_amount: 1200.0,
                priority: GoalPriority::High,
                weekly_contribution: Some(50.0),
            },
            GoalSnapshot {
                name: "New bike".to_string(),
                target_amount: 600.0,
                current_amount: 100.0,
                priority: GoalPriority::Low,
                weekly_contribution: None,
            },
        ],
        recent_spending: vec![
            SpendingEntry {
                category: Category::Food,
                amount: 42.0,
                regret_level: 6,
            },
            SpendingEntry {
                category: Category::Food,
                amount: 18.0,
                regret_level: 2,
            },
            SpendingEntry {
                category: Category::Entertainment,
                amount: 60.0,
                regret_level: 9,
            },
        ],
    }
}
