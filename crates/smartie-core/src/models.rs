//! Domain models for Smartie

use serde::{Deserialize, Serialize};

/// Impulsiveness weight used when no emotional state was reported
pub const NEUTRAL_IMPULSIVENESS: u8 = 5;

/// Spending categories a purchase (and a budget) can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    Food,
    Tech,
    Entertainment,
    Clothing,
    Health,
    Transport,
    Home,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Tech => "tech",
            Self::Entertainment => "entertainment",
            Self::Clothing => "clothing",
            Self::Health => "health",
            Self::Transport => "transport",
            Self::Home => "home",
            Self::Other => "other",
        }
    }

    /// Human-readable label shown in explanations
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food & Dining",
            Self::Tech => "Tech",
            Self::Entertainment => "Entertainment",
            Self::Clothing => "Clothing & Shopping",
            Self::Health => "Health",
            Self::Transport => "Transport",
            Self::Home => "Home",
            Self::Other => "Other",
        }
    }

    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Tech,
            Self::Entertainment,
            Self::Clothing,
            Self::Health,
            Self::Transport,
            Self::Home,
            Self::Other,
        ]
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        match key.as_str() {
            "food" | "fooddining" | "dining" | "groceries" => Ok(Self::Food),
            "tech" | "electronics" | "technology" => Ok(Self::Tech),
            "entertainment" | "fun" => Ok(Self::Entertainment),
            "clothing" | "clothingshopping" | "shopping" | "clothes" => Ok(Self::Clothing),
            "health" | "healthfitness" | "fitness" => Ok(Self::Health),
            "transport" | "transportation" | "travel" => Ok(Self::Transport),
            "home" | "household" => Ok(Self::Home),
            "other" | "misc" | "miscellaneous" => Ok(Self::Other),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Emotional state reported alongside a purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Emotion {
    Happy,
    Stressed,
    Bored,
    Excited,
    Sad,
    Calm,
    Anxious,
    Tired,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Stressed => "stressed",
            Self::Bored => "bored",
            Self::Excited => "excited",
            Self::Sad => "sad",
            Self::Calm => "calm",
            Self::Anxious => "anxious",
            Self::Tired => "tired",
        }
    }

    /// How strongly this state pushes towards impulse buying (1-10)
    pub fn impulsiveness_weight(&self) -> u8 {
        match self {
            Self::Happy => 4,
            Self::Stressed => 8,
            Self::Bored => 7,
            Self::Excited => 8,
            Self::Sad => 7,
            Self::Calm => 2,
            Self::Anxious => 8,
            Self::Tired => 6,
        }
    }

    pub fn all() -> &'static [Emotion] {
        &[
            Self::Happy,
            Self::Stressed,
            Self::Bored,
            Self::Excited,
            Self::Sad,
            Self::Calm,
            Self::Anxious,
            Self::Tired,
        ]
    }
}

/// Impulsiveness weight for an optional emotion (neutral when absent)
pub fn impulsiveness_of(emotion: Option<Emotion>) -> u8 {
    emotion
        .map(|e| e.impulsiveness_weight())
        .unwrap_or(NEUTRAL_IMPULSIVENESS)
}

impl std::str::FromStr for Emotion {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Self::Happy),
            "stressed" => Ok(Self::Stressed),
            "bored" => Ok(Self::Bored),
            "excited" => Ok(Self::Excited),
            "sad" => Ok(Self::Sad),
            "calm" => Ok(Self::Calm),
            "anxious" => Ok(Self::Anxious),
            "tired" => Ok(Self::Tired),
            _ => Err(format!("Unknown emotion: {}", s)),
        }
    }
}

impl TryFrom<String> for Emotion {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Emotion> for String {
    fn from(emotion: Emotion) -> Self {
        emotion.as_str().to_string()
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Savings goal priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    High,
    Medium,
    Low,
}

impl GoalPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::str::FromStr for GoalPriority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(format!("Unknown goal priority: {}", s)),
        }
    }
}

impl std::fmt::Display for GoalPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Monthly budget for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    pub category: Category,
    #[serde(alias = "monthlyLimit")]
    pub monthly_limit: f64,
    pub spent: f64,
}

impl BudgetSnapshot {
    /// Limit minus spent; negative when the category is already overspent
    pub fn remaining(&self) -> f64 {
        self.monthly_limit - self.spent
    }
}

/// A savings goal the user is working towards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSnapshot {
    pub name: String,
    #[serde(alias = "targetAmount")]
    pub target_amount: f64,
    #[serde(alias = "currentAmount")]
    pub current_amount: f64,
    pub priority: GoalPriority,
    /// Known weekly contribution; estimated from the goal horizon when absent
    #[serde(default, alias = "weeklyContribution")]
    pub weekly_contribution: Option<f64>,
}

/// One past purchase with the user's self-reported regret
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingEntry {
    pub category: Category,
    pub amount: f64,
    /// 0 (no regret) to 10 (complete regret)
    #[serde(alias = "regretLevel")]
    pub regret_level: u8,
}

/// Read-only view of the user's finances supplied with each decision
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    #[serde(default)]
    pub budgets: Vec<BudgetSnapshot>,
    #[serde(default)]
    pub goals: Vec<GoalSnapshot>,
    #[serde(default, alias = "recentSpending")]
    pub recent_spending: Vec<SpendingEntry>,
}

impl FinancialSnapshot {
    /// Budget for a category, if the user has set one
    pub fn budget_for(&self, category: Category) -> Option<&BudgetSnapshot> {
        self.budgets.iter().find(|b| b.category == category)
    }

    /// Past purchases in a category
    pub fn spending_in(&self, category: Category) -> impl Iterator<Item = &SpendingEntry> {
        self.recent_spending
            .iter()
            .filter(move |e| e.category == category)
    }
}

/// A validated purchase under consideration.
///
/// Only produced by [`crate::decision::normalize`], so every instance holds
/// in-range sliders and a finite, non-negative cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    item_name: String,
    cost: f64,
    category: Category,
    desire: u8,
    urgency: u8,
    usefulness: u8,
    emotional_state: Option<Emotion>,
    is_time_sensitive: bool,
}

impl PurchaseRequest {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        item_name: String,
        cost: f64,
        category: Category,
        desire: u8,
        urgency: u8,
        usefulness: u8,
        emotional_state: Option<Emotion>,
        is_time_sensitive: bool,
    ) -> Self {
        Self {
            item_name,
            cost,
            category,
            desire,
            urgency,
            usefulness,
            emotional_state,
            is_time_sensitive,
        }
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn desire(&self) -> u8 {
        self.desire
    }

    pub fn urgency(&self) -> u8 {
        self.urgency
    }

    pub fn usefulness(&self) -> u8 {
        self.usefulness
    }

    pub fn emotional_state(&self) -> Option<Emotion> {
        self.emotional_state
    }

    pub fn is_time_sensitive(&self) -> bool {
        self.is_time_sensitive
    }

    pub fn impulsiveness(&self) -> u8 {
        impulsiveness_of(self.emotional_state)
    }
}
