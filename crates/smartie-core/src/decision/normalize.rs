//! Input normalizer
//!
//! Turns whatever a form or API caller sent into a [`PurchaseRequest`].
//! Structural problems (blank name, bad cost, unknown category or emotion) are
//! rejected; slider values are clamped into range since they only go out of
//! bounds when a non-UI caller sends them.

use serde::{Deserialize, Serialize};

use crate::error::{FieldViolation, ValidationError};
use crate::models::{Category, Emotion, PurchaseRequest};

const SLIDER_MIN: i64 = 1;
const SLIDER_MAX: i64 = 10;

/// A cost as submitted: either a JSON number or free text like "£1,200.50"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}

/// Unvalidated purchase input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPurchaseInput {
    #[serde(alias = "item_name")]
    pub item_name: String,
    pub cost: RawAmount,
    pub category: String,
    pub desire: i64,
    pub urgency: i64,
    pub usefulness: i64,
    #[serde(default, alias = "emotional_state")]
    pub emotional_state: Option<String>,
    #[serde(default, alias = "is_time_sensitive")]
    pub is_time_sensitive: bool,
}

/// Validate and coerce raw input into a canonical request
pub fn normalize(raw: &RawPurchaseInput) -> Result<PurchaseRequest, ValidationError> {
    let mut violations = Vec::new();

    let item_name = raw.item_name.trim();
    if item_name.is_empty() {
        violations.push(FieldViolation {
            field: "itemName",
            message: "must not be empty".to_string(),
        });
    }

    let cost = match parse_amount(&raw.cost) {
        Ok(cost) => Some(cost),
        Err(message) => {
            violations.push(FieldViolation {
                field: "cost",
                message,
            });
            None
        }
    };

    let category = match raw.category.parse::<Category>() {
        Ok(category) => Some(category),
        Err(message) => {
            violations.push(FieldViolation {
                field: "category",
                message,
            });
            None
        }
    };

    let emotional_state = match raw.emotional_state.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(name) => match name.parse::<Emotion>() {
            Ok(emotion) => Some(emotion),
            Err(message) => {
                violations.push(FieldViolation {
                    field: "emotionalState",
                    message,
                });
                None
            }
        },
    };

    match (cost, category) {
        (Some(cost), Some(category)) if violations.is_empty() => Ok(PurchaseRequest::from_parts(
            item_name.to_string(),
            cost,
            category,
            clamp_slider("desire", raw.desire),
            clamp_slider("urgency", raw.urgency),
            clamp_slider("usefulness", raw.usefulness),
            emotional_state,
            raw.is_time_sensitive,
        )),
        _ => Err(ValidationError::new(violations)),
    }
}

fn clamp_slider(name: &str, value: i64) -> u8 {
    let clamped = value.clamp(SLIDER_MIN, SLIDER_MAX);
    if clamped != value {
        tracing::debug!(slider = name, value, clamped, "Clamped out-of-range slider");
    }
    clamped as u8
}

/// Parse a cost, accepting a leading currency symbol and thousands separators
fn parse_amount(raw: &RawAmount) -> Result<f64, String> {
    let value = match raw {
        RawAmount::Number(n) => *n,
        RawAmount::Text(text) => {
            let cleaned: String = text
                .trim()
                .trim_start_matches(['£', '$', '€'])
                .chars()
                .filter(|c| *c != ',' && !c.is_whitespace())
                .collect();
            if cleaned.is_empty() {
                return Err("must not be empty".to_string());
            }
            cleaned
                .parse::<f64>()
                .map_err(|_| format!("'{}' is not a number", text))?
        }
    };

    if !value.is_finite() {
        return Err("must be a finite number".to_string());
    }
    if value < 0.0 {
        return Err(format!("must not be negative (got {})", value));
    }
    Ok(value)
}
