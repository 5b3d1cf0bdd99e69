//! Budgeting models: priced inputs, unit compositions and client budgets

use crate::config::round_money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of priced resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputCategory {
    Material,
    Labor,
    Equipment,
}

/// A priced resource used by compositions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub unit_price: f64,
    pub category: InputCategory,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create input request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInputRequest {
    pub name: String,
    pub unit: String,
    pub unit_price: f64,
    pub category: InputCategory,
}

/// Update input request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInputRequest {
    pub name: Option<String>,
    pub unit: Option<String>,
    pub unit_price: Option<f64>,
    pub category: Option<InputCategory>,
}

/// Quantity of one input inside a composition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositionInput {
    pub input_id: String,
    pub quantity: f64,
}

/// A unit service composed of inputs (e.g. one square meter of masonry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub id: String,
    pub code: String,
    pub name: String,
    pub unit: String,
    #[serde(default)]
    pub items: Vec<CompositionInput>,
    pub unit_cost: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create composition request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompositionRequest {
    pub code: String,
    pub name: String,
    pub unit: String,
    #[serde(default)]
    pub items: Vec<CompositionInput>,
    #[serde(default)]
    pub unit_cost: f64,
}

/// Update composition request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompositionRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub unit: Option<String>,
    pub items: Option<Vec<CompositionInput>>,
    pub unit_cost: Option<f64>,
}

/// Negotiation stage of a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetStatus {
    #[default]
    Draft,
    Sent,
    Approved,
    Rejected,
}

/// One priced line of a budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    pub description: String,
    pub unit: String,
    pub quantity: f64,
    pub unit_price: f64,
    /// Derived: `quantity * unitPrice`, rounded to cents
    #[serde(default)]
    pub total_value: f64,
}

/// A priced proposal for a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    #[serde(default)]
    pub client_id: Option<String>,
    pub project_name: String,
    pub status: BudgetStatus,
    #[serde(default)]
    pub items: Vec<BudgetItem>,
    #[serde(default)]
    pub total_value: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Recompute item totals and the budget total.
    pub fn recompute_totals(&mut self) {
        for item in &mut self.items {
            item.total_value = round_money(item.quantity * item.unit_price);
        }
        self.total_value = round_money(self.items.iter().map(|i| i.total_value).sum());
    }
}

/// Create budget request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBudgetRequest {
    #[serde(default)]
    pub client_id: Option<String>,
    pub project_name: String,
    #[serde(default)]
    pub status: BudgetStatus,
    #[serde(default)]
    pub items: Vec<BudgetItem>,
}

/// Update budget request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBudgetRequest {
    pub client_id: Option<String>,
    pub project_name: Option<String>,
    pub status: Option<BudgetStatus>,
    pub items: Option<Vec<BudgetItem>>,
}
