//! Measurement models
//!
//! A measurement records the quantities of contracted services executed in
//! a period, priced per item, with a retention percentage withheld from the
//! subtotal. All derived values are recomputed on every save.

use crate::config::round_money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Approval stage of a measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeasurementStatus {
    #[default]
    Draft,
    Submitted,
    Approved,
    Paid,
}

/// One measured service line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementItem {
    pub service_code: String,
    pub service_name: String,
    pub unit: String,
    pub previous_quantity: f64,
    pub current_quantity: f64,
    pub unit_price: f64,
    /// Derived: `currentQuantity * unitPrice`, rounded to cents
    #[serde(default)]
    pub total_value: f64,
}

/// A periodic measurement of executed services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    pub id: String,
    /// Sequential within a project, not globally unique
    pub measurement_number: u32,
    pub project_name: String,
    #[serde(default)]
    pub client_id: Option<String>,
    pub reference_date: DateTime<Utc>,
    pub status: MeasurementStatus,
    pub items: Vec<MeasurementItem>,
    pub retention_percentage: f64,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub retention_amount: f64,
    #[serde(default)]
    pub net_value: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Measurement {
    /// Recompute item totals and the derived subtotal, retention and net
    /// values from the current items and retention percentage.
    pub fn recompute_totals(&mut self) {
        for item in &mut self.items {
            item.total_value = round_money(item.current_quantity * item.unit_price);
        }
        self.subtotal = round_money(self.items.iter().map(|i| i.total_value).sum());
        self.retention_amount = round_money(self.subtotal * self.retention_percentage / 100.0);
        self.net_value = round_money(self.subtotal - self.retention_amount);
    }
}

/// Create measurement request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeasurementRequest {
    pub measurement_number: u32,
    pub project_name: String,
    #[serde(default)]
    pub client_id: Option<String>,
    pub reference_date: DateTime<Utc>,
    #[serde(default)]
    pub status: MeasurementStatus,
    #[serde(default)]
    pub items: Vec<MeasurementItem>,
    #[serde(default)]
    pub retention_percentage: f64,
}

/// Update measurement request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMeasurementRequest {
    pub measurement_number: Option<u32>,
    pub project_name: Option<String>,
    pub client_id: Option<String>,
    pub reference_date: Option<DateTime<Utc>>,
    pub status: Option<MeasurementStatus>,
    pub items: Option<Vec<MeasurementItem>>,
    pub retention_percentage: Option<f64>,
}
