//! Project planning models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Execution state of a planning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanningStatus {
    #[default]
    Draft,
    Active,
    OnHold,
    Completed,
}

/// One scheduled task inside a planning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningTask {
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Percentage in [0, 100]
    pub progress: f64,
    #[serde(default)]
    pub dependencies: Option<Vec<String>>,
    #[serde(default)]
    pub assignee: Option<String>,
}

/// A project schedule with budget and tasks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planning {
    pub id: String,
    pub project_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: PlanningStatus,
    pub total_budget: f64,
    pub tasks: Vec<PlanningTask>,
    /// Rounded mean of task progress; a manual value when there are no tasks
    #[serde(default)]
    pub overall_progress: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Planning {
    /// Derive overall progress from the tasks. A planning without tasks
    /// keeps whatever value was supplied manually.
    pub fn recompute_progress(&mut self) {
        if self.tasks.is_empty() {
            return;
        }
        let mean = self.tasks.iter().map(|t| t.progress).sum::<f64>() / self.tasks.len() as f64;
        self.overall_progress = mean.round();
    }
}

/// Create planning request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanningRequest {
    pub project_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub status: PlanningStatus,
    #[serde(default)]
    pub total_budget: f64,
    #[serde(default)]
    pub tasks: Vec<PlanningTask>,
    #[serde(default)]
    pub overall_progress: f64,
}

/// Update planning request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlanningRequest {
    pub project_name: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: Option<PlanningStatus>,
    pub total_budget: Option<f64>,
    pub tasks: Option<Vec<PlanningTask>>,
    pub overall_progress: Option<f64>,
}
