//! Site activity log models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weather observed on site for the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Weather {
    Sunny,
    Cloudy,
    Rainy,
    Storm,
}

/// Overall productivity rating for the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogStatus {
    Productive,
    #[default]
    Normal,
    Unproductive,
}

/// One activity carried out during the day.
///
/// Start and end are wall-clock labels ("07:30"), not timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub description: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

/// Daily site activity log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: String,
    pub date: DateTime<Utc>,
    pub project_name: String,
    pub weather: Weather,
    pub team_count: u32,
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    pub status: LogStatus,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create activity log request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityLogRequest {
    pub date: DateTime<Utc>,
    pub project_name: String,
    pub weather: Weather,
    #[serde(default)]
    pub team_count: u32,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub status: LogStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Update activity log request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActivityLogRequest {
    pub date: Option<DateTime<Utc>>,
    pub project_name: Option<String>,
    pub weather: Option<Weather>,
    pub team_count: Option<u32>,
    pub activities: Option<Vec<Activity>>,
    pub materials: Option<Vec<String>>,
    pub equipment: Option<Vec<String>>,
    pub status: Option<LogStatus>,
    pub notes: Option<String>,
}
