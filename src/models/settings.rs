//! Company settings models
//!
//! A single persisted record, not a collection. Settings are reset to
//! defaults instead of deleted.

use serde::{Deserialize, Serialize};

/// UI color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Company profile and application preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySettings {
    pub company_name: String,
    /// CNPJ
    #[serde(default)]
    pub document: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Inline base64 logo payload
    #[serde(default)]
    pub logo: Option<String>,
    /// Boilerplate terms appended to budgets and measurements
    #[serde(default)]
    pub legal_terms: Option<String>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "BRL".to_string()
}

impl Default for CompanySettings {
    fn default() -> Self {
        Self {
            company_name: "My Construction Co.".to_string(),
            document: None,
            email: None,
            phone: None,
            address: None,
            logo: None,
            legal_terms: None,
            theme: Theme::Light,
            currency: default_currency(),
        }
    }
}

/// Update settings request (partial patch)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub company_name: Option<String>,
    pub document: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub logo: Option<String>,
    pub legal_terms: Option<String>,
    pub theme: Option<Theme>,
    pub currency: Option<String>,
}
