//! Client models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Legal nature of a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientType {
    Private,
    Public,
    Government,
}

/// Postal address attached to a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub complement: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub zip_code: Option<String>,
}

/// A client of the construction business
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// CPF or CNPJ
    #[serde(default)]
    pub document: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    pub client_type: ClientType,
    #[serde(default)]
    pub address: Option<Address>,
    pub is_active: bool,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create client request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub document: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    pub client_type: ClientType,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_is_active() -> bool {
    true
}

/// Update client request (partial patch; absent fields are left untouched)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClientRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub document: Option<String>,
    pub company: Option<String>,
    pub client_type: Option<ClientType>,
    pub address: Option<Address>,
    pub is_active: Option<bool>,
    pub notes: Option<String>,
}
