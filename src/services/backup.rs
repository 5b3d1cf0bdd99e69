//! Backup service
//!
//! Assembles the aggregate state of the contributing stores into one
//! versioned JSON document and pushes such a document back into them.
//!
//! Backup pulls the *current in-memory* state of each store, never the
//! durable slots, so an in-flight mutation cannot be half-captured.
//! Restore validates the envelope first and then applies each collection
//! independently: a malformed collection is skipped (logged) without
//! aborting the others.

use crate::app::Workspace;
use crate::config::BACKUP_VERSION;
use crate::error::{AppError, Result};
use crate::models::{Budget, Client, CompanySettings, Composition, Input};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use tokio::fs;

/// Versioned backup envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupDocument {
    pub version: String,
    /// ISO-8601 creation time
    pub timestamp: String,
    pub data: BackupData,
}

/// Aggregate store state carried by a backup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupData {
    pub clients: Vec<Client>,
    pub budgets: Vec<Budget>,
    pub inputs: Vec<Input>,
    pub compositions: Vec<Composition>,
    pub settings: CompanySettings,
}

/// Snapshot the current in-memory state of every contributing store
pub fn create_backup(workspace: &Workspace) -> BackupDocument {
    tracing::info!("Creating backup document");

    BackupDocument {
        version: BACKUP_VERSION.to_string(),
        timestamp: Utc::now().to_rfc3339(),
        data: BackupData {
            clients: workspace.clients.list().to_vec(),
            budgets: workspace.budgets.list().to_vec(),
            inputs: workspace.inputs.list().to_vec(),
            compositions: workspace.compositions.list().to_vec(),
            settings: workspace.settings.get().clone(),
        },
    }
}

/// Push a backup document into the stores.
///
/// Fails with `InvalidBackupDocument` before touching any store when the
/// envelope is unusable (missing or unsupported `version`, missing
/// `data`). Inside a valid envelope each collection is applied
/// independently; skips are silent to the caller by design.
pub async fn restore_backup(workspace: &mut Workspace, document: &Value) -> Result<()> {
    let version = document
        .get("version")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::InvalidBackupDocument("missing version".to_string()))?;

    if version != BACKUP_VERSION {
        return Err(AppError::InvalidBackupDocument(format!(
            "unsupported version: {version}"
        )));
    }

    let data = document
        .get("data")
        .and_then(Value::as_object)
        .ok_or_else(|| AppError::InvalidBackupDocument("missing data".to_string()))?;

    tracing::info!("Restoring backup document");

    if let Some(clients) = decode_section::<Vec<Client>>(data, "clients") {
        workspace.clients.replace_all(clients).await?;
    }
    if let Some(budgets) = decode_section::<Vec<Budget>>(data, "budgets") {
        workspace.budgets.replace_all(budgets).await?;
    }
    if let Some(inputs) = decode_section::<Vec<Input>>(data, "inputs") {
        workspace.inputs.replace_all(inputs).await?;
    }
    if let Some(compositions) = decode_section::<Vec<Composition>>(data, "compositions") {
        workspace.compositions.replace_all(compositions).await?;
    }
    if let Some(settings) = decode_section::<CompanySettings>(data, "settings") {
        workspace.settings.replace(settings).await?;
    }

    tracing::info!("Restore completed");

    Ok(())
}

fn decode_section<T: DeserializeOwned>(
    data: &serde_json::Map<String, Value>,
    key: &str,
) -> Option<T> {
    let value = data.get(key)?;

    match serde_json::from_value(value.clone()) {
        Ok(decoded) => Some(decoded),
        Err(e) => {
            tracing::warn!("Skipping '{}' during restore: {}", key, e);
            None
        }
    }
}

/// Write a backup document to a file for the user
pub async fn export_backup(workspace: &Workspace, path: &Path) -> Result<()> {
    let document = create_backup(workspace);
    let contents = serde_json::to_string_pretty(&document)?;

    fs::write(path, contents).await?;

    tracing::info!("Backup exported to {:?}", path);

    Ok(())
}

/// Read a backup file back in and restore it
pub async fn import_backup(workspace: &mut Workspace, path: &Path) -> Result<()> {
    let contents = fs::read_to_string(path).await?;

    let document: Value = serde_json::from_str(&contents)
        .map_err(|e| AppError::InvalidBackupDocument(format!("not a JSON document: {e}")))?;

    restore_backup(workspace, &document).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BudgetItem, ClientType, CreateBudgetRequest, CreateClientRequest, CreateInputRequest,
        InputCategory, Theme, UpdateSettingsRequest,
    };
    use tempfile::TempDir;

    async fn create_test_workspace() -> (Workspace, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let workspace = Workspace::open(temp_dir.path().join("data")).await.unwrap();
        (workspace, temp_dir)
    }

    fn client_request(name: &str) -> CreateClientRequest {
        CreateClientRequest {
            name: name.to_string(),
            email: None,
            phone: None,
            document: None,
            company: None,
            client_type: ClientType::Private,
            address: None,
            is_active: true,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_backup_document_shape() {
        let (mut workspace, _temp) = create_test_workspace().await;

        workspace
            .clients
            .replace_all(Vec::new())
            .await
            .unwrap();
        workspace
            .clients
            .create_client(client_request("Ana"))
            .await
            .unwrap();

        let document = create_backup(&workspace);

        assert_eq!(document.version, "1.0");
        assert!(!document.timestamp.is_empty());
        assert_eq!(document.data.clients.len(), 1);

        // round-trips through serde as a plain envelope
        let value = serde_json::to_value(&document).unwrap();
        assert!(value.get("data").unwrap().get("settings").is_some());
    }

    #[tokio::test]
    async fn test_backup_restore_round_trip() {
        let (mut workspace, _temp) = create_test_workspace().await;

        workspace.clients.replace_all(Vec::new()).await.unwrap();
        let created = workspace
            .clients
            .create_client(client_request("Roberto Silva"))
            .await
            .unwrap();
        workspace
            .settings
            .update(UpdateSettingsRequest {
                theme: Some(Theme::Dark),
                ..Default::default()
            })
            .await
            .unwrap();

        let document = serde_json::to_value(create_backup(&workspace)).unwrap();

        // wipe, then restore
        workspace.clients.replace_all(Vec::new()).await.unwrap();
        workspace.settings.reset().await.unwrap();

        restore_backup(&mut workspace, &document).await.unwrap();

        assert_eq!(workspace.clients.list().len(), 1);
        assert_eq!(workspace.clients.list()[0], created);
        assert_eq!(workspace.settings.get().theme, Theme::Dark);
    }

    #[tokio::test]
    async fn test_malformed_collection_is_skipped_independently() {
        let (mut workspace, _temp) = create_test_workspace().await;

        workspace.clients.replace_all(Vec::new()).await.unwrap();
        workspace
            .clients
            .create_client(client_request("Ana"))
            .await
            .unwrap();
        workspace
            .inputs
            .create(CreateInputRequest {
                name: "Gravel".to_string(),
                unit: "m3".to_string(),
                unit_price: 95.0,
                category: InputCategory::Material,
            })
            .await
            .unwrap();

        let mut document = serde_json::to_value(create_backup(&workspace)).unwrap();
        document["data"]["budgets"] = serde_json::json!("not an array");

        let budgets_before = workspace.budgets.list().to_vec();

        restore_backup(&mut workspace, &document).await.unwrap();

        // budgets skipped, everything else applied
        assert_eq!(workspace.budgets.list(), budgets_before.as_slice());
        assert_eq!(workspace.clients.list().len(), 1);
        assert!(workspace
            .inputs
            .list()
            .iter()
            .any(|i| i.name == "Gravel"));
    }

    #[tokio::test]
    async fn test_missing_version_fails_and_leaves_stores_untouched() {
        let (mut workspace, _temp) = create_test_workspace().await;

        let clients_before = workspace.clients.list().to_vec();
        let settings_before = workspace.settings.get().clone();

        let document = serde_json::json!({
            "timestamp": "2026-01-01T00:00:00Z",
            "data": { "clients": [] }
        });

        let result = restore_backup(&mut workspace, &document).await;

        assert!(matches!(result, Err(AppError::InvalidBackupDocument(_))));
        assert_eq!(workspace.clients.list(), clients_before.as_slice());
        assert_eq!(*workspace.settings.get(), settings_before);
    }

    #[tokio::test]
    async fn test_unsupported_version_fails() {
        let (mut workspace, _temp) = create_test_workspace().await;

        let document = serde_json::json!({
            "version": "2.0",
            "timestamp": "2026-01-01T00:00:00Z",
            "data": {}
        });

        let result = restore_backup(&mut workspace, &document).await;

        assert!(matches!(result, Err(AppError::InvalidBackupDocument(_))));
    }

    #[tokio::test]
    async fn test_export_and_import_file() {
        let (mut workspace, temp) = create_test_workspace().await;

        workspace.budgets.replace_all(Vec::new()).await.unwrap();
        workspace
            .budgets
            .create(CreateBudgetRequest {
                client_id: None,
                project_name: "Warehouse".to_string(),
                status: Default::default(),
                items: vec![BudgetItem {
                    description: "Earthworks".to_string(),
                    unit: "m3".to_string(),
                    quantity: 100.0,
                    unit_price: 12.0,
                    total_value: 0.0,
                }],
            })
            .await
            .unwrap();

        let path = temp.path().join("backup.json");
        export_backup(&workspace, &path).await.unwrap();

        workspace.budgets.replace_all(Vec::new()).await.unwrap();

        import_backup(&mut workspace, &path).await.unwrap();

        assert_eq!(workspace.budgets.list().len(), 1);
        assert_eq!(workspace.budgets.list()[0].total_value, 1200.0);
    }

    #[tokio::test]
    async fn test_import_rejects_non_json_file() {
        let (mut workspace, temp) = create_test_workspace().await;

        let path = temp.path().join("backup.json");
        fs::write(&path, "definitely not json").await.unwrap();

        let result = import_backup(&mut workspace, &path).await;

        assert!(matches!(result, Err(AppError::InvalidBackupDocument(_))));
    }
}
