//! Client directory
//!
//! Query façade over the client store. Callers go through this instead of
//! the store directly so the storage mechanism can later be swapped for a
//! remote service without touching call sites; the async signatures are
//! that forward-compatibility contract, not concurrency.

use crate::error::{AppError, Result};
use crate::models::{Client, CreateClientRequest, UpdateClientRequest};
use crate::storage::SlotStore;
use crate::store::{EntityStore, StoredEntity};

/// Directory of clients with free-text search
pub struct ClientDirectory {
    store: EntityStore<Client>,
}

impl ClientDirectory {
    /// Open the directory over the clients slot
    pub async fn open(slots: SlotStore) -> Result<Self> {
        let store = EntityStore::open(slots).await?;
        Ok(Self { store })
    }

    /// Reconcile from durable storage
    pub async fn refresh(&mut self) -> Result<()> {
        self.store.refresh().await
    }

    /// Current clients, most-recent-first
    pub fn list(&self) -> &[Client] {
        self.store.list()
    }

    /// Create a new client
    pub async fn create_client(&mut self, req: CreateClientRequest) -> Result<Client> {
        tracing::info!("Creating new client: {}", req.name);

        let client = self.store.create(req).await?;

        tracing::info!("Client created successfully: {}", client.id);

        Ok(client)
    }

    /// Update a client
    pub async fn update_client(&mut self, id: &str, req: UpdateClientRequest) -> Result<Client> {
        self.store.update(id, req).await
    }

    /// Delete a client. Absent ids are a silent no-op.
    pub async fn delete_client(&mut self, id: &str) -> Result<()> {
        self.store.delete(id).await
    }

    /// Find a client by id
    pub async fn find_by_id(&self, id: &str) -> Result<Client> {
        self.store
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(Client::KIND, id))
    }

    /// All clients
    pub async fn find_all(&self) -> Result<Vec<Client>> {
        Ok(self.store.list().to_vec())
    }

    /// Case-insensitive substring search across name, email, phone,
    /// document and company. Missing optional fields never match.
    pub async fn search(&self, query: &str) -> Result<Vec<Client>> {
        let query_lower = query.to_lowercase();

        let matches = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|v| v.to_lowercase().contains(&query_lower))
        };

        let filtered: Vec<Client> = self
            .store
            .list()
            .iter()
            .filter(|client| {
                client.name.to_lowercase().contains(&query_lower)
                    || matches(&client.email)
                    || matches(&client.phone)
                    || matches(&client.document)
                    || matches(&client.company)
            })
            .cloned()
            .collect();

        Ok(filtered)
    }

    /// Overwrite the whole collection verbatim (restore path)
    pub async fn replace_all(&mut self, clients: Vec<Client>) -> Result<()> {
        self.store.replace_all(clients).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClientType;
    use tempfile::TempDir;

    async fn create_test_directory() -> (ClientDirectory, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let slots = SlotStore::new(temp_dir.path().join("store"));
        slots.initialize().await.unwrap();
        slots.write("clients", "[]").await.unwrap();
        let directory = ClientDirectory::open(slots).await.unwrap();
        (directory, temp_dir)
    }

    fn request(name: &str, email: Option<&str>) -> CreateClientRequest {
        CreateClientRequest {
            name: name.to_string(),
            email: email.map(str::to_string),
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
    async fn test_search_is_case_insensitive_substring() {
        let (mut directory, _temp) = create_test_directory().await;

        directory
            .create_client(request("Roberto Silva", Some("roberto@example.com")))
            .await
            .unwrap();
        directory
            .create_client(request("Ana Costa", Some("ana@example.com")))
            .await
            .unwrap();

        let results = directory.search("silva").await.unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Roberto Silva");
    }

    #[tokio::test]
    async fn test_search_covers_email() {
        let (mut directory, _temp) = create_test_directory().await;

        directory
            .create_client(request("Roberto Silva", Some("roberto@horizonte.com")))
            .await
            .unwrap();

        let results = directory.search("HORIZONTE").await.unwrap();

        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_optional_fields_do_not_match() {
        let (mut directory, _temp) = create_test_directory().await;

        directory.create_client(request("Ana", None)).await.unwrap();

        let results = directory.search("example.com").await.unwrap();

        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id_unknown_is_not_found() {
        let (directory, _temp) = create_test_directory().await;

        let result = directory.find_by_id("missing").await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_create_then_find_by_id() {
        let (mut directory, _temp) = create_test_directory().await;

        let created = directory
            .create_client(request("Ana", Some("ana@x.com")))
            .await
            .unwrap();

        let found = directory.find_by_id(&created.id).await.unwrap();

        assert_eq!(found, created);
        assert_eq!(found.created_at, found.updated_at);
    }
}
