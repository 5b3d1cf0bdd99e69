//! Generic entity store
//!
//! One instance per entity kind. The store owns the in-memory collection
//! and is the only writer of its durable slot. Every mutation rewrites the
//! whole collection: collections are small and local, and a full overwrite
//! can never leave a single record half-written.
//!
//! Ordering is most-recent-first by construction (creates go to the front),
//! which callers rely on.

use crate::error::{AppError, Result};
use crate::storage::{codec, LoadOutcome, SlotStore};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

/// Binding between an entity type and its store.
///
/// Implementations own the slot name, how a create request becomes a
/// record, how an update request merges onto one, and the normalization
/// that keeps derived fields (totals, progress, photo counts) consistent
/// on every save.
pub trait StoredEntity: Clone + Serialize + DeserializeOwned {
    /// Durable slot name; stable, changing it requires a migration
    const SLOT: &'static str;
    /// Human-readable kind for logs and errors
    const KIND: &'static str;

    type Create;
    type Update;

    fn from_request(req: Self::Create, id: String, now: DateTime<Utc>) -> Self;
    fn apply_update(&mut self, req: Self::Update);
    fn id(&self) -> &str;
    /// Bump `updatedAt`. Kinds without one (reminders) leave this empty.
    fn touch(&mut self, now: DateTime<Utc>);
    /// Recompute derived fields before a save
    fn normalize(&mut self) {}
    /// Dataset written on first-ever load, so the UI is never empty
    fn seed() -> Vec<Self> {
        Vec::new()
    }
}

/// In-memory collection with write-through persistence
pub struct EntityStore<T: StoredEntity> {
    slots: SlotStore,
    records: Vec<T>,
}

impl<T: StoredEntity> EntityStore<T> {
    /// Open the store, reconciling in-memory state from the durable slot
    pub async fn open(slots: SlotStore) -> Result<Self> {
        let mut store = Self {
            slots,
            records: Vec::new(),
        };
        store.refresh().await?;
        Ok(store)
    }

    /// Reconcile in-memory state from the durable slot.
    ///
    /// A missing slot means first run: the seed dataset is installed and
    /// persisted. A corrupt slot is treated as empty (the codec logs it);
    /// otherwise the slot is authoritative.
    pub async fn refresh(&mut self) -> Result<()> {
        let raw = self.slots.read(T::SLOT).await?;

        match codec::decode_collection::<T>(T::SLOT, raw.as_deref()) {
            LoadOutcome::Loaded(records) => {
                self.records = records;
            }
            LoadOutcome::Corrupt => {
                self.records = Vec::new();
            }
            LoadOutcome::Missing => {
                let seed = T::seed();
                if !seed.is_empty() {
                    tracing::info!("Seeding {} default {} records", seed.len(), T::KIND);
                }
                self.records = seed;
                self.persist().await?;
            }
        }

        Ok(())
    }

    /// Current collection, most-recent-first
    pub fn list(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Create a record: fresh id, `createdAt == updatedAt`, inserted at the
    /// front of the collection.
    ///
    /// A failed persist is reported to the caller but the in-memory insert
    /// is not rolled back.
    pub async fn create(&mut self, req: T::Create) -> Result<T> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        let mut record = T::from_request(req, id, now);
        record.normalize();

        self.records.insert(0, record.clone());

        tracing::debug!("Created {}: {}", T::KIND, record.id());

        self.persist().await?;

        Ok(record)
    }

    /// Merge an update request onto an existing record and bump its
    /// `updatedAt`. Unknown ids fail with `NotFound` and leave the
    /// collection unchanged.
    pub async fn update(&mut self, id: &str, req: T::Update) -> Result<T> {
        let now = Utc::now();

        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| AppError::not_found(T::KIND, id))?;

        record.apply_update(req);
        record.touch(now);
        record.normalize();
        let updated = record.clone();

        tracing::debug!("Updated {}: {}", T::KIND, id);

        self.persist().await?;

        Ok(updated)
    }

    /// Delete a record. Deleting an id that was never present is a no-op,
    /// not an error.
    pub async fn delete(&mut self, id: &str) -> Result<()> {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);

        if self.records.len() < before {
            tracing::debug!("Deleted {}: {}", T::KIND, id);
        }

        self.persist().await
    }

    /// Overwrite the whole collection verbatim (restore path)
    pub async fn replace_all(&mut self, records: Vec<T>) -> Result<()> {
        self.records = records;
        self.persist().await
    }

    async fn persist(&self) -> Result<()> {
        let encoded = codec::encode_collection(&self.records)?;
        self.slots.write(T::SLOT, &encoded).await
    }
}
