//! Application state setup
//!
//! Constructs every store exactly once at process start over one slot
//! store. Consumers receive the workspace by reference; there is no
//! module-level global state.

use crate::error::Result;
use crate::models::{
    ActivityLog, Budget, Composition, Input, Measurement, PhotoTracking, Planning, Reminder,
};
use crate::services::ClientDirectory;
use crate::storage::SlotStore;
use crate::store::{EntityStore, SettingsStore};
use std::path::PathBuf;

/// All stores of the application, opened over one data directory
pub struct Workspace {
    pub clients: ClientDirectory,
    pub budgets: EntityStore<Budget>,
    pub inputs: EntityStore<Input>,
    pub compositions: EntityStore<Composition>,
    pub activity_logs: EntityStore<ActivityLog>,
    pub measurements: EntityStore<Measurement>,
    pub plannings: EntityStore<Planning>,
    pub photo_trackings: EntityStore<PhotoTracking>,
    pub reminders: EntityStore<Reminder>,
    pub settings: SettingsStore,
}

impl Workspace {
    /// Open every store over the given data directory, seeding defaults
    /// on first run.
    pub async fn open(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let slots = SlotStore::new(data_dir.into());
        slots.initialize().await?;

        tracing::info!("Opening workspace at {:?}", slots.root());

        let workspace = Self {
            clients: ClientDirectory::open(slots.clone()).await?,
            budgets: EntityStore::open(slots.clone()).await?,
            inputs: EntityStore::open(slots.clone()).await?,
            compositions: EntityStore::open(slots.clone()).await?,
            activity_logs: EntityStore::open(slots.clone()).await?,
            measurements: EntityStore::open(slots.clone()).await?,
            plannings: EntityStore::open(slots.clone()).await?,
            photo_trackings: EntityStore::open(slots.clone()).await?,
            reminders: EntityStore::open(slots.clone()).await?,
            settings: SettingsStore::open(slots).await?,
        };

        tracing::info!("Workspace ready");

        Ok(workspace)
    }

    /// Reconcile every store from durable storage
    pub async fn refresh(&mut self) -> Result<()> {
        self.clients.refresh().await?;
        self.budgets.refresh().await?;
        self.inputs.refresh().await?;
        self.compositions.refresh().await?;
        self.activity_logs.refresh().await?;
        self.measurements.refresh().await?;
        self.plannings.refresh().await?;
        self.photo_trackings.refresh().await?;
        self.reminders.refresh().await?;
        self.settings.refresh().await?;
        Ok(())
    }
}
