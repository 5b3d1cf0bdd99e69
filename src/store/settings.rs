//! Settings store
//!
//! Single-record variant of the entity stores: one persisted
//! `CompanySettings` object, no id or collection. Settings are reset to
//! defaults rather than deleted.

use crate::error::Result;
use crate::models::{CompanySettings, UpdateSettingsRequest};
use crate::storage::{codec, LoadOutcome, SlotStore};

const SLOT: &str = "settings";

/// Store for the company settings record
pub struct SettingsStore {
    slots: SlotStore,
    settings: CompanySettings,
}

impl SettingsStore {
    /// Open the store, loading settings or installing defaults
    pub async fn open(slots: SlotStore) -> Result<Self> {
        let mut store = Self {
            slots,
            settings: CompanySettings::default(),
        };
        store.refresh().await?;
        Ok(store)
    }

    /// Reconcile from durable storage. Missing slot installs and persists
    /// defaults; corrupt slot contents fall back to defaults.
    pub async fn refresh(&mut self) -> Result<()> {
        let raw = self.slots.read(SLOT).await?;

        match codec::decode_record::<CompanySettings>(SLOT, raw.as_deref()) {
            LoadOutcome::Loaded(settings) => {
                self.settings = settings;
            }
            LoadOutcome::Corrupt => {
                self.settings = CompanySettings::default();
            }
            LoadOutcome::Missing => {
                tracing::info!("Settings slot missing, installing defaults");
                self.settings = CompanySettings::default();
                self.persist().await?;
            }
        }

        Ok(())
    }

    /// Current settings
    pub fn get(&self) -> &CompanySettings {
        &self.settings
    }

    /// Merge a partial update and persist
    pub async fn update(&mut self, req: UpdateSettingsRequest) -> Result<CompanySettings> {
        if let Some(company_name) = req.company_name {
            self.settings.company_name = company_name;
        }
        if let Some(document) = req.document {
            self.settings.document = Some(document);
        }
        if let Some(email) = req.email {
            self.settings.email = Some(email);
        }
        if let Some(phone) = req.phone {
            self.settings.phone = Some(phone);
        }
        if let Some(address) = req.address {
            self.settings.address = Some(address);
        }
        if let Some(logo) = req.logo {
            self.settings.logo = Some(logo);
        }
        if let Some(legal_terms) = req.legal_terms {
            self.settings.legal_terms = Some(legal_terms);
        }
        if let Some(theme) = req.theme {
            self.settings.theme = theme;
        }
        if let Some(currency) = req.currency {
            self.settings.currency = currency;
        }

        self.persist().await?;

        tracing::debug!("Settings updated");

        Ok(self.settings.clone())
    }

    /// Overwrite the whole record verbatim (restore path)
    pub async fn replace(&mut self, settings: CompanySettings) -> Result<()> {
        self.settings = settings;
        self.persist().await
    }

    /// Reset to defaults and persist
    pub async fn reset(&mut self) -> Result<CompanySettings> {
        self.settings = CompanySettings::default();
        self.persist().await?;

        tracing::info!("Settings reset to defaults");

        Ok(self.settings.clone())
    }

    async fn persist(&self) -> Result<()> {
        let encoded = codec::encode_record(&self.settings)?;
        self.slots.write(SLOT, &encoded).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Theme;
    use tempfile::TempDir;

    async fn create_test_store() -> (SettingsStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let slots = SlotStore::new(temp_dir.path().join("store"));
        slots.initialize().await.unwrap();
        let store = SettingsStore::open(slots).await.unwrap();
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_defaults_installed_on_first_load() {
        let (store, _temp) = create_test_store().await;

        assert_eq!(store.get().currency, "BRL");
        assert_eq!(store.get().theme, Theme::Light);
    }

    #[tokio::test]
    async fn test_update_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let slots = SlotStore::new(temp_dir.path().join("store"));
        slots.initialize().await.unwrap();

        {
            let mut store = SettingsStore::open(slots.clone()).await.unwrap();
            store
                .update(UpdateSettingsRequest {
                    company_name: Some("Construtora Horizonte".to_string()),
                    theme: Some(Theme::Dark),
                    ..Default::default()
                })
                .await
                .unwrap();
        }

        let store = SettingsStore::open(slots).await.unwrap();

        assert_eq!(store.get().company_name, "Construtora Horizonte");
        assert_eq!(store.get().theme, Theme::Dark);
        // untouched fields keep their values
        assert_eq!(store.get().currency, "BRL");
    }

    #[tokio::test]
    async fn test_corrupt_slot_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let slots = SlotStore::new(temp_dir.path().join("store"));
        slots.initialize().await.unwrap();
        slots.write("settings", "][").await.unwrap();

        let store = SettingsStore::open(slots).await.unwrap();

        assert_eq!(*store.get(), CompanySettings::default());
    }

    #[tokio::test]
    async fn test_reset_restores_defaults() {
        let (mut store, _temp) = create_test_store().await;

        store
            .update(UpdateSettingsRequest {
                currency: Some("USD".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        store.reset().await.unwrap();

        assert_eq!(store.get().currency, "BRL");
    }
}
