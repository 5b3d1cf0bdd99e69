//! Store module
//!
//! This module provides the persistent entity stores:
//! - Generic entity store over durable slots
//! - Per-entity bindings (slot names, patches, seed data)
//! - Single-record settings store

pub mod entities;
pub mod entity_store;
pub mod settings;

pub use entity_store::{EntityStore, StoredEntity};
pub use settings::SettingsStore;
