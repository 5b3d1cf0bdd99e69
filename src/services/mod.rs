//! Services module
//!
//! Business logic over the entity stores: client queries and the
//! backup/restore coordinator.

pub mod backup;
pub mod clients;

pub use backup::{BackupData, BackupDocument};
pub use clients::ClientDirectory;
