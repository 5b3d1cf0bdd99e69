//! Application configuration constants
//!
//! Central location for all configuration constants, resource limits,
//! and validation boundaries used throughout the application.

// ===== Durable Storage Limits =====

/// Maximum size of a single durable slot in bytes (5 MiB).
/// Collections are written as whole JSON documents on every mutation;
/// a slot that outgrows this limit fails the write with
/// `StorageQuotaExceeded` instead of filling the disk with inline
/// photo payloads.
pub const MAX_SLOT_BYTES: usize = 5 * 1024 * 1024;

// ===== Photo Tracking Limits =====

/// Maximum number of photos kept on a single photo-tracking record.
/// Records are normalized to this cap on every save.
pub const MAX_PHOTOS_PER_RECORD: usize = 5;

// ===== Backup Format =====

/// Version string stamped on every backup document and required on import.
pub const BACKUP_VERSION: &str = "1.0";

// ===== Monetary Rounding =====

/// Monetary values (measurement and budget totals) are rounded to
/// two decimal places.
pub fn round_money(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
