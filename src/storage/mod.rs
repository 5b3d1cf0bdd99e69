//! Storage module
//!
//! Provides named durable slots for serialized collections and the codec
//! that moves entities in and out of them.

pub mod codec;
pub mod slot_store;

pub use codec::LoadOutcome;
pub use slot_store::SlotStore;
