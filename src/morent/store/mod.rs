//! # Storage Layer
//!
//! Durable local storage for the wishlist, abstracted behind the
//! [`StorageBackend`] trait so the wishlist logic can be exercised without
//! a filesystem.
//!
//! The store is a single slot holding one serialized payload under a fixed
//! key, written back in full on every mutation. There is exactly one
//! writer (the local session), so no locking or conflict resolution is
//! needed.
//!
//! ## Implementations
//!
//! - [`fs::FileBackend`]: production storage, one JSON file in the data dir
//! - [`memory::InMemoryBackend`]: in-memory slot for testing

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for the wishlist's persistence slot.
pub trait StorageBackend {
    /// Read the persisted payload; `None` if nothing was ever written.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the persisted payload.
    fn write(&mut self, payload: &str) -> Result<()>;
}
