//! Locally persisted favorites: the blob storage seam and the collection contract.

/// Storage backends (file and in-memory).
mod storage;
/// Favorites collection operations.
mod store;

pub use storage::{FileStorage, KvStorage, MemoryStorage};
pub use store::{FAVORITES_KEY, FavoritesStore};
