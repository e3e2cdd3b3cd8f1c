use crate::error::Error;
use crate::state::{Character, CharacterId};

use super::storage::KvStorage;

/// Storage key under which the favorites blob lives.
pub const FAVORITES_KEY: &str = "favorites";

/// What: Favorites collection persisted as one JSON array under [`FAVORITES_KEY`].
///
/// Details:
/// - Every operation reads the full blob; mutations write the full blob back.
/// - Uniqueness by id is enforced in `add`, not by the storage.
/// - Entries without a usable id are dropped on read and therefore never written back.
#[derive(Debug)]
pub struct FavoritesStore<S> {
    /// Backing key-value storage.
    storage: S,
}

impl<S: KvStorage> FavoritesStore<S> {
    /// Wrap a storage backend.
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Borrow the backing storage.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// What: Load the favorites collection, treating any failure as empty.
    ///
    /// Output:
    /// - Stored characters in insertion order; empty when the blob is absent,
    ///   unreadable, or not a JSON array.
    pub fn load(&self) -> Vec<Character> {
        self.try_load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "[Favorites] Load failed; using empty collection");
            Vec::new()
        })
    }

    /// What: Load the favorites collection, surfacing storage read failures.
    ///
    /// Output:
    /// - `Ok(Vec<Character>)` with entries lacking a valid id filtered out.
    ///
    /// Details:
    /// - An absent blob and a blob that fails to parse both yield `Ok(vec![])`.
    ///
    /// # Errors
    /// - `Error::StorageFailed` when the storage backend cannot be read.
    pub fn try_load(&self) -> Result<Vec<Character>, Error> {
        let Some(raw) = self.storage.get_item(FAVORITES_KEY)? else {
            return Ok(Vec::new());
        };
        Ok(parse_blob(&raw))
    }

    /// Whether a character with `id` is bookmarked.
    pub fn contains(&self, id: CharacterId) -> bool {
        self.load().iter().any(|c| c.id == id)
    }

    /// What: Append a character to the favorites collection.
    ///
    /// Inputs:
    /// - `character`: Record to bookmark
    ///
    /// Output:
    /// - `Ok(())` after the full collection has been persisted.
    ///
    /// # Errors
    /// - `Error::AlreadyExists` when an entry with the same id is present (nothing is written).
    /// - `Error::StorageFailed` when reading or writing the blob fails.
    pub fn add(&self, character: Character) -> Result<(), Error> {
        let mut favorites = self.try_load()?;
        if let Some(existing) = favorites.iter().find(|c| c.id == character.id) {
            tracing::debug!(id = %existing.id, "[Favorites] Already bookmarked");
            return Err(Error::AlreadyExists {
                id: existing.id,
                name: existing.name.clone(),
            });
        }
        tracing::info!(id = %character.id, name = %character.name, "[Favorites] Adding");
        favorites.push(character);
        self.persist(&favorites)
    }

    /// What: Remove the entry with `id` from the favorites collection.
    ///
    /// Output:
    /// - `Ok(())` after writing the filtered collection; removing an absent id is a no-op.
    ///
    /// # Errors
    /// - `Error::StorageFailed` when reading or writing the blob fails.
    pub fn remove(&self, id: CharacterId) -> Result<(), Error> {
        let mut favorites = self.try_load()?;
        let before = favorites.len();
        favorites.retain(|c| c.id != id);
        tracing::info!(
            id = %id,
            removed = before - favorites.len(),
            "[Favorites] Removing"
        );
        self.persist(&favorites)
    }

    /// Serialize and write the whole collection.
    fn persist(&self, favorites: &[Character]) -> Result<(), Error> {
        let blob = serde_json::to_string(favorites)
            .map_err(|e| Error::StorageFailed(format!("serialize favorites: {e}")))?;
        self.storage.set_item(FAVORITES_KEY, &blob)
    }
}

/// What: Parse a raw favorites blob into characters.
///
/// Details:
/// - Non-array or invalid JSON yields an empty collection.
/// - Elements without a non-null id (or otherwise unusable) are skipped.
fn parse_blob(raw: &str) -> Vec<Character> {
    let value: serde_json::Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "[Favorites] Stored blob is not valid JSON");
            return Vec::new();
        }
    };
    let Some(items) = value.as_array() else {
        tracing::warn!("[Favorites] Stored blob is not a JSON array");
        return Vec::new();
    };
    let mut out = Vec::with_capacity(items.len());
    let mut skipped = 0usize;
    for item in items {
        match Character::from_value(item) {
            Some(c) => out.push(c),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::warn!(skipped, "[Favorites] Dropped entries without a valid id");
    }
    out
}
