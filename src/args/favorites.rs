//! Command-line favorites listing.

use std::io::Write;
use std::path::Path;

use crate::favorites::{FavoritesStore, FileStorage};

/// What: Print the saved favorites as `id<TAB>name` lines.
///
/// Inputs:
/// - `data_dir`: Directory holding `favorites.json`
/// - `out`: Destination for the listing (stdout in practice)
///
/// Output:
/// - Process exit code: `0` on success (including an empty list), `1` when storage is unreadable.
pub fn handle_list_favorites(data_dir: &Path, out: &mut impl Write) -> i32 {
    let store = FavoritesStore::new(FileStorage::new(data_dir));
    match store.try_load() {
        Ok(items) => {
            tracing::info!(count = items.len(), "Listing favorites from CLI");
            for c in &items {
                if writeln!(out, "{}\t{}", c.id, c.name).is_err() {
                    return 1;
                }
            }
            0
        }
        Err(e) => {
            eprintln!("titandex: {e}");
            tracing::error!(error = %e, "Failed to read favorites");
            1
        }
    }
}
