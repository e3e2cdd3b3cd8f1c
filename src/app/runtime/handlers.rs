use crate::error::Error;
use crate::logic::apply_directory_filter;
use crate::state::{AppState, DetailsResult, DirectoryResults, FavoritesResponse, Modal, Screen};

/// What: Apply a directory fetch result.
///
/// Inputs:
/// - `app`: Application state
/// - `res`: Result tagged with its request id
///
/// Details:
/// - Results for anything but the pending request are dropped.
/// - A failure clears the list and raises an error notice.
pub fn handle_directory_results(app: &mut AppState, res: DirectoryResults) {
    if app.directory.pending != Some(res.request_id) {
        tracing::debug!(
            request_id = res.request_id,
            pending = ?app.directory.pending,
            "[Runtime] Dropping stale directory result"
        );
        return;
    }
    app.directory.pending = None;
    match res.result {
        Ok(characters) => {
            tracing::info!(count = characters.len(), "[Runtime] Directory loaded");
            app.directory.all = characters;
        }
        Err(e) => {
            app.directory.all.clear();
            app.modal = Modal::from_error(&e);
        }
    }
    apply_directory_filter(app);
}

/// What: Apply a single-character fetch result to the open Details view.
///
/// Details:
/// - Ignored when Details is closed or shows a different request.
/// - A failure leaves `character` empty so the screen shows the no-data text,
///   and raises an error notice.
pub fn handle_details_result(app: &mut AppState, res: DetailsResult) {
    let Some(view) = app
        .details
        .as_mut()
        .filter(|v| v.request_id == res.request_id)
    else {
        tracing::debug!(
            request_id = res.request_id,
            "[Runtime] Dropping stale details result"
        );
        return;
    };
    view.loading = false;
    match res.result {
        Ok(character) if character.id == view.id => view.character = Some(character),
        Ok(character) => {
            tracing::warn!(
                expected = %view.id,
                got = %character.id,
                "[Runtime] Details response for a different character"
            );
            view.character = None;
        }
        Err(e) => {
            tracing::warn!(id = %view.id, error = %e, "[Runtime] Details unavailable");
            view.character = None;
            app.modal = Modal::from_error(&e);
        }
    }
}

/// What: Apply the outcome of a favorites operation.
///
/// Inputs:
/// - `app`: Application state
/// - `resp`: Reply from the favorites owner task
///
/// Details:
/// - `Loaded` only applies when it answers the pending Favorites load.
/// - `Membership` only applies to the Details view that asked for it.
/// - `Added`/`Removed` always raise a notice, since the user asked for them.
pub fn handle_favorites_response(app: &mut AppState, resp: FavoritesResponse) {
    match resp {
        FavoritesResponse::Loaded { request_id, result } => {
            if app.favorites.pending != Some(request_id) {
                tracing::debug!(request_id, "[Runtime] Dropping stale favorites load");
                return;
            }
            app.favorites.pending = None;
            match result {
                Ok(items) => app.favorites.items = items,
                Err(e) => {
                    app.favorites.items.clear();
                    if app.screen == Screen::Favorites {
                        app.modal = Modal::from_error(&e);
                    }
                }
            }
            clamp_favorites_selection(app);
        }
        FavoritesResponse::Membership {
            request_id,
            is_favorite,
        } => {
            if let Some(view) = app.details.as_mut()
                && view.request_id == request_id
            {
                view.is_favorite = is_favorite;
            }
        }
        FavoritesResponse::Added { character, result } => {
            let mark = match &result {
                Ok(()) => {
                    tracing::info!(id = %character.id, "[Runtime] Added to favorites");
                    app.modal = Modal::success("Added to favorites!");
                    true
                }
                Err(e @ Error::AlreadyExists { .. }) => {
                    app.modal = Modal::from_error(e);
                    true
                }
                Err(e) => {
                    app.modal = Modal::from_error(e);
                    false
                }
            };
            if mark
                && let Some(view) = app.details.as_mut()
                && view.id == character.id
            {
                view.is_favorite = true;
            }
        }
        FavoritesResponse::Removed { id, result } => match result {
            Ok(()) => {
                tracing::info!(id = %id, "[Runtime] Removed from favorites");
                app.favorites.items.retain(|c| c.id != id);
                clamp_favorites_selection(app);
                if let Some(view) = app.details.as_mut()
                    && view.id == id
                {
                    view.is_favorite = false;
                }
                app.modal = Modal::success("Removed from favorites!");
            }
            Err(e) => app.modal = Modal::from_error(&e),
        },
    }
}

/// Keep the favorites cursor inside the list after its contents change.
fn clamp_favorites_selection(app: &mut AppState) {
    let fav = &mut app.favorites;
    if fav.items.is_empty() {
        fav.selected = 0;
        fav.list_state.select(None);
    } else {
        fav.selected = fav.selected.min(fav.items.len() - 1);
        fav.list_state.select(Some(fav.selected));
    }
}

/// Advance the spinner frame.
pub const fn handle_tick(app: &mut AppState) {
    app.tick = app.tick.wrapping_add(1);
}
