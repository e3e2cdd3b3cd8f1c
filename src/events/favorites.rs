use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::move_selection;
use crate::state::{AppState, Modal, Screen};
use crate::theme::KeyMap;

use super::{Requests, nav_delta, utils};

/// What: Handle a key on the Favorites screen.
///
/// Details:
/// - Remove asks for confirmation first; the actual removal happens in the modal handler.
/// - Refresh reloads the collection from storage.
pub(super) fn handle_favorites_key(ke: KeyEvent, app: &mut AppState, requests: &Requests) {
    let len = app.favorites.items.len();
    if let Some(delta) = nav_delta(&ke, len) {
        let fav = &mut app.favorites;
        move_selection(&mut fav.selected, &mut fav.list_state, len, delta);
        return;
    }
    if KeyMap::any(&app.keymap.remove_favorite, &ke) {
        if let Some(c) = app.favorites.selected_character() {
            app.modal = Modal::ConfirmRemove {
                id: c.id,
                name: c.name.clone(),
            };
        }
        return;
    }
    if KeyMap::any(&app.keymap.refresh, &ke) {
        utils::enter_favorites(app, requests);
        return;
    }
    match ke.code {
        KeyCode::Enter => {
            if let Some(id) = app.favorites.selected_character().map(|c| c.id) {
                utils::open_details(app, id, Screen::Favorites, requests);
            }
        }
        KeyCode::Esc => utils::enter_directory(app),
        _ => {}
    }
}
