use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, FavoritesRequest, Modal};
use crate::theme::KeyMap;

use super::{Requests, utils};

/// What: Handle a key on the Details screen.
///
/// Details:
/// - Esc/Backspace/Left return to the screen Details was opened from.
/// - Add-favorite queues the loaded character for the favorites owner task;
///   nothing happens while the record is still loading.
/// - Refresh re-opens the same character with a new request id.
pub(super) fn handle_details_key(ke: KeyEvent, app: &mut AppState, requests: &Requests) {
    if matches!(ke.code, KeyCode::Esc | KeyCode::Backspace | KeyCode::Left) {
        utils::close_details(app, requests);
        return;
    }
    let Some(view) = app.details.as_ref() else {
        utils::enter_directory(app);
        return;
    };
    if KeyMap::any(&app.keymap.add_favorite, &ke) {
        match view.character.clone() {
            Some(character) => {
                tracing::debug!(id = %character.id, "queueing add to favorites");
                let _ = requests.favorites_tx.send(FavoritesRequest::Add(character));
            }
            None if !view.loading => {
                app.modal = Modal::Alert {
                    kind: crate::state::NoticeKind::Info,
                    title: "Notice".to_string(),
                    message: "No character data available.".to_string(),
                };
            }
            None => {}
        }
        return;
    }
    if KeyMap::any(&app.keymap.refresh, &ke) {
        let (id, back) = (view.id, view.return_to);
        utils::open_details(app, id, back, requests);
    }
}
