use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, FavoritesRequest, Modal};

use super::Requests;

/// What: Handle a key while a modal is open.
///
/// Details:
/// - Alert and Help close on Enter/Esc.
/// - `ConfirmRemove` queues the removal on Enter/`y` and cancels on Esc/`n`.
pub(super) fn handle_modal_key(ke: KeyEvent, app: &mut AppState, requests: &Requests) {
    match &app.modal {
        Modal::Alert { .. } | Modal::Help => {
            if matches!(ke.code, KeyCode::Enter | KeyCode::Esc) {
                app.modal = Modal::None;
            }
        }
        Modal::ConfirmRemove { id, .. } => match ke.code {
            KeyCode::Enter | KeyCode::Char('y' | 'Y') => {
                let id = *id;
                app.modal = Modal::None;
                tracing::debug!(id = %id, "queueing favorite removal");
                let _ = requests.favorites_tx.send(FavoritesRequest::Remove(id));
            }
            KeyCode::Esc | KeyCode::Char('n' | 'N') => app.modal = Modal::None,
            _ => {}
        },
        Modal::None => {}
    }
}
