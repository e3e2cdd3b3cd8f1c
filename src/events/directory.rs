use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::{apply_directory_filter, move_selection};
use crate::state::{AppState, DirectoryFocus, Screen};
use crate::theme::KeyMap;

use super::{Requests, nav_delta, utils};

/// What: Handle a key on the Directory screen.
///
/// Details:
/// - Search focus: characters edit the query and refilter on every keystroke;
///   Enter/Esc hand focus back to the list.
/// - List focus: arrows move, Enter opens Details, refresh re-fetches, `/` focuses search.
pub(super) fn handle_directory_key(ke: KeyEvent, app: &mut AppState, requests: &Requests) {
    let len = app.directory.visible.len();
    if let Some(delta) = nav_delta(&ke, len) {
        let dir = &mut app.directory;
        move_selection(&mut dir.selected, &mut dir.list_state, len, delta);
        return;
    }

    match app.directory.focus {
        DirectoryFocus::Search => match ke.code {
            KeyCode::Char(ch) => {
                app.directory.query.push(ch);
                apply_directory_filter(app);
            }
            KeyCode::Backspace => {
                app.directory.query.pop();
                apply_directory_filter(app);
            }
            KeyCode::Enter | KeyCode::Esc => {
                app.directory.focus = DirectoryFocus::List;
            }
            _ => {}
        },
        DirectoryFocus::List => {
            if KeyMap::any(&app.keymap.focus_search, &ke) {
                app.directory.focus = DirectoryFocus::Search;
                return;
            }
            if KeyMap::any(&app.keymap.refresh, &ke) {
                utils::start_directory_fetch(app, requests);
                return;
            }
            match ke.code {
                KeyCode::Enter => {
                    if let Some(id) = app.directory.selected_character().map(|c| c.id) {
                        utils::open_details(app, id, Screen::Directory, requests);
                    }
                }
                KeyCode::Esc if !app.directory.query.is_empty() => {
                    app.directory.query.clear();
                    apply_directory_filter(app);
                }
                _ => {}
            }
        }
    }
}
