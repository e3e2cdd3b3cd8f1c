//! Keyboard handling for the titandex TUI.
//!
//! `handle_event` resolves global keys and modals first, then hands the key to
//! the handler of the active screen.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, DetailsRequest, DirectoryFocus, FavoritesRequest, Modal, Screen};
use crate::theme::KeyMap;

mod details;
mod directory;
mod favorites;
mod modals;
pub mod utils;

pub use utils::{close_details, enter_favorites, open_details, start_directory_fetch};

/// What: Senders used by event handlers to queue background work.
#[derive(Clone, Debug)]
pub struct Requests {
    /// Directory fetches, keyed by request id.
    pub directory_tx: mpsc::UnboundedSender<u64>,
    /// Single-character fetches.
    pub details_tx: mpsc::UnboundedSender<DetailsRequest>,
    /// Favorites operations, processed one at a time by the owner task.
    pub favorites_tx: mpsc::UnboundedSender<FavoritesRequest>,
}

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: CEvent, app: &mut AppState, requests: &Requests) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    if app.modal.is_open() {
        modals::handle_modal_key(ke, app, requests);
        return false;
    }

    // Plain characters typed into the search box never trigger shortcuts.
    let typing = app.screen == Screen::Directory
        && app.directory.focus == DirectoryFocus::Search
        && is_text_input(&ke);

    if !typing {
        let km = &app.keymap;
        if KeyMap::any(&km.exit, &ke) {
            return true;
        }
        if KeyMap::any(&km.help, &ke) {
            app.modal = Modal::Help;
            return false;
        }
        if KeyMap::any(&km.next_screen, &ke) {
            match app.screen {
                Screen::Directory | Screen::Details => {
                    app.details = None;
                    utils::enter_favorites(app, requests);
                }
                Screen::Favorites => utils::enter_directory(app),
            }
            return false;
        }
        if ke.modifiers.is_empty() {
            match ke.code {
                KeyCode::Char('1') if app.screen != Screen::Directory => {
                    app.details = None;
                    utils::enter_directory(app);
                    return false;
                }
                KeyCode::Char('2') if app.screen != Screen::Favorites => {
                    app.details = None;
                    utils::enter_favorites(app, requests);
                    return false;
                }
                _ => {}
            }
        }
    }

    match app.screen {
        Screen::Directory => directory::handle_directory_key(ke, app, requests),
        Screen::Details => details::handle_details_key(ke, app, requests),
        Screen::Favorites => favorites::handle_favorites_key(ke, app, requests),
    }
    false
}

/// Whether the key would insert text (a character without Ctrl/Alt).
fn is_text_input(ke: &KeyEvent) -> bool {
    matches!(ke.code, KeyCode::Char(_))
        && !ke.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Signed selection step for a navigation key, or `None` when the key does not navigate.
fn nav_delta(ke: &KeyEvent, len: usize) -> Option<isize> {
    let len = isize::try_from(len).unwrap_or(isize::MAX);
    match ke.code {
        KeyCode::Up => Some(-1),
        KeyCode::Down => Some(1),
        KeyCode::PageUp => Some(-10),
        KeyCode::PageDown => Some(10),
        KeyCode::Home => Some(-len),
        KeyCode::End => Some(len),
        _ => None,
    }
}
