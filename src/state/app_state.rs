//! Central `AppState` container and the per-screen view state it owns.

use ratatui::widgets::ListState;

use crate::state::modal::Modal;
use crate::state::types::{Character, CharacterId};
use crate::theme::KeyMap;

/// Which top-level screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Full character list with search.
    #[default]
    Directory,
    /// One character's details.
    Details,
    /// Locally bookmarked characters.
    Favorites,
}

/// Which widget on the Directory screen receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryFocus {
    /// Arrow keys move the selection; letter keys are shortcuts.
    #[default]
    List,
    /// Typed characters edit the search query.
    Search,
}

/// View state of the Directory screen.
#[derive(Debug, Default)]
pub struct DirectoryView {
    /// Every character from the last successful fetch.
    pub all: Vec<Character>,
    /// `all` filtered by `query`.
    pub visible: Vec<Character>,
    /// Current search text.
    pub query: String,
    /// Input focus.
    pub focus: DirectoryFocus,
    /// Selected index into `visible`.
    pub selected: usize,
    /// Ratatui list state mirroring `selected`.
    pub list_state: ListState,
    /// Request id of the in-flight fetch, if any.
    pub pending: Option<u64>,
}

impl DirectoryView {
    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Character under the cursor.
    #[must_use]
    pub fn selected_character(&self) -> Option<&Character> {
        self.visible.get(self.selected)
    }
}

/// View state of the Details screen, rebuilt on every navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsView {
    /// Character being shown.
    pub id: CharacterId,
    /// Request id of the fetch that will fill `character`.
    pub request_id: u64,
    /// Fetched record; `None` while loading or after a failed fetch.
    pub character: Option<Character>,
    /// Whether the fetch is still in flight.
    pub loading: bool,
    /// Whether this character is already bookmarked.
    pub is_favorite: bool,
    /// Screen to return to on Esc.
    pub return_to: Screen,
}

/// View state of the Favorites screen, reloaded on every entry.
#[derive(Debug, Default)]
pub struct FavoritesView {
    /// Favorites in insertion order.
    pub items: Vec<Character>,
    /// Selected index into `items`.
    pub selected: usize,
    /// Ratatui list state mirroring `selected`.
    pub list_state: ListState,
    /// Request id of the in-flight load, if any.
    pub pending: Option<u64>,
}

impl FavoritesView {
    /// Favorite under the cursor.
    #[must_use]
    pub fn selected_character(&self) -> Option<&Character> {
        self.items.get(self.selected)
    }
}

/// Global application state shared by the event, networking, and UI layers.
#[derive(Debug)]
pub struct AppState {
    /// Current screen.
    pub screen: Screen,
    /// Directory screen state.
    pub directory: DirectoryView,
    /// Details screen state; `None` until a character is opened.
    pub details: Option<DetailsView>,
    /// Favorites screen state.
    pub favorites: FavoritesView,
    /// Active modal overlay.
    pub modal: Modal,
    /// Key bindings in effect.
    pub keymap: KeyMap,
    /// Last issued request id (monotonic).
    pub last_request_id: u64,
    /// Frame counter advanced by the tick worker; drives the loading spinner.
    pub tick: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::Directory,
            directory: DirectoryView::default(),
            details: None,
            favorites: FavoritesView::default(),
            modal: Modal::None,
            keymap: KeyMap::default(),
            last_request_id: 0,
            tick: 0,
        }
    }
}

impl AppState {
    /// Allocate a fresh request id used to correlate background responses.
    pub const fn next_request_id(&mut self) -> u64 {
        self.last_request_id += 1;
        self.last_request_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Request ids are strictly increasing and the default screen is Directory.
    fn request_ids_are_monotonic() {
        let mut app = AppState::default();
        assert_eq!(app.screen, Screen::Directory);
        let a = app.next_request_id();
        let b = app.next_request_id();
        assert!(b > a);
        assert!(!app.directory.is_loading());
    }
}
