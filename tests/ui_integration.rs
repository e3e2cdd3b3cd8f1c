//! Integration tests for UI rendering using ratatui's `TestBackend`.
//!
//! These tests render each screen and modal into an in-memory buffer and check
//! the visible text, without requiring a real terminal.

use ratatui::{Terminal, backend::TestBackend};

use titandex::state::{
    AppState, Character, CharacterId, DetailsView, DirectoryFocus, Modal, Screen,
};
use titandex::ui;

fn character(id: u64, name: &str) -> Character {
    Character {
        id: CharacterId(id),
        name: name.to_string(),
        ..Character::default()
    }
}

fn eren() -> Character {
    Character {
        img: Some("https://example.org/eren.png".to_string()),
        age: Some("19".to_string()),
        gender: Some("Male".to_string()),
        species: vec!["Human".to_string(), "Titan".to_string()],
        status: Some("Deceased".to_string()),
        ..character(1, "Eren Yeager")
    }
}

/// Render UI to a `TestBackend` and return the terminal for assertions.
fn render(app: &mut AppState, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal.draw(|f| ui::ui(f, app)).expect("draw");
    terminal
}

/// Flatten the rendered buffer into newline-separated rows.
fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width);
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
/// What: The directory lists characters with their metadata and the tab bar.
fn directory_renders_rows() {
    let mut app = AppState::default();
    app.directory.all = vec![eren(), character(2, "Mikasa Ackerman")];
    app.directory.visible = app.directory.all.clone();
    app.directory.list_state.select(Some(0));
    let text = screen_text(&render(&mut app, 100, 20));
    assert!(text.contains("1 Directory"));
    assert!(text.contains("2 Favorites"));
    assert!(text.contains("Eren Yeager"));
    assert!(text.contains("19 · Male · Deceased"));
    assert!(text.contains("Mikasa Ackerman"));
    assert!(text.contains("Unknown · Unknown · Unknown"));
    assert!(text.contains("Characters (2)"));
}

#[test]
/// What: Empty directory text depends on whether a fetch is running.
fn directory_empty_and_loading_states() {
    let mut app = AppState::default();
    let text = screen_text(&render(&mut app, 80, 12));
    assert!(text.contains("No characters found."));

    app.directory.pending = Some(1);
    let text = screen_text(&render(&mut app, 80, 12));
    assert!(text.contains("Loading characters..."));
    assert!(!text.contains("No characters found."));
}

#[test]
/// What: The focused search box shows the query and focus marker.
fn directory_search_focus_renders_query() {
    let mut app = AppState::default();
    app.directory.focus = DirectoryFocus::Search;
    app.directory.query = "ack".to_string();
    let text = screen_text(&render(&mut app, 80, 12));
    assert!(text.contains("Search (focused)"));
    assert!(text.contains("> ack"));
}

#[test]
/// What: Details shows every field with Unknown fallbacks and the favorite marker.
fn details_renders_fields_and_fallbacks() {
    let mut app = AppState::default();
    app.screen = Screen::Details;
    app.details = Some(DetailsView {
        id: CharacterId(1),
        request_id: 1,
        character: Some(eren()),
        loading: false,
        is_favorite: true,
        return_to: Screen::Directory,
    });
    let text = screen_text(&render(&mut app, 100, 20));
    assert!(text.contains("Eren Yeager"));
    assert!(text.contains("In favorites"));
    assert!(text.contains("Image: https://example.org/eren.png"));
    assert!(text.contains("Species: Human, Titan"));
    assert!(text.contains("Occupation: Unknown"));
    assert!(text.contains("Residence: Unknown"));
}

#[test]
/// What: A failed details fetch renders the no-data text.
fn details_without_data() {
    let mut app = AppState::default();
    app.screen = Screen::Details;
    app.details = Some(DetailsView {
        id: CharacterId(404),
        request_id: 1,
        character: None,
        loading: false,
        is_favorite: false,
        return_to: Screen::Favorites,
    });
    let text = screen_text(&render(&mut app, 80, 12));
    assert!(text.contains("No character data available."));
}

#[test]
/// What: Favorites shows name, age, and gender; the empty state has its own text.
fn favorites_renders_items_and_empty_state() {
    let mut app = AppState::default();
    app.screen = Screen::Favorites;
    let text = screen_text(&render(&mut app, 80, 12));
    assert!(text.contains("You have no favorite characters yet."));

    app.favorites.items = vec![eren()];
    app.favorites.list_state.select(Some(0));
    let text = screen_text(&render(&mut app, 80, 12));
    assert!(text.contains("Eren Yeager"));
    assert!(text.contains("Age: 19  Gender: Male"));
}

#[test]
/// What: Modals draw on top of the current screen.
fn modals_render() {
    let mut app = AppState::default();
    app.modal = Modal::success("Added to favorites!");
    let text = screen_text(&render(&mut app, 80, 20));
    assert!(text.contains("Added to favorites!"));

    app.modal = Modal::ConfirmRemove {
        id: CharacterId(2),
        name: "Mikasa Ackerman".to_string(),
    };
    let text = screen_text(&render(&mut app, 80, 20));
    assert!(text.contains("Remove favorite"));
    assert!(text.contains("Mikasa Ackerman"));

    app.modal = Modal::Help;
    let text = screen_text(&render(&mut app, 80, 20));
    assert!(text.contains("Help"));
    assert!(text.contains("Quit"));
}

#[test]
/// What: Tiny terminals render without panicking.
fn tiny_terminal_does_not_panic() {
    let mut app = AppState::default();
    app.modal = Modal::Help;
    let terminal = render(&mut app, 10, 4);
    assert_eq!(terminal.backend().buffer().area.width, 10);
}
