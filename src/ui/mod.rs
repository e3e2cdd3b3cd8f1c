//! Rendering for the titandex TUI.
//!
//! `ui` draws the tab bar, the active screen, the key hint footer, and any
//! modal on top. Each screen lives in its own submodule.

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Tabs},
};

use crate::state::{AppState, Screen};
use crate::theme::{KeyMap, theme};

/// Details screen.
mod details;
/// Directory screen.
mod directory;
/// Favorites screen.
mod favorites;
/// Layout and text helpers.
pub mod helpers;
/// Modal overlays.
mod modals;

pub use details::format_character_lines;

/// What: Render one full frame.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable state (list widgets are stateful)
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    render_tabs(f, app, chunks[0]);
    match app.screen {
        Screen::Directory => directory::render_directory(f, app, chunks[1]),
        Screen::Details => details::render_details(f, app, chunks[1]),
        Screen::Favorites => favorites::render_favorites(f, app, chunks[1]),
    }
    render_footer(f, app, chunks[2]);
    modals::render_modal(f, app, area);
}

/// Tab bar; Details highlights the tab it was opened from.
fn render_tabs(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let selected = match app.screen {
        Screen::Directory => 0,
        Screen::Favorites => 1,
        Screen::Details => match app.details.as_ref().map(|d| d.return_to) {
            Some(Screen::Favorites) => 1,
            _ => 0,
        },
    };
    let tabs = Tabs::new(vec![" 1 Directory ", " 2 Favorites "])
        .select(selected)
        .style(Style::default().fg(th.overlay1).bg(th.base))
        .highlight_style(
            Style::default()
                .fg(th.crust)
                .bg(th.mauve)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("|", Style::default().fg(th.surface2)));
    f.render_widget(tabs, area);
}

/// One-line key hints for the current screen.
fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let km = &app.keymap;
    let mut hints: Vec<(String, &str)> = match app.screen {
        Screen::Directory => vec![
            (KeyMap::first_label(&km.focus_search), "search"),
            ("Enter".to_string(), "details"),
            (KeyMap::first_label(&km.refresh), "reload"),
        ],
        Screen::Details => vec![
            (KeyMap::first_label(&km.add_favorite), "add favorite"),
            ("Esc".to_string(), "back"),
        ],
        Screen::Favorites => vec![
            ("Enter".to_string(), "details"),
            (KeyMap::first_label(&km.remove_favorite), "remove"),
        ],
    };
    hints.push((KeyMap::first_label(&km.next_screen), "switch"));
    hints.push((KeyMap::first_label(&km.help), "help"));
    hints.push((KeyMap::first_label(&km.exit), "quit"));

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, what) in hints {
        spans.push(Span::styled(
            format!(" {key} "),
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!("{what} "), Style::default().fg(th.subtext0)));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.mantle)),
        area,
    );
}
