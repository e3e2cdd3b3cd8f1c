use ratatui::{
    Frame,
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{AppState, Modal, NoticeKind};
use crate::theme::{KeyMap, Theme, theme};

use super::helpers::centered_rect;

/// Draw the active modal, if any, on top of the screen.
pub fn render_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    match &app.modal {
        Modal::None => {}
        Modal::Alert {
            kind,
            title,
            message,
        } => render_alert(f, area, *kind, title, message, &th),
        Modal::ConfirmRemove { name, .. } => render_confirm_remove(f, area, name, &th),
        Modal::Help => render_help(f, area, &app.keymap, &th),
    }
}

/// Shared bordered box used by every modal.
fn modal_box(
    f: &mut Frame,
    rect: Rect,
    lines: Vec<Line<'static>>,
    title: &str,
    accent: Color,
    th: &Theme,
) {
    f.render_widget(Clear, rect);
    let p = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(accent))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(p, rect);
}

/// What: Render a one-button notice.
///
/// Details:
/// - Border color follows the notice kind: green success, sapphire info, red error.
fn render_alert(
    f: &mut Frame,
    area: Rect,
    kind: NoticeKind,
    title: &str,
    message: &str,
    th: &Theme,
) {
    let accent = match kind {
        NoticeKind::Success => th.green,
        NoticeKind::Info => th.sapphire,
        NoticeKind::Error => th.red,
    };
    let rect = centered_rect(60, 7, area);
    let lines = vec![
        Line::from(Span::styled(message.to_string(), Style::default().fg(th.text))),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter or Esc to close",
            Style::default().fg(th.subtext1),
        )),
    ];
    modal_box(f, rect, lines, title, accent, th);
}

/// Ask before removing `name` from favorites.
fn render_confirm_remove(f: &mut Frame, area: Rect, name: &str, th: &Theme) {
    let rect = centered_rect(60, 7, area);
    let lines = vec![
        Line::from(vec![
            Span::raw("Remove "),
            Span::styled(
                name.to_string(),
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" from your favorites?"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter/y to remove, Esc/n to cancel",
            Style::default().fg(th.subtext1),
        )),
    ];
    modal_box(f, rect, lines, "Remove favorite", th.red, th);
}

/// Key binding overview built from the active keymap.
fn render_help(f: &mut Frame, area: Rect, km: &KeyMap, th: &Theme) {
    let row = |keys: String, what: &str| {
        Line::from(vec![
            Span::styled(
                format!("{keys:<14}"),
                Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
            ),
            Span::styled(what.to_string(), Style::default().fg(th.text)),
        ])
    };
    let lines = vec![
        row(KeyMap::first_label(&km.next_screen), "Switch Directory / Favorites"),
        row("1 / 2".to_string(), "Jump to Directory / Favorites"),
        row(KeyMap::first_label(&km.focus_search), "Search characters by name"),
        row("Enter".to_string(), "Open details"),
        row("Esc".to_string(), "Back"),
        row(KeyMap::first_label(&km.refresh), "Reload"),
        row(KeyMap::first_label(&km.add_favorite), "Add to favorites (Details)"),
        row(KeyMap::first_label(&km.remove_favorite), "Remove favorite (Favorites)"),
        row(KeyMap::first_label(&km.help), "This help"),
        row(KeyMap::first_label(&km.exit), "Quit"),
    ];
    let rect = centered_rect(56, 14, area);
    modal_box(f, rect, lines, "Help", th.mauve, th);
}
