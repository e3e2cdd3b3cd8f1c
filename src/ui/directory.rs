use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    prelude::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::state::{AppState, Character, DirectoryFocus};
use crate::theme::{Theme, theme};

use super::helpers::{display_width, or_unknown, spinner_frame, truncate_to_width};

/// What: Render the Directory screen: search input on top, character list below.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Mutable state (list selection is stateful)
/// - `area`: Body area below the tab bar
///
/// Details:
/// - While the first fetch is running the list shows a spinner instead of the empty text.
/// - The terminal cursor is placed in the search box only while it has focus.
pub fn render_directory(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).split(area);
    render_search(f, app, chunks[0], &th);

    let dir = &mut app.directory;
    let loading = dir.is_loading();
    let mut title = vec![Span::styled(
        format!(" Characters ({}) ", dir.visible.len()),
        Style::default().fg(th.overlay1),
    )];
    if loading {
        title.push(Span::styled(
            format!("{} loading ", spinner_frame(app.tick)),
            Style::default().fg(th.yellow),
        ));
    }
    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if dir.focus == DirectoryFocus::List {
            th.mauve
        } else {
            th.surface2
        }));

    if dir.visible.is_empty() {
        let text = if loading {
            "Loading characters..."
        } else {
            "No characters found."
        };
        let p = Paragraph::new(Span::styled(text, Style::default().fg(th.subtext1)))
            .style(Style::default().bg(th.base))
            .block(block);
        f.render_widget(p, chunks[1]);
        return;
    }

    let width = usize::from(chunks[1].width.saturating_sub(4));
    let items: Vec<ListItem> = dir
        .visible
        .iter()
        .map(|c| ListItem::new(character_row(c, width, &th)))
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, chunks[1], &mut dir.list_state);
}

/// Search input box; shows the cursor while focused.
fn render_search(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let focused = app.directory.focus == DirectoryFocus::Search;
    let query = &app.directory.query;
    let line = Line::from(vec![
        Span::styled(
            "> ",
            Style::default().fg(if focused { th.sapphire } else { th.overlay1 }),
        ),
        Span::styled(
            query.clone(),
            Style::default().fg(if focused { th.text } else { th.subtext0 }),
        ),
    ]);
    let title = if focused { " Search (focused) " } else { " Search " };
    let input = Paragraph::new(line)
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { th.mauve } else { th.surface2 })),
        );
    f.render_widget(input, area);

    if focused {
        let right = area.x + area.width.saturating_sub(2);
        let x = (area.x + 3).saturating_add(display_width(query)).min(right);
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// One list row: bold name followed by age, gender, and status.
fn character_row(c: &Character, width: usize, th: &Theme) -> Line<'static> {
    let name = truncate_to_width(&c.name, width.min(32));
    let meta = format!(
        "  {} · {} · {}",
        or_unknown(c.age.as_deref()),
        or_unknown(c.gender.as_deref()),
        or_unknown(c.status.as_deref()),
    );
    Line::from(vec![
        Span::styled(
            name,
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled(meta, Style::default().fg(th.overlay2)),
    ])
}
