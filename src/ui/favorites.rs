use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::state::AppState;
use crate::theme::theme;

use super::helpers::{or_unknown, truncate_to_width};

/// Render the Favorites screen: bookmarked characters with age and gender.
pub fn render_favorites(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let fav = &mut app.favorites;
    let block = Block::default()
        .title(Span::styled(
            format!(" Favorites ({}) ", fav.items.len()),
            Style::default().fg(th.overlay1),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.mauve));

    if fav.items.is_empty() {
        let text = if fav.pending.is_some() {
            "Loading favorites..."
        } else {
            "You have no favorite characters yet."
        };
        let p = Paragraph::new(Span::styled(text, Style::default().fg(th.subtext1)))
            .style(Style::default().bg(th.base))
            .block(block);
        f.render_widget(p, area);
        return;
    }

    let width = usize::from(area.width.saturating_sub(4)).min(32);
    let items: Vec<ListItem> = fav
        .items
        .iter()
        .map(|c| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    truncate_to_width(&c.name, width),
                    Style::default().fg(th.text).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(
                        "  Age: {}  Gender: {}",
                        or_unknown(c.age.as_deref()),
                        or_unknown(c.gender.as_deref())
                    ),
                    Style::default().fg(th.overlay2),
                ),
            ]))
        })
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut fav.list_state);
}
