use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::state::{AppState, Character};
use crate::theme::{Theme, theme};

use super::helpers::{or_unknown, spinner_frame};

/// What: Render the Details screen for the open character.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state; reads `app.details`
/// - `area`: Body area below the tab bar
///
/// Details:
/// - Shows a spinner while loading and "No character data available." when the
///   fetch failed or Details has no view.
pub fn render_details(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let lines = match app.details.as_ref() {
        Some(view) if view.loading => vec![Line::from(Span::styled(
            format!("{} Loading character #{}...", spinner_frame(app.tick), view.id),
            Style::default().fg(th.yellow),
        ))],
        Some(view) => match view.character.as_ref() {
            Some(c) => format_character_lines(c, view.is_favorite, &th),
            None => no_data(&th),
        },
        None => no_data(&th),
    };
    let p = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.base))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(" Details ", Style::default().fg(th.overlay1)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        );
    f.render_widget(p, area);
}

fn no_data(th: &Theme) -> Vec<Line<'static>> {
    vec![Line::from(Span::styled(
        "No character data available.",
        Style::default().fg(th.subtext1),
    ))]
}

/// What: Format a character record into themed label/value lines.
///
/// Output:
/// - Name heading (with a favorite marker when bookmarked), image URI, then the
///   biographical fields with "Unknown" for anything missing.
pub fn format_character_lines(c: &Character, is_favorite: bool, th: &Theme) -> Vec<Line<'static>> {
    fn kv(key: &str, val: &str, th: &Theme) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{key}: "),
                Style::default()
                    .fg(th.sapphire)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(val.to_string(), Style::default().fg(th.text)),
        ])
    }

    let mut heading = vec![Span::styled(
        c.name.clone(),
        Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
    )];
    if is_favorite {
        heading.push(Span::styled(
            "  ★ In favorites",
            Style::default().fg(th.yellow),
        ));
    }
    let species = c.species_label();
    vec![
        Line::from(heading),
        Line::from(""),
        kv("Image", or_unknown(c.img.as_deref()), th),
        kv("Age", or_unknown(c.age.as_deref()), th),
        kv("Gender", or_unknown(c.gender.as_deref()), th),
        kv("Species", or_unknown(species.as_deref()), th),
        kv("Occupation", or_unknown(c.occupation.as_deref()), th),
        kv("Status", or_unknown(c.status.as_deref()), th),
        kv("Birthplace", or_unknown(c.birthplace.as_deref()), th),
        kv("Residence", or_unknown(c.residence.as_deref()), th),
    ]
}
