//! Small layout and text helpers shared by the screen renderers.

use ratatui::prelude::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Placeholder for missing character fields.
pub const UNKNOWN: &str = "Unknown";

/// Braille spinner frames advanced by the runtime tick.
const SPINNER: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Spinner glyph for the given tick count.
#[must_use]
pub const fn spinner_frame(tick: usize) -> char {
    SPINNER[tick % SPINNER.len()]
}

/// Field text or [`UNKNOWN`] when absent.
#[must_use]
pub fn or_unknown(value: Option<&str>) -> &str {
    value.unwrap_or(UNKNOWN)
}

/// What: Rectangle of at most `width` x `height` centered inside `area`.
///
/// Details:
/// - Shrinks to leave a 2-cell margin on small terminals.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width.saturating_sub(4));
    let h = height.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    }
}

/// What: Cut `text` to at most `max` terminal columns, appending `…` when shortened.
///
/// Inputs:
/// - `text`: Display text (may contain wide characters)
/// - `max`: Column budget
///
/// Output:
/// - The original text when it fits; otherwise a prefix plus ellipsis within `max` columns.
#[must_use]
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Terminal column count of `text`, saturated to `u16`.
#[must_use]
pub fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}
