use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use super::parsing::{parse_color_value, split_config_line};
use super::paths::{config_dir, theme_path_in};
use super::types::Theme;

/// Global theme, resolved once on first use.
static THEME_STORE: OnceLock<Theme> = OnceLock::new();

/// What: Parse `theme.conf` text as overrides on top of the default palette.
///
/// Output:
/// - Theme with every recognized `key = color` pair applied.
///
/// Details:
/// - Unknown keys and invalid colors are ignored with a warning.
#[must_use]
pub fn parse_theme(content: &str) -> Theme {
    let mut th = Theme::default();
    for line in content.lines() {
        let Some((key, val)) = split_config_line(line) else {
            continue;
        };
        let Some(color) = parse_color_value(val) else {
            tracing::warn!(key = %key, value = %val, "invalid theme color");
            continue;
        };
        let slot = match key.as_str() {
            "base" | "background_base" => &mut th.base,
            "mantle" | "background_mantle" => &mut th.mantle,
            "crust" | "background_crust" => &mut th.crust,
            "surface2" | "surface_level2" => &mut th.surface2,
            "overlay1" | "overlay_primary" => &mut th.overlay1,
            "overlay2" | "overlay_secondary" => &mut th.overlay2,
            "text" | "text_primary" => &mut th.text,
            "subtext0" | "text_secondary" => &mut th.subtext0,
            "subtext1" | "text_tertiary" => &mut th.subtext1,
            "sapphire" | "accent_interactive" => &mut th.sapphire,
            "mauve" | "accent_heading" => &mut th.mauve,
            "green" | "semantic_success" => &mut th.green,
            "yellow" | "semantic_warning" => &mut th.yellow,
            "red" | "semantic_error" => &mut th.red,
            "lavender" | "accent_emphasis" => &mut th.lavender,
            _ => {
                tracing::warn!(key = %key, "unknown theme key");
                continue;
            }
        };
        *slot = color;
    }
    th
}

/// Load the theme from `path`, or the default palette when the file is absent or unreadable.
fn load_theme_from(path: &Path) -> Theme {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::info!(path = %path.display(), "loaded theme configuration");
            parse_theme(&content)
        }
        Err(_) => Theme::default(),
    }
}

/// Return the application's theme palette, loading `<config>/theme.conf` on first call.
pub fn theme() -> Theme {
    *THEME_STORE.get_or_init(|| load_theme_from(&theme_path_in(&config_dir())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    /// What: Theme overrides apply by canonical or descriptive key; junk is skipped.
    fn parse_theme_overrides() {
        let th = parse_theme(
            "background_base = #000000\nred = 255,0,0\nunknown = #ffffff\ntext = nope\n",
        );
        assert_eq!(th.base, Color::Rgb(0, 0, 0));
        assert_eq!(th.red, Color::Rgb(255, 0, 0));
        assert_eq!(th.text, Theme::default().text);
    }

    #[test]
    /// What: A missing theme file yields the default palette.
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(load_theme_from(&dir.path().join("theme.conf")), Theme::default());
    }
}
