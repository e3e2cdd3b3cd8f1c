use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Color;

/// Application theme palette used by rendering code.
///
/// All colors are provided as [`ratatui::style::Color`] and are suitable for
/// direct use with widgets and styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Slightly lighter background layer used behind panels.
    pub mantle: Color,
    /// Darkest background shade for deep contrast areas.
    pub crust: Color,
    /// Subtle surface color for component backgrounds.
    pub surface2: Color,
    /// Muted overlay line/border color (primary).
    pub overlay1: Color,
    /// Muted overlay line/border color (secondary).
    pub overlay2: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext0: Color,
    /// Tertiary text for captions and low-emphasis content.
    pub subtext1: Color,
    /// Accent color commonly used for selection and interactive highlights.
    pub sapphire: Color,
    /// Accent color for emphasized headings or selections.
    pub mauve: Color,
    /// Success/positive state color.
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
    /// Accent color for subtle emphasis and borders.
    pub lavender: Color,
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self {
            base: Color::Rgb(0x1e, 0x1e, 0x2e),
            mantle: Color::Rgb(0x18, 0x18, 0x25),
            crust: Color::Rgb(0x11, 0x11, 0x1b),
            surface2: Color::Rgb(0x58, 0x5b, 0x70),
            overlay1: Color::Rgb(0x7f, 0x84, 0x9c),
            overlay2: Color::Rgb(0x93, 0x99, 0xb2),
            text: Color::Rgb(0xcd, 0xd6, 0xf4),
            subtext0: Color::Rgb(0xa6, 0xad, 0xc8),
            subtext1: Color::Rgb(0xba, 0xc2, 0xde),
            sapphire: Color::Rgb(0x74, 0xc7, 0xec),
            mauve: Color::Rgb(0xcb, 0xa6, 0xf7),
            green: Color::Rgb(0xa6, 0xe3, 0xa1),
            yellow: Color::Rgb(0xf9, 0xe2, 0xaf),
            red: Color::Rgb(0xf3, 0x8b, 0xa8),
            lavender: Color::Rgb(0xb4, 0xbe, 0xfe),
        }
    }
}

/// User-configurable application settings parsed from `settings.conf`.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Base URL of the character API.
    pub api_base_url: String,
    /// Per-request timeout for the character API.
    pub request_timeout: Duration,
    /// Directory holding `favorites.json`; `None` means the default data dir.
    pub data_dir: Option<PathBuf>,
    /// Configurable key bindings.
    pub keymap: KeyMap,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: crate::sources::DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(15),
            data_dir: None,
            keymap: KeyMap::default(),
        }
    }
}

/// A single keyboard chord (modifiers + key).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Key code.
    pub code: KeyCode,
    /// Required modifiers.
    pub mods: KeyModifiers,
}

impl KeyChord {
    /// Chord without modifiers.
    #[must_use]
    pub const fn plain(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::empty(),
        }
    }

    /// Chord with the Control modifier.
    #[must_use]
    pub const fn ctrl(ch: char) -> Self {
        Self {
            code: KeyCode::Char(ch),
            mods: KeyModifiers::CONTROL,
        }
    }

    /// What: Test whether a key event triggers this chord.
    ///
    /// Details:
    /// - Character keys ignore Shift (terminals report `?` as Shift+`?`) and compare
    ///   case-insensitively.
    #[must_use]
    pub fn matches(&self, ev: &KeyEvent) -> bool {
        match (self.code, ev.code) {
            (KeyCode::Char(a), KeyCode::Char(b)) => {
                a.eq_ignore_ascii_case(&b)
                    && (ev.modifiers - KeyModifiers::SHIFT) == (self.mods - KeyModifiers::SHIFT)
            }
            (a, b) => a == b && ev.modifiers == self.mods,
        }
    }

    /// Return a short display label such as "Ctrl+R", "F1", "Del".
    #[must_use]
    pub fn label(&self) -> String {
        let mut parts: Vec<&'static str> = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl");
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt");
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
            parts.push("Shift");
        }
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(ch) if parts.is_empty() => ch.to_string(),
            KeyCode::Char(ch) => ch.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Delete => "Del".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PgUp".to_string(),
            KeyCode::PageDown => "PgDn".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "?".to_string(),
        };
        if parts.is_empty() || matches!(self.code, KeyCode::BackTab) {
            key
        } else {
            format!("{}+{}", parts.join("+"), key)
        }
    }
}

/// Application key bindings.
/// Each action can have multiple chords.
#[derive(Clone, Debug)]
pub struct KeyMap {
    /// Show the help overlay.
    pub help: Vec<KeyChord>,
    /// Quit the application.
    pub exit: Vec<KeyChord>,
    /// Re-fetch the character directory.
    pub refresh: Vec<KeyChord>,
    /// Bookmark the character shown in Details.
    pub add_favorite: Vec<KeyChord>,
    /// Remove the selected favorite (asks for confirmation).
    pub remove_favorite: Vec<KeyChord>,
    /// Switch between the Directory and Favorites screens.
    pub next_screen: Vec<KeyChord>,
    /// Focus the Directory search input.
    pub focus_search: Vec<KeyChord>,
}

impl KeyMap {
    /// What: Check whether any chord in `list` matches the key event.
    #[must_use]
    pub fn any(list: &[KeyChord], ev: &KeyEvent) -> bool {
        list.iter().any(|c| c.matches(ev))
    }

    /// Label of the first chord in `list`, or an empty string when unbound.
    #[must_use]
    pub fn first_label(list: &[KeyChord]) -> String {
        list.first().map(KeyChord::label).unwrap_or_default()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        use KeyCode::{Char, Delete, F, Tab};
        Self {
            help: vec![KeyChord::plain(F(1)), KeyChord::plain(Char('?'))],
            exit: vec![KeyChord::ctrl('c'), KeyChord::plain(Char('q'))],
            refresh: vec![KeyChord::plain(Char('r')), KeyChord::plain(F(5))],
            add_favorite: vec![KeyChord::plain(Char('a'))],
            remove_favorite: vec![KeyChord::plain(Char('d')), KeyChord::plain(Delete)],
            next_screen: vec![KeyChord::plain(Tab)],
            focus_search: vec![KeyChord::plain(Char('/'))],
        }
    }
}
