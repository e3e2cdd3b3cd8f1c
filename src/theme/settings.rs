use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::parsing::{parse_key_chord, split_config_line};
use super::paths::{config_dir, settings_path_in};
use super::types::{KeyChord, Settings};

/// Default content written to `settings.conf` on first run.
pub(crate) const SETTINGS_SKELETON_CONTENT: &str = "# titandex settings\n\
#\n\
# Format: key = value\n\
# Lines starting with # are comments.\n\
#\n\
# Character API\n\
api_base_url = https://api.attackontitanapi.com\n\
request_timeout_secs = 15\n\
#\n\
# Directory holding favorites.json (default: $XDG_DATA_HOME/titandex)\n\
# data_dir = /path/to/dir\n\
#\n\
# Key bindings: one chord per action (e.g. Ctrl+R, F5, q).\n\
# Setting a key replaces all of its defaults, shown here.\n\
# keybind_help = F1          (also ?)\n\
# keybind_quit = Ctrl+C      (also q)\n\
# keybind_refresh = r        (also F5)\n\
# keybind_add_favorite = a\n\
# keybind_remove_favorite = d (also Del)\n\
# keybind_next_screen = Tab\n\
# keybind_focus_search = /\n";

/// What: Parse `settings.conf` text into [`Settings`].
///
/// Inputs:
/// - `content`: Full file text.
///
/// Output:
/// - Settings with every recognized key applied on top of the defaults.
///
/// Details:
/// - Unknown keys and unparsable values are ignored (logged at debug).
/// - A keybind entry replaces the whole default chord list for that action.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut out = Settings::default();
    for line in content.lines() {
        let Some((key, val)) = split_config_line(line) else {
            continue;
        };
        let chord = || parse_key_chord(val).map(|c| vec![c]);
        let applied = match key.as_str() {
            "api_base_url" | "api_url" => {
                if val.is_empty() {
                    false
                } else {
                    out.api_base_url = val.to_string();
                    true
                }
            }
            "request_timeout_secs" | "timeout_secs" => match val.parse::<u64>() {
                Ok(v) if v > 0 => {
                    out.request_timeout = Duration::from_secs(v);
                    true
                }
                _ => false,
            },
            "data_dir" => {
                if val.is_empty() {
                    false
                } else {
                    out.data_dir = Some(expand_home(val));
                    true
                }
            }
            "keybind_help" => set_chords(&mut out.keymap.help, chord()),
            "keybind_quit" | "keybind_exit" => set_chords(&mut out.keymap.exit, chord()),
            "keybind_refresh" => set_chords(&mut out.keymap.refresh, chord()),
            "keybind_add_favorite" => set_chords(&mut out.keymap.add_favorite, chord()),
            "keybind_remove_favorite" => set_chords(&mut out.keymap.remove_favorite, chord()),
            "keybind_next_screen" => set_chords(&mut out.keymap.next_screen, chord()),
            "keybind_focus_search" => set_chords(&mut out.keymap.focus_search, chord()),
            _ => false,
        };
        if !applied {
            tracing::debug!(key = %key, value = %val, "ignored settings entry");
        }
    }
    out
}

/// Replace `slot` when `chords` parsed; report whether it did.
fn set_chords(slot: &mut Vec<KeyChord>, chords: Option<Vec<KeyChord>>) -> bool {
    chords.is_some_and(|c| {
        *slot = c;
        true
    })
}

/// Expand a leading `~/` to `$HOME`.
fn expand_home(val: &str) -> PathBuf {
    if let Some(rest) = val.strip_prefix("~/")
        && let Ok(home) = std::env::var("HOME")
    {
        return Path::new(&home).join(rest);
    }
    PathBuf::from(val)
}

/// What: Load settings from `path`, writing the skeleton first when the file is missing.
///
/// Output:
/// - Parsed settings; defaults when the file cannot be read.
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        if let Some(dir) = path.parent() {
            let _ = fs::create_dir_all(dir);
        }
        match fs::write(path, SETTINGS_SKELETON_CONTENT) {
            Ok(()) => tracing::info!(path = %path.display(), "wrote default settings skeleton"),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not write settings skeleton");
            }
        }
    }
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::info!(path = %path.display(), "loaded settings");
            parse_settings(&content)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
            Settings::default()
        }
    }
}

/// Load user settings from `<config>/settings.conf`.
/// Falls back to `Settings::default()` when missing or invalid.
pub fn settings() -> Settings {
    load_settings_from(&settings_path_in(&config_dir()))
}
