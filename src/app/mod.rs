//! titandex application module.
//!
//! Wires the terminal, background workers, and the event loop together.

use std::path::PathBuf;
use std::time::Duration;

use crate::theme::{KeyMap, Settings};

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::run;

/// What: Resolved inputs for one TUI session.
///
/// Details:
/// - Built from `settings.conf` plus CLI overrides in `main`.
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Character API root.
    pub api_base_url: String,
    /// Per-request timeout for the HTTP client.
    pub request_timeout: Duration,
    /// Directory holding `favorites.json`.
    pub data_dir: PathBuf,
    /// Key bindings in effect.
    pub keymap: KeyMap,
}

impl RunOptions {
    /// What: Derive run options from loaded settings.
    ///
    /// Inputs:
    /// - `settings`: Parsed `settings.conf`
    /// - `data_dir`: Favorites directory already resolved by the caller
    #[must_use]
    pub fn from_settings(settings: &Settings, data_dir: PathBuf) -> Self {
        Self {
            api_base_url: settings.api_base_url.clone(),
            request_timeout: settings.request_timeout,
            data_dir,
            keymap: settings.keymap.clone(),
        }
    }
}
