use std::env;
use std::path::{Path, PathBuf};

/// Application directory name used under the XDG base directories.
const APP_DIR: &str = "titandex";

/// What: Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Create `dir` if missing and return it.
fn ensure(dir: PathBuf) -> PathBuf {
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::debug!(path = %dir.display(), error = %e, "could not create directory");
    }
    dir
}

/// XDG config directory for titandex: `$XDG_CONFIG_HOME/titandex` (ensured to exist).
pub fn config_dir() -> PathBuf {
    ensure(xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR))
}

/// Logs directory under config: `<config>/logs` (ensured to exist).
pub fn logs_dir() -> PathBuf {
    ensure(config_dir().join("logs"))
}

/// Default data directory holding `favorites.json`: `$XDG_DATA_HOME/titandex`.
///
/// Not created here; storage creates it on first write.
pub fn data_dir() -> PathBuf {
    xdg_base_dir("XDG_DATA_HOME", &[".local", "share"]).join(APP_DIR)
}

/// Path of `settings.conf` inside `dir`.
pub(crate) fn settings_path_in(dir: &Path) -> PathBuf {
    dir.join("settings.conf")
}

/// Path of `theme.conf` inside `dir`.
pub(crate) fn theme_path_in(dir: &Path) -> PathBuf {
    dir.join("theme.conf")
}

#[cfg(test)]
mod tests {
    #[test]
    /// What: Config, logs, and data dirs honour the XDG variables.
    ///
    /// Inputs:
    /// - `XDG_CONFIG_HOME` and `XDG_DATA_HOME` pointed at a temp directory
    ///
    /// Output:
    /// - Paths end with the app/logs segments and the config dirs exist.
    fn paths_follow_xdg_variables() {
        let _guard = crate::theme::test_mutex()
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let tmp = tempfile::tempdir().expect("tempdir");
        let orig_cfg = std::env::var_os("XDG_CONFIG_HOME");
        let orig_data = std::env::var_os("XDG_DATA_HOME");
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", tmp.path().join("cfg"));
            std::env::set_var("XDG_DATA_HOME", tmp.path().join("data"));
        }
        let cfg = super::config_dir();
        let logs = super::logs_dir();
        let data = super::data_dir();
        assert!(cfg.ends_with("titandex") && cfg.is_dir());
        assert!(logs.ends_with("logs") && logs.is_dir());
        assert_eq!(data, tmp.path().join("data").join("titandex"));
        unsafe {
            match orig_cfg {
                Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
            match orig_data {
                Some(v) => std::env::set_var("XDG_DATA_HOME", v),
                None => std::env::remove_var("XDG_DATA_HOME"),
            }
        }
    }
}
