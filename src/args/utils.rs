//! Shared utilities for argument processing.

use crate::app::RunOptions;
use crate::theme::Settings;

/// What: Determine the log level based on command-line arguments.
///
/// Details:
/// - Verbose flag overrides `--log-level`. `RUST_LOG` still wins at filter construction.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Merge settings with CLI overrides into the options for one session.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
/// - `settings`: Parsed `settings.conf`
///
/// Output:
/// - Run options; CLI flags take precedence over settings, which take precedence
///   over built-in defaults.
#[must_use]
pub fn resolve_run_options(args: &crate::args::Args, settings: &Settings) -> RunOptions {
    let data_dir = args
        .data_dir
        .clone()
        .or_else(|| settings.data_dir.clone())
        .unwrap_or_else(crate::theme::data_dir);
    let mut options = RunOptions::from_settings(settings, data_dir);
    if let Some(url) = &args.api_url {
        options.api_base_url.clone_from(url);
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Args;

    #[test]
    /// What: Verbose forces debug; otherwise the explicit level is kept.
    fn verbose_overrides_level() {
        let mut args = Args {
            log_level: "warn".into(),
            ..Args::default()
        };
        assert_eq!(determine_log_level(&args), "warn");
        args.verbose = true;
        assert_eq!(determine_log_level(&args), "debug");
    }

    #[test]
    /// What: CLI flags beat settings, and settings beat defaults.
    fn cli_overrides_settings() {
        let settings = Settings {
            data_dir: Some("/srv/titandex".into()),
            ..Settings::default()
        };
        let args = Args::default();
        let opts = resolve_run_options(&args, &settings);
        assert_eq!(opts.data_dir, std::path::PathBuf::from("/srv/titandex"));
        assert_eq!(opts.api_base_url, crate::sources::DEFAULT_API_BASE_URL);

        let args = Args {
            api_url: Some("http://127.0.0.1:3000".into()),
            data_dir: Some("/tmp/fav".into()),
            ..Args::default()
        };
        let opts = resolve_run_options(&args, &settings);
        assert_eq!(opts.data_dir, std::path::PathBuf::from("/tmp/fav"));
        assert_eq!(opts.api_base_url, "http://127.0.0.1:3000");
    }
}
