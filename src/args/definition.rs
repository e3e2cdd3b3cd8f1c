//! Command-line argument definition and processing.

use clap::Parser;

/// titandex - browse Attack on Titan characters and keep a list of favorites
#[derive(Parser, Debug, Default)]
#[command(name = "titandex")]
#[command(version)]
#[command(about = "Browse Attack on Titan characters and keep a list of favorites", long_about = None)]
pub struct Args {
    /// Character API base URL (overrides `api_base_url` in settings.conf)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Directory holding favorites.json (overrides `data_dir` in settings.conf)
    #[arg(long)]
    pub data_dir: Option<std::path::PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print saved favorites as `id<TAB>name` and exit
    #[arg(long)]
    pub list_favorites: bool,
}

/// What: Handle early-exit flags before the TUI starts.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `options`: Resolved run options (favorites location).
///
/// Output:
/// - `Some(exit_code)` when a flag handled the invocation; `None` to continue to the TUI.
pub fn process_args(args: &Args, options: &crate::app::RunOptions) -> Option<i32> {
    if args.list_favorites {
        return Some(super::favorites::handle_list_favorites(
            &options.data_dir,
            &mut std::io::stdout().lock(),
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Flags parse into the expected fields with defaults applied.
    fn parses_overrides_and_defaults() {
        let args = Args::parse_from(["titandex"]);
        assert_eq!(args.log_level, "info");
        assert!(!args.verbose && !args.list_favorites);
        assert!(args.api_url.is_none() && args.data_dir.is_none());

        let args = Args::parse_from([
            "titandex",
            "--api-url",
            "http://localhost:8080",
            "--data-dir",
            "/tmp/td",
            "-v",
            "--list-favorites",
        ]);
        assert_eq!(args.api_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(args.data_dir, Some(std::path::PathBuf::from("/tmp/td")));
        assert!(args.verbose && args.list_favorites);
    }
}
