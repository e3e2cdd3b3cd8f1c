//! titandex binary entrypoint kept minimal. The full runtime lives in `app`.

use std::fmt;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;

use titandex::app;
use titandex::args::{Args, determine_log_level, process_args, resolve_run_options};

struct TitandexTimer;

impl tracing_subscriber::fmt::time::FormatTime for TitandexTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"))
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is unset
///
/// Details:
/// - Writes to `<config>/logs/titandex.log` through a non-blocking appender; falls
///   back to stderr when the file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let log_path = titandex::theme::logs_dir().join("titandex.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(TitandexTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(TitandexTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&determine_log_level(&args));

    let settings = titandex::theme::settings();
    let options = resolve_run_options(&args, &settings);
    if let Some(code) = process_args(&args, &options) {
        return if code == 0 {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "titandex starting");
    let code = match app::run(options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, "Application error");
            eprintln!("titandex: {err}");
            ExitCode::FAILURE
        }
    };
    tracing::info!("titandex exited");
    code
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes an ISO-like timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer holds a `YYYY-MM-DDTHH:MM:SS.mmm` stamp
    #[test]
    fn titandex_timer_formats_time() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        super::TitandexTimer
            .format_time(&mut writer)
            .expect("format");
        assert_eq!(buf.len(), 23);
        assert_eq!(&buf[10..11], "T");
    }
}
