use std::sync::Arc;
use std::sync::atomic::Ordering;

use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::select;

use crate::events::{handle_event, start_directory_fetch};
use crate::favorites::{FavoritesStore, FileStorage, KvStorage, MemoryStorage};
use crate::sources::CharacterClient;
use crate::state::AppState;
use crate::ui::ui;

use super::RunOptions;
use super::terminal::{restore_terminal, setup_terminal};

mod channels;
mod handlers;
mod workers;

use channels::Channels;
use handlers::{
    handle_details_result, handle_directory_results, handle_favorites_response, handle_tick,
};
use workers::{spawn_event_thread, spawn_tick_worker};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the titandex TUI end-to-end: initialize terminal and state, spawn
/// background workers, drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `options`: API location, favorites directory, and key bindings
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - Background tasks: directory fetches, detail fetches, the favorites owner
///   task, the spinner tick, and the terminal event reader.
/// - The directory is fetched once at startup; later fetches are user-driven.
/// - `TITANDEX_TEST_HEADLESS=1` skips terminal setup and the event reader, and
///   keeps favorites in memory.
pub async fn run(options: RunOptions) -> Result<()> {
    let headless = std::env::var("TITANDEX_TEST_HEADLESS").ok().as_deref() == Some("1");
    tracing::info!(
        api = %options.api_base_url,
        data_dir = %options.data_dir.display(),
        headless,
        "[Runtime] Starting"
    );

    let client = CharacterClient::new(&options.api_base_url, options.request_timeout);
    let storage: Arc<dyn KvStorage> = if headless {
        Arc::new(MemoryStorage::new())
    } else {
        Arc::new(FileStorage::new(&options.data_dir))
    };
    let store = Arc::new(FavoritesStore::new(storage));
    let mut channels = Channels::new(&client, store);

    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
            Ok(t) => Some(t),
            Err(e) => {
                let _ = restore_terminal();
                return Err(e.into());
            }
        }
    };

    let mut app = AppState {
        keymap: options.keymap,
        ..AppState::default()
    };

    spawn_event_thread(
        headless,
        channels.event_tx.clone(),
        Arc::clone(&channels.event_thread_cancelled),
    );
    spawn_tick_worker(channels.tick_tx.clone());

    start_directory_fetch(&mut app, &channels.requests);

    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, &mut app));
        }

        select! {
            Some(ev) = channels.event_rx.recv() => {
                if handle_event(ev, &mut app, &channels.requests) {
                    break;
                }
            }
            Some(res) = channels.directory_res_rx.recv() => {
                handle_directory_results(&mut app, res);
            }
            Some(res) = channels.details_res_rx.recv() => {
                handle_details_result(&mut app, res);
            }
            Some(resp) = channels.favorites_res_rx.recv() => {
                handle_favorites_response(&mut app, resp);
            }
            Some(()) = channels.tick_rx.recv() => {
                handle_tick(&mut app);
            }
            else => break,
        }
    }

    tracing::debug!("[Runtime] Main loop exited");
    channels
        .event_thread_cancelled
        .store(true, Ordering::Relaxed);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
