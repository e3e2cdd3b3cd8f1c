use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::events::Requests;
use crate::favorites::{FavoritesStore, KvStorage};
use crate::sources::CharacterClient;
use crate::state::{DetailsResult, DirectoryResults, FavoritesResponse};

use super::workers::{spawn_details_worker, spawn_directory_worker, spawn_favorites_worker};

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Request senders live in `requests` so event handlers can queue work.
/// - Every worker answers on its own unbounded channel read by the event loop.
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub event_thread_cancelled: Arc<AtomicBool>,
    pub tick_tx: mpsc::UnboundedSender<()>,
    pub tick_rx: mpsc::UnboundedReceiver<()>,
    pub requests: Requests,
    pub directory_res_rx: mpsc::UnboundedReceiver<DirectoryResults>,
    pub details_res_rx: mpsc::UnboundedReceiver<DetailsResult>,
    pub favorites_res_rx: mpsc::UnboundedReceiver<FavoritesResponse>,
}

impl Channels {
    /// What: Create all channels and spawn the request workers.
    ///
    /// Inputs:
    /// - `client`: HTTP client shared by the directory and details workers
    /// - `store`: Favorites collection owned by the favorites worker
    ///
    /// Output:
    /// - Returns a `Channels` struct with all senders and receivers initialized.
    ///
    /// Details:
    /// - Must be called inside a Tokio runtime since workers are spawned here.
    pub fn new<S: KvStorage + 'static>(
        client: &CharacterClient,
        store: Arc<FavoritesStore<S>>,
    ) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        let (directory_tx, directory_req_rx) = mpsc::unbounded_channel::<u64>();
        let (directory_res_tx, directory_res_rx) = mpsc::unbounded_channel::<DirectoryResults>();
        let (details_tx, details_req_rx) = mpsc::unbounded_channel();
        let (details_res_tx, details_res_rx) = mpsc::unbounded_channel::<DetailsResult>();
        let (favorites_tx, favorites_req_rx) = mpsc::unbounded_channel();
        let (favorites_res_tx, favorites_res_rx) = mpsc::unbounded_channel::<FavoritesResponse>();

        spawn_directory_worker(client.clone(), directory_req_rx, directory_res_tx);
        spawn_details_worker(client.clone(), details_req_rx, details_res_tx);
        spawn_favorites_worker(store, favorites_req_rx, favorites_res_tx);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            tick_tx,
            tick_rx,
            requests: Requests {
                directory_tx,
                details_tx,
                favorites_tx,
            },
            directory_res_rx,
            details_res_rx,
            favorites_res_rx,
        }
    }
}
