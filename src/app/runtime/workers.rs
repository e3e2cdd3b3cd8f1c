use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tokio::time::{Duration, interval};

use crate::favorites::{FavoritesStore, KvStorage};
use crate::sources::CharacterClient;
use crate::state::{
    DetailsRequest, DetailsResult, DirectoryResults, FavoritesRequest, FavoritesResponse,
};

/// Spinner frame interval.
const TICK_INTERVAL_MS: u64 = 120;

/// What: Spawn background worker answering directory fetch requests.
///
/// Inputs:
/// - `client`: Character API client
/// - `req_rx`: Request ids to fetch for
/// - `res_tx`: Channel sender for results
///
/// Details:
/// - Each request runs in its own task; the event loop drops results whose id
///   is no longer pending, so overlapping refreshes are harmless.
pub fn spawn_directory_worker(
    client: CharacterClient,
    mut req_rx: mpsc::UnboundedReceiver<u64>,
    res_tx: mpsc::UnboundedSender<DirectoryResults>,
) {
    tokio::spawn(async move {
        while let Some(request_id) = req_rx.recv().await {
            let client = client.clone();
            let res_tx = res_tx.clone();
            tokio::spawn(async move {
                let result = client.list_all().await;
                if let Err(e) = &result {
                    tracing::warn!(request_id, error = %e, "[Directory] Fetch failed");
                }
                let _ = res_tx.send(DirectoryResults { request_id, result });
            });
        }
        tracing::debug!("[Directory] Request channel closed; worker exiting");
    });
}

/// What: Spawn background worker answering single-character fetches.
///
/// Inputs:
/// - `client`: Character API client
/// - `req_rx`: Details requests
/// - `res_tx`: Channel sender for results
pub fn spawn_details_worker(
    client: CharacterClient,
    mut req_rx: mpsc::UnboundedReceiver<DetailsRequest>,
    res_tx: mpsc::UnboundedSender<DetailsResult>,
) {
    tokio::spawn(async move {
        while let Some(DetailsRequest { request_id, id }) = req_rx.recv().await {
            let client = client.clone();
            let res_tx = res_tx.clone();
            tokio::spawn(async move {
                let result = client.get_by_id(id).await;
                if let Err(e) = &result {
                    tracing::warn!(request_id, id = %id, error = %e, "[Details] Fetch failed");
                }
                let _ = res_tx.send(DetailsResult { request_id, result });
            });
        }
        tracing::debug!("[Details] Request channel closed; worker exiting");
    });
}

/// What: Spawn the single owner task for the favorites collection.
///
/// Inputs:
/// - `store`: Favorites collection over its storage backend
/// - `req_rx`: Queued favorites operations
/// - `res_tx`: Channel sender for outcomes
///
/// Details:
/// - Requests are processed strictly one at a time in arrival order, so two
///   quick adds of the same character yield `Ok` then `AlreadyExists`.
/// - Storage I/O runs on the blocking pool; the next request is not taken until
///   the previous one has finished.
pub fn spawn_favorites_worker<S: KvStorage + 'static>(
    store: Arc<FavoritesStore<S>>,
    mut req_rx: mpsc::UnboundedReceiver<FavoritesRequest>,
    res_tx: mpsc::UnboundedSender<FavoritesResponse>,
) {
    tokio::spawn(async move {
        while let Some(req) = req_rx.recv().await {
            let store = Arc::clone(&store);
            match tokio::task::spawn_blocking(move || process_favorites_request(&store, req)).await
            {
                Ok(resp) => {
                    if res_tx.send(resp).is_err() {
                        break;
                    }
                }
                Err(e) => tracing::error!(error = %e, "[Favorites] Storage task failed"),
            }
        }
        tracing::debug!("[Favorites] Request channel closed; worker exiting");
    });
}

/// What: Execute one favorites operation against the store.
///
/// Inputs:
/// - `store`: Favorites collection
/// - `req`: Operation to run
///
/// Output:
/// - Matching [`FavoritesResponse`] carrying the outcome.
pub fn process_favorites_request<S: KvStorage>(
    store: &FavoritesStore<S>,
    req: FavoritesRequest,
) -> FavoritesResponse {
    match req {
        FavoritesRequest::Load { request_id } => FavoritesResponse::Loaded {
            request_id,
            result: store.try_load(),
        },
        FavoritesRequest::Contains { request_id, id } => FavoritesResponse::Membership {
            request_id,
            is_favorite: store.contains(id),
        },
        FavoritesRequest::Add(character) => {
            let result = store.add(character.clone());
            FavoritesResponse::Added { character, result }
        }
        FavoritesRequest::Remove(id) => FavoritesResponse::Removed {
            id,
            result: store.remove(id),
        },
    }
}

/// What: Spawn the periodic tick that animates the loading spinner.
///
/// Details:
/// - Stops once the receiver is dropped.
pub fn spawn_tick_worker(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut ticker = interval(Duration::from_millis(TICK_INTERVAL_MS));
        loop {
            ticker.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn a thread reading terminal events.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started
/// - `event_tx`: Channel sender for terminal events
/// - `cancelled`: Set by the event loop on exit
///
/// Details:
/// - Polls with a 50ms timeout so the cancellation flag is observed promptly.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    // transient read errors
                    Err(_) => {}
                },
                Ok(false) | Err(_) => {}
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::favorites::MemoryStorage;
    use crate::state::{Character, CharacterId};

    fn eren() -> Character {
        Character {
            id: CharacterId(1),
            name: "Eren Yeager".to_string(),
            ..Character::default()
        }
    }

    #[test]
    /// What: Each favorites request maps to the matching response variant.
    ///
    /// Inputs:
    /// - Empty memory store; Contains, Add, Load, Remove in sequence
    ///
    /// Output:
    /// - Membership false, Added ok, Loaded [Eren], Removed ok.
    fn process_request_maps_each_operation() {
        let store = FavoritesStore::new(MemoryStorage::new());
        let resp = process_favorites_request(
            &store,
            FavoritesRequest::Contains {
                request_id: 3,
                id: CharacterId(1),
            },
        );
        assert!(matches!(
            resp,
            FavoritesResponse::Membership {
                request_id: 3,
                is_favorite: false
            }
        ));

        let resp = process_favorites_request(&store, FavoritesRequest::Add(eren()));
        assert!(matches!(resp, FavoritesResponse::Added { result: Ok(()), .. }));

        match process_favorites_request(&store, FavoritesRequest::Load { request_id: 4 }) {
            FavoritesResponse::Loaded {
                request_id,
                result: Ok(items),
            } => {
                assert_eq!(request_id, 4);
                assert_eq!(items, vec![eren()]);
            }
            other => panic!("unexpected response: {other:?}"),
        }

        let resp = process_favorites_request(&store, FavoritesRequest::Remove(CharacterId(1)));
        assert!(matches!(resp, FavoritesResponse::Removed { result: Ok(()), .. }));
        assert!(store.load().is_empty());
    }

    #[tokio::test]
    /// What: Back-to-back adds through the owner task are serialized.
    ///
    /// Inputs:
    /// - Two `Add(Eren)` requests queued before the worker runs
    ///
    /// Output:
    /// - First reply is `Ok`, second is `AlreadyExists`; the store holds one entry.
    async fn favorites_worker_serializes_duplicate_adds() {
        let store = Arc::new(FavoritesStore::new(MemoryStorage::new()));
        let (req_tx, req_rx) = mpsc::unbounded_channel();
        let (res_tx, mut res_rx) = mpsc::unbounded_channel();
        req_tx.send(FavoritesRequest::Add(eren())).expect("send");
        req_tx.send(FavoritesRequest::Add(eren())).expect("send");
        spawn_favorites_worker(Arc::clone(&store), req_rx, res_tx);

        let first = res_rx.recv().await.expect("first reply");
        let second = res_rx.recv().await.expect("second reply");
        assert!(matches!(first, FavoritesResponse::Added { result: Ok(()), .. }));
        assert!(matches!(
            second,
            FavoritesResponse::Added {
                result: Err(Error::AlreadyExists { .. }),
                ..
            }
        ));
        assert_eq!(store.load().len(), 1);
    }

    #[tokio::test]
    /// What: The directory worker echoes the request id alongside the fetch failure.
    async fn directory_worker_echoes_request_id() {
        let client = CharacterClient::new("http://127.0.0.1:9", Duration::from_secs(2));
        let (req_tx, req_rx) = mpsc::unbounded_channel();
        let (res_tx, mut res_rx) = mpsc::unbounded_channel();
        spawn_directory_worker(client, req_rx, res_tx);
        req_tx.send(42).expect("send");
        let res = res_rx.recv().await.expect("result");
        assert_eq!(res.request_id, 42);
        assert!(matches!(res.result, Err(Error::FetchFailed(_))));
    }
}
