use crate::state::{
    AppState, CharacterId, DetailsRequest, DetailsView, FavoritesRequest, Screen,
};

use super::Requests;

/// What: Start a fetch of the full character directory.
///
/// Output:
/// - Marks the directory as loading with a fresh request id and queues the request.
///
/// Details:
/// - A later response carrying an older id is ignored, so pressing refresh twice
///   only applies the newest result.
pub fn start_directory_fetch(app: &mut AppState, requests: &Requests) {
    let request_id = app.next_request_id();
    app.directory.pending = Some(request_id);
    tracing::debug!(request_id, "requesting character directory");
    let _ = requests.directory_tx.send(request_id);
}

/// What: Navigate to the Details screen for `id` and request its data.
///
/// Inputs:
/// - `id`: Character to show
/// - `return_to`: Screen to go back to on Esc
///
/// Output:
/// - Replaces any previous Details view with a fresh loading view and queues
///   the fetch plus a favorites membership check under the same request id.
pub fn open_details(app: &mut AppState, id: CharacterId, return_to: Screen, requests: &Requests) {
    let request_id = app.next_request_id();
    app.details = Some(DetailsView {
        id,
        request_id,
        character: None,
        loading: true,
        is_favorite: false,
        return_to,
    });
    app.screen = Screen::Details;
    tracing::debug!(request_id, id = %id, "opening details");
    let _ = requests.details_tx.send(DetailsRequest { request_id, id });
    let _ = requests
        .favorites_tx
        .send(FavoritesRequest::Contains { request_id, id });
}

/// What: Show the Favorites screen and reload the collection from storage.
///
/// Details:
/// - Called on every entry (tab switch or return from Details) so external
///   changes to the blob are always picked up.
pub fn enter_favorites(app: &mut AppState, requests: &Requests) {
    let request_id = app.next_request_id();
    app.screen = Screen::Favorites;
    app.favorites.pending = Some(request_id);
    let _ = requests
        .favorites_tx
        .send(FavoritesRequest::Load { request_id });
}

/// Return to the Directory screen.
pub const fn enter_directory(app: &mut AppState) {
    app.screen = Screen::Directory;
}

/// What: Leave the Details screen for the screen it was opened from.
pub fn close_details(app: &mut AppState, requests: &Requests) {
    let back = app
        .details
        .as_ref()
        .map_or(Screen::Directory, |d| d.return_to);
    app.details = None;
    match back {
        Screen::Favorites => enter_favorites(app, requests),
        Screen::Directory | Screen::Details => enter_directory(app),
    }
}
