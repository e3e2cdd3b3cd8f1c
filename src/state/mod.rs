//! Application state: screen views, modal overlays and character records.
//!
//! The common types are re-exported under `crate::state::*`.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::{
    AppState, DetailsView, DirectoryFocus, DirectoryView, FavoritesView, Screen,
};
pub use modal::{Modal, NoticeKind};
pub use types::{
    Character, CharacterId, DetailsRequest, DetailsResult, DirectoryResults, FavoritesRequest,
    FavoritesResponse,
};
