//! Core non-UI logic split into modular submodules.

/// Name search over the character directory.
pub mod filter;
/// List selection movement.
pub mod selection;

pub use filter::{apply_directory_filter, filter_by_name};
pub use selection::move_selection;
