//! Network data retrieval for the character directory.

mod characters;

pub use characters::{CharacterClient, DEFAULT_API_BASE_URL};
