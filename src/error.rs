//! Error taxonomy shared by the character client and the favorites store.

use std::fmt;

use crate::state::CharacterId;

/// What: Recoverable failures surfaced to the user as a modal notice.
///
/// Details:
/// - None of these are fatal; screens catch them at their boundary and show an
///   alert. `AlreadyExists` is informational rather than a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Network or API failure while talking to the character API.
    FetchFailed(String),
    /// Read or write failure on the local favorites blob.
    StorageFailed(String),
    /// The character is already present in the favorites collection.
    AlreadyExists {
        /// Identifier that was already bookmarked.
        id: CharacterId,
        /// Display name of the duplicate entry.
        name: String,
    },
}

impl Error {
    /// Short title used for the notice box of this error.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::FetchFailed(_) => "Connection issue",
            Self::StorageFailed(_) => "Storage error",
            Self::AlreadyExists { .. } => "Notice",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FetchFailed(msg) => write!(f, "Could not load characters: {msg}"),
            Self::StorageFailed(msg) => write!(f, "Could not access favorites: {msg}"),
            Self::AlreadyExists { .. } => f.write_str("Character is already in your favorites!"),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::FetchFailed(value.to_string())
    }
}
