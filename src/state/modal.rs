//! Modal dialog state for the UI.

use crate::error::Error;
use crate::state::types::CharacterId;

/// What: Severity of a notice shown in the alert modal.
///
/// Details:
/// - Drives the border color and header of the alert box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Operation succeeded.
    Success,
    /// Informational or benign condition (e.g., duplicate favorite).
    Info,
    /// Recoverable failure (network or storage).
    Error,
}

/// What: Modal overlays that capture keyboard input while visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No modal is shown.
    #[default]
    None,
    /// One-button notice. Enter or Esc closes it.
    Alert {
        /// Severity used for styling.
        kind: NoticeKind,
        /// Box title.
        title: String,
        /// Message body.
        message: String,
    },
    /// Confirmation step before removing a favorite.
    ConfirmRemove {
        /// Favorite to remove on confirmation.
        id: CharacterId,
        /// Display name shown in the prompt.
        name: String,
    },
    /// Key binding overview.
    Help,
}

impl Modal {
    /// Success notice with the given message.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::Alert {
            kind: NoticeKind::Success,
            title: "Success".to_string(),
            message: message.into(),
        }
    }

    /// What: Build the notice shown for an error at a screen boundary.
    ///
    /// Details:
    /// - `AlreadyExists` is informational; fetch/storage failures are errors.
    #[must_use]
    pub fn from_error(err: &Error) -> Self {
        let kind = match err {
            Error::AlreadyExists { .. } => NoticeKind::Info,
            Error::FetchFailed(_) | Error::StorageFailed(_) => NoticeKind::Error,
        };
        Self::Alert {
            kind,
            title: err.title().to_string(),
            message: err.to_string(),
        }
    }

    /// Whether any modal is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Errors map to notices with the expected severity.
    fn from_error_kinds() {
        let dup = Modal::from_error(&Error::AlreadyExists {
            id: CharacterId(1),
            name: "Eren".into(),
        });
        assert!(matches!(dup, Modal::Alert { kind: NoticeKind::Info, .. }));
        let fetch = Modal::from_error(&Error::FetchFailed("x".into()));
        assert!(matches!(fetch, Modal::Alert { kind: NoticeKind::Error, .. }));
        assert!(fetch.is_open());
        assert!(!Modal::None.is_open());
    }
}
