//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by the generation backend and `ContentService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenerationError {
    #[error("content generation is not configured")]
    Disabled,
    #[error("generation returned an empty response")]
    EmptyResponse,
    #[error("generation response carried no image payload")]
    MissingImage,
    /// The backend rejected our credentials (or the selected key cannot see
    /// the requested model). The UI reacts by asking the user to re-select
    /// credentials; the triggering call still fails.
    #[error("generation credentials rejected: {0}")]
    CredentialRejected(String),
    #[error("generation request failed with status {status}: {message}")]
    HttpStatus {
        status: reqwest::StatusCode,
        message: String,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl GenerationError {
    /// Whether this failure should trigger the credential re-selection hook.
    #[must_use]
    pub fn is_credential_rejection(&self) -> bool {
        matches!(self, GenerationError::CredentialRejected(_))
    }
}

/// Markers the hosted API uses for authorization / entity-not-found
/// failures. A message containing either one drives the credential hook.
#[must_use]
pub fn is_credential_marker(message: &str) -> bool {
    message.contains("Requested entity was not found") || message.contains("API_KEY")
}

/// Errors emitted by the remote document store.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RemoteError {
    #[error("remote sign-in failed: {0}")]
    Auth(String),
    #[error("remote request failed with status {0}")]
    Status(reqwest::StatusCode),
    #[error("remote document could not be decoded: {0}")]
    Decode(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by mastery/profile stores.
///
/// Remote failures never appear here: the dual store logs and swallows
/// them, so the only way these operations fail is local storage failing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_markers_match_the_api_wording() {
        assert!(is_credential_marker(
            "Requested entity was not found."
        ));
        assert!(is_credential_marker("API_KEY_INVALID: check your key"));
        assert!(!is_credential_marker("deadline exceeded"));
    }
}
