//! Remote progress sync.
//!
//! The remote side mirrors the local store at document granularity: one
//! document per user holding the profile fields and the list of mastered
//! theories. All remote calls are best-effort from the caller's point of
//! view; local state is always written first.

mod firestore;

pub use firestore::{FirestoreConfig, FirestoreStore};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::RemoteError;

/// The per-user document as stored remotely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoteDocument {
    pub username: String,
    pub email: String,
    pub languages: Vec<String>,
    pub completed_concepts: Vec<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Operations the sync layer needs from a remote document store.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetch the user's document, `None` when it does not exist yet.
    async fn fetch_document(&self) -> Result<Option<RemoteDocument>, RemoteError>;

    /// Create the user's document with an initial set of concepts.
    async fn create_document(&self, document: &RemoteDocument) -> Result<(), RemoteError>;

    /// Add concepts to the existing document without dropping ones already
    /// present remotely.
    async fn add_concepts(&self, concepts: &[String]) -> Result<(), RemoteError>;

    /// Overwrite the profile fields on the document, creating it if needed.
    async fn save_profile(
        &self,
        username: &str,
        email: &str,
        languages: &[String],
    ) -> Result<(), RemoteError>;
}
