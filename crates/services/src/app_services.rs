//! App-level service wiring.

use std::sync::Arc;

use theory_core::Clock;
use theory_core::model::UserId;
use storage::repository::{PreferencesRepository, ProfileRepository, Storage};

use crate::content_service::ContentService;
use crate::error::AppServicesError;
use crate::progress_service::{DualStore, LocalOnlyStore, MasteryStore};
use crate::remote::{FirestoreConfig, FirestoreStore};

/// Everything the UI needs, built once at startup.
///
/// The mastery store flavor is fixed here: if remote sync is configured and
/// anonymous sign-in succeeds we run a `DualStore`, otherwise a
/// `LocalOnlyStore` with the sentinel user id. The choice is never revisited
/// while the app runs.
#[derive(Clone)]
pub struct AppServices {
    storage: Storage,
    content: ContentService,
    mastery: Arc<dyn MasteryStore>,
    user_id: UserId,
}

impl AppServices {
    /// Bootstrap against a sqlite database.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` when the database cannot be opened or
    /// migrated. Remote sign-in failure is not an error; it downgrades to
    /// local-only operation.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::assemble(storage, clock).await)
    }

    /// Bootstrap on in-memory storage, used by tests and previews.
    #[must_use]
    pub async fn new_in_memory(clock: Clock) -> Self {
        Self::assemble(Storage::in_memory(), clock).await
    }

    async fn assemble(storage: Storage, clock: Clock) -> Self {
        let content = ContentService::from_env();

        let (mastery, user_id): (Arc<dyn MasteryStore>, UserId) = match FirestoreConfig::from_env()
        {
            Some(config) => match FirestoreStore::connect(config, clock).await {
                Ok((remote, user_id)) => {
                    tracing::info!(user = %user_id, "remote sync enabled");
                    let store = DualStore::new(
                        storage.progress.clone(),
                        storage.profiles.clone(),
                        Arc::new(remote),
                    );
                    (Arc::new(store), user_id)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "remote sign-in failed, running local-only");
                    let store =
                        LocalOnlyStore::new(storage.progress.clone(), storage.profiles.clone());
                    (Arc::new(store), UserId::local())
                }
            },
            None => {
                let store =
                    LocalOnlyStore::new(storage.progress.clone(), storage.profiles.clone());
                (Arc::new(store), UserId::local())
            }
        };

        Self {
            storage,
            content,
            mastery,
            user_id,
        }
    }

    #[must_use]
    pub fn content(&self) -> &ContentService {
        &self.content
    }

    #[must_use]
    pub fn mastery(&self) -> &Arc<dyn MasteryStore> {
        &self.mastery
    }

    #[must_use]
    pub fn preferences(&self) -> &Arc<dyn PreferencesRepository> {
        &self.storage.preferences
    }

    #[must_use]
    pub fn profiles(&self) -> &Arc<dyn ProfileRepository> {
        &self.storage.profiles
    }

    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}
