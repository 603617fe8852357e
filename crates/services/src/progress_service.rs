//! Mastery and profile persistence strategies.
//!
//! The store flavor is chosen once at startup: `LocalOnlyStore` when remote
//! sync is not configured (or sign-in failed), `DualStore` when it is.
//! There is no runtime switching between the two.

use std::sync::Arc;

use async_trait::async_trait;

use theory_core::model::{MasteryRecord, UserProfile};
use storage::repository::{ProfileRepository, ProgressRepository};

use crate::error::ProgressError;
use crate::remote::{RemoteDocument, RemoteStore};

/// Mastery and profile persistence as the UI sees it.
///
/// Both implementations share the local-first contract: the local write
/// lands before any remote call, and remote failures never surface as
/// errors from these operations.
#[async_trait]
pub trait MasteryStore: Send + Sync {
    /// Record a theory as mastered. Appends only if absent; returns the
    /// record as it stands after the write.
    async fn record_mastery(&self, topic: &str) -> Result<MasteryRecord, ProgressError>;

    /// Load the mastered-set, merging in remote state when available.
    async fn fetch_mastery(&self) -> Result<MasteryRecord, ProgressError>;

    /// Persist the user profile.
    async fn save_profile(&self, profile: &UserProfile) -> Result<(), ProgressError>;

    /// Load the user profile, `None` before onboarding completes.
    async fn load_profile(&self) -> Result<Option<UserProfile>, ProgressError>;

    /// Clear the local profile. The remote copy is left untouched; logout
    /// is a local concern only.
    async fn clear_profile(&self) -> Result<(), ProgressError>;
}

/// Persistence with no remote side at all.
pub struct LocalOnlyStore {
    progress: Arc<dyn ProgressRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl LocalOnlyStore {
    #[must_use]
    pub fn new(
        progress: Arc<dyn ProgressRepository>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self { progress, profiles }
    }
}

#[async_trait]
impl MasteryStore for LocalOnlyStore {
    async fn record_mastery(&self, topic: &str) -> Result<MasteryRecord, ProgressError> {
        let mut record = self.progress.load_mastered().await?;
        if record.insert(topic) {
            self.progress.save_mastered(&record).await?;
        }
        Ok(record)
    }

    async fn fetch_mastery(&self) -> Result<MasteryRecord, ProgressError> {
        Ok(self.progress.load_mastered().await?)
    }

    async fn save_profile(&self, profile: &UserProfile) -> Result<(), ProgressError> {
        Ok(self.profiles.save_profile(profile).await?)
    }

    async fn load_profile(&self) -> Result<Option<UserProfile>, ProgressError> {
        Ok(self.profiles.load_profile().await?)
    }

    async fn clear_profile(&self) -> Result<(), ProgressError> {
        Ok(self.profiles.clear_profile().await?)
    }
}

/// Persistence mirrored to a remote document, local side authoritative.
pub struct DualStore {
    local: LocalOnlyStore,
    remote: Arc<dyn RemoteStore>,
}

impl DualStore {
    #[must_use]
    pub fn new(
        progress: Arc<dyn ProgressRepository>,
        profiles: Arc<dyn ProfileRepository>,
        remote: Arc<dyn RemoteStore>,
    ) -> Self {
        Self {
            local: LocalOnlyStore::new(progress, profiles),
            remote,
        }
    }

    async fn push_topic(&self, topic: &str) {
        let result = match self.remote.fetch_document().await {
            Ok(Some(_)) => self.remote.add_concepts(&[topic.to_string()]).await,
            Ok(None) => {
                let document = RemoteDocument {
                    completed_concepts: vec![topic.to_string()],
                    ..RemoteDocument::default()
                };
                self.remote.create_document(&document).await
            }
            Err(err) => Err(err),
        };
        if let Err(err) = result {
            tracing::warn!(topic, error = %err, "remote mastery push failed, keeping local copy");
        }
    }
}

#[async_trait]
impl MasteryStore for DualStore {
    async fn record_mastery(&self, topic: &str) -> Result<MasteryRecord, ProgressError> {
        // Local write first so mastery survives even if the push fails.
        let record = self.local.record_mastery(topic).await?;
        self.push_topic(topic).await;
        Ok(record)
    }

    async fn fetch_mastery(&self) -> Result<MasteryRecord, ProgressError> {
        let mut record = self.local.fetch_mastery().await?;
        match self.remote.fetch_document().await {
            Ok(Some(document)) => {
                if record.union(&document.completed_concepts) {
                    self.local.progress.save_mastered(&record).await?;
                }
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(error = %err, "remote mastery fetch failed, using local copy");
            }
        }
        Ok(record)
    }

    async fn save_profile(&self, profile: &UserProfile) -> Result<(), ProgressError> {
        self.local.save_profile(profile).await?;
        if let Err(err) = self
            .remote
            .save_profile(&profile.username, &profile.email, &profile.languages)
            .await
        {
            tracing::warn!(error = %err, "remote profile push failed, keeping local copy");
        }
        Ok(())
    }

    async fn load_profile(&self) -> Result<Option<UserProfile>, ProgressError> {
        self.local.load_profile().await
    }

    async fn clear_profile(&self) -> Result<(), ProgressError> {
        self.local.clear_profile().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use storage::repository::Storage;

    use crate::error::RemoteError;

    /// Scripted remote for the dual-store merge paths.
    struct FakeRemote {
        document: Mutex<Option<RemoteDocument>>,
        fail: bool,
    }

    impl FakeRemote {
        fn with_concepts(concepts: &[&str]) -> Self {
            Self {
                document: Mutex::new(Some(RemoteDocument {
                    completed_concepts: concepts.iter().map(|c| (*c).to_string()).collect(),
                    ..RemoteDocument::default()
                })),
                fail: false,
            }
        }

        fn empty() -> Self {
            Self {
                document: Mutex::new(None),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                document: Mutex::new(None),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl RemoteStore for FakeRemote {
        async fn fetch_document(&self) -> Result<Option<RemoteDocument>, RemoteError> {
            if self.fail {
                return Err(RemoteError::Auth("scripted failure".into()));
            }
            Ok(self.document.lock().unwrap().clone())
        }

        async fn create_document(&self, document: &RemoteDocument) -> Result<(), RemoteError> {
            if self.fail {
                return Err(RemoteError::Auth("scripted failure".into()));
            }
            *self.document.lock().unwrap() = Some(document.clone());
            Ok(())
        }

        async fn add_concepts(&self, concepts: &[String]) -> Result<(), RemoteError> {
            if self.fail {
                return Err(RemoteError::Auth("scripted failure".into()));
            }
            let mut guard = self.document.lock().unwrap();
            let document = guard.get_or_insert_with(RemoteDocument::default);
            for concept in concepts {
                if !document.completed_concepts.contains(concept) {
                    document.completed_concepts.push(concept.clone());
                }
            }
            Ok(())
        }

        async fn save_profile(
            &self,
            username: &str,
            email: &str,
            languages: &[String],
        ) -> Result<(), RemoteError> {
            if self.fail {
                return Err(RemoteError::Auth("scripted failure".into()));
            }
            let mut guard = self.document.lock().unwrap();
            let document = guard.get_or_insert_with(RemoteDocument::default);
            document.username = username.to_string();
            document.email = email.to_string();
            document.languages = languages.to_vec();
            Ok(())
        }
    }

    fn dual(remote: FakeRemote) -> (DualStore, Storage) {
        let storage = Storage::in_memory();
        let store = DualStore::new(
            storage.progress.clone(),
            storage.profiles.clone(),
            Arc::new(remote),
        );
        (store, storage)
    }

    #[tokio::test]
    async fn local_only_record_appends_once() {
        let storage = Storage::in_memory();
        let store = LocalOnlyStore::new(storage.progress.clone(), storage.profiles.clone());

        let record = store.record_mastery("Entropy").await.unwrap();
        assert_eq!(record.topics(), ["Entropy"]);

        let record = store.record_mastery("Entropy").await.unwrap();
        assert_eq!(record.topics(), ["Entropy"]);
    }

    #[tokio::test]
    async fn fetch_merges_local_first_then_remote_only() {
        let (store, _storage) = dual(FakeRemote::with_concepts(&["B", "C"]));
        store.local.record_mastery("A").await.unwrap();
        store.local.record_mastery("B").await.unwrap();

        let record = store.fetch_mastery().await.unwrap();
        assert_eq!(record.topics(), ["A", "B", "C"]);

        // Merge result is written back to local storage.
        let local = store.local.fetch_mastery().await.unwrap();
        assert_eq!(local.topics(), ["A", "B", "C"]);
    }

    #[tokio::test]
    async fn remote_failure_falls_back_to_local() {
        let (store, _storage) = dual(FakeRemote::failing());
        store.local.record_mastery("A").await.unwrap();

        let record = store.fetch_mastery().await.unwrap();
        assert_eq!(record.topics(), ["A"]);
    }

    #[tokio::test]
    async fn record_creates_remote_document_when_missing() {
        let (store, _storage) = dual(FakeRemote::empty());
        store.record_mastery("Entropy").await.unwrap();

        let remote = store.remote.fetch_document().await.unwrap().unwrap();
        assert_eq!(remote.completed_concepts, ["Entropy"]);
    }

    #[tokio::test]
    async fn record_survives_remote_failure() {
        let (store, _storage) = dual(FakeRemote::failing());
        let record = store.record_mastery("Entropy").await.unwrap();
        assert_eq!(record.topics(), ["Entropy"]);
    }

    #[tokio::test]
    async fn profile_pushes_language_list() {
        let (store, _storage) = dual(FakeRemote::empty());
        let profile = UserProfile {
            email: "ada@example.com".into(),
            username: "ada".into(),
            languages: vec!["English".into(), "French".into()],
        };
        store.save_profile(&profile).await.unwrap();

        assert_eq!(store.load_profile().await.unwrap(), Some(profile));
        let remote = store.remote.fetch_document().await.unwrap().unwrap();
        assert_eq!(remote.languages, ["English", "French"]);
    }

    #[tokio::test]
    async fn repeated_fetch_is_idempotent() {
        let (store, _storage) = dual(FakeRemote::with_concepts(&["B", "C"]));
        store.local.record_mastery("A").await.unwrap();

        let first = store.fetch_mastery().await.unwrap();
        let second = store.fetch_mastery().await.unwrap();
        assert_eq!(first.topics(), ["A", "B", "C"]);
        assert_eq!(second.topics(), first.topics());
    }
}
