//! Mastery persistence over real sqlite storage with a scripted remote.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use services::{DualStore, LocalOnlyStore, MasteryStore, RemoteDocument, RemoteError, RemoteStore};
use storage::repository::Storage;

struct MemoryRemote {
    document: Mutex<Option<RemoteDocument>>,
}

impl MemoryRemote {
    fn seeded(concepts: &[&str]) -> Self {
        Self {
            document: Mutex::new(Some(RemoteDocument {
                completed_concepts: concepts.iter().map(|c| (*c).to_string()).collect(),
                ..RemoteDocument::default()
            })),
        }
    }
}

#[async_trait]
impl RemoteStore for MemoryRemote {
    async fn fetch_document(&self) -> Result<Option<RemoteDocument>, RemoteError> {
        Ok(self.document.lock().unwrap().clone())
    }

    async fn create_document(&self, document: &RemoteDocument) -> Result<(), RemoteError> {
        *self.document.lock().unwrap() = Some(document.clone());
        Ok(())
    }

    async fn add_concepts(&self, concepts: &[String]) -> Result<(), RemoteError> {
        let mut guard = self.document.lock().unwrap();
        let document = guard.get_or_insert_with(RemoteDocument::default);
        for concept in concepts {
            if !document.completed_concepts.contains(concept) {
                document.completed_concepts.push(concept.clone());
            }
        }
        Ok(())
    }

    async fn save_profile(&self, _: &str, _: &str, _: &[String]) -> Result<(), RemoteError> {
        Ok(())
    }
}

#[tokio::test]
async fn mastery_survives_a_store_reopen() {
    // Two stores over the same repositories stand in for an app restart.
    let storage = Storage::sqlite("sqlite::memory:").await.unwrap();

    let store = LocalOnlyStore::new(storage.progress.clone(), storage.profiles.clone());
    store.record_mastery("Entropy").await.unwrap();
    drop(store);

    let store = LocalOnlyStore::new(storage.progress.clone(), storage.profiles.clone());
    let record = store.fetch_mastery().await.unwrap();
    assert_eq!(record.topics(), ["Entropy"]);
}

#[tokio::test]
async fn dual_store_merge_writes_back_through_sqlite() {
    let storage = Storage::sqlite("sqlite::memory:").await.unwrap();
    let remote = Arc::new(MemoryRemote::seeded(&["Gravity", "Entropy"]));

    let store = DualStore::new(
        storage.progress.clone(),
        storage.profiles.clone(),
        remote.clone(),
    );
    store.record_mastery("Waves").await.unwrap();

    // Local topics first, then remote-only ones in remote order.
    let record = store.fetch_mastery().await.unwrap();
    assert_eq!(record.topics(), ["Waves", "Gravity", "Entropy"]);

    // A second fetch returns the same merged set without growing it.
    let record = store.fetch_mastery().await.unwrap();
    assert_eq!(record.topics(), ["Waves", "Gravity", "Entropy"]);

    // The merged set is now readable without the remote side.
    let local = LocalOnlyStore::new(storage.progress.clone(), storage.profiles.clone());
    let record = local.fetch_mastery().await.unwrap();
    assert_eq!(record.topics(), ["Waves", "Gravity", "Entropy"]);
}

#[tokio::test]
async fn recording_pushes_to_the_remote_document() {
    let storage = Storage::sqlite("sqlite::memory:").await.unwrap();
    let remote = Arc::new(MemoryRemote::seeded(&[]));

    let store = DualStore::new(
        storage.progress.clone(),
        storage.profiles.clone(),
        remote.clone(),
    );
    store.record_mastery("Entropy").await.unwrap();
    store.record_mastery("Entropy").await.unwrap();

    let document = remote.fetch_document().await.unwrap().unwrap();
    assert_eq!(document.completed_concepts, ["Entropy"]);
}
