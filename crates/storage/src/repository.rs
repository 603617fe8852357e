use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use theory_core::model::{MasteryRecord, Theme, UserProfile};

/// Errors surfaced by storage adapters.
///
/// Local storage is the always-available store; these errors are the one
/// failure class that is allowed to propagate to callers (unlike remote-sync
/// failures, which services swallow).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Durable store for the set of mastered topics.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Load the mastered-topic record. Missing state reads as empty.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be read or decoded.
    async fn load_mastered(&self) -> Result<MasteryRecord, StorageError>;

    /// Replace the mastered-topic record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be written.
    async fn save_mastered(&self, record: &MasteryRecord) -> Result<(), StorageError>;
}

/// Durable store for the local user profile.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the profile cannot be read or decoded.
    async fn load_profile(&self) -> Result<Option<UserProfile>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the profile cannot be written.
    async fn save_profile(&self, profile: &UserProfile) -> Result<(), StorageError>;

    /// Remove the stored profile (logout).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the delete fails.
    async fn clear_profile(&self) -> Result<(), StorageError>;
}

/// Durable store for small plain-string preferences.
#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the preference cannot be read.
    async fn theme(&self) -> Result<Option<Theme>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the preference cannot be written.
    async fn set_theme(&self, theme: Theme) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<Mutex<HashMap<String, String>>>,
}

const PROGRESS_KEY: &str = "theory2practice_progress";
const PROFILE_KEY: &str = "theory2practice_profile";
const THEME_KEY: &str = "theory2practice_theme";

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn put(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn load_mastered(&self) -> Result<MasteryRecord, StorageError> {
        match self.get(PROGRESS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| StorageError::Serialization(e.to_string())),
            None => Ok(MasteryRecord::new()),
        }
    }

    async fn save_mastered(&self, record: &MasteryRecord) -> Result<(), StorageError> {
        let raw = serde_json::to_string(record)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.put(PROGRESS_KEY, raw)
    }
}

#[async_trait]
impl ProfileRepository for InMemoryRepository {
    async fn load_profile(&self) -> Result<Option<UserProfile>, StorageError> {
        match self.get(PROFILE_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StorageError::Serialization(e.to_string())),
            None => Ok(None),
        }
    }

    async fn save_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        let raw = serde_json::to_string(profile)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.put(PROFILE_KEY, raw)
    }

    async fn clear_profile(&self) -> Result<(), StorageError> {
        self.remove(PROFILE_KEY)
    }
}

#[async_trait]
impl PreferencesRepository for InMemoryRepository {
    async fn theme(&self) -> Result<Option<Theme>, StorageError> {
        match self.get(THEME_KEY)? {
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|e: theory_core::model::ThemeParseError| {
                    StorageError::Serialization(e.to_string())
                }),
            None => Ok(None),
        }
    }

    async fn set_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.put(THEME_KEY, theme.as_str().to_string())
    }
}

/// Aggregates the local repositories behind trait objects for easy backend
/// swapping.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub preferences: Arc<dyn PreferencesRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo.clone());
        let profiles: Arc<dyn ProfileRepository> = Arc::new(repo.clone());
        let preferences: Arc<dyn PreferencesRepository> = Arc::new(repo);
        Self {
            progress,
            profiles,
            preferences,
        }
    }
}

/// Keys used by the SQLite key/value store.
pub(crate) mod keys {
    pub const PROGRESS: &str = super::PROGRESS_KEY;
    pub const PROFILE: &str = super::PROFILE_KEY;
    pub const THEME: &str = super::THEME_KEY;
}
