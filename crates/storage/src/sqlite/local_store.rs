use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row;

use theory_core::model::{MasteryRecord, Theme, ThemeParseError, UserProfile};

use crate::repository::{
    PreferencesRepository, ProfileRepository, ProgressRepository, StorageError, keys,
};

use super::SqliteRepository;

impl SqliteRepository {
    async fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT value FROM local_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };
        row.try_get::<String, _>("value")
            .map(Some)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    async fn put_value(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO local_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }

    async fn delete_value(&self, key: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM local_store WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl ProgressRepository for SqliteRepository {
    async fn load_mastered(&self) -> Result<MasteryRecord, StorageError> {
        match self.get_value(keys::PROGRESS).await? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|err| StorageError::Serialization(err.to_string())),
            None => Ok(MasteryRecord::new()),
        }
    }

    async fn save_mastered(&self, record: &MasteryRecord) -> Result<(), StorageError> {
        let raw = serde_json::to_string(record)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.put_value(keys::PROGRESS, &raw).await
    }
}

#[async_trait]
impl ProfileRepository for SqliteRepository {
    async fn load_profile(&self) -> Result<Option<UserProfile>, StorageError> {
        match self.get_value(keys::PROFILE).await? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|err| StorageError::Serialization(err.to_string())),
            None => Ok(None),
        }
    }

    async fn save_profile(&self, profile: &UserProfile) -> Result<(), StorageError> {
        let raw = serde_json::to_string(profile)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.put_value(keys::PROFILE, &raw).await
    }

    async fn clear_profile(&self) -> Result<(), StorageError> {
        self.delete_value(keys::PROFILE).await
    }
}

#[async_trait]
impl PreferencesRepository for SqliteRepository {
    async fn theme(&self) -> Result<Option<Theme>, StorageError> {
        match self.get_value(keys::THEME).await? {
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|err: ThemeParseError| StorageError::Serialization(err.to_string())),
            None => Ok(None),
        }
    }

    async fn set_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.put_value(keys::THEME, theme.as_str()).await
    }
}
