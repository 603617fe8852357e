use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};

use theory_core::model::UserId;
use theory_core::time::Clock;

use crate::error::RemoteError;
use crate::remote::{RemoteDocument, RemoteStore};

const DEFAULT_IDENTITY_BASE: &str = "https://identitytoolkit.googleapis.com/v1";
const DEFAULT_FIRESTORE_BASE: &str = "https://firestore.googleapis.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Connection settings for the hosted document store, read from the
/// environment. Returns `None` when sync is not configured, in which case
/// the app runs local-only.
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    api_key: String,
    project_id: String,
    identity_base: String,
    firestore_base: String,
}

impl FirestoreConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("THEORY_SYNC_API_KEY").ok()?;
        let project_id = std::env::var("THEORY_SYNC_PROJECT_ID").ok()?;
        if api_key.trim().is_empty() || project_id.trim().is_empty() {
            return None;
        }
        let identity_base = std::env::var("THEORY_SYNC_IDENTITY_URL")
            .unwrap_or_else(|_| DEFAULT_IDENTITY_BASE.to_string());
        let firestore_base = std::env::var("THEORY_SYNC_FIRESTORE_URL")
            .unwrap_or_else(|_| DEFAULT_FIRESTORE_BASE.to_string());
        Some(Self {
            api_key,
            project_id,
            identity_base,
            firestore_base,
        })
    }
}

/// Remote store backed by the Firestore REST API, authenticated as an
/// anonymous Identity Toolkit user.
pub struct FirestoreStore {
    client: reqwest::Client,
    config: FirestoreConfig,
    user_id: UserId,
    clock: Clock,
}

impl FirestoreStore {
    /// Sign in anonymously and return the store together with the remote
    /// user id the session was granted.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError::Auth` when sign-in is rejected and other
    /// `RemoteError` values for transport failures.
    pub async fn connect(
        config: FirestoreConfig,
        clock: Clock,
    ) -> Result<(Self, UserId), RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let url = format!(
            "{}/accounts:signUp?key={}",
            config.identity_base, config.api_key
        );
        let response = client
            .post(url)
            .json(&json!({ "returnSecureToken": true }))
            .send()
            .await?;
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RemoteError::Auth(body));
        }
        let session: SignUpResponse = response
            .json()
            .await
            .map_err(|err| RemoteError::Decode(err.to_string()))?;
        let user_id = UserId::new(session.local_id);

        let store = Self {
            client,
            config,
            user_id: user_id.clone(),
            clock,
        };
        Ok((store, user_id))
    }

    fn document_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/users/{}?key={}",
            self.config.firestore_base,
            self.config.project_id,
            self.user_id,
            self.config.api_key
        )
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/users?documentId={}&key={}",
            self.config.firestore_base,
            self.config.project_id,
            self.user_id,
            self.config.api_key
        )
    }
}

#[async_trait::async_trait]
impl RemoteStore for FirestoreStore {
    async fn fetch_document(&self) -> Result<Option<RemoteDocument>, RemoteError> {
        let response = self.client.get(self.document_url()).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let raw: FirestoreDocument = response
                    .json()
                    .await
                    .map_err(|err| RemoteError::Decode(err.to_string()))?;
                Ok(Some(raw.into_document()))
            }
            status => Err(RemoteError::Status(status)),
        }
    }

    async fn create_document(&self, document: &RemoteDocument) -> Result<(), RemoteError> {
        let stamped_at = document.last_updated.unwrap_or_else(|| self.clock.now());
        let body = json!({ "fields": document_fields(document, stamped_at) });
        let response = self
            .client
            .post(self.collection_url())
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(RemoteError::Status(response.status()));
        }
        Ok(())
    }

    async fn add_concepts(&self, concepts: &[String]) -> Result<(), RemoteError> {
        // Firestore's REST surface has no arrayUnion outside commit writes,
        // so this is a read-modify-write: fetch, union, patch the one field.
        let mut merged = match self.fetch_document().await? {
            Some(document) => document.completed_concepts,
            None => Vec::new(),
        };
        for concept in concepts {
            if !merged.iter().any(|existing| existing == concept) {
                merged.push(concept.clone());
            }
        }

        let body = json!({
            "fields": {
                "completedConcepts": string_array_value(&merged),
                "lastUpdated": timestamp_value(self.clock.now()),
            }
        });
        let url = format!(
            "{}&updateMask.fieldPaths=completedConcepts&updateMask.fieldPaths=lastUpdated",
            self.document_url()
        );
        let response = self.client.patch(url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(RemoteError::Status(response.status()));
        }
        Ok(())
    }

    async fn save_profile(
        &self,
        username: &str,
        email: &str,
        languages: &[String],
    ) -> Result<(), RemoteError> {
        let body = json!({
            "fields": {
                "username": string_value(username),
                "email": string_value(email),
                "languages": string_array_value(languages),
                "lastUpdated": timestamp_value(self.clock.now()),
            }
        });
        let url = format!(
            "{}&updateMask.fieldPaths=username&updateMask.fieldPaths=email\
             &updateMask.fieldPaths=languages&updateMask.fieldPaths=lastUpdated",
            self.document_url()
        );
        let response = self.client.patch(url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(RemoteError::Status(response.status()));
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct SignUpResponse {
    #[serde(rename = "localId")]
    local_id: String,
}

/// The JSON shape Firestore documents use on the wire: every field value is
/// wrapped in a single-key object naming its type.
#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    #[serde(default)]
    fields: serde_json::Map<String, Value>,
}

impl FirestoreDocument {
    fn into_document(self) -> RemoteDocument {
        RemoteDocument {
            username: string_field(&self.fields, "username"),
            email: string_field(&self.fields, "email"),
            languages: string_array_field(&self.fields, "languages"),
            completed_concepts: string_array_field(&self.fields, "completedConcepts"),
            last_updated: timestamp_field(&self.fields, "lastUpdated"),
        }
    }
}

fn document_fields(document: &RemoteDocument, stamped_at: DateTime<Utc>) -> Value {
    json!({
        "username": string_value(&document.username),
        "email": string_value(&document.email),
        "languages": string_array_value(&document.languages),
        "completedConcepts": string_array_value(&document.completed_concepts),
        "lastUpdated": timestamp_value(stamped_at),
    })
}

fn string_value(value: &str) -> Value {
    json!({ "stringValue": value })
}

fn string_array_value(values: &[String]) -> Value {
    let items: Vec<Value> = values.iter().map(|value| string_value(value)).collect();
    json!({ "arrayValue": { "values": items } })
}

fn timestamp_value(at: DateTime<Utc>) -> Value {
    json!({ "timestampValue": at.to_rfc3339() })
}

fn string_field(fields: &serde_json::Map<String, Value>, name: &str) -> String {
    fields
        .get(name)
        .and_then(|value| value.get("stringValue"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn string_array_field(fields: &serde_json::Map<String, Value>, name: &str) -> Vec<String> {
    fields
        .get(name)
        .and_then(|value| value.get("arrayValue"))
        .and_then(|value| value.get("values"))
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.get("stringValue"))
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn timestamp_field(fields: &serde_json::Map<String, Value>, name: &str) -> Option<DateTime<Utc>> {
    fields
        .get(name)
        .and_then(|value| value.get("timestampValue"))
        .and_then(Value::as_str)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|parsed| parsed.with_timezone(&Utc))
}
