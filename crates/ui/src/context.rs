use std::sync::Arc;

use services::{ContentService, MasteryStore, PreferencesRepository};
use theory_core::model::UserId;

/// What the composition root must hand the UI.
pub trait UiApp: Send + Sync {
    fn content(&self) -> ContentService;
    fn mastery(&self) -> Arc<dyn MasteryStore>;
    fn preferences(&self) -> Arc<dyn PreferencesRepository>;
    fn user_id(&self) -> UserId;
}

#[derive(Clone)]
pub struct AppContext {
    content: ContentService,
    mastery: Arc<dyn MasteryStore>,
    preferences: Arc<dyn PreferencesRepository>,
    user_id: UserId,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            content: app.content(),
            mastery: app.mastery(),
            preferences: app.preferences(),
            user_id: app.user_id(),
        }
    }

    #[must_use]
    pub fn content(&self) -> ContentService {
        self.content.clone()
    }

    #[must_use]
    pub fn mastery(&self) -> Arc<dyn MasteryStore> {
        Arc::clone(&self.mastery)
    }

    #[must_use]
    pub fn preferences(&self) -> Arc<dyn PreferencesRepository> {
        Arc::clone(&self.preferences)
    }

    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
