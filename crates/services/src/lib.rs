#![forbid(unsafe_code)]

pub mod app_services;
pub mod content_service;
pub mod error;
pub mod generation;
pub mod progress_service;
pub mod remote;

pub use theory_core::Clock;

// Repository traits the UI reaches through `AppServices`.
pub use storage::repository::{PreferencesRepository, ProfileRepository};

pub use app_services::AppServices;
pub use content_service::{ContentService, CurriculumDepth};
pub use error::{AppServicesError, GenerationError, ProgressError, RemoteError};
pub use generation::{
    GenerationBackend, GenerationRequest, GeminiBackend, GeminiConfig, InlineImage,
};
pub use progress_service::{DualStore, LocalOnlyStore, MasteryStore};
pub use remote::{RemoteDocument, RemoteStore};
