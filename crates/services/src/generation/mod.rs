mod backend;
pub mod schema;

pub use backend::{
    DisabledBackend, GeminiBackend, GeminiConfig, GenerationBackend, GenerationRequest,
    InlineImage,
};
