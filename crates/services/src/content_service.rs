use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::de::DeserializeOwned;

use theory_core::model::{
    ApplicationData, ConceptExplanation, CurriculumTopic, LessonContent, ProjectBlueprint,
    QuizQuestion,
};

use crate::error::GenerationError;
use crate::generation::{
    DisabledBackend, GeminiBackend, GenerationBackend, GenerationRequest, schema,
};

/// Preset depths for a curriculum breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurriculumDepth {
    Executive,
    Industry,
    Architect,
}

impl CurriculumDepth {
    #[must_use]
    pub fn module_count(self) -> u32 {
        match self {
            CurriculumDepth::Executive => 3,
            CurriculumDepth::Industry => 5,
            CurriculumDepth::Architect => 10,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CurriculumDepth::Executive => "Executive",
            CurriculumDepth::Industry => "Industry",
            CurriculumDepth::Architect => "Architect",
        }
    }
}

/// Builds prompts for each content shape, sends them through the generation
/// backend, and parses the structured responses.
///
/// There is no caching, no deduplication of identical requests, and no rate
/// limiting; every call goes straight to the backend.
#[derive(Clone)]
pub struct ContentService {
    backend: Arc<dyn GenerationBackend>,
    text_model: String,
    image_model: String,
}

impl ContentService {
    #[must_use]
    pub fn new(
        backend: Arc<dyn GenerationBackend>,
        text_model: impl Into<String>,
        image_model: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            text_model: text_model.into(),
            image_model: image_model.into(),
        }
    }

    /// Build from environment configuration; without an API key the service
    /// stays constructed but every call fails with `Disabled`.
    #[must_use]
    pub fn from_env() -> Self {
        match GeminiBackend::from_env() {
            Some(backend) => {
                let text_model = backend.text_model().to_string();
                let image_model = backend.image_model().to_string();
                Self::new(Arc::new(backend), text_model, image_model)
            }
            None => Self::new(
                Arc::new(DisabledBackend),
                "gemini-3-pro-preview",
                "gemini-2.5-flash-image",
            ),
        }
    }

    async fn structured<T>(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<T, GenerationError>
    where
        T: DeserializeOwned + Default,
    {
        let request =
            GenerationRequest::structured(self.text_model.clone(), prompt, response_schema);
        let text = self.backend.generate_json(request).await?;
        Ok(parse_or_default(&text))
    }

    /// Brief explanation plus daily-life examples for a theory.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` when the backend call fails.
    pub async fn concept_explanation(
        &self,
        theory: &str,
    ) -> Result<ConceptExplanation, GenerationError> {
        let prompt = format!(
            "Explain the following theory briefly and provide daily life examples \
             for living and non-living things: {theory}"
        );
        self.structured(prompt, schema::concept_explanation()).await
    }

    /// Break a theory into exactly `parts` learning modules.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` when the backend call fails.
    pub async fn curriculum(
        &self,
        theory: &str,
        parts: u32,
    ) -> Result<Vec<CurriculumTopic>, GenerationError> {
        let prompt = format!(
            "Break down the theory \"{theory}\" into exactly {parts} logical learning \
             modules. Provide a title and a very short description for each. Ensure a \
             logical progression from beginner to expert."
        );
        self.structured(prompt, schema::curriculum()).await
    }

    /// Full lesson for one curriculum module, with three fixed sections and
    /// ten practice questions.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` when the backend call fails.
    pub async fn topic_lesson(
        &self,
        theory: &str,
        topic_title: &str,
    ) -> Result<LessonContent, GenerationError> {
        let prompt = format!(
            "Act as a master teacher. Provide a high-infrastructure lesson for the topic \
             \"{topic_title}\" of the theory \"{theory}\". The lesson MUST have 3 sections: \
             1. \"Theoretical Foundations\" (The deep logic) \
             2. \"The Mechanism of Action\" (How it works step-by-step) \
             3. \"System Integration\" (How it plugs into the real world). \
             Also include exactly 10 challenging multiple-choice questions for this \
             specific module to ensure deep mastery."
        );
        self.structured(prompt, schema::lesson()).await
    }

    /// Ten-question final quiz over the whole theory.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` when the backend call fails.
    pub async fn quiz_questions(
        &self,
        theory: &str,
    ) -> Result<Vec<QuizQuestion>, GenerationError> {
        let prompt = format!(
            "Generate exactly 10 practical, multiple-choice questions for the theory: {theory}."
        );
        self.structured(prompt, schema::quiz_batch()).await
    }

    /// A fresh batch of ten practice questions for one module.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` when the backend call fails.
    pub async fn more_quizzes(
        &self,
        theory: &str,
        topic_title: &str,
    ) -> Result<Vec<QuizQuestion>, GenerationError> {
        let prompt = format!(
            "Generate exactly 10 fresh, challenging practical multiple-choice questions \
             for the module \"{topic_title}\" within the theory \"{theory}\". Avoid \
             repeating common concepts."
        );
        self.structured(prompt, schema::quiz_batch()).await
    }

    /// Technical blueprint for one suggested project.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` when the backend call fails.
    pub async fn project_blueprint(
        &self,
        theory: &str,
        project_title: &str,
    ) -> Result<ProjectBlueprint, GenerationError> {
        let prompt = format!(
            "Provide a comprehensive technical reference blueprint for the project \
             \"{project_title}\" based on the theory \"{theory}\". Include prerequisites, \
             a 5-step roadmap, the logical architecture, and success metrics."
        );
        self.structured(prompt, schema::project_blueprint()).await
    }

    /// Practical projects and industry use cases for a theory.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` when the backend call fails.
    pub async fn application_data(
        &self,
        theory: &str,
    ) -> Result<ApplicationData, GenerationError> {
        let prompt = format!(
            "Generate practical projects and industry-specific use cases for the theory: {theory}"
        );
        self.structured(prompt, schema::application_data()).await
    }

    /// Generate a technical diagram for a topic, returned as a `data:` URI
    /// ready to drop into an `img` source.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::MissingImage` when the response carries no
    /// image payload, or other `GenerationError` values for backend failures.
    pub async fn generate_diagram(
        &self,
        theory: &str,
        topic: &str,
    ) -> Result<String, GenerationError> {
        let prompt = format!(
            "Create a professional, highly detailed technical diagram or scientific graph \
             illustrating the concept: \"{topic}\" as part of \"{theory}\". The image should \
             look like a clean page from a modern university textbook. Use clear labels, \
             precise lines, and a minimal aesthetic."
        );
        let request = GenerationRequest::text(self.image_model.clone(), prompt);
        let image = self.backend.generate_image(request).await?;

        // The API already hands back base64; re-encode only if it did not.
        let data = if BASE64.decode(image.data.as_bytes()).is_ok() {
            image.data
        } else {
            BASE64.encode(image.data.as_bytes())
        };
        Ok(format!("data:{};base64,{}", image.mime_type, data))
    }
}

/// Parse a structured response defensively: empty or malformed payloads
/// degrade to the type's `Default` (an empty content view) instead of an
/// error.
fn parse_or_default<T: DeserializeOwned + Default>(text: &str) -> T {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return T::default();
    }
    serde_json::from_str(trimmed).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_parses_to_default() {
        let parsed: ConceptExplanation = parse_or_default("");
        assert!(parsed.brief.is_empty());
        let parsed: Vec<QuizQuestion> = parse_or_default("   ");
        assert!(parsed.is_empty());
    }

    #[test]
    fn malformed_payload_parses_to_default() {
        let parsed: ApplicationData = parse_or_default("{not json");
        assert!(parsed.projects.is_empty());
        assert!(parsed.industry_use.is_empty());
    }

    #[test]
    fn valid_payload_parses() {
        let parsed: Vec<QuizQuestion> = parse_or_default(
            r#"[{"id":1,"question":"Q","options":["A","B"],"correctAnswer":"A","explanation":"E"}]"#,
        );
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].correct_answer, "A");
    }

    #[test]
    fn depth_presets_match_the_module_counts() {
        assert_eq!(CurriculumDepth::Executive.module_count(), 3);
        assert_eq!(CurriculumDepth::Industry.module_count(), 5);
        assert_eq!(CurriculumDepth::Architect.module_count(), 10);
    }
}
