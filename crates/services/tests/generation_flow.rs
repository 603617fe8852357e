//! End-to-end content generation over a scripted backend.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use services::{ContentService, GenerationBackend, GenerationError, GenerationRequest, InlineImage};

/// Backend that records the requests it receives and replays canned
/// responses.
struct ScriptedBackend {
    json_response: String,
    image_response: Option<InlineImage>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedBackend {
    fn json(response: &str) -> Self {
        Self {
            json_response: response.to_string(),
            image_response: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn image(mime_type: &str, data: &str) -> Self {
        Self {
            json_response: String::new(),
            image_response: Some(InlineImage {
                mime_type: mime_type.to_string(),
                data: data.to_string(),
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn recorded(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationBackend for ScriptedBackend {
    async fn generate_json(
        &self,
        request: GenerationRequest,
    ) -> Result<String, GenerationError> {
        self.requests.lock().unwrap().push(request);
        Ok(self.json_response.clone())
    }

    async fn generate_image(
        &self,
        request: GenerationRequest,
    ) -> Result<InlineImage, GenerationError> {
        self.requests.lock().unwrap().push(request);
        self.image_response
            .clone()
            .ok_or(GenerationError::MissingImage)
    }
}

fn service(backend: Arc<ScriptedBackend>) -> ContentService {
    ContentService::new(backend, "text-model", "image-model")
}

#[tokio::test]
async fn curriculum_request_carries_schema_and_part_count() {
    let backend = Arc::new(ScriptedBackend::json(
        r#"[{"id":1,"title":"Foundations","shortDescription":"Basics"}]"#,
    ));
    let topics = service(backend.clone())
        .curriculum("Thermodynamics", 5)
        .await
        .unwrap();

    assert_eq!(topics.len(), 1);
    assert_eq!(topics[0].title, "Foundations");

    let requests = backend.recorded();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].model, "text-model");
    assert!(requests[0].prompt.contains("exactly 5"));
    assert!(requests[0].prompt.contains("Thermodynamics"));
    assert!(requests[0].response_schema.is_some());
}

#[tokio::test]
async fn lesson_parses_sections_and_questions() {
    let backend = Arc::new(ScriptedBackend::json(
        r#"{
            "topic": "Entropy",
            "concept": "Disorder always grows",
            "sections": [
                {"title": "Theoretical Foundations", "content": "..."}
            ],
            "quizQuestions": [
                {"id": 1, "question": "Q", "options": ["A", "B"],
                 "correctAnswer": "A", "explanation": "E"}
            ]
        }"#,
    ));
    let lesson = service(backend)
        .topic_lesson("Thermodynamics", "Entropy")
        .await
        .unwrap();

    assert_eq!(lesson.topic, "Entropy");
    assert_eq!(lesson.sections.len(), 1);
    assert_eq!(lesson.quiz_questions.len(), 1);
    assert_eq!(lesson.quiz_questions[0].correct_answer, "A");
}

#[tokio::test]
async fn malformed_response_degrades_to_empty_content() {
    let backend = Arc::new(ScriptedBackend::json("not even json"));
    let explanation = service(backend)
        .concept_explanation("Gravity")
        .await
        .unwrap();
    assert!(explanation.brief.is_empty());
    assert!(explanation.daily_life.living.is_empty());
}

#[tokio::test]
async fn unlisted_difficulty_does_not_blank_application_data() {
    let backend = Arc::new(ScriptedBackend::json(
        r#"{
            "projects": [
                {"title": "Heat pump sim", "description": "...",
                 "difficulty": "Expert"},
                {"title": "Entropy demo", "description": "...",
                 "difficulty": "Beginner"}
            ],
            "industryUse": [{"sector": "Energy", "purpose": "Grid design"}]
        }"#,
    ));
    let data = service(backend)
        .application_data("Thermodynamics")
        .await
        .unwrap();

    assert_eq!(data.projects.len(), 2);
    assert_eq!(data.projects[0].difficulty.label(), "Expert");
    assert_eq!(data.industry_use.len(), 1);
}

#[tokio::test]
async fn diagram_becomes_a_data_uri() {
    let backend = Arc::new(ScriptedBackend::image("image/png", "aGVsbG8="));
    let uri = service(backend.clone())
        .generate_diagram("Thermodynamics", "Entropy")
        .await
        .unwrap();

    assert_eq!(uri, "data:image/png;base64,aGVsbG8=");
    let requests = backend.recorded();
    assert_eq!(requests[0].model, "image-model");
    assert!(requests[0].prompt.contains("Entropy"));
}

#[tokio::test]
async fn missing_image_surfaces_as_error() {
    let backend = Arc::new(ScriptedBackend {
        json_response: String::new(),
        image_response: None,
        requests: Mutex::new(Vec::new()),
    });
    let err = service(backend)
        .generate_diagram("Thermodynamics", "Entropy")
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::MissingImage));
}
