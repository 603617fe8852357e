//! Declared response schemas for structured generation calls.
//!
//! The hosted API accepts an OpenAPI-flavored schema object with uppercase
//! type names; the declarations here match the structs in
//! `theory_core::model` field for field.

use serde_json::{Value, json};

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn string_array() -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" } })
}

#[must_use]
pub fn quiz_question() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "id": { "type": "NUMBER" },
            "question": string(),
            "options": string_array(),
            "correctAnswer": string(),
            "explanation": string(),
        },
        "required": ["id", "question", "options", "correctAnswer", "explanation"],
    })
}

#[must_use]
pub fn quiz_batch() -> Value {
    json!({ "type": "ARRAY", "items": quiz_question() })
}

#[must_use]
pub fn concept_explanation() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "brief": string(),
            "dailyLife": {
                "type": "OBJECT",
                "properties": {
                    "living": string_array(),
                    "nonLiving": string_array(),
                },
                "required": ["living", "nonLiving"],
            },
        },
        "required": ["brief", "dailyLife"],
    })
}

#[must_use]
pub fn curriculum() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "id": { "type": "NUMBER" },
                "title": string(),
                "shortDescription": string(),
            },
            "required": ["id", "title", "shortDescription"],
        },
    })
}

#[must_use]
pub fn lesson() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "topic": string(),
            "concept": string(),
            "sections": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": string(),
                        "content": string(),
                    },
                    "required": ["title", "content"],
                },
            },
            "quizQuestions": quiz_batch(),
        },
        "required": ["topic", "concept", "sections", "quizQuestions"],
    })
}

#[must_use]
pub fn project_blueprint() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": string(),
            "theory": string(),
            "prerequisites": string_array(),
            "steps": string_array(),
            "architecture": string(),
            "successMetrics": string_array(),
        },
        "required": ["title", "theory", "prerequisites", "steps", "architecture", "successMetrics"],
    })
}

#[must_use]
pub fn application_data() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "projects": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": string(),
                        "description": string(),
                        "difficulty": string(),
                    },
                    "required": ["title", "description", "difficulty"],
                },
            },
            "industryUse": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "sector": string(),
                        "purpose": string(),
                    },
                    "required": ["sector", "purpose"],
                },
            },
        },
        "required": ["projects", "industryUse"],
    })
}
