//! Generated learning content.
//!
//! These structs mirror the JSON shapes the generation endpoint is asked to
//! produce. Field names are renamed to the wire's camelCase so the declared
//! response schema and the parsed struct always agree. Every type implements
//! `Default`: an empty or malformed payload degrades to an empty view rather
//! than an error.

use serde::{Deserialize, Serialize};

use crate::model::quiz::QuizQuestion;

/// Brief explanation of a theory plus daily-life examples.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptExplanation {
    #[serde(default)]
    pub brief: String,
    #[serde(rename = "dailyLife", default)]
    pub daily_life: DailyLifeExamples,
}

/// Examples split the way the source material frames them: biological
/// systems versus technical systems.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyLifeExamples {
    #[serde(default)]
    pub living: Vec<String>,
    #[serde(rename = "nonLiving", default)]
    pub non_living: Vec<String>,
}

/// One module in a generated curriculum breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumTopic {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "shortDescription", default)]
    pub short_description: String,
}

/// A titled prose section inside a lesson.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonSection {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Full lesson for one curriculum module: prose sections plus a question
/// batch for the per-topic practice quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonContent {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub concept: String,
    #[serde(default)]
    pub sections: Vec<LessonSection>,
    #[serde(rename = "quizQuestions", default)]
    pub quiz_questions: Vec<QuizQuestion>,
}

/// Technical blueprint for one suggested project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectBlueprint {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub theory: String,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub architecture: String,
    #[serde(rename = "successMetrics", default)]
    pub success_metrics: Vec<String>,
}

/// Suggested difficulty tier for a project idea.
///
/// The wire schema declares this field as a free string, so spellings
/// outside the usual three tiers are kept verbatim instead of failing
/// the surrounding payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Other(String),
}

impl Difficulty {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Other(raw) => raw,
        }
    }
}

impl From<String> for Difficulty {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Beginner" => Difficulty::Beginner,
            "Intermediate" => Difficulty::Intermediate,
            "Advanced" => Difficulty::Advanced,
            _ => Difficulty::Other(raw),
        }
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.label().to_owned()
    }
}

/// One practical project suggestion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectIdea {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

/// Industry use case for a theory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryUse {
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub purpose: String,
}

/// Application view payload: project ideas plus industry use cases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationData {
    #[serde(default)]
    pub projects: Vec<ProjectIdea>,
    #[serde(rename = "industryUse", default)]
    pub industry_use: Vec<IndustryUse>,
}
