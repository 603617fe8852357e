mod content;
mod mastery;
mod profile;
mod quiz;

pub use content::{
    ApplicationData, ConceptExplanation, CurriculumTopic, DailyLifeExamples, Difficulty,
    IndustryUse, LessonContent, LessonSection, ProjectBlueprint, ProjectIdea,
};
pub use mastery::MasteryRecord;
pub use profile::{Theme, ThemeParseError, UserId, UserProfile};
pub use quiz::{MASTERY_THRESHOLD_PERCENT, QuizKind, QuizPhase, QuizQuestion, QuizSession};
