//! Async orchestration behind the dashboard views.
//!
//! Every fetch follows the same shape: raise the shared loading flag, run
//! the request, drop the flag, and write the result into its content slot.
//! Requests are not queued or cancelled; if two overlap, the later write
//! wins.

use dioxus::prelude::{ReadableExt, WritableExt};
use services::GenerationError;
use theory_core::model::{CurriculumTopic, ProjectIdea, QuizKind, UserProfile};

use crate::context::AppContext;
use crate::session::{Tab, Workspace};
use crate::vm::QuizVm;

async fn with_loading<T>(
    mut ws: Workspace,
    request: impl Future<Output = Result<T, GenerationError>>,
) -> Option<T> {
    ws.loading.set(true);
    let result = request.await;
    ws.loading.set(false);
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            if err.is_credential_rejection() {
                ws.credential_prompt.set(true);
            }
            None
        }
    }
}

/// Load profile, theme, and the mastered list at startup. The mastery
/// fetch also merges remote progress into the local store.
pub async fn hydrate(ctx: AppContext, mut ws: Workspace) {
    if let Ok(profile) = ctx.mastery().load_profile().await {
        ws.profile.set(profile);
    }
    if let Ok(Some(theme)) = ctx.preferences().theme().await {
        ws.theme.set(theme);
    }
    if let Ok(record) = ctx.mastery().fetch_mastery().await {
        ws.mastered.set(record.topics().to_vec());
    }
}

/// Search for a theory: fetch the explanation, reset every other content
/// slot, and land on the Learn tab.
pub async fn run_search(ctx: AppContext, mut ws: Workspace, query: String) {
    let query = query.trim().to_string();
    if query.is_empty() {
        return;
    }
    ws.theory.set(query.clone());
    ws.reset_content();
    ws.active_tab.set(Tab::Learn);

    let content = ctx.content();
    if let Some(explanation) = with_loading(ws, content.concept_explanation(&query)).await {
        ws.explanation.set(Some(explanation));
    }
}

pub async fn load_curriculum(ctx: AppContext, mut ws: Workspace, parts: u32) {
    let theory = ws.theory.read().clone();
    let content = ctx.content();
    if let Some(topics) = with_loading(ws, content.curriculum(&theory, parts)).await {
        ws.curriculum.set(topics);
        ws.lesson.set(None);
        ws.diagram.set(None);
    }
}

pub async fn load_lesson(ctx: AppContext, mut ws: Workspace, topic: CurriculumTopic) {
    let theory = ws.theory.read().clone();
    let content = ctx.content();
    if let Some(lesson) = with_loading(ws, content.topic_lesson(&theory, &topic.title)).await {
        ws.lesson.set(Some(lesson));
        ws.diagram.set(None);
    }
}

pub async fn load_diagram(ctx: AppContext, mut ws: Workspace, topic: String) {
    let theory = ws.theory.read().clone();
    let content = ctx.content();
    if let Some(uri) = with_loading(ws, content.generate_diagram(&theory, &topic)).await {
        ws.diagram.set(Some(uri));
    }
}

/// Start a practice quiz from the questions bundled with the lesson.
pub fn start_topic_quiz(mut ws: Workspace) {
    let Some(lesson) = ws.lesson.read().clone() else {
        return;
    };
    ws.quiz.set(Some(QuizVm::new(
        lesson.topic.clone(),
        QuizKind::Topic,
        lesson.quiz_questions,
    )));
    ws.active_tab.set(Tab::Quiz);
}

/// Fetch a fresh batch of practice questions for the open lesson.
pub async fn load_more_quizzes(ctx: AppContext, mut ws: Workspace) {
    let theory = ws.theory.read().clone();
    let Some(topic) = ws.lesson.read().as_ref().map(|lesson| lesson.topic.clone()) else {
        return;
    };
    let content = ctx.content();
    if let Some(questions) = with_loading(ws, content.more_quizzes(&theory, &topic)).await {
        ws.quiz
            .set(Some(QuizVm::new(topic, QuizKind::Topic, questions)));
        ws.active_tab.set(Tab::Quiz);
    }
}

pub async fn load_application(ctx: AppContext, mut ws: Workspace) {
    let theory = ws.theory.read().clone();
    let content = ctx.content();
    if let Some(data) = with_loading(ws, content.application_data(&theory)).await {
        ws.application.set(Some(data));
        ws.blueprint.set(None);
    }
}

pub async fn load_blueprint(ctx: AppContext, mut ws: Workspace, project: ProjectIdea) {
    let theory = ws.theory.read().clone();
    let content = ctx.content();
    if let Some(blueprint) =
        with_loading(ws, content.project_blueprint(&theory, &project.title)).await
    {
        ws.blueprint.set(Some(blueprint));
    }
}

/// Start the final mastery assessment for the current theory.
pub async fn start_final_quiz(ctx: AppContext, mut ws: Workspace) {
    let theory = ws.theory.read().clone();
    let content = ctx.content();
    if let Some(questions) = with_loading(ws, content.quiz_questions(&theory)).await {
        ws.quiz
            .set(Some(QuizVm::new(theory, QuizKind::Final, questions)));
    }
}

/// Persist a mastery award and refresh the sidebar list.
pub async fn award_mastery(ctx: AppContext, mut ws: Workspace, topic: String) {
    if let Ok(record) = ctx.mastery().record_mastery(&topic).await {
        ws.mastered.set(record.topics().to_vec());
    }
}

pub async fn toggle_theme(ctx: AppContext, mut ws: Workspace) {
    let next = ws.theme.read().toggled();
    ws.theme.set(next);
    // Preference write failure only loses the persisted choice.
    let _ = ctx.preferences().set_theme(next).await;
}

/// Store the onboarding profile locally, then best-effort remotely.
pub async fn submit_profile(ctx: AppContext, mut ws: Workspace, profile: UserProfile) {
    if ctx.mastery().save_profile(&profile).await.is_ok() {
        ws.profile.set(Some(profile));
    }
}

pub async fn logout(ctx: AppContext, mut ws: Workspace) {
    // Mastery survives logout; only the profile is cleared.
    let _ = ctx.mastery().clear_profile().await;
    ws.profile.set(None);
}
