use dioxus::prelude::*;

use services::CurriculumDepth;

use crate::context::AppContext;
use crate::session::Workspace;
use crate::views::actions;
use crate::vm::markdown_to_html;

const DEPTHS: [CurriculumDepth; 3] = [
    CurriculumDepth::Executive,
    CurriculumDepth::Industry,
    CurriculumDepth::Architect,
];

/// Teach tab: curriculum breakdown, then per-module lessons.
#[component]
pub fn TeachView() -> Element {
    let workspace = use_context::<Workspace>();
    let lesson = workspace.lesson.read().clone();

    match lesson {
        Some(_) => rsx! { LessonDetail {} },
        None => rsx! { CurriculumList {} },
    }
}

#[component]
fn CurriculumList() -> Element {
    let ctx = use_context::<AppContext>();
    let workspace = use_context::<Workspace>();
    let topics = workspace.curriculum.read().clone();
    let loading = *workspace.loading.read();

    rsx! {
        div { class: "page teach",
            div { class: "depth-picker",
                span { "Break the theory into:" }
                for depth in DEPTHS {
                    button {
                        key: "{depth.label()}",
                        disabled: loading,
                        onclick: {
                            let ctx = ctx.clone();
                            move |_| {
                                spawn(actions::load_curriculum(
                                    ctx.clone(),
                                    workspace,
                                    depth.module_count(),
                                ));
                            }
                        },
                        "{depth.label()} ({depth.module_count()})"
                    }
                }
            }

            if topics.is_empty() {
                p { class: "placeholder", "Pick a depth to generate a curriculum." }
            } else {
                ol { class: "curriculum",
                    for topic in topics {
                        li { key: "{topic.id}",
                            button {
                                class: "curriculum-entry",
                                onclick: {
                                    let ctx = ctx.clone();
                                    let topic = topic.clone();
                                    move |_| {
                                        spawn(actions::load_lesson(
                                            ctx.clone(),
                                            workspace,
                                            topic.clone(),
                                        ));
                                    }
                                },
                                strong { "{topic.title}" }
                                span { class: "curriculum-blurb", "{topic.short_description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LessonDetail() -> Element {
    let ctx = use_context::<AppContext>();
    let mut workspace = use_context::<Workspace>();
    let Some(lesson) = workspace.lesson.read().clone() else {
        return rsx! { CurriculumList {} };
    };
    let diagram = workspace.diagram.read().clone();
    let loading = *workspace.loading.read();
    let lesson_topic = lesson.topic.clone();

    rsx! {
        div { class: "page lesson",
            button {
                class: "link-button",
                onclick: move |_| {
                    workspace.lesson.set(None);
                    workspace.diagram.set(None);
                },
                "Back to curriculum"
            }

            h2 { "{lesson.topic}" }
            p { class: "lesson-concept", "{lesson.concept}" }

            for part in &lesson.sections {
                section { key: "{part.title}", class: "lesson-section",
                    h3 { "{part.title}" }
                    article {
                        class: "prose",
                        dangerous_inner_html: markdown_to_html(&part.content),
                    }
                }
            }

            div { class: "lesson-actions",
                button {
                    id: "lesson-diagram",
                    disabled: loading,
                    onclick: {
                        let ctx = ctx.clone();
                        let topic = lesson_topic.clone();
                        move |_| {
                            spawn(actions::load_diagram(ctx.clone(), workspace, topic.clone()));
                        }
                    },
                    "Generate diagram"
                }
                button {
                    id: "lesson-quiz",
                    disabled: lesson.quiz_questions.is_empty(),
                    onclick: move |_| actions::start_topic_quiz(workspace),
                    "Practice quiz ({lesson.quiz_questions.len()})"
                }
                button {
                    id: "lesson-more-quizzes",
                    disabled: loading,
                    onclick: {
                        let ctx = ctx.clone();
                        move |_| {
                            spawn(actions::load_more_quizzes(ctx.clone(), workspace));
                        }
                    },
                    "Fresh questions"
                }
            }

            if let Some(uri) = diagram {
                figure { class: "diagram",
                    img { src: "{uri}", alt: "Generated diagram for {lesson.topic}" }
                }
            }
        }
    }
}
