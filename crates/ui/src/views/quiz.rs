use dioxus::prelude::*;

use theory_core::model::{QuizKind, QuizPhase};

use crate::context::AppContext;
use crate::session::Workspace;
use crate::views::actions;
use crate::vm::QuizIntent;

/// Quiz tab: either the final mastery assessment for the current theory
/// or a practice quiz handed over from the Teach tab.
#[component]
pub fn QuizView() -> Element {
    let workspace = use_context::<Workspace>();
    let has_quiz = workspace.quiz.read().is_some();
    if has_quiz {
        rsx! { QuizRunner {} }
    } else {
        rsx! { QuizStart {} }
    }
}

#[component]
fn QuizStart() -> Element {
    let ctx = use_context::<AppContext>();
    let workspace = use_context::<Workspace>();
    let theory = workspace.theory.read().clone();
    let loading = *workspace.loading.read();

    rsx! {
        div { class: "page quiz",
            h2 { "Final assessment" }
            p { "Score at least 80% on \"{theory}\" to mark it mastered." }
            button {
                id: "quiz-start",
                disabled: loading,
                onclick: {
                    let ctx = ctx.clone();
                    move |_| {
                        spawn(actions::start_final_quiz(ctx.clone(), workspace));
                    }
                },
                "Start the assessment"
            }
        }
    }
}

#[component]
fn QuizRunner() -> Element {
    let ctx = use_context::<AppContext>();
    let mut workspace = use_context::<Workspace>();
    let Some(vm) = workspace.quiz.read().clone() else {
        return rsx! { QuizStart {} };
    };

    if vm.is_finished() {
        let passed = vm.passed_final();
        let verdict = if vm.kind() == QuizKind::Final {
            if passed {
                "Mastered! This theory now counts toward your progress."
            } else {
                "Below the 80% bar. Revisit the lessons and try again."
            }
        } else {
            "Practice round complete."
        };
        return rsx! {
            div { class: "page quiz finished",
                h2 { "Score: {vm.score()} / {vm.total()}" }
                p { class: if passed { "verdict pass" } else { "verdict" }, "{verdict}" }
                button {
                    id: "quiz-reset",
                    onclick: move |_| workspace.quiz.set(None),
                    "Done"
                }
            }
        };
    }

    let Some(question) = vm.current_question().cloned() else {
        return rsx! { QuizStart {} };
    };
    let phase = vm.phase();
    let selected = vm.selected().map(str::to_string);
    let can_submit = vm.can_submit();
    let correct_answer = question.correct_answer.clone();

    rsx! {
        div { class: "page quiz",
            p { class: "quiz-progress",
                "{vm.topic()}: question {vm.question_number()} of {vm.total()}"
            }
            h2 { class: "quiz-question", "{question.question}" }

            ul { class: "quiz-options",
                for option in question.options.clone() {
                    li { key: "{option}",
                        button {
                            class: option_class(&option, selected.as_deref(), &correct_answer, phase),
                            disabled: phase != QuizPhase::InProgress,
                            onclick: {
                                let option = option.clone();
                                move |_| {
                                    workspace.quiz.with_mut(|slot| {
                                        if let Some(vm) = slot {
                                            vm.apply(QuizIntent::Select(option.clone()));
                                        }
                                    });
                                }
                            },
                            "{option}"
                        }
                    }
                }
            }

            match phase {
                QuizPhase::InProgress => rsx! {
                    button {
                        id: "quiz-submit",
                        disabled: !can_submit,
                        onclick: move |_| {
                            workspace.quiz.with_mut(|slot| {
                                if let Some(vm) = slot {
                                    vm.apply(QuizIntent::Submit);
                                }
                            });
                        },
                        "Submit"
                    }
                },
                QuizPhase::AnswerRevealed { correct } => rsx! {
                    div { class: if correct { "reveal correct" } else { "reveal wrong" },
                        p { if correct { "Correct." } else { "Not quite." } }
                        p { class: "explanation", "{question.explanation}" }
                    }
                    button {
                        id: "quiz-advance",
                        onclick: {
                            let ctx = ctx.clone();
                            move |_| {
                                let mut award_for = None;
                                workspace.quiz.with_mut(|slot| {
                                    if let Some(vm) = slot {
                                        vm.apply(QuizIntent::Advance);
                                        if vm.take_mastery_award() {
                                            award_for = Some(vm.topic().to_string());
                                        }
                                    }
                                });
                                if let Some(topic) = award_for {
                                    spawn(actions::award_mastery(ctx.clone(), workspace, topic));
                                }
                            }
                        },
                        "Next"
                    }
                },
                QuizPhase::Finished => rsx! {},
            }
        }
    }
}

fn option_class(
    option: &str,
    selected: Option<&str>,
    correct_answer: &str,
    phase: QuizPhase,
) -> &'static str {
    let is_selected = selected == Some(option);
    match phase {
        QuizPhase::InProgress => {
            if is_selected {
                "option selected"
            } else {
                "option"
            }
        }
        QuizPhase::AnswerRevealed { .. } | QuizPhase::Finished => {
            if option == correct_answer {
                "option right"
            } else if is_selected {
                "option missed"
            } else {
                "option"
            }
        }
    }
}
