use dioxus::prelude::*;

use crate::context::AppContext;
use crate::session::{Tab, Workspace};
use crate::views::{ApplyView, LearnView, OnboardingView, QuizView, TeachView, actions};

#[component]
pub fn HomeView() -> Element {
    let workspace = use_context::<Workspace>();
    if workspace.profile.read().is_none() {
        return rsx! { OnboardingView {} };
    }
    rsx! { Dashboard {} }
}

#[component]
fn Dashboard() -> Element {
    let ctx = use_context::<AppContext>();
    let mut workspace = use_context::<Workspace>();
    let mut draft = use_signal(String::new);

    let loading = *workspace.loading.read();
    let active_tab = *workspace.active_tab.read();
    let has_theory = workspace.has_theory();
    let credential_prompt = *workspace.credential_prompt.read();

    let submit_search = {
        let ctx = ctx.clone();
        move || {
            let query = draft.read().clone();
            spawn(actions::run_search(ctx.clone(), workspace, query));
        }
    };

    rsx! {
        div { class: "page dashboard",
            header { class: "search-bar",
                input {
                    r#type: "text",
                    placeholder: "Which theory do you want to master?",
                    value: "{draft}",
                    oninput: move |event| draft.set(event.value()),
                    onkeydown: {
                        let submit_search = submit_search.clone();
                        move |event: KeyboardEvent| {
                            if event.key() == Key::Enter {
                                submit_search();
                            }
                        }
                    },
                }
                button {
                    id: "search-submit",
                    disabled: loading,
                    onclick: {
                        let submit_search = submit_search.clone();
                        move |_| submit_search()
                    },
                    "Search"
                }
            }

            if loading {
                div { class: "loading-strip", "Generating..." }
            }

            if has_theory {
                nav { class: "tab-strip",
                    for tab in Tab::ALL {
                        button {
                            key: "{tab.label()}",
                            class: if tab == active_tab { "tab active" } else { "tab" },
                            onclick: move |_| workspace.active_tab.set(tab),
                            "{tab.label()}"
                        }
                    }
                }

                match active_tab {
                    Tab::Learn => rsx! { LearnView {} },
                    Tab::Teach => rsx! { TeachView {} },
                    Tab::Apply => rsx! { ApplyView {} },
                    Tab::Quiz => rsx! { QuizView {} },
                }
            } else {
                div { class: "empty-state",
                    h2 { "Search a theory to begin" }
                    p { "Try \"Thermodynamics\", \"Game Theory\", or \"Bayes' Theorem\"." }
                }
            }

            if credential_prompt {
                div { class: "overlay",
                    div { class: "overlay-card",
                        h2 { "Credentials rejected" }
                        p {
                            "The content service refused the configured API key. "
                            "Update THEORY_AI_API_KEY and restart, then try again."
                        }
                        button {
                            onclick: move |_| workspace.credential_prompt.set(false),
                            "Dismiss"
                        }
                    }
                }
            }
        }
    }
}
