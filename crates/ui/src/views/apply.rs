use dioxus::prelude::*;

use crate::context::AppContext;
use crate::session::Workspace;
use crate::views::actions;

/// Apply tab: industry use cases and project ideas, with a blueprint
/// detail for one chosen project.
#[component]
pub fn ApplyView() -> Element {
    let workspace = use_context::<Workspace>();
    if workspace.blueprint.read().is_some() {
        return rsx! { BlueprintDetail {} };
    }
    rsx! { ApplicationOverview {} }
}

#[component]
fn ApplicationOverview() -> Element {
    let ctx = use_context::<AppContext>();
    let workspace = use_context::<Workspace>();
    let application = workspace.application.read().clone();
    let loading = *workspace.loading.read();

    let Some(application) = application else {
        return rsx! {
            div { class: "page apply",
                p { class: "placeholder", "See how this theory is used in practice." }
                button {
                    id: "apply-load",
                    disabled: loading,
                    onclick: {
                        let ctx = ctx.clone();
                        move |_| {
                            spawn(actions::load_application(ctx.clone(), workspace));
                        }
                    },
                    "Explore applications"
                }
            }
        };
    };

    rsx! {
        div { class: "page apply",
            section { class: "industry",
                h3 { "In industry" }
                ul {
                    for entry in application.industry_use {
                        li { key: "{entry.sector}",
                            strong { "{entry.sector}: " }
                            "{entry.purpose}"
                        }
                    }
                }
            }

            section { class: "projects",
                h3 { "Projects to build" }
                div { class: "project-grid",
                    for project in application.projects {
                        div { key: "{project.title}", class: "project-card",
                            h4 { "{project.title}" }
                            span { class: "difficulty", "{project.difficulty.label()}" }
                            p { "{project.description}" }
                            button {
                                disabled: loading,
                                onclick: {
                                    let ctx = ctx.clone();
                                    let project = project.clone();
                                    move |_| {
                                        spawn(actions::load_blueprint(
                                            ctx.clone(),
                                            workspace,
                                            project.clone(),
                                        ));
                                    }
                                },
                                "View blueprint"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BlueprintDetail() -> Element {
    let mut workspace = use_context::<Workspace>();
    let Some(blueprint) = workspace.blueprint.read().clone() else {
        return rsx! { ApplicationOverview {} };
    };

    rsx! {
        div { class: "page blueprint",
            button {
                class: "link-button",
                onclick: move |_| workspace.blueprint.set(None),
                "Back to projects"
            }

            h2 { "{blueprint.title}" }
            p { class: "blueprint-theory", "Grounded in: {blueprint.theory}" }

            section {
                h3 { "Prerequisites" }
                ul {
                    for item in blueprint.prerequisites {
                        li { key: "{item}", "{item}" }
                    }
                }
            }
            section {
                h3 { "Roadmap" }
                ol {
                    for step in blueprint.steps {
                        li { key: "{step}", "{step}" }
                    }
                }
            }
            section {
                h3 { "Architecture" }
                p { "{blueprint.architecture}" }
            }
            section {
                h3 { "Success metrics" }
                ul {
                    for metric in blueprint.success_metrics {
                        li { key: "{metric}", "{metric}" }
                    }
                }
            }
        }
    }
}
