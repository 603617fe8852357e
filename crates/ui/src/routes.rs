use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::context::AppContext;
use crate::session::Workspace;
use crate::views::{HomeView, actions};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let workspace = Workspace::provide();

    use_future(move || actions::hydrate(ctx.clone(), workspace));

    let theme = *workspace.theme.read();
    rsx! {
        div { class: "app theme-{theme.as_str()}",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let workspace = use_context::<Workspace>();
    let mastered = workspace.mastered.read().clone();
    let profile = workspace.profile.read().clone();
    let theme = *workspace.theme.read();

    rsx! {
        nav { class: "sidebar",
            h1 { "Theory2Practical" }

            if let Some(profile) = profile {
                div { class: "profile-chip",
                    p { class: "profile-name", "{profile.username}" }
                    p { class: "profile-meta", "Mastered: {mastered.len()}" }
                    p { class: "profile-meta", "Languages: {profile.languages.join(\", \")}" }
                    button {
                        class: "link-button",
                        onclick: {
                            let ctx = ctx.clone();
                            move |_| {
                                spawn(actions::logout(ctx.clone(), workspace));
                            }
                        },
                        "Logout"
                    }
                }
            }

            h2 { "Mastered topics" }
            if mastered.is_empty() {
                p { class: "sidebar-empty", "Nothing mastered yet." }
            } else {
                ul { class: "mastered-list",
                    for topic in mastered {
                        li { key: "{topic}",
                            button {
                                class: "link-button",
                                onclick: {
                                    let ctx = ctx.clone();
                                    let topic = topic.clone();
                                    move |_| {
                                        spawn(actions::run_search(
                                            ctx.clone(),
                                            workspace,
                                            topic.clone(),
                                        ));
                                    }
                                },
                                "{topic}"
                            }
                        }
                    }
                }
            }

            button {
                class: "theme-toggle",
                onclick: {
                    let ctx = ctx.clone();
                    move |_| {
                        spawn(actions::toggle_theme(ctx.clone(), workspace));
                    }
                },
                if theme.as_str() == "dark" { "Switch to light" } else { "Switch to dark" }
            }
        }
    }
}
