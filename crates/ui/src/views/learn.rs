use dioxus::prelude::*;

use crate::session::Workspace;
use crate::vm::markdown_to_html;

/// Learn tab: the brief explanation plus daily-life examples.
#[component]
pub fn LearnView() -> Element {
    let workspace = use_context::<Workspace>();
    let theory = workspace.theory.read().clone();
    let explanation = workspace.explanation.read().clone();

    let Some(explanation) = explanation else {
        return rsx! {
            div { class: "page learn",
                p { class: "placeholder", "No explanation yet for \"{theory}\"." }
            }
        };
    };

    let brief = markdown_to_html(&explanation.brief);

    rsx! {
        div { class: "page learn",
            h2 { "{theory}" }
            article { class: "prose", dangerous_inner_html: brief }

            section { class: "examples",
                div { class: "example-column",
                    h3 { "In living things" }
                    ul {
                        for example in explanation.daily_life.living {
                            li { key: "{example}", "{example}" }
                        }
                    }
                }
                div { class: "example-column",
                    h3 { "In non-living things" }
                    ul {
                        for example in explanation.daily_life.non_living {
                            li { key: "{example}", "{example}" }
                        }
                    }
                }
            }
        }
    }
}
