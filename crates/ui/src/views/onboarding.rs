use dioxus::prelude::*;

use theory_core::model::UserProfile;

use crate::context::AppContext;
use crate::session::Workspace;
use crate::views::actions;

/// Languages offered at signup. The profile is a local identity, so this
/// is presentation data rather than a remote catalog.
const LANGUAGE_CHOICES: [&str; 6] = [
    "English", "Spanish", "French", "German", "Farsi", "Mandarin",
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    Signup,
}

#[component]
pub fn OnboardingView() -> Element {
    let ctx = use_context::<AppContext>();
    let workspace = use_context::<Workspace>();

    let mut mode = use_signal(|| Mode::Login);
    let mut email = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut languages = use_signal(|| vec!["English".to_string()]);
    let mut error = use_signal(|| None::<&'static str>);

    let current_mode = *mode.read();

    let mut submit = {
        let ctx = ctx.clone();
        move || {
            let email = email.read().trim().to_string();
            let username = username.read().trim().to_string();
            if email.is_empty() || username.is_empty() {
                error.set(Some("Email and username are both required."));
                return;
            }
            error.set(None);

            let selected = match current_mode {
                Mode::Signup => languages.read().clone(),
                Mode::Login => vec!["English".to_string()],
            };
            let profile = UserProfile {
                email,
                username,
                languages: selected,
            };
            spawn(actions::submit_profile(ctx.clone(), workspace, profile));
        }
    };

    rsx! {
        div { class: "page onboarding",
            h2 {
                match current_mode {
                    Mode::Login => "Welcome back",
                    Mode::Signup => "Create your profile",
                }
            }

            if let Some(message) = *error.read() {
                p { class: "form-error", "{message}" }
            }

            label { "Email"
                input {
                    id: "onboarding-email",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |event| email.set(event.value()),
                }
            }
            label { "Username"
                input {
                    id: "onboarding-username",
                    r#type: "text",
                    value: "{username}",
                    oninput: move |event| username.set(event.value()),
                }
            }

            if current_mode == Mode::Signup {
                fieldset { class: "language-picker",
                    legend { "Languages" }
                    for choice in LANGUAGE_CHOICES {
                        label { key: "{choice}",
                            input {
                                r#type: "checkbox",
                                checked: languages.read().iter().any(|l| l == choice),
                                onchange: move |event| {
                                    let mut selected = languages.read().clone();
                                    if event.checked() {
                                        if !selected.iter().any(|l| l == choice) {
                                            selected.push(choice.to_string());
                                        }
                                    } else {
                                        selected.retain(|l| l != choice);
                                    }
                                    languages.set(selected);
                                },
                            }
                            "{choice}"
                        }
                    }
                }
            }

            button {
                id: "onboarding-submit",
                onclick: move |_| submit(),
                match current_mode {
                    Mode::Login => "Log in",
                    Mode::Signup => "Sign up",
                }
            }

            button {
                class: "link-button",
                onclick: move |_| {
                    let next = match *mode.read() {
                        Mode::Login => Mode::Signup,
                        Mode::Signup => Mode::Login,
                    };
                    mode.set(next);
                },
                match current_mode {
                    Mode::Login => "New here? Sign up instead",
                    Mode::Signup => "Already have a profile? Log in",
                }
            }
        }
    }
}
