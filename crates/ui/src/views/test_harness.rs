use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::Router;

use services::generation::DisabledBackend;
use services::{ContentService, LocalOnlyStore, MasteryStore, PreferencesRepository};
use storage::repository::Storage;
use theory_core::model::{QuizKind, QuizQuestion, UserId};

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::session::{Tab, Workspace};
use crate::views::{QuizView, actions};
use crate::vm::QuizVm;

struct TestApp {
    content: ContentService,
    mastery: Arc<dyn MasteryStore>,
    preferences: Arc<dyn PreferencesRepository>,
}

impl UiApp for TestApp {
    fn content(&self) -> ContentService {
        self.content.clone()
    }

    fn mastery(&self) -> Arc<dyn MasteryStore> {
        Arc::clone(&self.mastery)
    }

    fn preferences(&self) -> Arc<dyn PreferencesRepository> {
        Arc::clone(&self.preferences)
    }

    fn user_id(&self) -> UserId {
        UserId::local()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    /// Home with a seeded quiz session on the Quiz tab.
    Quiz,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));

    // The Home path goes through the real router so the layout and
    // sidebar render too; the quiz path seeds a session directly.
    match props.view {
        ViewKind::Home => rsx! { Router::<Route> {} },
        ViewKind::Quiz => rsx! { QuizHarness {} },
    }
}

#[component]
fn QuizHarness() -> Element {
    let ctx = use_context::<crate::context::AppContext>();
    let workspace = Workspace::provide();

    use_hook(|| {
        let mut ws = workspace;
        ws.theory.set("Thermodynamics".to_string());
        ws.active_tab.set(Tab::Quiz);
        ws.quiz.set(Some(QuizVm::new(
            "Thermodynamics",
            QuizKind::Final,
            sample_questions(),
        )));
    });
    use_future(move || actions::hydrate(ctx.clone(), workspace));

    rsx! { QuizView {} }
}

pub fn sample_questions() -> Vec<QuizQuestion> {
    (1..=2)
        .map(|id| QuizQuestion {
            id,
            question: format!("Question {id}"),
            options: vec!["Alpha".into(), "Beta".into()],
            correct_answer: "Alpha".into(),
            explanation: "Alpha is right.".into(),
        })
        .collect()
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub mastery: Arc<dyn MasteryStore>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let storage = Storage::in_memory();
    let mastery: Arc<dyn MasteryStore> = Arc::new(LocalOnlyStore::new(
        Arc::clone(&storage.progress),
        Arc::clone(&storage.profiles),
    ));
    let content = ContentService::new(Arc::new(DisabledBackend), "text-model", "image-model");

    let app = Arc::new(TestApp {
        content,
        mastery: Arc::clone(&mastery),
        preferences: Arc::clone(&storage.preferences),
    });

    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, view });

    ViewHarness {
        dom,
        storage,
        mastery,
    }
}
