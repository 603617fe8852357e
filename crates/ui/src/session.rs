//! Shared dashboard state.
//!
//! One `Workspace` of signals is provided at the layout root so the
//! sidebar, the search bar, and the tab views all observe the same
//! content slots. A new search resets every slot; each generated piece
//! of content lands in exactly one slot.

use dioxus::prelude::*;

use theory_core::model::{
    ApplicationData, ConceptExplanation, CurriculumTopic, LessonContent, ProjectBlueprint,
    Theme, UserProfile,
};

use crate::vm::QuizVm;

/// Dashboard tabs, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Learn,
    Teach,
    Apply,
    Quiz,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Learn, Tab::Teach, Tab::Apply, Tab::Quiz];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tab::Learn => "Learn",
            Tab::Teach => "Teach",
            Tab::Apply => "Apply",
            Tab::Quiz => "Quiz",
        }
    }
}

/// All mutable dashboard state. `Signal` is `Copy`, so the whole bundle is.
#[derive(Clone, Copy)]
pub struct Workspace {
    pub profile: Signal<Option<UserProfile>>,
    pub theme: Signal<Theme>,
    pub mastered: Signal<Vec<String>>,

    pub theory: Signal<String>,
    pub active_tab: Signal<Tab>,
    /// One flag for whatever request is in flight; the last write wins.
    pub loading: Signal<bool>,
    /// Set when the backend rejects credentials; drives the overlay.
    pub credential_prompt: Signal<bool>,

    pub explanation: Signal<Option<ConceptExplanation>>,
    pub curriculum: Signal<Vec<CurriculumTopic>>,
    pub lesson: Signal<Option<LessonContent>>,
    pub diagram: Signal<Option<String>>,
    pub application: Signal<Option<ApplicationData>>,
    pub blueprint: Signal<Option<ProjectBlueprint>>,
    pub quiz: Signal<Option<QuizVm>>,
}

impl Workspace {
    /// Hook form; call once at the layout root.
    #[must_use]
    pub fn provide() -> Self {
        let workspace = Self {
            profile: use_signal(|| None),
            theme: use_signal(Theme::default),
            mastered: use_signal(Vec::new),
            theory: use_signal(String::new),
            active_tab: use_signal(|| Tab::Learn),
            loading: use_signal(|| false),
            credential_prompt: use_signal(|| false),
            explanation: use_signal(|| None),
            curriculum: use_signal(Vec::new),
            lesson: use_signal(|| None),
            diagram: use_signal(|| None),
            application: use_signal(|| None),
            blueprint: use_signal(|| None),
            quiz: use_signal(|| None),
        };
        use_context_provider(|| workspace);
        workspace
    }

    /// Clear every content slot for a fresh theory search.
    pub fn reset_content(&mut self) {
        self.explanation.set(None);
        self.curriculum.set(Vec::new());
        self.lesson.set(None);
        self.diagram.set(None);
        self.application.set(None);
        self.blueprint.set(None);
        self.quiz.set(None);
    }

    #[must_use]
    pub fn has_theory(&self) -> bool {
        !self.theory.read().trim().is_empty()
    }
}
