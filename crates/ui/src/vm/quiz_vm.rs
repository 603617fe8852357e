use theory_core::model::{QuizKind, QuizPhase, QuizQuestion, QuizSession};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(String),
    Submit,
    Advance,
}

/// View model over a `QuizSession`.
///
/// All transitions go through `apply`; the views only read. Mastery is
/// awarded at most once per session even if the finish screen re-renders.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizVm {
    session: QuizSession,
    mastery_awarded: bool,
}

impl QuizVm {
    #[must_use]
    pub fn new(topic: impl Into<String>, kind: QuizKind, questions: Vec<QuizQuestion>) -> Self {
        Self {
            session: QuizSession::new(topic, kind, questions),
            mastery_awarded: false,
        }
    }

    pub fn apply(&mut self, intent: QuizIntent) {
        match intent {
            QuizIntent::Select(option) => self.session.select(option),
            QuizIntent::Submit => self.session.submit(),
            QuizIntent::Advance => self.session.advance(),
        }
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        self.session.topic()
    }

    #[must_use]
    pub fn kind(&self) -> QuizKind {
        self.session.kind()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.session.phase()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.session.current_question()
    }

    #[must_use]
    pub fn question_number(&self) -> usize {
        self.session.current_index() + 1
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.session.total()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.session.score()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.session.selected()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.is_finished()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.session.phase() == QuizPhase::InProgress && self.session.selected().is_some()
    }

    /// Whether the finished session clears the mastery bar.
    #[must_use]
    pub fn passed_final(&self) -> bool {
        self.session.grants_mastery()
    }

    /// One-shot mastery check for the finish screen: true on the first
    /// call after a passing final quiz, false forever after.
    pub fn take_mastery_award(&mut self) -> bool {
        if self.mastery_awarded || !self.session.grants_mastery() {
            return false;
        }
        self.mastery_awarded = true;
        true
    }
}
