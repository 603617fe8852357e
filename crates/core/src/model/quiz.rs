use serde::{Deserialize, Serialize};

/// One multiple-choice question.
///
/// `correct_answer` is assumed to equal one of `options`; the generation
/// endpoint is trusted on this and no validation is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(rename = "correctAnswer", default)]
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: String,
}

/// Whether a quiz is per-topic practice or the final mastery assessment.
///
/// Only final quizzes can grant mastery, regardless of score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizKind {
    Topic,
    Final,
}

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// Waiting for the user to pick and submit an answer.
    InProgress,
    /// The answer for the current question has been scored and shown.
    AnswerRevealed { correct: bool },
    /// All questions answered.
    Finished,
}

/// Minimum passing ratio for mastery, expressed in percent. Inclusive.
pub const MASTERY_THRESHOLD_PERCENT: u32 = 80;

/// Ephemeral quiz state machine.
///
/// `InProgress(index, score)` -> `AnswerRevealed(index, score, correct)` ->
/// `InProgress(index + 1, ..)` or `Finished`. Created fresh on every quiz
/// start and discarded on navigation away; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    topic: String,
    kind: QuizKind,
    questions: Vec<QuizQuestion>,
    current: usize,
    score: u32,
    selected: Option<String>,
    phase: QuizPhase,
}

impl QuizSession {
    /// Start a session over a fixed, ordered question list.
    ///
    /// An empty list starts in `Finished` and can never grant mastery.
    #[must_use]
    pub fn new(topic: impl Into<String>, kind: QuizKind, questions: Vec<QuizQuestion>) -> Self {
        let phase = if questions.is_empty() {
            QuizPhase::Finished
        } else {
            QuizPhase::InProgress
        };
        Self {
            topic: topic.into(),
            kind,
            questions,
            current: 0,
            score: 0,
            selected: None,
            phase,
        }
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn kind(&self) -> QuizKind {
        self.kind
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Zero-based index of the current question.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if matches!(self.phase, QuizPhase::Finished) {
            return None;
        }
        self.questions.get(self.current)
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, QuizPhase::Finished)
    }

    /// Record the candidate answer for the current question.
    ///
    /// Only meaningful while `InProgress`; ignored otherwise.
    pub fn select(&mut self, option: impl Into<String>) {
        if matches!(self.phase, QuizPhase::InProgress) {
            self.selected = Some(option.into());
        }
    }

    /// Score the selected answer and reveal the result.
    ///
    /// A no-op (no state change) when nothing is selected or the session is
    /// not `InProgress`, so a question can never contribute to the score
    /// more than once. Correctness is exact string equality against
    /// `correct_answer`.
    pub fn submit(&mut self) {
        if !matches!(self.phase, QuizPhase::InProgress) {
            return;
        }
        let Some(selected) = self.selected.as_deref() else {
            return;
        };
        let Some(question) = self.questions.get(self.current) else {
            return;
        };
        let correct = selected == question.correct_answer;
        if correct {
            self.score += 1;
        }
        self.phase = QuizPhase::AnswerRevealed { correct };
    }

    /// Move past a revealed answer: next question, or `Finished` when the
    /// list is exhausted. A no-op unless an answer is currently revealed.
    pub fn advance(&mut self) {
        if !matches!(self.phase, QuizPhase::AnswerRevealed { .. }) {
            return;
        }
        self.selected = None;
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.phase = QuizPhase::InProgress;
        } else {
            self.phase = QuizPhase::Finished;
        }
    }

    /// Whether this session, as finished, earns mastery of its topic.
    ///
    /// True iff the session is `Finished`, the kind is `Final`, the question
    /// list was non-empty, and the score reaches 80% of the list length.
    /// The threshold is inclusive (8 of 10 passes); integer arithmetic keeps
    /// the comparison free of float rounding.
    #[must_use]
    pub fn grants_mastery(&self) -> bool {
        if !self.is_finished() || self.questions.is_empty() {
            return false;
        }
        if !matches!(self.kind, QuizKind::Final) {
            return false;
        }
        let len = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        u64::from(self.score) * 100 >= u64::from(len) * u64::from(MASTERY_THRESHOLD_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32, correct: &str) -> QuizQuestion {
        QuizQuestion {
            id,
            question: format!("Q{id}"),
            options: vec!["A".into(), "B".into(), correct.into()],
            correct_answer: correct.into(),
            explanation: String::new(),
        }
    }

    fn ten_questions() -> Vec<QuizQuestion> {
        (1..=10).map(|id| question(id, "C")).collect()
    }

    fn run_through(session: &mut QuizSession, correct_answers: usize) {
        for step in 0..session.total() {
            let answer = if step < correct_answers { "C" } else { "A" };
            session.select(answer);
            session.submit();
            session.advance();
        }
    }

    #[test]
    fn submit_without_selection_is_a_no_op() {
        let mut session = QuizSession::new("Entropy", QuizKind::Final, ten_questions());
        session.submit();
        assert_eq!(session.phase(), QuizPhase::InProgress);
        assert_eq!(session.score(), 0);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn score_counts_exact_matches_once_each() {
        let mut session = QuizSession::new("Entropy", QuizKind::Final, ten_questions());
        session.select("C");
        session.submit();
        // Repeated submit after reveal must not double-count.
        session.submit();
        assert_eq!(session.score(), 1);
        assert_eq!(session.phase(), QuizPhase::AnswerRevealed { correct: true });

        session.advance();
        session.select("B");
        session.submit();
        assert_eq!(session.score(), 1);
        assert_eq!(session.phase(), QuizPhase::AnswerRevealed { correct: false });
    }

    #[test]
    fn advance_walks_to_finished() {
        let mut session = QuizSession::new("Entropy", QuizKind::Final, ten_questions());
        run_through(&mut session, 10);
        assert!(session.is_finished());
        assert_eq!(session.score(), 10);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn advance_before_reveal_is_a_no_op() {
        let mut session = QuizSession::new("Entropy", QuizKind::Final, ten_questions());
        session.select("C");
        session.advance();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.selected(), Some("C"));
    }

    #[test]
    fn final_quiz_at_eighty_percent_grants_mastery() {
        let mut session = QuizSession::new("Entropy", QuizKind::Final, ten_questions());
        run_through(&mut session, 8);
        assert_eq!(session.score(), 8);
        assert!(session.grants_mastery());
    }

    #[test]
    fn final_quiz_below_eighty_percent_does_not() {
        let mut session = QuizSession::new("Entropy", QuizKind::Final, ten_questions());
        run_through(&mut session, 7);
        assert!(!session.grants_mastery());
    }

    #[test]
    fn topic_quiz_never_grants_mastery() {
        let mut session = QuizSession::new("Entropy", QuizKind::Topic, ten_questions());
        run_through(&mut session, 10);
        assert_eq!(session.score(), 10);
        assert!(!session.grants_mastery());
    }

    #[test]
    fn unfinished_session_grants_nothing() {
        let mut session = QuizSession::new("Entropy", QuizKind::Final, ten_questions());
        session.select("C");
        session.submit();
        assert!(!session.grants_mastery());
    }

    #[test]
    fn empty_question_list_is_finished_and_never_passes() {
        let session = QuizSession::new("Entropy", QuizKind::Final, Vec::new());
        assert!(session.is_finished());
        assert!(!session.grants_mastery());
    }

    #[test]
    fn selection_clears_between_questions() {
        let mut session = QuizSession::new("Entropy", QuizKind::Final, ten_questions());
        session.select("C");
        session.submit();
        session.advance();
        assert_eq!(session.selected(), None);
        assert_eq!(session.phase(), QuizPhase::InProgress);
    }
}
