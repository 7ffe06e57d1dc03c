use std::fmt;

use thiserror::Error;

use ainstien_core::model::{
    AnalysisResult, AnswerError, AnswerMap, OptionId, Question, QuestionId,
};

use crate::error::ApiError;
use crate::generation::FetchTag;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TestError {
    #[error("no question is being shown right now")]
    NotActive,
    #[error("submit is only available on the last question")]
    NotOnLastQuestion,
    #[error("please answer all questions before submitting ({remaining} remaining)")]
    Unanswered { remaining: usize },
    #[error("the test has not been completed yet")]
    NotComplete,
    #[error("option {0} is not a choice for that question")]
    UnknownOption(OptionId),
    #[error(transparent)]
    Answer(#[from] AnswerError),
}

//
// ─── PHASES ────────────────────────────────────────────────────────────────────
//

/// Where a test session currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestPhase {
    /// A question set is being fetched.
    Loading,
    /// The AI backend reported itself unavailable.
    Offline,
    /// Something else went wrong; the message is user-visible.
    Error(String),
    /// Questions are being shown and answered.
    Active,
    /// The complete answer map is being analyzed.
    Submitting,
    /// The analysis arrived and is being shown.
    Complete,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// State machine for one run of the personality test.
///
/// The session never performs I/O itself. Each networked step is split in
/// two: a `begin_*` method that transitions state and returns a [`FetchTag`],
/// and an `apply_*` method that folds the response back in. Responses tagged
/// with a superseded generation are discarded, so a stale fetch overtaken by
/// a retake can never corrupt the newer run.
pub struct TestSession {
    phase: TestPhase,
    questions: Vec<Question>,
    current: usize,
    answers: AnswerMap,
    analysis: Option<AnalysisResult>,
    submit_error: Option<String>,
    generation: u64,
}

impl TestSession {
    /// A fresh session in `Loading`, waiting for its first `begin_start`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: TestPhase::Loading,
            questions: Vec::new(),
            current: 0,
            answers: AnswerMap::default(),
            analysis: None,
            submit_error: None,
            generation: 0,
        }
    }

    /// Reset to a fresh `Loading` state and tag the question fetch that must
    /// follow. Any prior questions, answers, and analysis are discarded.
    pub fn begin_start(&mut self) -> FetchTag {
        self.phase = TestPhase::Loading;
        self.questions = Vec::new();
        self.current = 0;
        self.answers = AnswerMap::default();
        self.analysis = None;
        self.submit_error = None;
        self.generation += 1;
        FetchTag::new(self.generation)
    }

    /// Start over after viewing the analysis.
    ///
    /// # Errors
    ///
    /// Returns `TestError::NotComplete` unless the session is in `Complete`.
    pub fn retake(&mut self) -> Result<FetchTag, TestError> {
        if self.phase != TestPhase::Complete {
            return Err(TestError::NotComplete);
        }
        Ok(self.begin_start())
    }

    /// Fold the question fetch outcome into the session. Stale tags are
    /// ignored without any state change.
    pub fn apply_questions(&mut self, tag: FetchTag, outcome: Result<Vec<Question>, ApiError>) {
        if !tag.matches(self.generation) {
            return;
        }
        match outcome {
            Ok(questions) if questions.is_empty() => {
                self.phase = TestPhase::Error(ApiError::NoQuestions.to_string());
            }
            Ok(questions) => {
                self.answers = AnswerMap::for_questions(&questions);
                self.questions = questions;
                self.current = 0;
                self.phase = TestPhase::Active;
            }
            Err(err) if err.is_offline() => self.phase = TestPhase::Offline,
            Err(err) => self.phase = TestPhase::Error(err.to_string()),
        }
    }

    /// Record a selection for any fetched question, current or not.
    ///
    /// # Errors
    ///
    /// Returns `TestError::NotActive` outside `Active`, and an error for ids
    /// outside the fetched question/option sets.
    pub fn select_option(
        &mut self,
        question_id: &QuestionId,
        option_id: OptionId,
    ) -> Result<(), TestError> {
        if self.phase != TestPhase::Active {
            return Err(TestError::NotActive);
        }
        let question = self
            .questions
            .iter()
            .find(|question| question.id() == question_id)
            .ok_or_else(|| AnswerError::UnknownQuestion(question_id.clone()))?;
        if !question.has_option(&option_id) {
            return Err(TestError::UnknownOption(option_id));
        }
        self.answers.select(question_id, option_id)?;
        Ok(())
    }

    /// Advance to the next question. No-op at the last question or outside
    /// `Active`.
    pub fn next(&mut self) {
        if self.phase == TestPhase::Active && self.current + 1 < self.questions.len() {
            self.current += 1;
        }
    }

    /// Step back to the previous question. No-op at the first question or
    /// outside `Active`.
    pub fn previous(&mut self) {
        if self.phase == TestPhase::Active && self.current > 0 {
            self.current -= 1;
        }
    }

    /// Validate and enter `Submitting`, handing back the answer payload and
    /// the tag for the analysis request.
    ///
    /// # Errors
    ///
    /// Returns `TestError::NotActive` outside `Active`,
    /// `TestError::NotOnLastQuestion` before the last question, and
    /// `TestError::Unanswered` while any question has no selection.
    pub fn begin_submit(&mut self) -> Result<(AnswerMap, FetchTag), TestError> {
        if self.phase != TestPhase::Active {
            return Err(TestError::NotActive);
        }
        if !self.is_last() {
            return Err(TestError::NotOnLastQuestion);
        }
        if !self.answers.is_complete() {
            return Err(TestError::Unanswered {
                remaining: self.answers.unanswered_count(),
            });
        }
        self.submit_error = None;
        self.phase = TestPhase::Submitting;
        self.generation += 1;
        Ok((self.answers.clone(), FetchTag::new(self.generation)))
    }

    /// Fold the analysis outcome into the session. Stale tags are ignored.
    ///
    /// On success the session moves to `Complete`. An offline signal moves it
    /// to `Offline`; any other failure returns to `Active` with answers and
    /// position intact and the message exposed via [`Self::submit_error`], so
    /// the user can retry the submission.
    pub fn apply_analysis(&mut self, tag: FetchTag, outcome: Result<AnalysisResult, ApiError>) {
        if !tag.matches(self.generation) || self.phase != TestPhase::Submitting {
            return;
        }
        match outcome {
            Ok(analysis) => {
                self.analysis = Some(analysis);
                self.phase = TestPhase::Complete;
            }
            Err(err) if err.is_offline() => self.phase = TestPhase::Offline,
            Err(err) => {
                self.submit_error = Some(err.to_string());
                self.phase = TestPhase::Active;
            }
        }
    }

    #[must_use]
    pub fn phase(&self) -> &TestPhase {
        &self.phase
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Total number of fetched questions.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// The selection recorded for the current question, if any.
    #[must_use]
    pub fn selected_option(&self) -> Option<&OptionId> {
        self.current_question()
            .and_then(|question| self.answers.get(question.id()))
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    #[must_use]
    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    /// Message from the most recent failed submission, cleared on the next
    /// submit or reset.
    #[must_use]
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        !self.questions.is_empty() && self.current + 1 == self.questions.len()
    }

    /// True when submission would be accepted right now.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase == TestPhase::Active && self.is_last() && self.answers.is_complete()
    }
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TestSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestSession")
            .field("phase", &self.phase)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answered", &self.answers.answered_count())
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
