use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::model::ids::{OptionId, QuestionId};
use crate::model::question::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("question {0} is not part of this answer set")]
    UnknownQuestion(QuestionId),
}

/// Per-session mapping from question id to the selected option, or `None`
/// while unanswered.
///
/// The key set is fixed at construction to exactly the fetched question ids;
/// selections for any other id are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnswerMap {
    entries: BTreeMap<QuestionId, Option<OptionId>>,
}

impl AnswerMap {
    /// Initialize an answer map with every given question unanswered.
    #[must_use]
    pub fn for_questions(questions: &[Question]) -> Self {
        let entries = questions
            .iter()
            .map(|question| (question.id().clone(), None))
            .collect();
        Self { entries }
    }

    /// Record a selection for one question. Re-selecting overwrites the
    /// previous choice.
    ///
    /// # Errors
    ///
    /// Returns `AnswerError::UnknownQuestion` if the id is outside the fixed
    /// key set.
    pub fn select(
        &mut self,
        question_id: &QuestionId,
        option_id: OptionId,
    ) -> Result<(), AnswerError> {
        let slot = self
            .entries
            .get_mut(question_id)
            .ok_or_else(|| AnswerError::UnknownQuestion(question_id.clone()))?;
        *slot = Some(option_id);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, question_id: &QuestionId) -> Option<&OptionId> {
        self.entries.get(question_id).and_then(Option::as_ref)
    }

    /// Number of questions in the fixed key set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of questions with a recorded selection.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.entries
            .values()
            .filter(|slot| slot.is_some())
            .count()
    }

    /// Number of questions still unanswered.
    #[must_use]
    pub fn unanswered_count(&self) -> usize {
        self.entries.len() - self.answered_count()
    }

    /// True once every question has a selection.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.entries.is_empty() && self.entries.values().all(Option::is_some)
    }
}

/// Wire form: a JSON object of answered entries only, `{"q1": "a", ...}`.
/// Submission requires `is_complete()`, so a submitted map carries all entries.
impl Serialize for AnswerMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let answered = self
            .entries
            .iter()
            .filter_map(|(question, slot)| slot.as_ref().map(|option| (question, option)));
        let mut map = serializer.serialize_map(None)?;
        for (question, option) in answered {
            map.serialize_entry(question, option)?;
        }
        map.end()
    }
}
