use serde::{Deserialize, Serialize};

use crate::model::ids::{OptionId, QuestionId};

/// A single answer choice belonging to a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    option_id: OptionId,
    option_text: String,
}

impl QuestionOption {
    #[must_use]
    pub fn new(option_id: OptionId, option_text: impl Into<String>) -> Self {
        Self {
            option_id,
            option_text: option_text.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &OptionId {
        &self.option_id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.option_text
    }
}

/// A server-generated personality question with a fixed option set.
///
/// Immutable once fetched; the wire field names match the question schema the
/// backend produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    question_text: String,
    options: Vec<QuestionOption>,
}

impl Question {
    #[must_use]
    pub fn new(
        id: QuestionId,
        question_text: impl Into<String>,
        options: Vec<QuestionOption>,
    ) -> Self {
        Self {
            id,
            question_text: question_text.into(),
            options,
        }
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.question_text
    }

    #[must_use]
    pub fn options(&self) -> &[QuestionOption] {
        &self.options
    }

    /// Returns true if `option_id` is one of this question's choices.
    #[must_use]
    pub fn has_option(&self, option_id: &OptionId) -> bool {
        self.options.iter().any(|opt| opt.id() == option_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_deserializes_from_wire_json() {
        let json = r#"{
            "id": "q1",
            "question_text": "How do you recharge?",
            "options": [
                {"option_id": "a", "option_text": "Alone with a book"},
                {"option_id": "b", "option_text": "Out with friends"}
            ]
        }"#;

        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.id(), &QuestionId::new("q1"));
        assert_eq!(question.options().len(), 2);
        assert_eq!(question.options()[1].text(), "Out with friends");
        assert!(question.has_option(&OptionId::new("a")));
        assert!(!question.has_option(&OptionId::new("z")));
    }
}
