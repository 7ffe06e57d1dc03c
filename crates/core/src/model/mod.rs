mod analysis;
mod answers;
mod chat;
mod ids;
mod question;

pub use ids::{OptionId, QuestionId};

pub use analysis::{AnalysisResult, TraitInsight};
pub use answers::{AnswerError, AnswerMap};
pub use chat::{ChatMessage, ChatRole, ChatTranscript};
pub use question::{Question, QuestionOption};
