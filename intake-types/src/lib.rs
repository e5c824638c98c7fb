//! Core types for the intake questionnaire.
//!
//! This crate provides the foundational types shared by the core and the frontends:
//! - `Questionnaire` and `Section` - The ordered wizard structure
//! - `Question` and `QuestionKind` - Individual questions and their input types
//! - `AnswerBag`, `AnswerKey` and `AnswerValue` - Collected answers keyed by question
//! - `Tally` - The summary bucket a section's selections are counted towards

mod answer_key;
pub use answer_key::AnswerKey;

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::AnswerBag;

mod question;
pub use question::{
    ConfirmQuestion, DEFAULT_SELECTION_PLACEHOLDER, DEFAULT_TEXT_PLACEHOLDER,
    MultiSelectQuestion, Question, QuestionKind, SingleSelectQuestion, TextQuestion,
};

mod questionnaire;
pub use questionnaire::{Questionnaire, Section};

mod tally;
pub use tally::Tally;

mod error;
pub use error::AnswerError;
