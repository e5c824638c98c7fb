use serde::Deserialize;

use crate::AnswerKey;

/// Placeholder used when a multi-select question has no picks and the
/// catalog does not name its own.
pub const DEFAULT_SELECTION_PLACEHOLDER: &str = "Ninguno seleccionado";

/// Placeholder used for unanswered text and choice questions.
pub const DEFAULT_TEXT_PLACEHOLDER: &str = "No especificado";

/// A single question in a section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    /// The key this question's answer is stored under.
    key: AnswerKey,

    /// The prompt text shown to the user.
    ask: String,

    /// Label used for this question in the transcript, e.g. `"🐟 Pescados grasos:"`.
    #[serde(default)]
    heading: Option<String>,

    /// The kind of question (determines input type).
    kind: QuestionKind,
}

impl Question {
    /// Create a new question.
    pub fn new(key: impl Into<AnswerKey>, ask: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            key: key.into(),
            ask: ask.into(),
            heading: None,
            kind,
        }
    }

    /// Set the transcript heading.
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Get the answer key for this question.
    pub fn key(&self) -> &AnswerKey {
        &self.key
    }

    /// Get the prompt text.
    pub fn ask(&self) -> &str {
        &self.ask
    }

    /// Get the transcript heading, if any.
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    /// Get the question kind.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Text shown in the transcript when this question has no answer.
    pub fn placeholder(&self) -> &str {
        match &self.kind {
            QuestionKind::MultiSelect(q) => q
                .placeholder
                .as_deref()
                .unwrap_or(DEFAULT_SELECTION_PLACEHOLDER),
            QuestionKind::Text(q) => q
                .placeholder
                .as_deref()
                .unwrap_or(DEFAULT_TEXT_PLACEHOLDER),
            QuestionKind::SingleSelect(_) | QuestionKind::Confirm(_) => DEFAULT_TEXT_PLACEHOLDER,
        }
    }
}

/// The kind of question, determining input type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Pick any number of options from a fixed list.
    MultiSelect(MultiSelectQuestion),

    /// Pick exactly one option from a fixed list.
    SingleSelect(SingleSelectQuestion),

    /// Free text, single or multi-line.
    Text(TextQuestion),

    /// Yes/no confirmation.
    Confirm(ConfirmQuestion),
}

impl QuestionKind {
    /// Check if answers to this question count towards the section tally.
    pub fn is_countable(&self) -> bool {
        matches!(self, Self::MultiSelect(_))
    }
}

/// Configuration for a multi-select question.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MultiSelectQuestion {
    /// The options offered, in display order.
    pub options: Vec<String>,

    /// Transcript text when nothing is picked (defaults to "Ninguno seleccionado").
    #[serde(default)]
    pub placeholder: Option<String>,
}

impl MultiSelectQuestion {
    /// Create a new multi-select question with the given options.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            placeholder: None,
        }
    }

    /// Set a custom placeholder, e.g. "Ninguna seleccionada".
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

/// Configuration for a single-select question.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SingleSelectQuestion {
    /// The options offered, in display order.
    pub options: Vec<String>,

    /// Default selected option index (if any).
    #[serde(default)]
    pub default: Option<usize>,
}

impl SingleSelectQuestion {
    /// Create a new single-select question with the given options.
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            default: None,
        }
    }
}

/// Configuration for a free-text question.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TextQuestion {
    /// Open an editor / text area instead of a single-line prompt.
    #[serde(default)]
    pub multiline: bool,

    /// Render as `"<heading> <text>"` on one line, directly under the previous question.
    #[serde(default)]
    pub inline: bool,

    /// Transcript text when left blank (defaults to "No especificado").
    #[serde(default)]
    pub placeholder: Option<String>,
}

impl TextQuestion {
    /// Single-line text question.
    pub fn line() -> Self {
        Self::default()
    }

    /// Multi-line text question.
    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    /// Mark this question as rendered inline in the transcript.
    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }
}

/// Configuration for a yes/no confirmation question.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfirmQuestion {
    /// Default value (true for yes, false for no).
    #[serde(default)]
    pub default: bool,
}

impl ConfirmQuestion {
    /// Create a new confirm question with default false.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders() {
        let plain = Question::new(
            "grupo5_vegetales",
            "Selecciona:",
            QuestionKind::MultiSelect(MultiSelectQuestion::new(["Apio"])),
        );
        assert_eq!(plain.placeholder(), "Ninguno seleccionado");

        let custom = Question::new(
            "grupo6_frutas",
            "Selecciona:",
            QuestionKind::MultiSelect(
                MultiSelectQuestion::new(["Kiwi"]).with_placeholder("Ninguna seleccionada"),
            ),
        );
        assert_eq!(custom.placeholder(), "Ninguna seleccionada");

        let text = Question::new(
            "otros_antojos",
            "¿Qué más?",
            QuestionKind::Text(TextQuestion::multiline()),
        );
        assert_eq!(text.placeholder(), "No especificado");
    }

    #[test]
    fn deserialize_tagged_kind() {
        let question: Question = toml::from_str(
            r#"
            key = "alergias_alimentarias"
            ask = "Selecciona todas las alergias que tengas:"
            heading = "❗ Alergias alimentarias:"
            kind = { type = "multi_select", options = ["Huevo", "Soya"], placeholder = "Ninguna" }
            "#,
        )
        .unwrap();

        assert_eq!(question.key().as_str(), "alergias_alimentarias");
        assert_eq!(question.heading(), Some("❗ Alergias alimentarias:"));
        assert_eq!(question.placeholder(), "Ninguna");
        match question.kind() {
            QuestionKind::MultiSelect(q) => assert_eq!(q.options, vec!["Huevo", "Soya"]),
            other => panic!("Expected MultiSelect, got {other:?}"),
        }
    }

    #[test]
    fn only_multi_select_is_countable() {
        assert!(QuestionKind::MultiSelect(MultiSelectQuestion::default()).is_countable());
        assert!(!QuestionKind::Text(TextQuestion::line()).is_countable());
    }
}
