use std::collections::HashSet;

use serde::Deserialize;

use crate::{AnswerKey, Question, Tally};

/// The full wizard: an ordered list of sections plus the text around them.
///
/// A questionnaire is presentation-agnostic. Frontends walk the sections in
/// order, and the summary formatter renders them in the same order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Questionnaire {
    /// Title shown at the top of the wizard and of the transcript.
    pub title: String,

    /// Line shown under the transcript title, e.g. the system name and version.
    #[serde(default)]
    pub tagline: Option<String>,

    /// Optional message shown before the first section.
    #[serde(default)]
    pub prelude: Option<String>,

    /// Closing notes appended to the transcript.
    #[serde(default)]
    pub epilogue: Option<String>,

    /// Footer lines appended after everything else.
    #[serde(default)]
    pub footer: Option<String>,

    /// Sections in wizard order.
    pub sections: Vec<Section>,
}

impl Questionnaire {
    /// Create a new questionnaire with the given sections.
    pub fn new(title: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            title: title.into(),
            tagline: None,
            prelude: None,
            epilogue: None,
            footer: None,
            sections,
        }
    }

    /// Set the tagline.
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = Some(tagline.into());
        self
    }

    /// Set the prelude message.
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Set the epilogue message.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    /// Set the footer.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Get the sections.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Find a section by id.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    /// Iterate over every question of every section, in wizard order.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections.iter().flat_map(|section| section.questions.iter())
    }

    /// Find a question by its answer key.
    pub fn question(&self, key: &AnswerKey) -> Option<&Question> {
        self.questions().find(|question| question.key() == key)
    }

    /// Keys used by more than one question, in first-repeat order.
    pub fn duplicate_keys(&self) -> Vec<AnswerKey> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for question in self.questions() {
            if !seen.insert(question.key()) && !duplicates.contains(question.key()) {
                duplicates.push(question.key().clone());
            }
        }
        duplicates
    }

    /// Check if the questionnaire has any sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Get the number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }
}

/// One page of the wizard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Section {
    /// Stable identifier, e.g. `"grupo1"`.
    pub id: String,

    /// Title used as the wizard page header and as the transcript block title.
    pub title: String,

    /// Optional instruction line shown under the title.
    #[serde(default)]
    pub instructions: Option<String>,

    /// Bucket the section's multi-select picks count towards.
    #[serde(default)]
    pub tally: Option<Tally>,

    /// The questions in this section.
    pub questions: Vec<Question>,
}

impl Section {
    /// Create a new section.
    pub fn new(id: impl Into<String>, title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            instructions: None,
            tally: None,
            questions,
        }
    }

    /// Set the instruction line.
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Set the tally bucket.
    pub fn with_tally(mut self, tally: Tally) -> Self {
        self.tally = Some(tally);
        self
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
