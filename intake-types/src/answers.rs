use std::collections::HashMap;

use crate::{AnswerError, AnswerKey, AnswerValue};

/// The answers collected so far, keyed by question.
///
/// Each key holds at most one value. Merging a later submission for the same
/// key replaces the earlier value, so re-submitting a section never duplicates
/// anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerBag {
    values: HashMap<AnswerKey, AnswerValue>,
}

impl AnswerBag {
    /// Create a new empty bag.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert an answer for the given key, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<AnswerKey>, value: impl Into<AnswerValue>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<AnswerKey>, value: impl Into<AnswerValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get the answer for the given key.
    pub fn get(&self, key: &AnswerKey) -> Option<&AnswerValue> {
        self.values.get(key)
    }

    /// Get the number of answered questions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing has been answered.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge another bag into this one. Keys present in `other` win.
    pub fn merge(&mut self, other: AnswerBag) {
        self.values.extend(other.values);
    }

    // === Convenience accessors ===

    /// Get the selected options at the given key.
    pub fn get_selections(&self, key: &AnswerKey) -> Result<&[String], AnswerError> {
        match self.get(key) {
            Some(AnswerValue::Selections(picked)) => Ok(picked),
            Some(other) => Err(AnswerError::TypeMismatch {
                key: key.clone(),
                expected: "Selections",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(key.clone())),
        }
    }

    /// Get the free text at the given key.
    pub fn get_text(&self, key: &AnswerKey) -> Result<&str, AnswerError> {
        match self.get(key) {
            Some(AnswerValue::Text(text)) => Ok(text),
            Some(other) => Err(AnswerError::TypeMismatch {
                key: key.clone(),
                expected: "Text",
                actual: other.type_name(),
            }),
            None => Err(AnswerError::Missing(key.clone())),
        }
    }

    /// Number of options picked at the given key, zero if unanswered.
    pub fn selection_count(&self, key: &AnswerKey) -> usize {
        self.get(key).map_or(0, AnswerValue::selection_count)
    }
}

impl FromIterator<(AnswerKey, AnswerValue)> for AnswerBag {
    fn from_iter<T: IntoIterator<Item = (AnswerKey, AnswerValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
