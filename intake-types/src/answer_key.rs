use std::fmt;

use serde::Deserialize;

/// Stable identifier of a question, e.g. `"grupo1_carnes_grasas"`.
///
/// Keys are used to store answers in the `AnswerBag` and stay the same
/// across re-renders of the wizard.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct AnswerKey {
    key: String,
}

impl AnswerKey {
    /// Create a new key.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// Check if the key is empty.
    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

impl From<&str> for AnswerKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AnswerKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for AnswerKey {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

impl From<&AnswerKey> for AnswerKey {
    fn from(key: &AnswerKey) -> Self {
        key.clone()
    }
}
