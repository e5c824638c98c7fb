/// A single answer stored in the `AnswerBag`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    /// The options picked in a multi-select question.
    ///
    /// Kept in the order they were picked, without duplicates.
    Selections(Vec<String>),

    /// The option picked in a single-select question.
    Choice(String),

    /// Free text (from single-line or multi-line text questions).
    Text(String),

    /// A yes/no answer (from confirm questions).
    Bool(bool),
}

impl AnswerValue {
    /// Build a selection set, dropping repeated options but keeping first-pick order.
    pub fn selections<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut picked: Vec<String> = Vec::new();
        for option in options {
            let option = option.into();
            if !picked.contains(&option) {
                picked.push(option);
            }
        }
        Self::Selections(picked)
    }

    /// Try to get this value as a selection list.
    pub fn as_selections(&self) -> Option<&[String]> {
        match self {
            Self::Selections(picked) => Some(picked),
            _ => None,
        }
    }

    /// Try to get this value as a single choice.
    pub fn as_choice(&self) -> Option<&str> {
        match self {
            Self::Choice(choice) => Some(choice),
            _ => None,
        }
    }

    /// Number of selected options; zero for anything that is not a selection.
    pub fn selection_count(&self) -> usize {
        self.as_selections().map_or(0, <[String]>::len)
    }

    /// Whether this answer carries no information (no picks, blank text).
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Selections(picked) => picked.is_empty(),
            Self::Choice(s) | Self::Text(s) => s.trim().is_empty(),
            Self::Bool(_) => false,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Selections(_) => "Selections",
            Self::Choice(_) => "Choice",
            Self::Text(_) => "Text",
            Self::Bool(_) => "Bool",
        }
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for AnswerValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(options: Vec<String>) -> Self {
        Self::selections(options)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(options: Vec<&str>) -> Self {
        Self::selections(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selections_drop_duplicates_in_pick_order() {
        let value = AnswerValue::selections(["Nopal", "Apio", "Nopal", "Ajo"]);
        assert_eq!(
            value.as_selections().unwrap(),
            &["Nopal".to_string(), "Apio".to_string(), "Ajo".to_string()]
        );
        assert_eq!(value.selection_count(), 3);
    }

    #[test]
    fn blank_values() {
        assert!(AnswerValue::selections(Vec::<String>::new()).is_blank());
        assert!(AnswerValue::Text("   ".into()).is_blank());
        assert!(!AnswerValue::Text("Kombucha".into()).is_blank());
        assert!(!AnswerValue::Bool(false).is_blank());
    }

    #[test]
    fn typed_views_match_only_their_variant() {
        let choice = AnswerValue::Choice("Hombre".into());
        assert_eq!(choice.as_choice(), Some("Hombre"));
        assert_eq!(choice.as_selections(), None);

        let text = AnswerValue::from("Polen");
        assert_eq!(text.as_choice(), None);
        assert_eq!(text.as_selections(), None);
    }

    #[test]
    fn non_selection_counts_as_zero() {
        assert_eq!(AnswerValue::Choice("Hombre".into()).selection_count(), 0);
    }
}
