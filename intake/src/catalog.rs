//! Questionnaires defined in TOML.
//!
//! ```toml
//! title = "CUESTIONARIO"
//!
//! [[sections]]
//! id = "grupo5"
//! title = "GRUPO 5: VEGETALES"
//! tally = "vegetable"
//!
//! [[sections.questions]]
//! key = "grupo5_vegetales"
//! ask = "Selecciona los vegetales que consumes:"
//! kind = { type = "multi_select", options = ["Brócoli", "Espinaca"] }
//! ```

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::{AnswerKey, Questionnaire};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("catalog has no sections")]
    Empty,

    #[error("answer keys used more than once: {}", join_keys(.0))]
    DuplicateKeys(Vec<AnswerKey>),
}

fn join_keys(keys: &[AnswerKey]) -> String {
    keys.iter()
        .map(AnswerKey::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and check a questionnaire definition.
pub fn from_toml_str(source: &str) -> Result<Questionnaire, CatalogError> {
    let questionnaire: Questionnaire = toml::from_str(source)?;
    check(&questionnaire)?;
    Ok(questionnaire)
}

/// Read, parse and check a questionnaire definition file.
pub fn load_questionnaire(path: &Path) -> Result<Questionnaire, CatalogError> {
    let source = read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let questionnaire = from_toml_str(&source)?;
    info!(
        sections = questionnaire.len(),
        "loaded catalog from {}",
        path.display()
    );
    Ok(questionnaire)
}

/// Reject questionnaires the session cannot store answers for unambiguously.
pub fn check(questionnaire: &Questionnaire) -> Result<(), CatalogError> {
    if questionnaire.is_empty() {
        return Err(CatalogError::Empty);
    }
    let duplicates = questionnaire.duplicate_keys();
    if !duplicates.is_empty() {
        return Err(CatalogError::DuplicateKeys(duplicates));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{QuestionKind, Tally};

    const CATALOG: &str = r#"
title = "CUESTIONARIO"
epilogue = "Gracias."

[[sections]]
id = "grupo5"
title = "GRUPO 5: VEGETALES"
tally = "vegetable"

[[sections.questions]]
key = "grupo5_vegetales"
ask = "Selecciona los vegetales que consumes:"
kind = { type = "multi_select", options = ["Brócoli", "Espinaca"] }

[[sections]]
id = "extra"
title = "EXTRA"

[[sections.questions]]
key = "otros"
ask = "¿Algo más?"
heading = "Otros:"
kind = { type = "text", multiline = true }
"#;

    #[test]
    fn parses_sections_and_kinds() {
        let questionnaire = from_toml_str(CATALOG).unwrap();
        assert_eq!(questionnaire.len(), 2);
        assert_eq!(questionnaire.epilogue.as_deref(), Some("Gracias."));

        let vegetables = questionnaire.section("grupo5").unwrap();
        assert_eq!(vegetables.tally, Some(Tally::Vegetable));
        assert!(matches!(
            vegetables.questions[0].kind(),
            QuestionKind::MultiSelect(q) if q.options.len() == 2
        ));

        let other = questionnaire.question(&"otros".into()).unwrap();
        assert_eq!(other.heading(), Some("Otros:"));
        assert_eq!(other.placeholder(), "No especificado");
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let source = CATALOG.replace("key = \"otros\"", "key = \"grupo5_vegetales\"");
        let err = from_toml_str(&source).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateKeys(ref keys) if keys.len() == 1));
        assert_eq!(
            err.to_string(),
            "answer keys used more than once: grupo5_vegetales"
        );
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = from_toml_str("title = \"x\"\nsections = []\n").unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_questionnaire(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, CATALOG).unwrap();
        assert_eq!(load_questionnaire(&path).unwrap().len(), 2);
    }
}
