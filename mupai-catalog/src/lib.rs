//! The MUPAI "Selección Alimentaria Personalizada" questionnaire.
//!
//! Ten sections in wizard order: six food groups, cooking fats, drinks,
//! allergies and intolerances, and cravings. Every multi-select is tagged with
//! the tally its picks count towards.

mod cravings;
mod extras;
mod food_groups;
mod restrictions;

use intake::{MultiSelectQuestion, Question, QuestionKind, Questionnaire, TextQuestion};

pub const TITLE: &str = "CUESTIONARIO DE SELECCIÓN ALIMENTARIA PERSONALIZADA - MUPAI";
pub const TAGLINE: &str = "Sistema: MUPAI v2.0 - Muscle Up Performance Assessment Intelligence";

const PRELUDE: &str = "Marca (✓) todos los alimentos y bebidas que consumes con facilidad o disfrutas. \
Esto permitirá diseñar un plan de alimentación ajustado a tus gustos, tolerancias y necesidades personales.";

const EPILOGUE: &str = "\
Este cuestionario de selección alimentaria personalizada proporciona información detallada
sobre las preferencias, tolerancias y antojos específicos del cliente, permitiendo el
diseño de planes nutricionales altamente personalizados.

La información recopilada incluye:
- Selecciones específicas por grupos de alimentos
- Identificación de restricciones y alergias
- Mapeo de antojos para estrategias de manejo
- Preferencias de aceites y bebidas sin calorías

Recomendamos consulta nutricional especializada para desarrollar plan alimentario
personalizado basado en estas selecciones específicas.";

const FOOTER: &str = "\
© 2025 MUPAI - Muscle up GYM
Cuestionario de Selección Alimentaria Personalizada";

/// Build the full questionnaire.
pub fn questionnaire() -> Questionnaire {
    let mut sections = food_groups::sections();
    sections.extend(extras::sections());
    sections.push(restrictions::section());
    sections.push(cravings::section());

    Questionnaire::new(TITLE, sections)
        .with_tagline(TAGLINE)
        .with_prelude(PRELUDE)
        .with_epilogue(EPILOGUE)
        .with_footer(FOOTER)
}

const PICK_ANY: &str = "Selecciona todos los que puedas consumir:";

fn pick(key: &str, heading: &str, ask: &str, options: &[&str]) -> Question {
    Question::new(key, ask, multi(options)).with_heading(heading)
}

fn multi(options: &[&str]) -> QuestionKind {
    QuestionKind::MultiSelect(MultiSelectQuestion::new(options.iter().copied()))
}

fn multi_or(options: &[&str], placeholder: &str) -> QuestionKind {
    QuestionKind::MultiSelect(
        MultiSelectQuestion::new(options.iter().copied()).with_placeholder(placeholder),
    )
}

fn text(key: &str, heading: &str, ask: &str, kind: TextQuestion) -> Question {
    Question::new(key, ask, QuestionKind::Text(kind)).with_heading(heading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake::{Tally, catalog};

    #[test]
    fn keys_are_unique() {
        let questionnaire = questionnaire();
        assert!(questionnaire.duplicate_keys().is_empty());
        catalog::check(&questionnaire).unwrap();
    }

    #[test]
    fn section_order() {
        let ids: Vec<_> = questionnaire()
            .sections()
            .iter()
            .map(|s| s.id.clone())
            .collect();
        assert_eq!(
            ids,
            [
                "grupo1",
                "grupo2",
                "grupo3",
                "grupo4",
                "grupo5",
                "grupo6",
                "aceites",
                "bebidas",
                "restricciones",
                "antojos",
            ]
        );
    }

    #[test]
    fn every_section_is_tallied() {
        for section in questionnaire().sections() {
            assert!(section.tally.is_some(), "{}", section.id);
        }
        let restrictions = questionnaire();
        let restrictions = restrictions.section("restricciones").unwrap();
        assert_eq!(restrictions.tally, Some(Tally::Restriction));
    }

    #[test]
    fn option_lists_have_no_duplicates() {
        for question in questionnaire().questions() {
            if let QuestionKind::MultiSelect(q) = question.kind() {
                let mut seen = std::collections::HashSet::new();
                for option in &q.options {
                    assert!(seen.insert(option), "{} repeats {option}", question.key());
                }
            }
        }
    }
}
