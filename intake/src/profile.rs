//! Selection counts and the variety/balance profile derived from them.

use std::collections::BTreeMap;
use std::fmt;

use crate::{AnswerBag, IntakeRecord, Questionnaire, Tally};

/// Number of options picked per tally bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionCounts {
    counts: BTreeMap<Tally, usize>,
    has_restrictions: bool,
}

impl SelectionCounts {
    pub fn from_record(record: &IntakeRecord, questionnaire: &Questionnaire) -> Self {
        Self::from_answers(&record.answers, questionnaire)
    }

    /// Count the multi-select picks of every tallied section.
    pub fn from_answers(answers: &AnswerBag, questionnaire: &Questionnaire) -> Self {
        let mut counts = BTreeMap::new();
        for section in questionnaire.sections() {
            let Some(tally) = section.tally else {
                continue;
            };
            let picked: usize = section
                .questions()
                .iter()
                .filter(|question| question.kind().is_countable())
                .map(|question| answers.selection_count(question.key()))
                .sum();
            *counts.entry(tally).or_insert(0) += picked;
        }

        let has_restrictions = counts.get(&Tally::Restriction).is_some_and(|n| *n > 0);

        Self {
            counts,
            has_restrictions,
        }
    }

    /// Picks counted towards `tally`.
    pub fn get(&self, tally: Tally) -> usize {
        self.counts.get(&tally).copied().unwrap_or(0)
    }

    /// Fatty plus lean protein picks.
    pub fn proteins(&self) -> usize {
        self.get(Tally::FattyProtein) + self.get(Tally::LeanProtein)
    }

    /// Sum over the six food groups; oils, drinks and cravings are not foods.
    pub fn total_foods(&self) -> usize {
        Tally::FOODS.iter().map(|tally| self.get(*tally)).sum()
    }

    /// Whether any allergy or intolerance was picked.
    pub fn has_restrictions(&self) -> bool {
        self.has_restrictions
    }

    pub fn variety(&self) -> VarietyLevel {
        VarietyLevel::from_total(self.total_foods())
    }

    pub fn balance(&self) -> BalanceLevel {
        BalanceLevel::from_counts(
            self.proteins(),
            self.get(Tally::ComplexCarb),
            self.get(Tally::Vegetable),
        )
    }
}

/// How varied the food selection is overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VarietyLevel {
    Alta,
    Moderada,
    Basica,
}

impl VarietyLevel {
    pub fn from_total(total_foods: usize) -> Self {
        if total_foods > 50 {
            Self::Alta
        } else if total_foods > 30 {
            Self::Moderada
        } else {
            Self::Basica
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Alta => "ALTA",
            Self::Moderada => "MODERADA",
            Self::Basica => "BÁSICA",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            Self::Alta => {
                "Excelente variedad alimentaria. Tienes una amplia gama de opciones para crear planes nutricionales diversos y balanceados."
            }
            Self::Moderada => {
                "Buena variedad alimentaria. Puedes ampliar gradualmente tu selección para mayor flexibilidad nutricional."
            }
            Self::Basica => {
                "Variedad limitada. Se recomienda explorar gradualmente nuevos alimentos para mejorar la diversidad nutricional."
            }
        }
    }
}

impl fmt::Display for VarietyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the selection spreads across proteins, carbohydrates and vegetables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceLevel {
    Balanceado,
    Moderado,
    Mejorable,
}

impl BalanceLevel {
    pub fn from_counts(proteins: usize, complex_carbs: usize, vegetables: usize) -> Self {
        if proteins > 10 && complex_carbs > 8 && vegetables > 10 {
            Self::Balanceado
        } else if proteins > 5 && complex_carbs > 5 && vegetables > 5 {
            Self::Moderado
        } else {
            Self::Mejorable
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Balanceado => "BALANCEADO",
            Self::Moderado => "MODERADO",
            Self::Mejorable => "MEJORABLE",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            Self::Balanceado => {
                "Tu selección muestra un buen balance entre macronutrientes y micronutrientes."
            }
            Self::Moderado => {
                "Balance nutricional aceptable. Considera ampliar las categorías con menos selecciones."
            }
            Self::Mejorable => {
                "Se recomienda incluir más opciones de diferentes grupos alimentarios para mejor balance."
            }
        }
    }
}

impl fmt::Display for BalanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MultiSelectQuestion, Question, QuestionKind, Section, TextQuestion};

    fn multi(key: &str) -> Question {
        Question::new(
            key,
            "Selecciona:",
            QuestionKind::MultiSelect(MultiSelectQuestion::new(["a", "b", "c"])),
        )
    }

    fn questionnaire() -> Questionnaire {
        Questionnaire::new(
            "Prueba",
            vec![
                Section::new("g1", "G1", vec![multi("g1_a"), multi("g1_b")])
                    .with_tally(Tally::FattyProtein),
                Section::new("g6", "G6", vec![multi("g6")]).with_tally(Tally::Fruit),
                Section::new("oil", "OIL", vec![multi("oil")]).with_tally(Tally::CookingOil),
                Section::new(
                    "restr",
                    "RESTR",
                    vec![
                        multi("alergias"),
                        Question::new("otra", "Otra:", QuestionKind::Text(TextQuestion::line())),
                    ],
                )
                .with_tally(Tally::Restriction),
            ],
        )
    }

    #[test]
    fn sums_per_tally() {
        let answers = AnswerBag::new()
            .with("g1_a", vec!["a", "b"])
            .with("g1_b", vec!["c"])
            .with("g6", vec!["a"])
            .with("oil", vec!["a", "b", "c"]);

        let counts = SelectionCounts::from_answers(&answers, &questionnaire());
        assert_eq!(counts.get(Tally::FattyProtein), 3);
        assert_eq!(counts.get(Tally::Fruit), 1);
        assert_eq!(counts.get(Tally::CookingOil), 3);
        assert_eq!(counts.get(Tally::Vegetable), 0);
        assert_eq!(counts.total_foods(), 4);
        assert!(!counts.has_restrictions());
    }

    #[test]
    fn free_text_does_not_make_a_restriction() {
        let answers = AnswerBag::new().with("otra", "Kiwi");
        let counts = SelectionCounts::from_answers(&answers, &questionnaire());
        assert!(!counts.has_restrictions());

        let answers = AnswerBag::new().with("alergias", vec!["a"]);
        let counts = SelectionCounts::from_answers(&answers, &questionnaire());
        assert!(counts.has_restrictions());
    }

    #[test]
    fn variety_thresholds() {
        assert_eq!(VarietyLevel::from_total(51), VarietyLevel::Alta);
        assert_eq!(VarietyLevel::from_total(50), VarietyLevel::Moderada);
        assert_eq!(VarietyLevel::from_total(31), VarietyLevel::Moderada);
        assert_eq!(VarietyLevel::from_total(30), VarietyLevel::Basica);
        assert_eq!(VarietyLevel::from_total(0), VarietyLevel::Basica);
    }

    #[test]
    fn balance_thresholds() {
        assert_eq!(BalanceLevel::from_counts(11, 9, 11), BalanceLevel::Balanceado);
        assert_eq!(BalanceLevel::from_counts(11, 8, 11), BalanceLevel::Moderado);
        assert_eq!(BalanceLevel::from_counts(6, 6, 6), BalanceLevel::Moderado);
        assert_eq!(BalanceLevel::from_counts(6, 5, 6), BalanceLevel::Mejorable);
    }
}
