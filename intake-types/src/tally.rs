use std::fmt;

use serde::Deserialize;

/// The summary bucket a section's multi-select picks are counted towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tally {
    FattyProtein,
    LeanProtein,
    HealthyFat,
    ComplexCarb,
    Vegetable,
    Fruit,
    CookingOil,
    Beverage,
    Craving,
    /// Allergies and intolerances. Not listed in the statistics block.
    Restriction,
}

impl Tally {
    /// Tallies listed in the transcript statistics, in order.
    pub const REPORTED: [Tally; 9] = [
        Tally::FattyProtein,
        Tally::LeanProtein,
        Tally::HealthyFat,
        Tally::ComplexCarb,
        Tally::Vegetable,
        Tally::Fruit,
        Tally::CookingOil,
        Tally::Beverage,
        Tally::Craving,
    ];

    /// Tallies that add up to the total number of foods selected.
    pub const FOODS: [Tally; 6] = [
        Tally::FattyProtein,
        Tally::LeanProtein,
        Tally::HealthyFat,
        Tally::ComplexCarb,
        Tally::Vegetable,
        Tally::Fruit,
    ];

    /// Human-readable label used in summaries.
    pub fn label(self) -> &'static str {
        match self {
            Self::FattyProtein => "Proteínas con grasa",
            Self::LeanProtein => "Proteínas magras",
            Self::HealthyFat => "Grasas saludables",
            Self::ComplexCarb => "Carbohidratos complejos",
            Self::Vegetable => "Vegetales",
            Self::Fruit => "Frutas",
            Self::CookingOil => "Aceites de cocción",
            Self::Beverage => "Bebidas sin calorías",
            Self::Craving => "Antojos identificados",
            Self::Restriction => "Restricciones",
        }
    }

    /// Whether picks in this bucket count as foods.
    pub fn is_food(self) -> bool {
        Self::FOODS.contains(&self)
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foods_exclude_oils_drinks_and_cravings() {
        assert!(Tally::Fruit.is_food());
        assert!(!Tally::CookingOil.is_food());
        assert!(!Tally::Beverage.is_food());
        assert!(!Tally::Craving.is_food());
        assert!(!Tally::Restriction.is_food());
    }

    #[test]
    fn restriction_is_not_reported() {
        assert!(!Tally::REPORTED.contains(&Tally::Restriction));
    }
}
