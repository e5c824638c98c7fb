//! The profile shown on the wizard's final screen.

use intake::{
    AnswerValue, IntakeRecord, Question, QuestionKind, Questionnaire, SelectionCounts, Tally,
};

/// Render the end-of-wizard profile as plain text.
pub fn render_profile(record: &IntakeRecord, questionnaire: &Questionnaire) -> String {
    let counts = SelectionCounts::from_record(record, questionnaire);
    let mut lines: Vec<String> = Vec::new();

    lines.push("Tu Perfil de Selección Alimentaria Personalizada".into());
    lines.push(String::new());

    lines.push("Perfil personal".into());
    lines.push(format!(
        "• Nombre: {}",
        record.name.as_deref().unwrap_or("No especificado")
    ));
    if let Some(age) = record.age {
        lines.push(format!("• Edad: {age} años"));
    }
    if let Some(sex) = record.sex {
        lines.push(format!("• Sexo: {sex}"));
    }
    lines.push(String::new());

    lines.push("Selecciones".into());
    for tally in Tally::REPORTED {
        lines.push(format!("• {}: {} opciones", tally.label(), counts.get(tally)));
    }
    lines.push(format!(
        "• Restricciones: {}",
        if counts.has_restrictions() { "Sí" } else { "No" }
    ));
    lines.push(String::new());

    let restrictions = restriction_lines(record, questionnaire);
    if !restrictions.is_empty() {
        lines.push("Restricciones importantes".into());
        lines.extend(restrictions);
        lines.push(String::new());
    }

    let variety = counts.variety();
    lines.push(format!("Variedad alimentaria: {variety}"));
    lines.push(variety.recommendation().into());
    lines.push(format!(
        "Total de alimentos seleccionados: {}",
        counts.total_foods()
    ));
    lines.push(String::new());

    let balance = counts.balance();
    lines.push(format!("Balance nutricional: {balance}"));
    lines.push(balance.recommendation().into());

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn restriction_lines(record: &IntakeRecord, questionnaire: &Questionnaire) -> Vec<String> {
    let answers = &record.answers;
    questionnaire
        .sections()
        .iter()
        .filter(|section| section.tally == Some(Tally::Restriction))
        .flat_map(|section| section.questions())
        .filter_map(|question| {
            let key = question.key();
            let rendered = match question.kind() {
                QuestionKind::MultiSelect(_) => answers
                    .get_selections(key)
                    .ok()
                    .filter(|picked| !picked.is_empty())?
                    .join(", "),
                QuestionKind::Text(_) => answers
                    .get_text(key)
                    .ok()
                    .map(str::trim)
                    .filter(|text| !text.is_empty())?
                    .to_string(),
                QuestionKind::SingleSelect(_) => {
                    answers.get(key).and_then(AnswerValue::as_choice)?.to_string()
                }
                QuestionKind::Confirm(_) => return None,
            };
            Some(format!("• {}: {rendered}", label(question)))
        })
        .collect()
}

fn label(question: &Question) -> &str {
    question
        .heading()
        .unwrap_or(question.ask())
        .trim_end_matches(':')
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use intake::{Age, AnswerBag, PersonalInfo, Sex};
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(answers: AnswerBag) -> IntakeRecord {
        let mut record = IntakeRecord::new(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
        record.set_identity(&PersonalInfo::new(
            "Luis Ángel Soto",
            "8665550101",
            "luis@example.com",
            Age::new(52).unwrap(),
            Sex::Male,
            true,
        ));
        record.answers = answers;
        record
    }

    #[test]
    fn profile_without_restrictions() {
        let questionnaire = mupai_catalog::questionnaire();
        let record = record(
            AnswerBag::new()
                .with("grupo5_vegetales", vec!["Apio", "Nopal"])
                .with("antojos_dulces", vec!["Churros"]),
        );

        let expected = "\
Tu Perfil de Selección Alimentaria Personalizada

Perfil personal
• Nombre: Luis Ángel Soto
• Edad: 52 años
• Sexo: Hombre

Selecciones
• Proteínas con grasa: 0 opciones
• Proteínas magras: 0 opciones
• Grasas saludables: 0 opciones
• Carbohidratos complejos: 0 opciones
• Vegetales: 2 opciones
• Frutas: 0 opciones
• Aceites de cocción: 0 opciones
• Bebidas sin calorías: 0 opciones
• Antojos identificados: 1 opciones
• Restricciones: No

Variedad alimentaria: BÁSICA
Variedad limitada. Se recomienda explorar gradualmente nuevos alimentos para mejorar la diversidad nutricional.
Total de alimentos seleccionados: 2

Balance nutricional: MEJORABLE
Se recomienda incluir más opciones de diferentes grupos alimentarios para mejor balance.
";
        assert_eq!(render_profile(&record, &questionnaire), expected);
    }

    #[test]
    fn restrictions_are_listed_by_heading() {
        let questionnaire = mupai_catalog::questionnaire();
        let record = record(
            AnswerBag::new()
                .with("alergias_alimentarias", vec!["Mariscos", "Soya"])
                .with("otra_alergia", "Polen")
                .with("otra_intolerancia", "  "),
        );

        let text = render_profile(&record, &questionnaire);
        assert!(text.contains("• Restricciones: Sí\n"));
        assert!(text.contains(
            "Restricciones importantes\n\
             • ❗ Alergias alimentarias: Mariscos, Soya\n\
             • Otra alergia especificada: Polen\n\n"
        ));
        assert!(!text.contains("Otra intolerancia"));
    }
}
