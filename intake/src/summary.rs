//! Plain-text transcript of a finished intake.
//!
//! The layout is line-exact so transcripts can be diffed and snapshot-tested.
//! Sections render in questionnaire order, and unanswered questions render
//! their placeholder instead of being skipped.

use chrono::NaiveDateTime;

use crate::{
    AnswerValue, DEFAULT_TEXT_PLACEHOLDER, IntakeRecord, Question, QuestionKind, Questionnaire,
    SelectionCounts, Tally,
};

const SEPARATOR: &str = "=====================================";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Subject label used when none is configured.
pub const DEFAULT_SUBJECT_LABEL: &str = "Cuestionario de Selección Alimentaria Personalizada MUPAI";

/// Line-oriented string builder; every pushed line ends in `\n`.
#[derive(Default)]
struct Transcript {
    text: String,
}

impl Transcript {
    fn line(&mut self, line: impl AsRef<str>) {
        self.text.push_str(line.as_ref());
        self.text.push('\n');
    }

    fn blank(&mut self) {
        self.text.push('\n');
    }

    fn banner(&mut self, title: &str) {
        self.line(SEPARATOR);
        self.line(title);
        self.line(SEPARATOR);
    }
}

/// Render the full transcript for `record`.
///
/// `generated_at` is printed in the header; callers pass the current local
/// time, tests pass a fixed one.
pub fn format_summary(
    record: &IntakeRecord,
    questionnaire: &Questionnaire,
    generated_at: NaiveDateTime,
) -> String {
    let mut out = Transcript::default();

    out.banner(&questionnaire.title);
    out.line(format!("Generado: {}", generated_at.format(TIMESTAMP_FORMAT)));
    if let Some(tagline) = &questionnaire.tagline {
        out.line(tagline);
    }
    out.blank();

    write_identity(&mut out, record);

    for section in questionnaire.sections() {
        out.banner(&section.title);
        let mut first = true;
        for question in section.questions() {
            if !first && !is_inline(question) {
                out.blank();
            }
            write_question(&mut out, question, record.answers.get(question.key()));
            first = false;
        }
        out.blank();
    }

    write_statistics(&mut out, &SelectionCounts::from_record(record, questionnaire));

    if let Some(epilogue) = &questionnaire.epilogue {
        out.banner("ANÁLISIS Y RECOMENDACIONES:");
        for line in epilogue.trim_end().lines() {
            out.line(line);
        }
        out.blank();
    }

    if let Some(footer) = &questionnaire.footer {
        out.line(SEPARATOR);
        for line in footer.trim_end().lines() {
            out.line(line);
        }
        out.line(SEPARATOR);
    }

    out.text
}

/// Subject line for the mailed transcript: `<label> - <name> (<date>)`.
pub fn subject_line(label: &str, record: &IntakeRecord) -> String {
    format!(
        "{label} - {} ({})",
        or_unspecified(record.name.as_deref()),
        record.evaluation_date.format(DATE_FORMAT)
    )
}

fn or_unspecified(value: Option<&str>) -> &str {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(DEFAULT_TEXT_PLACEHOLDER)
}

fn write_identity(out: &mut Transcript, record: &IntakeRecord) {
    out.banner("DATOS DEL CLIENTE:");
    out.line(format!(
        "- Nombre completo: {}",
        or_unspecified(record.name.as_deref())
    ));
    match record.age {
        Some(age) => out.line(format!("- Edad: {age} años")),
        None => out.line(format!("- Edad: {DEFAULT_TEXT_PLACEHOLDER}")),
    }
    out.line(format!(
        "- Sexo: {}",
        record.sex.map_or(DEFAULT_TEXT_PLACEHOLDER, |sex| sex.label())
    ));
    out.line(format!(
        "- Teléfono: {}",
        or_unspecified(record.phone.as_deref())
    ));
    out.line(format!("- Email: {}", or_unspecified(record.email.as_deref())));
    out.line(format!(
        "- Fecha evaluación: {}",
        record.evaluation_date.format(DATE_FORMAT)
    ));
    out.blank();
}

fn is_inline(question: &Question) -> bool {
    matches!(question.kind(), QuestionKind::Text(text) if text.inline)
}

fn write_question(out: &mut Transcript, question: &Question, answer: Option<&AnswerValue>) {
    let rendered = render_answer(question, answer);

    match question.heading() {
        Some(heading) if is_inline(question) => out.line(format!("{heading} {rendered}")),
        Some(heading) => {
            out.line(heading);
            out.line(rendered);
        }
        None => out.line(rendered),
    }
}

fn render_answer(question: &Question, answer: Option<&AnswerValue>) -> String {
    match answer {
        Some(value) if !value.is_blank() => match value {
            AnswerValue::Selections(picked) => picked.join(", "),
            AnswerValue::Choice(choice) => choice.clone(),
            AnswerValue::Text(text) => text.trim().to_string(),
            AnswerValue::Bool(true) => "Sí".to_string(),
            AnswerValue::Bool(false) => "No".to_string(),
        },
        _ => question.placeholder().to_string(),
    }
}

fn write_statistics(out: &mut Transcript, counts: &SelectionCounts) {
    out.banner("RESUMEN ESTADÍSTICO DE SELECCIONES:");
    for tally in Tally::REPORTED {
        out.line(format!(
            "- Total {}: {} opciones",
            tally.label(),
            counts.get(tally)
        ));
    }
    out.blank();
    out.line(format!(
        "TOTAL ALIMENTOS SELECCIONADOS: {}",
        counts.total_foods()
    ));
    out.blank();
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{Age, AnswerBag, MultiSelectQuestion, PersonalInfo, Section, Sex, TextQuestion};

    fn record() -> IntakeRecord {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        IntakeRecord::new(date)
    }

    #[test]
    fn subject_uses_name_and_date() {
        let mut record = record();
        record.set_identity(&PersonalInfo::new(
            "Ana López",
            "8661234567",
            "ana@example.com",
            Age::new(33).unwrap(),
            Sex::Female,
            true,
        ));
        assert_eq!(
            subject_line(DEFAULT_SUBJECT_LABEL, &record),
            "Cuestionario de Selección Alimentaria Personalizada MUPAI - Ana López (2025-03-14)"
        );
    }

    #[test]
    fn subject_without_name() {
        assert_eq!(
            subject_line("Etiqueta", &record()),
            "Etiqueta - No especificado (2025-03-14)"
        );
    }

    #[test]
    fn inline_text_attaches_to_previous_question() {
        let questionnaire = Questionnaire::new(
            "T",
            vec![Section::new(
                "s",
                "ALERGIAS",
                vec![
                    Question::new(
                        "alergias",
                        "¿Alergias?",
                        QuestionKind::MultiSelect(
                            MultiSelectQuestion::new(["Nuez", "Mariscos"]).with_placeholder("Ninguna"),
                        ),
                    )
                    .with_heading("Alergias alimentarias:"),
                    Question::new("otra", "¿Otra?", QuestionKind::Text(TextQuestion::line().inline()))
                        .with_heading("Otra alergia especificada:"),
                ],
            )],
        );
        let mut record = record();
        record.answers = AnswerBag::new().with("otra", "  Kiwi ");

        let at = NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let text = format_summary(&record, &questionnaire, at);

        assert!(text.contains(
            "ALERGIAS\n=====================================\nAlergias alimentarias:\nNinguna\nOtra alergia especificada: Kiwi\n\n"
        ));
        assert!(text.contains("Generado: 2025-03-14 09:30:00\n"));
        assert!(text.contains("- Edad: No especificado\n"));
    }
}
