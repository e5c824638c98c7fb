//! Step-by-step terminal wizard driving an [`IntakeSession`].

use intake::{
    Age, AnswerBag, AnswerValue, DispatchOutcome, Dispatcher, IntakeSession, Mailer, PersonalInfo,
    Question, QuestionKind, Questionnaire, Section, SessionError, Sex,
};
use requestty::{Answer, ErrorKind};
use thiserror::Error;
use tracing::debug;

use crate::render_profile;

#[derive(Debug, Error)]
pub enum WizardError {
    /// User cancelled the wizard (e.g., pressed Ctrl+C).
    #[error("Wizard cancelled by user")]
    Cancelled,

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Unexpected answer type: expected {expected}, got {got}")]
    UnexpectedAnswerType { expected: &'static str, got: String },

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl From<ErrorKind> for WizardError {
    fn from(err: ErrorKind) -> Self {
        match err {
            ErrorKind::Interrupted => Self::Cancelled,
            _ => Self::Prompt(err.to_string()),
        }
    }
}

/// What the user picked on the final screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Send,
    Resend,
    Restart,
    Exit,
}

impl MenuChoice {
    fn label(self) -> &'static str {
        match self {
            Self::Send => "📧 Enviar resumen por email",
            Self::Resend => "📧 Reenviar email",
            Self::Restart => "🔄 Nueva evaluación",
            Self::Exit => "🚪 Salir",
        }
    }

    /// Menu entries; sending is only offered until it succeeds once.
    fn available(already_sent: bool) -> Vec<Self> {
        let mut choices = Vec::with_capacity(4);
        if !already_sent {
            choices.push(Self::Send);
        }
        choices.extend([Self::Resend, Self::Restart, Self::Exit]);
        choices
    }
}

/// Requestty wizard for one questionnaire and one mail route.
pub struct RequesttyWizard<'a, M> {
    questionnaire: &'a Questionnaire,
    dispatcher: &'a Dispatcher<M>,
}

impl<'a, M: Mailer> RequesttyWizard<'a, M> {
    pub fn new(questionnaire: &'a Questionnaire, dispatcher: &'a Dispatcher<M>) -> Self {
        Self {
            questionnaire,
            dispatcher,
        }
    }

    /// Run evaluations until the user exits.
    pub fn run(&self, session: &mut IntakeSession) -> Result<(), WizardError> {
        loop {
            println!();
            println!("=== {} ===", self.questionnaire.title);

            self.unlock(session)?;
            self.ask_personal_info(session)?;

            if let Some(prelude) = &self.questionnaire.prelude {
                println!();
                println!("{prelude}");
            }

            for section in self.questionnaire.sections() {
                let answers = self.ask_section(section)?;
                session.submit_section(answers)?;
            }
            session.finish()?;

            println!();
            println!("{}", render_profile(session.record(), self.questionnaire));

            match self.final_menu(session)? {
                MenuChoice::Restart => {
                    session.reset();
                    continue;
                }
                _ => return Ok(()),
            }
        }
    }

    fn unlock(&self, session: &mut IntakeSession) -> Result<(), WizardError> {
        while !session.is_authenticated() {
            let question = requestty::Question::password("password")
                .message("🔐 Contraseña de acceso")
                .mask('*')
                .build();
            let attempt = expect_string(requestty::prompt_one(question)?)?;

            match session.authenticate(&attempt) {
                Ok(()) => println!("✅ Acceso autorizado."),
                Err(SessionError::AccessDenied) => println!("❌ {}", SessionError::AccessDenied),
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }

    fn ask_personal_info(&self, session: &mut IntakeSession) -> Result<(), WizardError> {
        println!();
        println!("👤 Información Personal");
        println!(
            "📅 Fecha de evaluación: {}",
            session.record().evaluation_date.format("%Y-%m-%d")
        );

        let mut name = String::new();
        let mut phone = String::new();
        let mut email = String::new();

        loop {
            name = ask_line("nombre", "Nombre completo*", &name)?;
            phone = ask_line("telefono", "Teléfono* (10 dígitos)", &phone)?;
            email = ask_line("email", "Email*", &email)?;
            let years = ask_age()?;
            let sex = ask_sex()?;
            let consent = ask_confirm(
                "consentimiento",
                "He leído y acepto la política de privacidad y el descargo de responsabilidad",
                false,
            )?;

            let age = match Age::new(years) {
                Ok(age) => age,
                Err(e) => {
                    println!("⚠️ {e}");
                    continue;
                }
            };

            let info = PersonalInfo::new(&name, &phone, &email, age, sex, consent);
            match session.begin(info) {
                Ok(()) => {
                    println!("✅ Datos registrados correctamente.");
                    return Ok(());
                }
                Err(SessionError::Invalid(errors)) => {
                    println!("⚠️ Por favor corrige los siguientes errores:");
                    for error in errors {
                        println!("  • {error}");
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn ask_section(&self, section: &Section) -> Result<AnswerBag, WizardError> {
        debug!(section = %section.id, "asking section");
        println!();
        println!("── {} ──", section.title);
        if let Some(instructions) = &section.instructions {
            println!("{instructions}");
        }

        let mut answers = AnswerBag::new();
        for question in section.questions() {
            if let Some(value) = ask_question(question)? {
                answers.insert(question.key(), value);
            }
        }
        Ok(answers)
    }

    fn final_menu(&self, session: &mut IntakeSession) -> Result<MenuChoice, WizardError> {
        loop {
            let choices = MenuChoice::available(session.record().is_dispatched());
            let question = requestty::Question::select("menu")
                .message("¿Qué deseas hacer?")
                .choices(choices.iter().map(|c| c.label().to_string()))
                .build();
            let index = expect_index(requestty::prompt_one(question)?)?;
            let Some(choice) = choices.get(index).copied() else {
                continue;
            };

            let result = match choice {
                MenuChoice::Send => session.send_summary(self.dispatcher, self.questionnaire),
                MenuChoice::Resend => session.resend_summary(self.dispatcher, self.questionnaire),
                other => return Ok(other),
            };

            match result {
                Ok(DispatchOutcome::Sent) => println!("✅ Resumen enviado por email."),
                Ok(DispatchOutcome::AlreadySent) => println!(
                    "✅ El resumen ya fue enviado por email. Si requieres reenviarlo, usa 'Reenviar email'."
                ),
                Err(SessionError::Dispatch(e)) => println!("❌ {e}"),
                Err(e) => return Err(e.into()),
            }
        }
    }
}

fn ask_question(question: &Question) -> Result<Option<AnswerValue>, WizardError> {
    let name = question.key().as_str();
    // Text headings are transcript labels that repeat the prompt.
    let prompt = match question.heading() {
        Some(heading) if !matches!(question.kind(), QuestionKind::Text(_)) => {
            format!("{heading} {}", question.ask())
        }
        _ => question.ask().to_string(),
    };

    let value = match question.kind() {
        QuestionKind::MultiSelect(multi) => {
            let q = requestty::Question::multi_select(name)
                .message(prompt)
                .choices_with_default(multi.options.iter().map(|option| (option.clone(), false)))
                .build();
            let indices = expect_indices(requestty::prompt_one(q)?)?;
            AnswerValue::selections(
                indices
                    .into_iter()
                    .filter_map(|i| multi.options.get(i).cloned()),
            )
        }

        QuestionKind::SingleSelect(single) => {
            let mut q = requestty::Question::select(name)
                .message(prompt)
                .choices(single.options.clone());
            if let Some(default) = single.default {
                q = q.default(default);
            }
            let index = expect_index(requestty::prompt_one(q.build())?)?;
            match single.options.get(index) {
                Some(option) => AnswerValue::Choice(option.clone()),
                None => return Ok(None),
            }
        }

        QuestionKind::Text(text) if text.multiline => {
            let q = requestty::Question::editor(name).message(prompt).build();
            AnswerValue::Text(expect_string(requestty::prompt_one(q)?)?)
        }

        QuestionKind::Text(_) => {
            let q = requestty::Question::input(name).message(prompt).build();
            AnswerValue::Text(expect_string(requestty::prompt_one(q)?)?)
        }

        QuestionKind::Confirm(confirm) => {
            AnswerValue::Bool(ask_confirm(name, &prompt, confirm.default)?)
        }
    };

    Ok(Some(value))
}

fn ask_line(name: &str, prompt: &str, previous: &str) -> Result<String, WizardError> {
    let mut q = requestty::Question::input(name).message(prompt);
    if !previous.is_empty() {
        q = q.default(previous.to_string());
    }
    expect_string(requestty::prompt_one(q.build())?)
}

fn ask_age() -> Result<i64, WizardError> {
    let min = i64::from(Age::MIN);
    let max = i64::from(Age::MAX);
    let q = requestty::Question::int("edad")
        .message("Edad (años)*")
        .default(i64::from(Age::DEFAULT))
        .validate(move |years, _| {
            if (min..=max).contains(&years) {
                Ok(())
            } else {
                Err(format!("La edad debe estar entre {min} y {max} años"))
            }
        })
        .build();

    match requestty::prompt_one(q)? {
        Answer::Int(years) => Ok(years),
        other => Err(unexpected("Int", &other)),
    }
}

fn ask_sex() -> Result<Sex, WizardError> {
    let q = requestty::Question::select("sexo")
        .message("Sexo biológico*")
        .choices(Sex::ALL.iter().map(|sex| sex.label().to_string()))
        .build();
    sex_at(expect_index(requestty::prompt_one(q)?)?)
}

fn sex_at(index: usize) -> Result<Sex, WizardError> {
    Sex::ALL
        .get(index)
        .copied()
        .ok_or_else(|| WizardError::UnexpectedAnswerType {
            expected: "Sex option index",
            got: index.to_string(),
        })
}

fn ask_confirm(name: &str, prompt: &str, default: bool) -> Result<bool, WizardError> {
    let q = requestty::Question::confirm(name)
        .message(prompt)
        .default(default)
        .build();
    match requestty::prompt_one(q)? {
        Answer::Bool(b) => Ok(b),
        other => Err(unexpected("Bool", &other)),
    }
}

fn expect_string(answer: Answer) -> Result<String, WizardError> {
    match answer {
        Answer::String(s) => Ok(s),
        other => Err(unexpected("String", &other)),
    }
}

fn expect_index(answer: Answer) -> Result<usize, WizardError> {
    match answer {
        Answer::ListItem(item) => Ok(item.index),
        other => Err(unexpected("ListItem", &other)),
    }
}

fn expect_indices(answer: Answer) -> Result<Vec<usize>, WizardError> {
    match answer {
        Answer::ListItems(items) => Ok(items.into_iter().map(|item| item.index).collect()),
        other => Err(unexpected("ListItems", &other)),
    }
}

fn unexpected(expected: &'static str, got: &Answer) -> WizardError {
    WizardError::UnexpectedAnswerType {
        expected,
        got: format!("{got:?}"),
    }
}
