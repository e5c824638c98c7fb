//! Structural checks for the identity fields.
//!
//! All three validators are pure. They never touch the session and can be
//! called from any frontend for live feedback.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

const PHONE_DIGITS: usize = 10;
const MIN_NAME_WORDS: usize = 2;
const MIN_WORD_CHARS: usize = 2;

/// The personal data field a validation error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    /// The privacy policy and disclaimer checkbox.
    Consent,
}

impl Field {
    /// Label shown next to the error message.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Nombre",
            Self::Phone => "Teléfono",
            Self::Email => "Email",
            Self::Consent => "Consentimiento",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    EmptyInput,
    TooFewWords,
    WordTooShort,
    InvalidCharacters,
    WrongLength,
    InvalidFormat,
    NotAccepted,
}

/// A rejected identity field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {}", self.message())]
pub struct ValidationError {
    pub field: Field,
    pub reason: Reason,
}

impl ValidationError {
    pub fn new(field: Field, reason: Reason) -> Self {
        Self { field, reason }
    }

    /// The user-facing explanation for this failure.
    pub fn message(&self) -> &'static str {
        match (self.field, self.reason) {
            (Field::Name, Reason::EmptyInput) => "El nombre es obligatorio",
            (Field::Phone, Reason::EmptyInput) => "El teléfono es obligatorio",
            (Field::Email, Reason::EmptyInput) => "El email es obligatorio",
            (_, Reason::TooFewWords) => {
                "El nombre debe contener al menos dos palabras (nombre y apellido)"
            }
            (_, Reason::WordTooShort) => "Cada palabra del nombre debe tener al menos 2 caracteres",
            (_, Reason::InvalidCharacters) => "El nombre solo puede contener letras y espacios",
            (_, Reason::WrongLength) => "El teléfono debe tener exactamente 10 dígitos",
            (_, Reason::InvalidFormat) => {
                "El email debe tener un formato válido (ejemplo: usuario@dominio.com)"
            }
            (_, Reason::NotAccepted) => {
                "Debes aceptar la política de privacidad y el descargo de responsabilidad"
            }
        }
    }
}

/// Letters allowed in a name word: basic Latin plus the Spanish accented set.
fn is_name_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || "áéíóúÁÉÍÓÚüÜñÑ".contains(c)
}

/// Validates a full name: at least two words, each two or more letters long.
pub fn validate_name(raw: &str) -> Result<(), ValidationError> {
    let fail = |reason| Err(ValidationError::new(Field::Name, reason));

    if raw.trim().is_empty() {
        return fail(Reason::EmptyInput);
    }

    let words: Vec<&str> = raw.split_whitespace().collect();
    if words.len() < MIN_NAME_WORDS {
        return fail(Reason::TooFewWords);
    }

    for word in words {
        if word.chars().count() < MIN_WORD_CHARS {
            return fail(Reason::WordTooShort);
        }
        if !word.chars().all(is_name_letter) {
            return fail(Reason::InvalidCharacters);
        }
    }

    Ok(())
}

/// Validates a phone number: exactly ten digits once formatting is stripped.
pub fn validate_phone(raw: &str) -> Result<(), ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::new(Field::Phone, Reason::EmptyInput));
    }

    let digits = raw.chars().filter(char::is_ascii_digit).count();
    if digits != PHONE_DIGITS {
        return Err(ValidationError::new(Field::Phone, Reason::WrongLength));
    }

    Ok(())
}

/// Validates an email address against the `local@domain.tld` shape.
pub fn validate_email(raw: &str) -> Result<(), ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(Field::Email, Reason::EmptyInput));
    }

    if !EMAIL.is_match(trimmed) {
        return Err(ValidationError::new(Field::Email, Reason::InvalidFormat));
    }

    Ok(())
}

/// Runs all three validators and returns every failure, in field order.
pub fn validate_identity(name: &str, phone: &str, email: &str) -> Vec<ValidationError> {
    [validate_name(name), validate_phone(phone), validate_email(email)]
        .into_iter()
        .filter_map(Result::err)
        .collect()
}

/// Requires the consent checkbox to be ticked.
pub fn validate_consent(consent: bool) -> Result<(), ValidationError> {
    if consent {
        Ok(())
    } else {
        Err(ValidationError::new(Field::Consent, Reason::NotAccepted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_reason(raw: &str) -> Option<Reason> {
        validate_name(raw).err().map(|e| e.reason)
    }

    #[test]
    fn accepts_accented_two_word_name() {
        assert!(validate_name("Juan Pérez").is_ok());
        assert!(validate_name("  María   Núñez Güemes ").is_ok());
    }

    #[test]
    fn empty_name() {
        assert_eq!(name_reason(""), Some(Reason::EmptyInput));
        assert_eq!(name_reason(" \t "), Some(Reason::EmptyInput));
    }

    #[test]
    fn single_token_is_too_few_words() {
        for raw in ["Juan", "  Pérez  ", "X", "Juan3"] {
            assert_eq!(name_reason(raw), Some(Reason::TooFewWords), "{raw:?}");
        }
    }

    #[test]
    fn short_word() {
        assert_eq!(name_reason("J Pérez"), Some(Reason::WordTooShort));
    }

    #[test]
    fn digits_and_symbols_are_rejected() {
        assert_eq!(name_reason("Juan P3rez"), Some(Reason::InvalidCharacters));
        assert_eq!(name_reason("Juan O'Hara"), Some(Reason::InvalidCharacters));
        assert_eq!(name_reason("Juan Pérez-Soto"), Some(Reason::InvalidCharacters));
        assert_eq!(name_reason("Zoë Smith"), Some(Reason::InvalidCharacters));
    }

    #[test]
    fn accented_letters_count_as_one_character() {
        assert!(validate_name("Ñu Óscar").is_ok());
    }

    #[test]
    fn phone_tolerates_formatting() {
        assert!(validate_phone("866 123 4567").is_ok());
        assert!(validate_phone("(866) 123-4567").is_ok());
        assert!(validate_phone("8661234567").is_ok());
    }

    #[test]
    fn phone_wrong_length() {
        for raw in ["12345", "86612345678", "abc", "+52 866 123 4567"] {
            let err = validate_phone(raw).unwrap_err();
            assert_eq!(err.reason, Reason::WrongLength, "{raw:?}");
        }
    }

    #[test]
    fn phone_empty() {
        let err = validate_phone("  ").unwrap_err();
        assert_eq!(err.reason, Reason::EmptyInput);
        assert_eq!(err.to_string(), "Teléfono: El teléfono es obligatorio");
    }

    #[test]
    fn email_shapes() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email(" first.last+tag@mail.example.mx ").is_ok());

        for raw in ["user@.com", "not-an-email", "user@example.c", "user@@example.com", "@x.com"]
        {
            let err = validate_email(raw).unwrap_err();
            assert_eq!(err.reason, Reason::InvalidFormat, "{raw:?}");
        }
    }

    #[test]
    fn email_empty() {
        assert_eq!(validate_email("").unwrap_err().reason, Reason::EmptyInput);
    }

    #[test]
    fn consent_must_be_given() {
        assert!(validate_consent(true).is_ok());
        assert_eq!(
            validate_consent(false).unwrap_err().to_string(),
            "Consentimiento: Debes aceptar la política de privacidad y el descargo de responsabilidad"
        );
    }

    #[test]
    fn identity_reports_every_failure() {
        let errors = validate_identity("", "12345", "user@example.com");
        assert_eq!(
            errors,
            vec![
                ValidationError::new(Field::Name, Reason::EmptyInput),
                ValidationError::new(Field::Phone, Reason::WrongLength),
            ]
        );
    }
}
