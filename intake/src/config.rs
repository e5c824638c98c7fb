//! Process-wide settings, read once at startup.
//!
//! Plain values come from the environment. Secrets are read from
//! `/run/secrets/<NAME>` when the file exists and fall back to the variable
//! of the same name.

use std::fmt;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use lettre::message::Mailbox;
use tracing::{debug, info};

use crate::Questionnaire;
use crate::catalog::{self, CatalogError};
use crate::summary::DEFAULT_SUBJECT_LABEL;

const SECRETS_DIR: &str = "/run/secrets";

const ACCESS_PASSWORD: &str = "INTAKE_ACCESS_PASSWORD";
const SMTP_PASSWORD: &str = "INTAKE_SMTP_PASSWORD";
const SMTP_HOST: &str = "INTAKE_SMTP_HOST";
const SMTP_PORT: &str = "INTAKE_SMTP_PORT";
const SMTP_USERNAME: &str = "INTAKE_SMTP_USERNAME";
const MAIL_FROM: &str = "INTAKE_MAIL_FROM";
const MAIL_TO: &str = "INTAKE_MAIL_TO";
const SUBJECT_LABEL: &str = "INTAKE_SUBJECT_LABEL";
const CATALOG: &str = "INTAKE_CATALOG";

const DEFAULT_SMTP_HOST: &str = "smtp.zoho.com";
const DEFAULT_SMTP_PORT: &str = "587";

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("invalid {key}: {message}")]
    Invalid { key: &'static str, message: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// A string that must never show up in logs or debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(\"***\")")
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Outbound mail relay.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: Secret,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Shared password for the wizard's access gate.
    pub access_password: Secret,
    pub smtp: SmtpSettings,
    pub mail_from: Mailbox,
    pub mail_to: Mailbox,
    pub subject_label: String,
    /// TOML questionnaire to use instead of the built-in one.
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(Path::new(SECRETS_DIR), |key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(
        secrets_dir: &Path,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let source = Source { secrets_dir, var };

        let mail_from: Mailbox = source.parse(MAIL_FROM)?;
        let mail_to: Mailbox = source.parse(MAIL_TO)?;
        let username = source
            .optional(SMTP_USERNAME)
            .unwrap_or_else(|| mail_from.email.to_string());

        let smtp = SmtpSettings {
            host: source.or_default(SMTP_HOST, DEFAULT_SMTP_HOST),
            port: source.parse_or_default(SMTP_PORT, DEFAULT_SMTP_PORT)?,
            username,
            password: source.secret(SMTP_PASSWORD)?,
        };

        Ok(Self {
            access_password: source.secret(ACCESS_PASSWORD)?,
            smtp,
            mail_from,
            mail_to,
            subject_label: source.or_default(SUBJECT_LABEL, DEFAULT_SUBJECT_LABEL),
            catalog_path: source.optional(CATALOG).map(PathBuf::from),
        })
    }

    /// Load the configured TOML questionnaire, if one is configured.
    pub fn load_catalog(&self) -> Result<Option<Questionnaire>, ConfigError> {
        match &self.catalog_path {
            Some(path) => Ok(Some(catalog::load_questionnaire(path)?)),
            None => Ok(None),
        }
    }
}

struct Source<'a, F> {
    secrets_dir: &'a Path,
    var: F,
}

impl<F: Fn(&str) -> Option<String>> Source<'_, F> {
    fn optional(&self, key: &str) -> Option<String> {
        (self.var)(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }

    fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.optional(key).ok_or(ConfigError::Missing(key))
    }

    fn or_default(&self, key: &str, default: &str) -> String {
        self.optional(key).unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
    }

    fn parse<T: FromStr>(&self, key: &'static str) -> Result<T, ConfigError>
    where
        T::Err: fmt::Display,
    {
        parse_value(key, &self.required(key)?)
    }

    fn parse_or_default<T: FromStr>(&self, key: &'static str, default: &str) -> Result<T, ConfigError>
    where
        T::Err: fmt::Display,
    {
        parse_value(key, &self.or_default(key, default))
    }

    fn secret(&self, key: &'static str) -> Result<Secret, ConfigError> {
        let path = self.secrets_dir.join(key);
        match read_to_string(&path) {
            Ok(contents) => {
                let contents = contents.trim();
                if contents.is_empty() {
                    return Err(ConfigError::Invalid {
                        key,
                        message: format!("{} is empty", path.display()),
                    });
                }
                debug!("{key} read from {}", path.display());
                Ok(Secret::new(contents))
            }
            Err(e) => {
                debug!("{key} not readable from {}: {e}", path.display());
                self.required(key).map(Secret::from)
            }
        }
    }
}

fn parse_value<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const BASE: &[(&str, &str)] = &[
        ("INTAKE_ACCESS_PASSWORD", "secreto"),
        ("INTAKE_SMTP_PASSWORD", "smtp-pass"),
        ("INTAKE_MAIL_FROM", "admin@example.com"),
        ("INTAKE_MAIL_TO", "Administración <inbox@example.com>"),
    ];

    #[test]
    fn defaults_fill_the_gaps() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::from_lookup(dir.path(), lookup(BASE)).unwrap();

        assert_eq!(config.access_password.expose(), "secreto");
        assert_eq!(config.smtp.host, "smtp.zoho.com");
        assert_eq!(config.smtp.port, 587);
        assert_eq!(config.smtp.username, "admin@example.com");
        assert_eq!(config.mail_to.email.to_string(), "inbox@example.com");
        assert_eq!(config.subject_label, DEFAULT_SUBJECT_LABEL);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn secret_file_wins_over_variable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("INTAKE_ACCESS_PASSWORD"), "desde-archivo\n").unwrap();

        let config = Config::from_lookup(dir.path(), lookup(BASE)).unwrap();
        assert_eq!(config.access_password.expose(), "desde-archivo");
    }

    #[test]
    fn missing_password() {
        let dir = tempfile::tempdir().unwrap();
        let pairs: Vec<_> = BASE
            .iter()
            .copied()
            .filter(|(k, _)| *k != "INTAKE_ACCESS_PASSWORD")
            .collect();

        let err = Config::from_lookup(dir.path(), lookup(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("INTAKE_ACCESS_PASSWORD")));
    }

    #[test]
    fn malformed_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();

        let mut pairs = BASE.to_vec();
        pairs.push(("INTAKE_SMTP_PORT", "veinte"));
        let err = Config::from_lookup(dir.path(), lookup(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "INTAKE_SMTP_PORT", .. }));

        let mut pairs = BASE.to_vec();
        pairs[2] = ("INTAKE_MAIL_FROM", "not-an-address");
        let err = Config::from_lookup(dir.path(), lookup(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "INTAKE_MAIL_FROM", .. }));
    }

    #[test]
    fn secrets_are_redacted() {
        let secret = Secret::new("hunter2");
        assert_eq!(format!("{secret:?}"), "Secret(\"***\")");
    }
}
