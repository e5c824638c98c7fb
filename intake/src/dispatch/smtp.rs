use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::debug;

use super::{MailError, Mailer, OutgoingMessage};
use crate::SmtpSettings;

/// Delivers over an authenticated STARTTLS relay.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings) -> Result<Self, MailError> {
        let credentials = Credentials::new(
            settings.username.clone(),
            settings.password.expose().to_string(),
        );
        let transport = SmtpTransport::starttls_relay(&settings.host)?
            .port(settings.port)
            .credentials(credentials)
            .build();

        debug!(host = %settings.host, port = settings.port, "smtp relay configured");
        Ok(Self { transport })
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, message: &OutgoingMessage) -> Result<(), MailError> {
        let email = Message::builder()
            .from(message.from.clone())
            .to(message.to.clone())
            .subject(message.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())?;

        let response = self.transport.send(&email)?;
        debug!(code = %response.code(), "smtp accepted message");
        Ok(())
    }
}
