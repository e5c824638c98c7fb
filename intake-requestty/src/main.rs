use anyhow::Context;
use intake::{AccessGate, Config, Dispatcher, IntakeSession, SmtpMailer};
use intake_requestty::{RequesttyWizard, WizardError};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load().context("loading configuration")?;
    let questionnaire = config
        .load_catalog()?
        .unwrap_or_else(mupai_catalog::questionnaire);

    let mailer = SmtpMailer::new(&config.smtp).context("configuring SMTP transport")?;
    let dispatcher = Dispatcher::new(mailer, config.mail_from.clone(), config.mail_to.clone())
        .with_subject_label(config.subject_label.clone());

    let mut session = IntakeSession::new(AccessGate::new(config.access_password.clone()));
    match RequesttyWizard::new(&questionnaire, &dispatcher).run(&mut session) {
        Ok(()) => {}
        Err(WizardError::Cancelled) => println!("\nHasta pronto."),
        Err(e) => return Err(e.into()),
    }
    println!("Gracias por completar el cuestionario.");
    Ok(())
}
