//! `folio contact` command implementation.

use std::path::Path;

use clap::Args;
use folio_config::Config;
use folio_contact::{ContactClient, ContactForm, FormRelay};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the contact command.
#[derive(Args)]
pub(crate) struct ContactArgs {
    /// Sender name.
    #[arg(long)]
    name: String,

    /// Sender e-mail address.
    #[arg(long)]
    email: String,

    /// Message body.
    #[arg(long)]
    message: String,

    /// Subject line.
    #[arg(long)]
    subject: Option<String>,

    /// Relay access key (overrides config).
    #[arg(long, env = "FOLIO_ACCESS_KEY", hide_env_values = true)]
    access_key: Option<String>,
}

impl ContactArgs {
    fn form(&self) -> ContactForm {
        let form = ContactForm::new(&self.name, &self.email, &self.message);
        match &self.subject {
            Some(subject) => form.with_subject(subject),
            None => form,
        }
    }

    /// Execute the contact command.
    ///
    /// # Errors
    ///
    /// Returns an error if the relay is not configured, the form is invalid
    /// or the relay rejects the submission.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let output = Output::new();

        let mut config = Config::load(config_path, None)?;
        if let Some(key) = &self.access_key {
            config.contact.access_key = Some(key.clone());
        }
        let contact = config.require_contact()?;
        let access_key = contact.access_key.as_deref().unwrap_or_default();

        let form = self.form();
        form.validate()?;

        let client = ContactClient::new(
            &contact.endpoint,
            access_key,
            config.content_resolved.timeout,
        );
        output.info(&format!("Sending message to {}", contact.endpoint));
        let reply = client.submit(&form)?;

        if reply.message.is_empty() {
            output.success("Message Sent!");
        } else {
            output.success(&format!("Message Sent! {}", reply.message));
        }
        Ok(())
    }
}
