//! Form relay client.

use std::time::Duration;

use rand::RngExt;
use serde::Deserialize;
use tracing::{error, info};
use ureq::Agent;

use crate::error::ContactError;
use crate::form::ContactForm;

/// JSON reply from the relay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RelayReply {
    pub success: bool,
    pub message: String,
}

/// Something that accepts a contact form submission.
pub trait FormRelay {
    /// Submit the form.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError`] if the form is invalid, the request fails or
    /// the relay rejects it.
    fn submit(&self, form: &ContactForm) -> Result<RelayReply, ContactError>;
}

/// HTTP client for the form relay.
pub struct ContactClient {
    agent: Agent,
    endpoint: String,
    access_key: String,
}

impl ContactClient {
    /// Create a client posting to `endpoint` with `access_key`.
    #[must_use]
    pub fn new(endpoint: &str, access_key: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            endpoint: endpoint.to_owned(),
            access_key: access_key.to_owned(),
        }
    }
}

/// Encode fields as a `multipart/form-data` body.
fn multipart_body(fields: &[(String, String)], boundary: &str) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}

impl FormRelay for ContactClient {
    fn submit(&self, form: &ContactForm) -> Result<RelayReply, ContactError> {
        form.validate()?;

        let boundary = format!("----FolioFormBoundary{:016x}", rand::rng().random::<u64>());
        let body = multipart_body(&form.fields(&self.access_key), &boundary);

        info!(endpoint = %self.endpoint, "Submitting contact form");

        let response = self
            .agent
            .post(&self.endpoint)
            .header(
                "Content-Type",
                &format!("multipart/form-data; boundary={boundary}"),
            )
            .header("Accept", "application/json")
            .send(&body[..])?;

        let status = response.status().as_u16();
        let reply: RelayReply = response.into_body().read_json()?;

        if status >= 400 {
            error!(status, message = %reply.message, "Form relay rejected submission");
            return Err(ContactError::Rejected {
                status,
                message: reply.message,
            });
        }

        info!("Contact form submitted");
        Ok(reply)
    }
}
