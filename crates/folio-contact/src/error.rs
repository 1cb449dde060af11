//! Error types for contact form submission.

/// Error from validating or submitting the contact form.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    /// A required field is empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The e-mail address is not well formed.
    #[error("invalid e-mail address: {0}")]
    InvalidEmail(String),

    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    Transport(#[from] ureq::Error),

    /// The relay answered with an error status.
    #[error("relay rejected submission ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Message from the relay's JSON body.
        message: String,
    },
}

impl ContactError {
    /// Text shown to the user in an alert.
    #[must_use]
    pub fn alert_text(&self) -> String {
        match self {
            Self::Rejected { message, .. } => format!("Error: {message}"),
            Self::MissingField(_) | Self::InvalidEmail(_) => format!("Error: {self}"),
            Self::Transport(_) => "Something went wrong. Please try again.".to_owned(),
        }
    }
}
