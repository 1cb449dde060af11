//! Contact form model and submission to a third-party form relay.
//!
//! The relay accepts a `multipart/form-data` POST containing the form fields
//! plus an access key, and answers with a JSON body carrying a `message`.
//! [`SubmitButton`] models the submit button's visible state across a
//! submission.

mod button;
mod client;
mod error;
mod form;

pub use button::{ButtonState, SENT_RESET, SubmitButton};
pub use client::{ContactClient, FormRelay, RelayReply};
pub use error::ContactError;
pub use form::ContactForm;
