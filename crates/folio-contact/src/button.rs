//! Submit button state across a submission.

use std::time::Duration;

use crate::client::RelayReply;
use crate::error::ContactError;

/// How long the success label stays before the button resets.
pub const SENT_RESET: Duration = Duration::from_secs(5);

/// Visible state of the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Idle,
    Sending,
    Sent {
        /// Time left before returning to [`ButtonState::Idle`].
        remaining: Duration,
    },
}

/// Submit button driven by form validity and submission results.
#[derive(Debug, Clone, Default)]
pub struct SubmitButton {
    state: ButtonState,
    form_valid: bool,
}

impl SubmitButton {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Record whether the form currently passes client-side validation.
    pub fn set_valid(&mut self, valid: bool) {
        self.form_valid = valid;
    }

    /// Start a submission. Returns `false` if the button is disabled.
    pub fn begin(&mut self) -> bool {
        if self.is_disabled() {
            return false;
        }
        self.state = ButtonState::Sending;
        true
    }

    /// Apply a submission result. Returns alert text on failure.
    pub fn finish(&mut self, result: &Result<RelayReply, ContactError>) -> Option<String> {
        match result {
            Ok(_) => {
                self.state = ButtonState::Sent {
                    remaining: SENT_RESET,
                };
                None
            }
            Err(err) => {
                self.state = ButtonState::Idle;
                Some(err.alert_text())
            }
        }
    }

    /// Advance the success timer.
    pub fn tick(&mut self, elapsed: Duration) {
        if let ButtonState::Sent { remaining } = self.state {
            self.state = match remaining.checked_sub(elapsed) {
                Some(left) if !left.is_zero() => ButtonState::Sent { remaining: left },
                _ => ButtonState::Idle,
            };
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self.state {
            ButtonState::Idle => "Send Message",
            ButtonState::Sending => "Sending...",
            ButtonState::Sent { .. } => "Message Sent!",
        }
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        match self.state {
            ButtonState::Idle => !self.form_valid,
            ButtonState::Sending | ButtonState::Sent { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> SubmitButton {
        let mut button = SubmitButton::new();
        button.set_valid(true);
        button
    }

    #[test]
    fn test_disabled_while_invalid() {
        let mut button = SubmitButton::new();
        assert!(button.is_disabled());
        assert!(!button.begin());
        button.set_valid(true);
        assert!(!button.is_disabled());
        assert_eq!(button.label(), "Send Message");
    }

    #[test]
    fn test_success_resets_after_five_seconds() {
        let mut button = ready();
        assert!(button.begin());
        assert_eq!(button.label(), "Sending...");
        assert!(button.is_disabled());
        assert!(!button.begin());

        let alert = button.finish(&Ok(RelayReply {
            success: true,
            message: "ok".to_owned(),
        }));
        assert!(alert.is_none());
        assert_eq!(button.label(), "Message Sent!");
        assert!(button.is_disabled());

        button.tick(Duration::from_secs(4));
        assert_eq!(button.label(), "Message Sent!");
        button.tick(Duration::from_secs(1));
        assert_eq!(button.state(), ButtonState::Idle);
        assert!(!button.is_disabled());
    }

    #[test]
    fn test_failure_alerts_and_reenables() {
        let mut button = ready();
        button.begin();
        let alert = button.finish(&Err(ContactError::Rejected {
            status: 400,
            message: "Bad key".to_owned(),
        }));
        assert_eq!(alert.as_deref(), Some("Error: Bad key"));
        assert_eq!(button.state(), ButtonState::Idle);
        assert!(!button.is_disabled());
    }
}
