//! Contact form fields and client-side validity.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ContactError;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Contact form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    /// Additional fields, e.g. a hidden `access_key` input.
    pub extra: Vec<(String, String)>,
}

impl ContactForm {
    /// Create a form with the required fields.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    /// Set the subject line.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Add an extra field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.push((name.into(), value.into()));
        self
    }

    /// Check required fields and e-mail shape.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if !EMAIL_PATTERN.is_match(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        Ok(())
    }

    /// Whether the submit button should be enabled.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Whether a field with this name is present.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.extra.iter().any(|(n, _)| n == name)
    }

    /// All fields in submission order. `access_key` is appended when the
    /// form does not already carry one.
    #[must_use]
    pub fn fields(&self, access_key: &str) -> Vec<(String, String)> {
        let mut fields = vec![
            ("name".to_owned(), self.name.clone()),
            ("email".to_owned(), self.email.clone()),
        ];
        if let Some(subject) = &self.subject {
            fields.push(("subject".to_owned(), subject.clone()));
        }
        fields.push(("message".to_owned(), self.message.clone()));
        fields.extend(self.extra.iter().cloned());
        if !self.has_field("access_key") {
            fields.push(("access_key".to_owned(), access_key.to_owned()));
        }
        fields
    }

    /// Clear every field, as after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validate() {
        assert!(ContactForm::new("Ada", "ada@example.com", "Hi").is_valid());
        assert!(matches!(
            ContactForm::new(" ", "ada@example.com", "Hi").validate(),
            Err(ContactError::MissingField("name"))
        ));
        assert!(matches!(
            ContactForm::new("Ada", "ada", "Hi").validate(),
            Err(ContactError::InvalidEmail(_))
        ));
        assert!(matches!(
            ContactForm::new("Ada", "ada@example.com", "").validate(),
            Err(ContactError::MissingField("message"))
        ));
    }

    #[test]
    fn test_fields_append_access_key() {
        let form = ContactForm::new("Ada", "ada@example.com", "Hi").with_subject("Hello");
        let names: Vec<String> = form.fields("key").into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["name", "email", "subject", "message", "access_key"]);
    }

    #[test]
    fn test_fields_keep_existing_access_key() {
        let form = ContactForm::new("Ada", "ada@example.com", "Hi").with_field("access_key", "own");
        let fields = form.fields("default");
        let keys: Vec<&(String, String)> =
            fields.iter().filter(|(n, _)| n == "access_key").collect();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].1, "own");
    }

    #[test]
    fn test_reset() {
        let mut form = ContactForm::new("Ada", "ada@example.com", "Hi");
        form.reset();
        assert_eq!(form, ContactForm::default());
    }
}
