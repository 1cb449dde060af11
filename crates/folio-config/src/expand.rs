//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Supports:
/// - `${VAR}` - expands to the value of VAR, errors if unset
/// - `${VAR:-default}` - expands to VAR if set, otherwise uses default
///
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("FOLIO_TEST_VAR_SIMPLE", "hello");
        }
        let result = expand_env("${FOLIO_TEST_VAR_SIMPLE}", "test.field").unwrap();
        assert_eq!(result, "hello");
        unsafe {
            std::env::remove_var("FOLIO_TEST_VAR_SIMPLE");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FOLIO_UNSET_VAR_TEST");
        }
        let result = expand_env("${FOLIO_UNSET_VAR_TEST:-fallback}", "test.field").unwrap();
        assert_eq!(result, "fallback");
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FOLIO_MISSING_VAR_TEST");
        }
        let err = expand_env("${FOLIO_MISSING_VAR_TEST}", "contact.access_key").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("FOLIO_MISSING_VAR_TEST"));
        assert!(err.to_string().contains("contact.access_key"));
    }

    #[test]
    fn test_expand_literal_unchanged() {
        let result = expand_env("https://api.web3forms.com/submit", "test.field").unwrap();
        assert_eq!(result, "https://api.web3forms.com/submit");
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("FOLIO_TEST_HOST", "cdn.example.com");
        }
        let result = expand_env("https://${FOLIO_TEST_HOST}/site", "content.base").unwrap();
        assert_eq!(result, "https://cdn.example.com/site");
        unsafe {
            std::env::remove_var("FOLIO_TEST_HOST");
        }
    }
}
