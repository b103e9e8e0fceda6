use std::fmt::Display;

use tracing::Span;

/// A broken internal-consistency invariant
///
/// Raised for setup mistakes (duplicate registration, a resource that
///  was never configured being accessed, ...). These are not expected at
///  runtime and are never retried: a test that hits one is wired wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invariant violated on {resource} [{key}]: {message}")]
pub struct InvariantViolation {
    /// name of the resource whose invariant broke
    pub resource: String,
    /// the identifier the failing operation was about
    pub key: String,
    pub message: String,
}

/// Assertion facility bound to a resource's identity and span
#[derive(Debug, Clone, Copy)]
pub struct Require<'a> {
    resource: &'a str,
    span: &'a Span,
}

impl<'a> Require<'a> {
    pub(crate) fn new(resource: &'a str, span: &'a Span) -> Self {
        Self { resource, span }
    }

    /// Fail with `message` unless `condition` holds
    pub fn that(
        &self,
        condition: bool,
        key: impl Display,
        message: impl Into<String>,
    ) -> Result<(), InvariantViolation> {
        if condition {
            Ok(())
        } else {
            Err(self.fail(key, message))
        }
    }

    /// Unwrap `value`, failing with `message` if it is absent
    pub fn present<T>(
        &self,
        value: Option<T>,
        key: impl Display,
        message: impl Into<String>,
    ) -> Result<T, InvariantViolation> {
        value.ok_or_else(|| self.fail(key, message))
    }

    /// Build (and log) a violation for `key`
    pub fn fail(&self, key: impl Display, message: impl Into<String>) -> InvariantViolation {
        let violation = InvariantViolation {
            resource: self.resource.to_string(),
            key: key.to_string(),
            message: message.into(),
        };
        self.span.in_scope(|| {
            tracing::error!(key = %violation.key, "{}", violation.message);
        });
        violation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_that_passes() {
        let span = Span::none();
        let require = Require::new("net", &span);
        assert!(require.that(true, "k", "unused").is_ok());
    }

    #[test]
    fn test_that_fails_with_attribution() {
        let span = Span::none();
        let require = Require::new("net", &span);
        let err = require
            .that(false, "alice", "user alice must not already exist")
            .unwrap_err();
        assert_eq!(
            err,
            InvariantViolation {
                resource: "net".to_string(),
                key: "alice".to_string(),
                message: "user alice must not already exist".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "invariant violated on net [alice]: user alice must not already exist"
        );
    }

    #[test]
    fn test_present() {
        let span = Span::none();
        let require = Require::new("net", &span);
        assert_eq!(require.present(Some(3), "k", "missing").unwrap(), 3);
        assert!(require.present::<u8>(None, "k", "missing").is_err());
    }
}
