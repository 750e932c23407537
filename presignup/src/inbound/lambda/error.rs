//! Failure returned to the identity service.
//!
//! The runtime reports an error's display text as the invocation's error
//! message, and Cognito shows that text to the signup client. Every variant
//! is therefore transparent: a duplicate reads `Email already exists`,
//! directory failures keep the upstream message. The `errorType` reported
//! alongside it names the kind of failure.

use lambda_runtime::Diagnostic;

use crate::domain::{PreSignupError, SignupEventError};

/// Reasons an invocation did not return the event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvocationError {
    /// The payload lacks the pool id or candidate email.
    #[error(transparent)]
    MalformedEvent(#[from] SignupEventError),
    /// The validator rejected the signup or its lookup failed.
    #[error(transparent)]
    PreSignup(#[from] PreSignupError),
}

impl InvocationError {
    /// `true` when the signup was refused because the email is taken.
    pub fn is_duplicate_email(&self) -> bool {
        matches!(self, Self::PreSignup(error) if error.is_rejection())
    }

    /// Stable name reported as the invocation's `errorType`.
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::MalformedEvent(_) => "MalformedEventError",
            Self::PreSignup(PreSignupError::DuplicateEmail) => "DuplicateEmailError",
            Self::PreSignup(PreSignupError::Directory(_)) => "UserDirectoryError",
        }
    }
}

impl From<InvocationError> for Diagnostic {
    fn from(error: InvocationError) -> Self {
        Self {
            error_type: error.error_type().to_owned(),
            error_message: error.to_string(),
        }
    }
}
