//! Pre-signup email uniqueness check.
//!
//! One lookup, two outcomes: the event passes through untouched when no
//! account holds the candidate email, otherwise the signup is rejected.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{ListUsersQuery, PreSignupCommand, UserDirectory, UserDirectoryError};
use crate::domain::{SignupEvent, UserFilter};

/// Message the identity service shows when the email is taken.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email already exists";

/// Result limit for the existence lookup.
pub const EXISTENCE_PROBE_LIMIT: u8 = 1;

/// Why a signup was not allowed to proceed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreSignupError {
    /// An account already uses the candidate email.
    #[error("{}", DUPLICATE_EMAIL_MESSAGE)]
    DuplicateEmail,
    /// The directory lookup itself failed; the upstream error is kept as-is.
    #[error(transparent)]
    Directory(#[from] UserDirectoryError),
}

impl PreSignupError {
    /// `true` for a deliberate rejection, `false` for an infrastructure failure.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::DuplicateEmail)
    }
}

/// Validator implementing [`PreSignupCommand`] over an injected directory.
#[derive(Clone)]
pub struct PreSignupValidator<D> {
    directory: Arc<D>,
}

impl<D> PreSignupValidator<D> {
    /// Create a validator that queries `directory`.
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }
}

impl<D> PreSignupValidator<D>
where
    D: UserDirectory,
{
    fn existence_query(event: &SignupEvent) -> ListUsersQuery {
        ListUsersQuery {
            user_pool_id: event.user_pool_id().clone(),
            filter: UserFilter::email_equals(event.email()),
            limit: EXISTENCE_PROBE_LIMIT,
        }
    }
}

#[async_trait]
impl<D> PreSignupCommand for PreSignupValidator<D>
where
    D: UserDirectory,
{
    async fn validate(&self, event: SignupEvent) -> Result<SignupEvent, PreSignupError> {
        let query = Self::existence_query(&event);
        let matches = self.directory.list_users(&query).await?;
        if matches.is_empty() {
            Ok(event)
        } else {
            Err(PreSignupError::DuplicateEmail)
        }
    }
}

#[cfg(test)]
#[path = "pre_signup_service_tests.rs"]
mod tests;
