//! Driving port for the pre-signup decision.
//!
//! Inbound adapters call this port with a decoded [`SignupEvent`] and forward
//! either the returned event or the error to the identity service.

use async_trait::async_trait;

use crate::domain::{PreSignupError, SignupEvent};

/// Domain use-case port deciding whether a signup may proceed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PreSignupCommand: Send + Sync {
    /// Return `event` unchanged when the signup may proceed.
    async fn validate(&self, event: SignupEvent) -> Result<SignupEvent, PreSignupError>;
}
