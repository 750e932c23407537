//! Pre-signup trigger handler.
//!
//! Decodes the raw trigger payload, runs the [`PreSignupCommand`], and hands
//! the untouched payload back to Cognito when the signup may proceed.

use std::sync::Arc;

use lambda_runtime::LambdaEvent;
use serde_json::Value;
use tracing::{error, info, instrument, warn};

use super::InvocationError;
use crate::domain::ports::PreSignupCommand;
use crate::domain::{PreSignupError, SignupEvent};

/// Lambda handler wrapping a pre-signup command.
pub struct PreSignupHandler<C> {
    command: Arc<C>,
}

impl<C> Clone for PreSignupHandler<C> {
    fn clone(&self) -> Self {
        Self {
            command: Arc::clone(&self.command),
        }
    }
}

impl<C> PreSignupHandler<C>
where
    C: PreSignupCommand,
{
    /// Create a handler delegating to `command`.
    pub fn new(command: Arc<C>) -> Self {
        Self { command }
    }

    /// Handle one invocation.
    ///
    /// The execution context only contributes the request id to the span.
    #[instrument(skip_all, fields(request_id = %event.context.request_id))]
    pub async fn handle(&self, event: LambdaEvent<Value>) -> Result<Value, InvocationError> {
        let (payload, _context) = event.into_parts();
        let signup = SignupEvent::from_payload(payload).inspect_err(|err| {
            warn!(error = %err, "signup event could not be decoded");
        })?;
        let user_pool_id = signup.user_pool_id().clone();

        match self.command.validate(signup).await {
            Ok(accepted) => {
                info!(%user_pool_id, "signup allowed");
                Ok(accepted.into_payload())
            }
            Err(PreSignupError::DuplicateEmail) => {
                info!(%user_pool_id, "signup rejected: email already registered");
                Err(PreSignupError::DuplicateEmail.into())
            }
            Err(err) => {
                error!(%user_pool_id, error = %err, "user directory lookup failed");
                Err(err.into())
            }
        }
    }
}
