//! Lambda runtime adapter for the Cognito pre-signup trigger.

mod error;
mod handler;

use lambda_runtime::{LambdaEvent, service_fn};
use serde_json::Value;

use crate::domain::ports::PreSignupCommand;

pub use error::InvocationError;
pub use handler::PreSignupHandler;

/// Poll the Lambda runtime API and dispatch every invocation to `handler`.
///
/// Failures are reported with the `errorType` from
/// [`InvocationError::error_type`].
///
/// Returns only when the runtime client fails.
pub async fn serve<C>(handler: PreSignupHandler<C>) -> Result<(), lambda_runtime::Error>
where
    C: PreSignupCommand + 'static,
{
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let handler = handler.clone();
        async move { handler.handle(event).await }
    }))
    .await
}
