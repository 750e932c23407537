//! Signup event received from the identity service.
//!
//! The hook contract requires the event to be handed back verbatim when the
//! signup may proceed, so [`SignupEvent`] keeps the raw JSON payload and only
//! exposes the two fields the uniqueness check reads.

use std::fmt;

use serde_json::Value;

const USER_POOL_ID_POINTER: &str = "/userPoolId";
const EMAIL_POINTER: &str = "/request/userAttributes/email";

/// Identifier of the user pool the signup targets.
///
/// Not validated: a malformed id is reported by the directory lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserPoolId(String);

impl UserPoolId {
    /// Wrap a pool identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for UserPoolId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserPoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Email address the user is trying to register with, exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateEmail(String);

impl CandidateEmail {
    /// Wrap a candidate email without normalising it.
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }
}

impl AsRef<str> for CandidateEmail {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CandidateEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reasons a payload cannot be read as a signup event.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupEventError {
    /// A required field is absent.
    #[error("signup event is missing `{field}`")]
    MissingField {
        /// JSON pointer of the absent field.
        field: &'static str,
    },
    /// A required field is present but is not a JSON string.
    #[error("signup event field `{field}` must be a string")]
    NotAString {
        /// JSON pointer of the offending field.
        field: &'static str,
    },
}

/// A pre-signup event with its candidate email extracted.
///
/// # Examples
/// ```
/// use presignup::domain::SignupEvent;
/// use serde_json::json;
///
/// let payload = json!({
///     "userPoolId": "pool1",
///     "request": { "userAttributes": { "email": "a@x.com" } }
/// });
/// let event = SignupEvent::from_payload(payload.clone()).unwrap();
/// assert_eq!(event.email().as_ref(), "a@x.com");
/// assert_eq!(event.into_payload(), payload);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SignupEvent {
    user_pool_id: UserPoolId,
    email: CandidateEmail,
    payload: Value,
}

impl SignupEvent {
    /// Read the pool id and candidate email out of a raw event payload.
    pub fn from_payload(payload: Value) -> Result<Self, SignupEventError> {
        let user_pool_id = UserPoolId::new(required_str(&payload, USER_POOL_ID_POINTER)?);
        let email = CandidateEmail::new(required_str(&payload, EMAIL_POINTER)?);
        Ok(Self {
            user_pool_id,
            email,
            payload,
        })
    }

    /// Pool the signup targets.
    pub fn user_pool_id(&self) -> &UserPoolId {
        &self.user_pool_id
    }

    /// Candidate email from the submitted user attributes.
    pub fn email(&self) -> &CandidateEmail {
        &self.email
    }

    /// Give back the payload exactly as received.
    pub fn into_payload(self) -> Value {
        self.payload
    }
}

fn required_str(payload: &Value, pointer: &'static str) -> Result<String, SignupEventError> {
    match payload.pointer(pointer) {
        None | Some(Value::Null) => Err(SignupEventError::MissingField { field: pointer }),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(SignupEventError::NotAString { field: pointer }),
    }
}
