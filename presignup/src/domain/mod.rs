//! Domain types and the pre-signup decision.
//!
//! Purpose: keep the uniqueness check free of AWS and Lambda types. Adapters
//! translate the raw invocation into a [`SignupEvent`] and implement the
//! [`ports::UserDirectory`] port.
//!
//! Public surface:
//! - SignupEvent — raw event payload plus the fields the check reads.
//! - UserFilter — directory filter expression built from the candidate email.
//! - PreSignupValidator — implementation of [`ports::PreSignupCommand`].
//! - PreSignupError — duplicate-email rejection or upstream lookup failure.

pub mod ports;

mod pre_signup_service;
mod signup_event;
mod user_filter;

pub use self::pre_signup_service::{
    DUPLICATE_EMAIL_MESSAGE, EXISTENCE_PROBE_LIMIT, PreSignupError, PreSignupValidator,
};
pub use self::signup_event::{CandidateEmail, SignupEvent, SignupEventError, UserPoolId};
pub use self::user_filter::UserFilter;
