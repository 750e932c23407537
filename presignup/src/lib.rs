//! Cognito pre-signup hook rejecting registrations for emails that already
//! exist in the user pool.
//!
//! Layout follows the hexagonal split: [`domain`] holds the decision and its
//! ports, [`outbound`] the Cognito directory adapter, [`inbound`] the Lambda
//! runtime adapter.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod settings;
pub mod telemetry;

pub use settings::PreSignupSettings;
