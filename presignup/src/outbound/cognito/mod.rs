//! Cognito outbound adapters.
//!
//! This module provides a thin `aws-sdk-cognitoidentityprovider`
//! implementation of the `UserDirectory` port.

mod directory;
mod mapping;

pub use directory::{CognitoClientOptions, CognitoUserDirectory};
