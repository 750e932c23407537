//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **cognito**: user directory lookups via the Cognito `ListUsers` API
//!
//! Adapters are thin translators between domain types and SDK shapes. They
//! contain no business logic.

pub mod cognito;
