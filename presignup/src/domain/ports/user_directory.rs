//! Driven port for looking up existing accounts in the user directory.
//!
//! The domain owns the query shape and the record contract so the validator
//! never sees SDK types. Production backs this port with the Cognito adapter;
//! tests use the fixture below or the generated mock.

use std::collections::BTreeMap;

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{UserFilter, UserPoolId};

/// One "list users" request against a user pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListUsersQuery {
    /// Pool to search.
    pub user_pool_id: UserPoolId,
    /// Filter expression evaluated by the directory.
    pub filter: UserFilter,
    /// Maximum number of records the directory should return.
    pub limit: u8,
}

/// A user record returned by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryUser {
    /// Directory username (a UUID `sub` for email-alias pools).
    pub username: String,
    /// Account status as reported by the directory, e.g. `CONFIRMED`.
    pub status: Option<String>,
    /// Attribute name/value pairs.
    pub attributes: BTreeMap<String, String>,
}

impl DirectoryUser {
    /// Look up one attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

define_port_error! {
    /// Errors surfaced while querying the user directory.
    pub enum UserDirectoryError {
        /// The request never reached the directory or the connection dropped.
        Transport {
            /// Upstream description.
            message: String,
        } => "user directory transport failed: {message}",
        /// The call exceeded the client's timeout.
        Timeout {
            /// Upstream description.
            message: String,
        } => "user directory timed out: {message}",
        /// The directory rejected the filter or another request parameter.
        InvalidFilter {
            /// Upstream description.
            message: String,
        } => "user directory rejected the query: {message}",
        /// The caller's credentials may not list users in this pool.
        AccessDenied {
            /// Upstream description.
            message: String,
        } => "user directory denied access: {message}",
        /// The named pool does not exist.
        PoolNotFound {
            /// Upstream description.
            message: String,
        } => "user pool not found: {message}",
        /// The directory throttled the call.
        Throttled {
            /// Upstream description.
            message: String,
        } => "user directory throttled the request: {message}",
        /// Any other directory-side failure.
        Service {
            /// Upstream description.
            message: String,
        } => "user directory failed: {message}",
    }
}

/// Port for listing users that match a filter.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Return at most `query.limit` users matching `query.filter`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use presignup::domain::ports::{FixtureUserDirectory, ListUsersQuery, UserDirectory};
    /// use presignup::domain::{CandidateEmail, UserFilter, UserPoolId};
    ///
    /// let directory = FixtureUserDirectory::default();
    /// let users = directory
    ///     .list_users(&ListUsersQuery {
    ///         user_pool_id: UserPoolId::new("eu-west-1_pool"),
    ///         filter: UserFilter::email_equals(&CandidateEmail::new("a@x.com")),
    ///         limit: 1,
    ///     })
    ///     .await?;
    /// assert!(users.is_empty());
    /// # Ok::<(), presignup::domain::ports::UserDirectoryError>(())
    /// ```
    async fn list_users(
        &self,
        query: &ListUsersQuery,
    ) -> Result<Vec<DirectoryUser>, UserDirectoryError>;
}

/// In-memory directory returning a fixed set of users.
///
/// Users whose `email` attribute equals the filter's value are returned, up
/// to the query limit. The pool id is ignored.
#[derive(Debug, Clone, Default)]
pub struct FixtureUserDirectory {
    users: Vec<DirectoryUser>,
}

impl FixtureUserDirectory {
    /// Build a fixture holding `users`.
    pub fn with_users(users: Vec<DirectoryUser>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserDirectory for FixtureUserDirectory {
    async fn list_users(
        &self,
        query: &ListUsersQuery,
    ) -> Result<Vec<DirectoryUser>, UserDirectoryError> {
        let Some((attribute, value)) = query.filter.equality() else {
            return Err(UserDirectoryError::invalid_filter(format!(
                "unsupported filter: {}",
                query.filter
            )));
        };
        Ok(self
            .users
            .iter()
            .filter(|user| user.attribute(attribute) == Some(value))
            .take(usize::from(query.limit))
            .cloned()
            .collect())
    }
}
