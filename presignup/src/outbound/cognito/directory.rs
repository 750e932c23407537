//! Cognito-backed user directory adapter.
//!
//! This adapter owns transport details only: building the `ListUsers` call,
//! mapping SDK failures onto [`UserDirectoryError`], and converting
//! `UserType` records into domain users.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_cognitoidentityprovider::Client;
use tracing::debug;

use super::mapping::{map_list_users_error, map_user};
use crate::domain::ports::{DirectoryUser, ListUsersQuery, UserDirectory, UserDirectoryError};

/// Overrides applied on top of the SDK's default configuration chain.
#[derive(Debug, Clone, Default)]
pub struct CognitoClientOptions {
    /// Region to use instead of the one resolved from the environment.
    pub region: Option<String>,
    /// Endpoint to use instead of the regional Cognito endpoint.
    pub endpoint_url: Option<String>,
}

/// User directory adapter issuing `ListUsers` against Cognito user pools.
#[derive(Debug, Clone)]
pub struct CognitoUserDirectory {
    client: Client,
}

impl CognitoUserDirectory {
    /// Wrap an already configured client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Resolve credentials and region from the environment and build a client.
    ///
    /// Call once per process; the client is reused across invocations.
    pub async fn from_environment(options: CognitoClientOptions) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = options.region {
            loader = loader.region(Region::new(region));
        }
        if let Some(endpoint_url) = options.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let sdk_config = loader.load().await;

        tracing::info!(
            region = ?sdk_config.region().map(ToString::to_string),
            endpoint_override = sdk_config.endpoint_url().is_some(),
            "Cognito user directory client initialised"
        );

        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl UserDirectory for CognitoUserDirectory {
    async fn list_users(
        &self,
        query: &ListUsersQuery,
    ) -> Result<Vec<DirectoryUser>, UserDirectoryError> {
        let output = self
            .client
            .list_users()
            .user_pool_id(query.user_pool_id.as_ref())
            .filter(query.filter.as_str())
            .limit(i32::from(query.limit))
            .send()
            .await
            .map_err(|error| {
                let mapped = map_list_users_error(error);
                debug!(
                    user_pool_id = %query.user_pool_id,
                    error = %mapped,
                    "cognito ListUsers failed"
                );
                mapped
            })?;

        Ok(output.users().iter().map(map_user).collect())
    }
}
