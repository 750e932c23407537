//! Translation between Cognito SDK shapes and the directory port.

use aws_sdk_cognitoidentityprovider::error::{DisplayErrorContext, SdkError};
use aws_sdk_cognitoidentityprovider::operation::list_users::ListUsersError;
use aws_sdk_cognitoidentityprovider::types::UserType;

use crate::domain::ports::{DirectoryUser, UserDirectoryError};

pub(super) fn map_list_users_error(error: SdkError<ListUsersError>) -> UserDirectoryError {
    match &error {
        SdkError::ServiceError(context) => map_service_error(context.err()),
        SdkError::TimeoutError(_) => {
            UserDirectoryError::timeout(DisplayErrorContext(&error).to_string())
        }
        SdkError::DispatchFailure(failure) if failure.is_timeout() => {
            UserDirectoryError::timeout(DisplayErrorContext(&error).to_string())
        }
        SdkError::DispatchFailure(_) | SdkError::ConstructionFailure(_) => {
            UserDirectoryError::transport(DisplayErrorContext(&error).to_string())
        }
        _ => UserDirectoryError::service(DisplayErrorContext(&error).to_string()),
    }
}

pub(super) fn map_service_error(error: &ListUsersError) -> UserDirectoryError {
    let message = error.to_string();
    match error {
        ListUsersError::InvalidParameterException(_) => UserDirectoryError::invalid_filter(message),
        ListUsersError::NotAuthorizedException(_) => UserDirectoryError::access_denied(message),
        ListUsersError::ResourceNotFoundException(_) => UserDirectoryError::pool_not_found(message),
        ListUsersError::TooManyRequestsException(_) => UserDirectoryError::throttled(message),
        _ => UserDirectoryError::service(message),
    }
}

pub(super) fn map_user(user: &UserType) -> DirectoryUser {
    DirectoryUser {
        username: user.username().unwrap_or_default().to_owned(),
        status: user.user_status().map(|status| status.as_str().to_owned()),
        attributes: user
            .attributes()
            .iter()
            .filter_map(|attribute| {
                attribute
                    .value()
                    .map(|value| (attribute.name().to_owned(), value.to_owned()))
            })
            .collect(),
    }
}
