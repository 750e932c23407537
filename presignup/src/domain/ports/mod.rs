//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod pre_signup_command;
mod user_directory;

#[cfg(test)]
pub use pre_signup_command::MockPreSignupCommand;
pub use pre_signup_command::PreSignupCommand;
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::{
    DirectoryUser, FixtureUserDirectory, ListUsersQuery, UserDirectory, UserDirectoryError,
};
