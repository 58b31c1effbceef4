//! src/domain/mod.rs

mod new_user;
mod user;
mod user_email;
mod user_id;
mod user_name;

pub use new_user::NewUser;
pub use user::User;
pub use user_email::UserEmail;
pub use user_id::UserId;
pub use user_name::UserName;

/// Validation error for domain data
#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Email is required.")]
    EmailRequired,
    #[error("`{0}` is not a valid email address.")]
    InvalidEmail(String),
    #[error("User ID is required.")]
    UserIdRequired,
}
