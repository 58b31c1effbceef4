//! src/domain/new_user.rs

use crate::domain::UserEmail;
use crate::domain::UserName;

#[derive(Debug)]
pub struct NewUser {
    pub email: UserEmail,
    pub name: Option<UserName>,
}
