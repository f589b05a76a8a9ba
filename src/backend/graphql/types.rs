use async_graphql::{SimpleObject, ID};

use crate::backend::auth::users::User;

/// Public view of a user record
///
/// Built from `User` by dropping the password hash.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "User")]
pub struct UserObject {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
}

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self {
            id: ID(user.id.to_string()),
            name: user.name,
            email: user.email,
            company: user.company,
        }
    }
}
