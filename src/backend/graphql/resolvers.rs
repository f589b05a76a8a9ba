/**
 * GraphQL Resolvers
 *
 * # Login Flow
 *
 * 1. Validate the arguments with `LoginForm` (email format, password length)
 * 2. Hand the form to `Authenticator::authenticate`
 * 3. Map the user to `UserObject`, or every failure to one generic error
 *
 * Validation failures carry an `invalidFields` extension; credential
 * failures carry nothing but the message.
 */

use async_graphql::{Context, Error, ErrorExtensions, Object, Result};

use crate::backend::auth::credentials::{Authenticator, CredentialError};
use crate::backend::graphql::types::UserObject;
use crate::shared::error::SharedError;
use crate::shared::login::LoginForm;
use crate::shared::messages;

/// Query root
#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Version of the running server
    async fn api_version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

/// Mutation root
#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Check an email/password pair and return the matching user
    async fn login(&self, ctx: &Context<'_>, email: String, password: String) -> Result<UserObject> {
        let form = LoginForm::new(email, password)
            .validated()
            .map_err(invalid_input)?;

        let authenticator = ctx.data::<Authenticator>()?;

        match authenticator.authenticate(&form.email, &form.password).await {
            Ok(user) => Ok(user.into()),
            Err(err) => {
                if !matches!(err, CredentialError::InvalidCredentials) {
                    tracing::error!(error = %err, "Login failed for an internal reason");
                }
                Err(Error::new(err.public_message()))
            }
        }
    }
}

fn invalid_input(err: SharedError) -> Error {
    tracing::debug!(error = %err, "Rejected malformed login input");
    let fields = err.fields().to_vec();
    Error::new(messages::INVALID_LOGIN_INPUT).extend_with(|_, ext| ext.set("invalidFields", fields))
}
