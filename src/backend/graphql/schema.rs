use async_graphql::{EmptySubscription, Schema};

use crate::backend::auth::credentials::Authenticator;
use crate::backend::graphql::resolvers::{MutationRoot, QueryRoot};

/// The service's schema type
pub type LoginSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the authenticator available to resolvers.
pub fn build_schema(authenticator: Authenticator) -> LoginSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(authenticator)
        .finish()
}
