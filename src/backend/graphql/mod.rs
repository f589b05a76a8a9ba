//! GraphQL Module
//!
//! async-graphql schema served at `/graphql`.
//!
//! ```graphql
//! type User {
//!   id: ID!
//!   name: String!
//!   email: String!
//!   company: String
//! }
//!
//! type Query {
//!   apiVersion: String!
//! }
//!
//! type Mutation {
//!   login(email: String!, password: String!): User!
//! }
//! ```
//!
//! `User` has no password field. A failed login surfaces as a single
//! GraphQL error whose message does not say which check failed.

/// Schema assembly
pub mod schema;

/// Query and mutation roots
pub mod resolvers;

/// Output types
pub mod types;

pub use schema::{build_schema, LoginSchema};
pub use types::UserObject;
