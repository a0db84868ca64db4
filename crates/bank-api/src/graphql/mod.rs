//! GraphQL schema over the rights service

pub mod schema;
pub mod types;

pub use schema::{build_schema, graphiql, BankSchema, MutationRoot, QueryRoot};
