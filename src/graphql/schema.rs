//! GraphQL schema definition
//!
//! This is the single API surface for the route catalog. The catalog is
//! read-only, so there are no mutations or subscriptions.

use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

use crate::db::Database;

use super::queries::RouteQueries;

/// The GraphQL schema type
pub type CatalogSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

#[derive(MergedObject, Default)]
pub struct QueryRoot(RouteQueries);

/// Build the GraphQL schema with all resolvers
pub fn build_schema(db: Database) -> CatalogSchema {
    Schema::build(QueryRoot::default(), EmptyMutation, EmptySubscription)
        .data(db)
        .finish()
}
