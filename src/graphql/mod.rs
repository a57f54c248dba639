pub mod context;
pub mod mutations;
pub mod queries;
pub mod types;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};

pub use context::GraphQLContext;
use mutations::Mutation;
use queries::Query;

use crate::store::RecordStore;

pub type GraphQLSchema = Schema<Query, Mutation, EmptySubscription>;

/// Build the executable schema over `store`.
pub fn build_schema(store: Arc<RecordStore>) -> GraphQLSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(GraphQLContext::new(store))
        .finish()
}

/// SDL for the schema. Needs no store, since printing never resolves fields.
pub fn schema_sdl() -> String {
    Schema::build(Query, Mutation, EmptySubscription)
        .finish()
        .sdl()
}
