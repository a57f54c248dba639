use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use crate::server::app::AppState;

pub async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    tracing::debug!("GraphQL request received");
    let response = state.graphql_schema.execute(req.into_inner()).await;
    if response.is_err() {
        tracing::debug!("GraphQL request completed with {} error(s)", response.errors.len());
    } else {
        tracing::debug!("GraphQL request completed");
    }
    response.into()
}

/// Interactive query console
pub async fn graphql_console() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
