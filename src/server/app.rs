use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method, StatusCode},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{graphql, health};
use crate::errors::{Result, RosterError};
use crate::graphql::{build_schema, GraphQLSchema};
use crate::store::RecordStore;

#[derive(Clone)]
pub struct AppState {
    pub graphql_schema: GraphQLSchema,
}

pub async fn create_app(store: Arc<RecordStore>, cors_origin: Option<&str>) -> Result<Router> {
    let state = AppState {
        graphql_schema: build_schema(store),
    };

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_credentials(false);

    // "*" is not a valid exact origin for tower-http, treat it as "any".
    let cors = match cors_origin {
        Some(origin) if origin != "*" => {
            let value = origin
                .parse::<HeaderValue>()
                .map_err(|e| RosterError::InvalidCorsOrigin {
                    origin: origin.to_string(),
                    reason: e.to_string(),
                })?;
            cors.allow_origin(value)
        }
        _ => cors.allow_origin(Any),
    };

    let app = Router::new()
        // Health check endpoint
        .route("/health", get(health::health_check))
        .route(
            "/graphql",
            get(graphql::graphql_console)
                .post(graphql::graphql_handler)
                .options(|| async { StatusCode::OK }),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state);

    Ok(app)
}
