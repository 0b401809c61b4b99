//! Admissions Backend - route catalog service
//!
//! This is the main entry point for the admissions route catalog API.
//! All data operations are exposed via GraphQL at /graphql.

mod api;
mod config;
mod db;
mod graphql;

use std::net::SocketAddr;
use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Router;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Database;
use crate::graphql::CatalogSchema;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Database,
    pub schema: CatalogSchema,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    let config = Arc::new(config);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "admissions_backend=debug,tower_http=debug".into()),
        )
        .init();

    tracing::info!("Starting Admissions Backend");

    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;
    tracing::info!("Database connected");

    let schema = graphql::build_schema(db.clone());
    tracing::info!("GraphQL schema built");

    let state = AppState {
        config: config.clone(),
        db,
        schema,
    };

    let app = Router::new()
        // Health endpoints (no auth required)
        .merge(api::health::router())
        // GraphQL endpoint (handles all queries)
        .route("/graphql", get(graphiql).post(graphql_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);
    tracing::info!("GraphQL playground: http://localhost:{}/graphql", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GraphQL query handler
async fn graphql_handler(
    axum::extract::State(state): axum::extract::State<AppState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// GraphiQL interactive playground (only for browsers)
async fn graphiql(headers: HeaderMap) -> impl IntoResponse {
    // Check if this is a browser request (accepts HTML)
    let accepts_html = headers
        .get(axum::http::header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("text/html"))
        .unwrap_or(false);

    if accepts_html {
        axum::response::Html(GraphiQLSource::build().endpoint("/graphql").finish())
            .into_response()
    } else {
        // Return a helpful JSON error for non-browser requests
        (
            axum::http::StatusCode::METHOD_NOT_ALLOWED,
            axum::Json(serde_json::json!({
                "error": "GET requests are not supported for GraphQL queries. Use POST with Content-Type: application/json"
            })),
        )
            .into_response()
    }
}
