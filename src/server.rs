//! Service bootstrap: open the store, run the schema step, wire routes, listen.

use crate::config::{SchemaFailurePolicy, ServiceConfig, ServiceKind};
use crate::error::StartupError;
use crate::migration::apply_schema;
use crate::routes::service_routes;
use crate::state::AppState;
use crate::store;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Largest accepted request body.
pub const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Router for `kind` with request tracing and the body limit applied.
pub fn app(kind: ServiceKind, state: AppState) -> Router {
    service_routes(kind, state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES)),
    )
}

/// Open the store and run the schema step. A schema failure is logged and tolerated under
/// [`SchemaFailurePolicy::Continue`], returned under [`SchemaFailurePolicy::Abort`].
pub async fn prepare(config: &ServiceConfig) -> Result<AppState, StartupError> {
    let pool = store::connect(&config.database).await.map_err(StartupError::Store)?;
    match apply_schema(&pool, config.kind, &config.schema).await {
        Ok(()) => tracing::info!(service = %config.kind, "schema ready"),
        Err(e) => match config.schema.on_failure {
            SchemaFailurePolicy::Continue => {
                tracing::error!(service = %config.kind, error = %e, "schema setup failed; continuing")
            }
            SchemaFailurePolicy::Abort => return Err(e),
        },
    }
    Ok(AppState::new(pool))
}

/// Boot and serve until the process exits.
pub async fn run(config: ServiceConfig) -> Result<(), StartupError> {
    let state = prepare(&config).await?;
    let app = app(config.kind, state);
    let listener = TcpListener::bind(config.listen_addr()).await?;
    tracing::info!(service = %config.kind, "listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
