//! Axum route handlers for the insight API.

use axum::{
    extract::Path,
    middleware::from_fn_with_state,
    routing::get,
    Extension, Json, Router,
};
use insight_core::{Field, Record};
use serde_json::Value;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    error::GatewayError,
    middleware::{ensure_store, StoreHandle},
    state::AppState,
};

/// Body of `GET /`.
pub const GREETING: &str = "Hello Hono!!";

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router.
///
/// Only the `/api` routes pass through [`ensure_store`]; `GET /` answers
/// without touching the store.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/data", get(fetch_all))
        .route("/api/unique/{segment}", get(unique_values))
        .route_layer(from_fn_with_state(state.clone(), ensure_store));

    Router::new()
        .route("/", get(root))
        .merge(api)
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /` — fixed plain-text greeting.
pub async fn root() -> &'static str {
    GREETING
}

/// `GET /api/data` — every record in the collection.
///
/// # Errors
/// Returns [`GatewayError::FetchAll`] if the query fails.
pub async fn fetch_all(
    Extension(StoreHandle(store)): Extension<StoreHandle>,
) -> Result<Json<Vec<Record>>, GatewayError> {
    let records = store.find_all().await.map_err(|e| {
        tracing::error!(error = %e, "error fetching data");
        GatewayError::FetchAll(e)
    })?;
    tracing::debug!(count = records.len(), "serving all records");
    Ok(Json(records))
}

/// `GET /api/unique/{segment}` — distinct values of one field.
///
/// # Errors
/// Returns [`GatewayError::UnknownField`] if `segment` names no field, or
/// [`GatewayError::Distinct`] if the query fails.
pub async fn unique_values(
    Path(segment): Path<String>,
    Extension(StoreHandle(store)): Extension<StoreHandle>,
) -> Result<Json<Vec<Value>>, GatewayError> {
    let field: Field = segment.parse()?;
    let values = store.distinct(field).await.map_err(|e| {
        tracing::error!(%field, error = %e, "error fetching unique values");
        GatewayError::Distinct { field, source: e }
    })?;
    Ok(Json(values))
}

/// Fallback for unmatched paths.
pub async fn not_found() -> GatewayError {
    GatewayError::NotFound
}
