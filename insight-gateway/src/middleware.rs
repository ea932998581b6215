//! Connection middleware for the data routes.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use insight_store::DocumentStore;

use crate::{error::GatewayError, state::AppState};

/// The live store handle, placed in request extensions by [`ensure_store`].
#[derive(Clone)]
pub struct StoreHandle(pub Arc<dyn DocumentStore>);

/// Make sure a store connection exists before a data handler runs.
///
/// # Errors
/// Returns [`GatewayError::MissingConnectionUri`] if no URI is configured,
/// before any connection or query is attempted.
/// Returns [`GatewayError::StoreUnavailable`] if connecting fails.
pub async fn ensure_store(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, GatewayError> {
    let Some(uri) = state.connection_uri() else {
        tracing::error!(path = %request.uri().path(), "MONGO_URI is not set; rejecting request");
        return Err(GatewayError::MissingConnectionUri);
    };

    let store = state.connections().ensure_connection(uri).await.map_err(|e| {
        tracing::error!(error = %e, "error connecting to document store");
        GatewayError::StoreUnavailable(e)
    })?;

    request.extensions_mut().insert(StoreHandle(store));
    Ok(next.run(request).await)
}
