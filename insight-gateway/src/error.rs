//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use insight_core::{CoreError, Field};
use insight_store::StoreError;
use serde_json::json;

/// Errors that can occur during gateway request handling.
///
/// Every variant renders as `{"error": <message>}`. Store details stay in the
/// logs; clients only see the message.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// No connection URI is configured.
    #[error("MONGO_URI is not set")]
    MissingConnectionUri,

    /// The connection to the document store could not be established.
    #[error("document store unavailable")]
    StoreUnavailable(#[source] StoreError),

    /// Reading the full collection failed.
    #[error("Failed to fetch data")]
    FetchAll(#[source] StoreError),

    /// Reading the distinct values of a field failed.
    #[error("Failed to fetch unique values for {field}")]
    Distinct {
        field: Field,
        #[source]
        source: StoreError,
    },

    /// The route segment does not name a supported field.
    #[error(transparent)]
    UnknownField(#[from] CoreError),

    /// No route matched the request path.
    #[error("not found")]
    NotFound,
}

impl GatewayError {
    /// HTTP status returned for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::MissingConnectionUri
            | GatewayError::FetchAll(_)
            | GatewayError::Distinct { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            GatewayError::UnknownField(_) | GatewayError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({"error": self.to_string()}))).into_response()
    }
}
