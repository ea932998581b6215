//! Error types for the store crate.

/// Errors that can occur while connecting to or querying the document store.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum StoreError {
    /// No connection URI was supplied.
    #[error("connection URI is empty")]
    MissingUri,

    /// The initial connection (or its liveness ping) failed.
    #[error("failed to connect to database {database}: {source}")]
    Connect {
        database: String,
        #[source]
        source: mongodb::error::Error,
    },

    /// A query against the collection failed.
    #[error("{operation} on {collection} failed: {source}")]
    Query {
        operation: &'static str,
        collection: String,
        #[source]
        source: mongodb::error::Error,
    },

    /// The store refused to serve the request.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
