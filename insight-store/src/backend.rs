//! Document store abstraction traits.
//!
//! Allows swapping MongoDB for the in-memory store without changing the
//! connection manager or the HTTP handlers.

use std::sync::Arc;

use async_trait::async_trait;
use insight_core::{Field, Record};
use serde_json::Value;

use crate::{StoreConfig, StoreError};

/// Read-only access to the served collection.
///
/// Implementations must be `Send + Sync` so one handle can be shared by all
/// in-flight requests.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Return every record in the collection, unfiltered and unlimited.
    ///
    /// # Errors
    /// Returns [`StoreError::Query`] if the query or cursor iteration fails.
    async fn find_all(&self) -> Result<Vec<Record>, StoreError>;

    /// Return the distinct values stored under `field`, in store order.
    ///
    /// # Errors
    /// Returns [`StoreError::Query`] if the query fails.
    async fn distinct(&self, field: Field) -> Result<Vec<Value>, StoreError>;
}

/// Opens connections to a document store.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Establish a connection described by `config`.
    ///
    /// # Errors
    /// Returns [`StoreError::Connect`] if the store cannot be reached.
    async fn connect(&self, config: &StoreConfig) -> Result<Arc<dyn DocumentStore>, StoreError>;
}
