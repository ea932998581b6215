//! In-memory document store.
//!
//! Serves a fixed set of records with the same `distinct` semantics as the
//! MongoDB backend. Useful for tests and for running the API without a
//! database.

use std::sync::Arc;

use async_trait::async_trait;
use insight_core::{distinct_values, Field, Record};
use serde_json::Value;

use crate::{Connector, DocumentStore, StoreConfig, StoreError};

/// A read-only collection held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
    failure: Option<String>,
}

impl InMemoryStore {
    /// Serve `records` in the given order.
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self { records, failure: None }
    }

    /// A store whose every query fails with [`StoreError::Unavailable`].
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            failure: Some(reason.into()),
        }
    }

    fn check(&self) -> Result<(), StoreError> {
        match &self.failure {
            Some(reason) => Err(StoreError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Record>, StoreError> {
        self.check()?;
        Ok(self.records.clone())
    }

    async fn distinct(&self, field: Field) -> Result<Vec<Value>, StoreError> {
        self.check()?;
        Ok(distinct_values(&self.records, field))
    }
}

/// Hands out a shared [`InMemoryStore`] regardless of the URI.
#[derive(Debug, Clone)]
pub struct InMemoryConnector {
    store: Arc<InMemoryStore>,
}

impl InMemoryConnector {
    /// Connect every caller to `store`.
    #[must_use]
    pub fn new(store: InMemoryStore) -> Self {
        Self { store: Arc::new(store) }
    }
}

#[async_trait]
impl Connector for InMemoryConnector {
    async fn connect(&self, _config: &StoreConfig) -> Result<Arc<dyn DocumentStore>, StoreError> {
        let store: Arc<dyn DocumentStore> = self.store.clone();
        Ok(store)
    }
}
