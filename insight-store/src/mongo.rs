//! MongoDB-backed document store.

use std::sync::Arc;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection};
use serde_json::Value;

use insight_core::{Field, Record};

use crate::convert::{bson_to_json, document_to_record};
use crate::{Connector, DocumentStore, StoreConfig, StoreError};

/// A live connection to the served collection.
#[derive(Debug, Clone)]
pub struct MongoStore {
    collection: Collection<Document>,
}

impl MongoStore {
    /// Connect to the store described by `config`.
    ///
    /// The driver connects lazily, so a `ping` is issued to make an
    /// unreachable or misconfigured server fail here.
    ///
    /// # Errors
    /// Returns [`StoreError::Connect`] if the URI is invalid or the ping fails.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let connect_error = |source: mongodb::error::Error| StoreError::Connect {
            database: config.database.clone(),
            source,
        };

        let client = Client::with_uri_str(&config.uri).await.map_err(connect_error)?;
        let database = client.database(&config.database);
        database.run_command(doc! { "ping": 1 }).await.map_err(connect_error)?;

        Ok(Self {
            collection: database.collection::<Document>(&config.collection),
        })
    }

    fn query_error(&self, operation: &'static str, source: mongodb::error::Error) -> StoreError {
        StoreError::Query {
            operation,
            collection: self.collection.name().to_owned(),
            source,
        }
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find_all(&self) -> Result<Vec<Record>, StoreError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| self.query_error("find", e))?;
        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| self.query_error("find", e))?;

        tracing::debug!(count = documents.len(), "fetched all documents");
        Ok(documents.into_iter().map(document_to_record).collect())
    }

    async fn distinct(&self, field: Field) -> Result<Vec<Value>, StoreError> {
        let values = self
            .collection
            .distinct(field.key(), doc! {})
            .await
            .map_err(|e| self.query_error("distinct", e))?;

        tracing::debug!(%field, count = values.len(), "fetched distinct values");
        Ok(values.into_iter().map(bson_to_json).collect())
    }
}

/// Opens [`MongoStore`] connections.
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoConnector;

#[async_trait]
impl Connector for MongoConnector {
    async fn connect(&self, config: &StoreConfig) -> Result<Arc<dyn DocumentStore>, StoreError> {
        let store = MongoStore::connect(config).await?;
        Ok(Arc::new(store))
    }
}
