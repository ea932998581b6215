//! Process-wide, lazily established store connection.
//!
//! The first caller of [`ConnectionManager::ensure_connection`] opens the
//! connection; callers arriving while that attempt is in flight wait on it
//! instead of opening their own.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::{Connector, DocumentStore, StoreConfig, StoreError};

/// Owns the single connection handle shared by every request.
pub struct ConnectionManager {
    connector: Box<dyn Connector>,
    store: OnceCell<Arc<dyn DocumentStore>>,
}

impl ConnectionManager {
    /// Create a manager with no connection yet.
    #[must_use]
    pub fn new(connector: impl Connector + 'static) -> Self {
        Self {
            connector: Box::new(connector),
            store: OnceCell::new(),
        }
    }

    /// Return the shared handle, connecting to `uri` first if needed.
    ///
    /// Once a connection exists this returns it without touching `uri`. A
    /// failed attempt leaves the manager unconnected; nothing is retried.
    ///
    /// # Errors
    /// Returns [`StoreError::MissingUri`] if `uri` is empty.
    /// Propagates errors from the underlying [`Connector::connect`].
    pub async fn ensure_connection(&self, uri: &str) -> Result<Arc<dyn DocumentStore>, StoreError> {
        let store = self
            .store
            .get_or_try_init(|| async {
                let config = StoreConfig::new(uri)?;
                let store = self.connector.connect(&config).await?;
                tracing::info!(
                    database = %config.database,
                    collection = %config.collection,
                    "connected to document store"
                );
                Ok::<_, StoreError>(store)
            })
            .await?;
        Ok(Arc::clone(store))
    }

    /// Return `true` once a connection has been established.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.store.initialized()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;
    use insight_core::Field;

    use super::*;
    use crate::InMemoryStore;

    /// Counts connection attempts; fails the first `failures` of them.
    #[derive(Default)]
    struct CountingConnector {
        attempts: Arc<AtomicUsize>,
        failures: usize,
    }

    #[async_trait]
    impl Connector for CountingConnector {
        async fn connect(&self, _config: &StoreConfig) -> Result<Arc<dyn DocumentStore>, StoreError> {
            let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
            // Hold the attempt open so concurrent callers overlap with it.
            tokio::time::sleep(Duration::from_millis(20)).await;
            if attempt < self.failures {
                return Err(StoreError::Unavailable("mock refused".to_owned()));
            }
            Ok(Arc::new(InMemoryStore::default()))
        }
    }

    #[tokio::test]
    async fn new_manager_is_not_connected() {
        let manager = ConnectionManager::new(CountingConnector::default());
        assert!(!manager.is_connected());
    }

    #[tokio::test]
    async fn ensure_connection_is_idempotent() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let manager = ConnectionManager::new(CountingConnector {
            attempts: Arc::clone(&attempts),
            failures: 0,
        });

        let first = match manager.ensure_connection("mongodb://localhost").await {
            Ok(s) => s,
            Err(e) => panic!("first connect failed: {e}"),
        };
        let second = match manager.ensure_connection("mongodb://elsewhere").await {
            Ok(s) => s,
            Err(e) => panic!("second connect failed: {e}"),
        };

        assert!(Arc::ptr_eq(&first, &second), "both calls must share one handle");
        assert_eq!(attempts.load(Ordering::SeqCst), 1, "only one connection may be opened");
        assert!(manager.is_connected());
    }

    #[tokio::test]
    async fn concurrent_first_calls_open_one_connection() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let manager = Arc::new(ConnectionManager::new(CountingConnector {
            attempts: Arc::clone(&attempts),
            failures: 0,
        }));

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let manager = Arc::clone(&manager);
                tokio::spawn(async move { manager.ensure_connection("mongodb://localhost").await })
            })
            .collect();

        for task in tasks {
            match task.await {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => panic!("connect failed: {e}"),
                Err(e) => panic!("task panicked: {e}"),
            }
        }
        assert_eq!(attempts.load(Ordering::SeqCst), 1, "concurrent callers must share one attempt");
    }

    #[tokio::test]
    async fn empty_uri_fails_without_connecting() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let manager = ConnectionManager::new(CountingConnector {
            attempts: Arc::clone(&attempts),
            failures: 0,
        });

        let result = manager.ensure_connection("").await;
        assert!(matches!(result, Err(StoreError::MissingUri)), "empty URI must be rejected");
        assert_eq!(attempts.load(Ordering::SeqCst), 0, "connector must not be called");
        assert!(!manager.is_connected());
    }

    #[tokio::test]
    async fn failed_attempt_leaves_manager_unconnected() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let manager = ConnectionManager::new(CountingConnector {
            attempts: Arc::clone(&attempts),
            failures: 1,
        });

        let result = manager.ensure_connection("mongodb://localhost").await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
        assert!(!manager.is_connected(), "a failed attempt must not be memoized");

        let store = match manager.ensure_connection("mongodb://localhost").await {
            Ok(s) => s,
            Err(e) => panic!("second attempt failed: {e}"),
        };
        let values = match store.distinct(Field::Sector).await {
            Ok(v) => v,
            Err(e) => panic!("query failed: {e}"),
        };
        assert!(values.is_empty());
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }
}
