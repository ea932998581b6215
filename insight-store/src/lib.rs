//! Connection management and data access for the insight document API.
//!
//! Owns the single, lazily established connection to the document store and
//! the read-only queries issued against the served collection.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod backend;
pub mod config;
pub mod connection;
pub mod convert;
pub mod error;
pub mod memory;
pub mod mongo;

pub use backend::{Connector, DocumentStore};
pub use config::StoreConfig;
pub use connection::ConnectionManager;
pub use error::StoreError;
pub use memory::{InMemoryConnector, InMemoryStore};
pub use mongo::{MongoConnector, MongoStore};
