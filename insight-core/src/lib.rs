//! Core types for the insight read-only document API.
//!
//! Defines the record model, the fixed table of fields served under
//! `/api/unique/`, and the names of the database and collection being served.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod field;
pub mod record;

pub use error::CoreError;
pub use field::Field;
pub use record::{distinct_values, Record};

/// Database holding the served collection.
pub const DATABASE_NAME: &str = "JsonData";

/// The single collection exposed by the API.
pub const COLLECTION_NAME: &str = "All-samples";
