//! HTTP API gateway for the insight document collection.
//!
//! Serves the whole collection and the distinct values of its fields as
//! read-only JSON endpoints.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
