//! postbox library entrypoint.
//!
//! Modules:
//! - `app`: startup, configuration, shared state
//! - `db`: migrations and SQLite helpers
//! - `http`: Axum router and handlers
//! - `models`: typed records used across layers
//! - `service`: email persistence and query logic
//! - `util`: tracing setup and small pure helpers

pub mod app;
pub mod db;
pub mod http;
pub mod models;
pub mod service;
pub mod util;
