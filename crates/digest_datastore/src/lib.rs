//! # DataStore Module
//!
//! This module provides functionality for interacting with a PostgreSQL
//! database to store processed YouTube videos: metadata, transcript,
//! LLM analysis and the per-run accounting fields.
//!
//! The module uses sqlx for database operations and exposes a `DataStore`
//! trait so the pipeline can run against test doubles.

mod datastore;
mod domain;

pub use datastore::postgres::PgDataStore;
pub use datastore::DataStore;
pub use domain::ProcessedVideo;
