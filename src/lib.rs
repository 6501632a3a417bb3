//! Department and employee records over HTTP, backed by SQLite.
//!
//! Requests flow `api` → `service` → `repository` → `db`. Only the `db`
//! module knows about SQL.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{StoreError, StoreResult};
