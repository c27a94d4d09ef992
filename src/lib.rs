//! CoreMotion Gym API Library
//!
//! Static marketing/catalog endpoints, lead intake backed by a document
//! store, and a connectivity diagnostic.
//!
//! # Modules
//!
//! - `catalog`: Static facility, program, membership and blog content.
//! - `config`: Configuration management.
//! - `db`: Database connection and pool management.
//! - `db_storage`: Document store trait and Postgres implementation.
//! - `diagnostics`: Store connectivity probe.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Lead data models and validation.
//! - `router`: Route table and middleware.

pub mod catalog;
pub mod config;
pub mod db;
pub mod db_storage;
pub mod diagnostics;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod router;
