//! # Albums Common Library
//!
//! Shared code for the album catalog service:
//! - Album record shapes and the fixed-point `Price` type
//! - Store access (pool construction, schema initializer, album queries)
//! - Configuration resolution
//! - Common error type

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use error::{Error, Result};
pub use models::{Album, NewAlbum, Price};
