//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - Small connection pool (SQLite handles its own locking) - no Arc<Mutex<Connection>>
//! - Every value is a bound parameter; column names come from an allow-list
//! - Schema is created on startup if missing, no migrations

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_memory_pool, create_pool};
pub use repos::*;
