//! # arbor-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for the Arbor folder store.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
