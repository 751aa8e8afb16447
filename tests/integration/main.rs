//! Integration test suite entry point.
//!
//! Requires a running PostgreSQL with the database named in
//! `tests/fixtures/test_config.toml`.

mod helpers;

mod folder_test;
mod health_test;
