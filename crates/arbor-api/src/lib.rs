//! # arbor-api
//!
//! HTTP API layer for Arbor built on Axum.
//!
//! Provides the folder REST endpoints, middleware (CORS, logging),
//! DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
