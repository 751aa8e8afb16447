//! # arbor-service
//!
//! Business logic service layer for Arbor. Each service orchestrates the
//! folder repository to implement application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod folder;

pub use folder::{FolderService, TreeService};
