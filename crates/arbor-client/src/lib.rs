//! # arbor-client
//!
//! Client-side logic for the Arbor folder browser: an HTTP [`ApiClient`]
//! speaking the server's response envelope, and a [`TreeState`] /
//! [`TreeBrowser`] pair implementing the lazy tree view. Children are
//! fetched on first expansion and cached per folder id, and mutations
//! refetch only the affected subtree.

pub mod api;
pub mod tree;

pub use api::ApiClient;
pub use tree::{TreeBrowser, TreeState};
