//! Folder services.

pub mod service;
pub mod tree;

pub use service::FolderService;
pub use tree::TreeService;
