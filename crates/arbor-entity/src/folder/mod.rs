//! Folder domain entities.

pub mod model;
pub mod tree;

pub use model::{CreateFolder, Folder, FolderWithChildren, UpdateFolder};
pub use tree::FolderNode;
