//! Folder tree structures for hierarchical display.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A node in a folder tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder ID.
    pub id: Uuid,
    /// Folder name.
    pub name: String,
    /// Parent folder ID (null for the subtree root if it is a root folder).
    pub parent_id: Option<Uuid>,
    /// Number of direct child folders.
    pub child_count: u64,
    /// Child folder nodes.
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Total number of folders in this subtree, including the node itself.
    pub fn total_folders(&self) -> u64 {
        1 + self
            .children
            .iter()
            .map(FolderNode::total_folders)
            .sum::<u64>()
    }
}
