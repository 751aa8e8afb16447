//! Folder subtree assembly.

use std::sync::Arc;

use uuid::Uuid;

use arbor_core::error::AppError;
use arbor_database::repositories::folder::FolderRepository;
use arbor_entity::folder::{Folder, FolderNode};

/// Builds nested folder trees from flat descendant listings.
#[derive(Debug, Clone)]
pub struct TreeService {
    /// Folder repository.
    folder_repo: Arc<FolderRepository>,
}

impl TreeService {
    /// Creates a new tree service.
    pub fn new(folder_repo: Arc<FolderRepository>) -> Self {
        Self { folder_repo }
    }

    /// Builds the complete subtree rooted at the given folder.
    ///
    /// All descendants are fetched in a single recursive query and nested
    /// in memory.
    pub async fn get_subtree(&self, folder_id: Uuid) -> Result<FolderNode, AppError> {
        let root = self
            .folder_repo
            .find_by_id(folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;

        let descendants = self.folder_repo.find_descendants(folder_id).await?;

        Ok(build_tree(root, &descendants))
    }
}

/// Nests a flat list of descendants under their root folder.
fn build_tree(root: Folder, all_folders: &[Folder]) -> FolderNode {
    let children: Vec<FolderNode> = all_folders
        .iter()
        .filter(|f| f.parent_id == Some(root.id))
        .map(|child| build_tree(child.clone(), all_folders))
        .collect();

    FolderNode {
        id: root.id,
        name: root.name,
        parent_id: root.parent_id,
        child_count: children.len() as u64,
        children,
    }
}
