//! Folder CRUD operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use arbor_core::error::AppError;
use arbor_database::repositories::folder::FolderRepository;
use arbor_entity::folder::{CreateFolder, Folder, FolderWithChildren, UpdateFolder};

/// Manages folder CRUD operations.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Folder repository.
    folder_repo: Arc<FolderRepository>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(folder_repo: Arc<FolderRepository>) -> Self {
        Self { folder_repo }
    }

    /// Lists root folders in insertion order.
    pub async fn list_roots(&self) -> Result<Vec<Folder>, AppError> {
        self.folder_repo.find_roots().await
    }

    /// Gets a folder by ID.
    pub async fn get_folder(&self, folder_id: Uuid) -> Result<Folder, AppError> {
        self.folder_repo
            .find_by_id(folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))
    }

    /// Gets a folder by ID with its direct children populated.
    pub async fn get_folder_with_children(
        &self,
        folder_id: Uuid,
    ) -> Result<FolderWithChildren, AppError> {
        let folder = self.get_folder(folder_id).await?;
        let children = self.folder_repo.find_children(folder_id).await?;
        Ok(FolderWithChildren { folder, children })
    }

    /// Lists direct children of a folder in insertion order.
    ///
    /// An unknown parent ID yields an empty list rather than an error,
    /// matching the listing-by-filter contract.
    pub async fn list_children(&self, folder_id: Uuid) -> Result<Vec<Folder>, AppError> {
        self.folder_repo.find_children(folder_id).await
    }

    /// Creates a new folder.
    pub async fn create_folder(&self, req: CreateFolder) -> Result<Folder, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        if let Some(parent_id) = req.parent_id {
            self.folder_repo
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| AppError::not_found("Parent folder not found"))?;
        }

        let folder = self.folder_repo.create(&req).await?;

        info!(
            folder_id = %folder.id,
            name = %folder.name,
            parent_id = ?folder.parent_id,
            "Folder created"
        );

        Ok(folder)
    }

    /// Applies a partial update (rename and/or reparent) to a folder.
    ///
    /// A new parent must exist, but no ancestry check is performed; see
    /// DESIGN.md for why reparenting can still create a cycle.
    pub async fn update_folder(
        &self,
        folder_id: Uuid,
        req: UpdateFolder,
    ) -> Result<Folder, AppError> {
        if let Some(name) = &req.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Folder name cannot be empty"));
            }
        }

        if let Some(parent_id) = req.parent_id {
            self.folder_repo
                .find_by_id(parent_id)
                .await?
                .ok_or_else(|| AppError::not_found("Parent folder not found"))?;
        }

        let folder = self
            .folder_repo
            .update(folder_id, &req)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;

        info!(
            folder_id = %folder_id,
            name = ?req.name,
            parent_id = ?req.parent_id,
            "Folder updated"
        );

        Ok(folder)
    }

    /// Deletes a folder by ID.
    ///
    /// Descendants are not deleted; they are orphaned in place.
    pub async fn delete_folder(&self, folder_id: Uuid) -> Result<(), AppError> {
        let deleted = self.folder_repo.delete(folder_id).await?;
        if !deleted {
            return Err(AppError::not_found("Folder not found"));
        }

        info!(folder_id = %folder_id, "Folder deleted");
        Ok(())
    }
}
