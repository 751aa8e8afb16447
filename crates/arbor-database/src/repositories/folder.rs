//! Folder repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use arbor_core::error::{AppError, ErrorKind};
use arbor_core::result::AppResult;
use arbor_entity::folder::{CreateFolder, Folder, UpdateFolder};

/// Repository for folder CRUD and tree queries.
///
/// Listings are returned in insertion order (`created_at ASC`), which is
/// the order the API contract exposes.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a folder by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to find folder: {e}"), e)
            })
    }

    /// List root folders (no parent).
    pub async fn find_roots(&self) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE parent_id IS NULL ORDER BY created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Failed to list root folders: {e}"), e)
        })
    }

    /// List direct children of a folder.
    pub async fn find_children(&self, parent_id: Uuid) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE parent_id = $1 ORDER BY created_at ASC",
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Failed to list children: {e}"), e)
        })
    }

    /// Recursive query to get all descendants of a folder.
    pub async fn find_descendants(&self, folder_id: Uuid) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "WITH RECURSIVE tree AS ( \
                SELECT f.*, 0 AS depth FROM folders f WHERE f.id = $1 \
                UNION ALL \
                SELECT f.*, t.depth + 1 FROM folders f INNER JOIN tree t ON f.parent_id = t.id \
             ) SELECT id, parent_id, name, created_at, updated_at FROM tree \
               WHERE id != $1 ORDER BY depth ASC, created_at ASC",
        )
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Failed to list descendants: {e}"), e)
        })
    }

    /// Create a new folder.
    pub async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (parent_id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(data.parent_id)
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Failed to create folder: {e}"), e)
        })
    }

    /// Apply a partial update to a folder. `None` fields are left unchanged.
    pub async fn update(&self, folder_id: Uuid, data: &UpdateFolder) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET \
                name = COALESCE($2, name), \
                parent_id = COALESCE($3, parent_id), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(folder_id)
        .bind(data.name.as_deref())
        .bind(data.parent_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Failed to update folder: {e}"), e)
        })
    }

    /// Delete a folder. Descendants are not touched; any children keep
    /// their now-dangling `parent_id` (see DESIGN.md).
    pub async fn delete(&self, folder_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1")
            .bind(folder_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to delete folder: {e}"), e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Count direct child folders.
    pub async fn count_children(&self, folder_id: Uuid) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM folders WHERE parent_id = $1")
            .bind(folder_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to count children: {e}"), e)
            })?;
        Ok(count as u64)
    }
}
