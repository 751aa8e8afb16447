//! Folder CRUD and tree handlers.
//!
//! Every handler returns the uniform envelope: `{"success": true, "data"}`
//! on success, `{"success": false, "message"}` on failure (see
//! [`crate::error::ApiError`]).

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use arbor_core::error::AppError;
use arbor_entity::folder::{
    CreateFolder, Folder, FolderNode, FolderWithChildren, UpdateFolder,
};

use crate::dto::request::{CreateFolderRequest, UpdateFolderRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/folders
pub async fn list_root_folders(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Folder>>>, ApiError> {
    let folders = state.folder_service.list_roots().await?;
    Ok(Json(ApiResponse::ok(folders)))
}

/// GET /api/folders/{id}
pub async fn get_folder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<FolderWithChildren>>, ApiError> {
    let folder = state.folder_service.get_folder_with_children(id).await?;
    Ok(Json(ApiResponse::ok(folder)))
}

/// GET /api/folders/{id}/children
pub async fn list_children(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Folder>>>, ApiError> {
    let children = state.folder_service.list_children(id).await?;
    Ok(Json(ApiResponse::ok(children)))
}

/// GET /api/folders/{id}/tree
pub async fn get_tree(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<FolderNode>>, ApiError> {
    let tree = state.tree_service.get_subtree(id).await?;
    Ok(Json(ApiResponse::ok(tree)))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    Json(req): Json<CreateFolderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Folder>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let folder = state
        .folder_service
        .create_folder(CreateFolder {
            parent_id: req.parent_id,
            name: req.name,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(folder))))
}

/// PUT /api/folders/{id}
pub async fn update_folder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateFolderRequest>,
) -> Result<Json<ApiResponse<Folder>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let folder = state
        .folder_service
        .update_folder(
            id,
            UpdateFolder {
                name: req.name,
                parent_id: req.parent_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(folder)))
}

/// DELETE /api/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    state.folder_service.delete_folder(id).await?;
    Ok(Json(ApiResponse::ok(serde_json::json!({}))))
}
