//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use arbor_core::config::AppConfig;
use arbor_database::repositories::folder::FolderRepository;
use arbor_service::folder::service::FolderService;
use arbor_service::folder::tree::TreeService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Folder CRUD service.
    pub folder_service: Arc<FolderService>,
    /// Subtree assembly service.
    pub tree_service: Arc<TreeService>,
}

impl AppState {
    /// Wires repositories and services over a database pool.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        let folder_repo = Arc::new(FolderRepository::new(db_pool.clone()));
        let folder_service = Arc::new(FolderService::new(Arc::clone(&folder_repo)));
        let tree_service = Arc::new(TreeService::new(Arc::clone(&folder_repo)));

        Self {
            config: Arc::new(config),
            db_pool,
            folder_service,
            tree_service,
        }
    }
}
