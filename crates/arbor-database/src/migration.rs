//! Database migration runner.

use sqlx::PgPool;
use tracing::info;

use arbor_core::error::{AppError, ErrorKind};

/// Run all pending database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}

/// Drop all Arbor tables and re-run migrations from scratch.
pub async fn reset_database(pool: &PgPool) -> Result<(), AppError> {
    info!("Resetting database...");

    for stmt in [
        "DROP TABLE IF EXISTS folders",
        "DROP TABLE IF EXISTS _sqlx_migrations",
    ] {
        sqlx::query(stmt).execute(pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Failed to reset: {e}"), e)
        })?;
    }

    run_migrations(pool).await
}
