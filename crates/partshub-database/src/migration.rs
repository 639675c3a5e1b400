//! Schema migrations, embedded at compile time.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use partshub_core::error::{AppError, ErrorKind};
use partshub_core::result::AppResult;

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Applies any schema migrations not yet recorded in the database.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Schema migration failed", e)
    })?;

    info!("Database schema is up to date");
    Ok(())
}
