//! Recycle-bin repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use partshub_core::error::{AppError, ErrorKind};
use partshub_core::result::AppResult;
use partshub_entity::deleted_loan::DeletedLoan;
use partshub_entity::loan::Loan;

use crate::repositories::loan::insert_loan;
use crate::store::RecycleBinStore;

/// Repository for soft-deleted loans.
#[derive(Debug, Clone)]
pub struct DeletedLoanRepository {
    pool: PgPool,
}

impl DeletedLoanRepository {
    /// Create a new recycle-bin repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecycleBinStore for DeletedLoanRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<DeletedLoan>> {
        sqlx::query_as::<_, DeletedLoan>("SELECT * FROM deleted_loans WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find deleted loan", e)
            })
    }

    async fn list_unrestored(&self) -> AppResult<Vec<DeletedLoan>> {
        sqlx::query_as::<_, DeletedLoan>(
            "SELECT * FROM deleted_loans WHERE is_restored = FALSE ORDER BY deleted_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list recycle bin", e))
    }

    async fn move_to_bin(&self, entry: &DeletedLoan) -> AppResult<DeletedLoan> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let created = sqlx::query_as::<_, DeletedLoan>(
            "INSERT INTO deleted_loans (id, original_id, loan_data, deleted_by, deleted_at, \
                 restore_until, is_restored) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(entry.id)
        .bind(entry.original_id)
        .bind(&entry.loan_data)
        .bind(&entry.deleted_by)
        .bind(entry.deleted_at)
        .bind(entry.restore_until)
        .bind(entry.is_restored)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert deleted loan", e)
        })?;

        let removed = sqlx::query("DELETE FROM loans WHERE id = $1")
            .bind(entry.original_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to remove live loan", e)
            })?;
        if removed.rows_affected() == 0 {
            return Err(AppError::not_found("Loan not found"));
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;
        Ok(created)
    }

    async fn restore(&self, entry_id: Uuid, loan: &Loan) -> AppResult<Loan> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        // Conditional flip guards against a concurrent double restore.
        let flipped = sqlx::query(
            "UPDATE deleted_loans SET is_restored = TRUE WHERE id = $1 AND is_restored = FALSE",
        )
        .bind(entry_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark entry restored", e)
        })?;
        if flipped.rows_affected() == 0 {
            return Err(AppError::already_restored("Loan already restored"));
        }

        let restored = insert_loan(&mut *tx, loan).await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;
        Ok(restored)
    }

    async fn purge(&self, entry_id: Uuid) -> AppResult<bool> {
        // Restored entries are never deleted here; the service maps the
        // zero-row case after checking why.
        let result = sqlx::query("DELETE FROM deleted_loans WHERE id = $1 AND is_restored = FALSE")
            .bind(entry_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to purge deleted loan", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn cleanup_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query(
            "DELETE FROM deleted_loans WHERE restore_until < $1 AND is_restored = FALSE",
        )
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to clean up recycle bin", e)
        })?;
        Ok(result.rows_affected())
    }
}
