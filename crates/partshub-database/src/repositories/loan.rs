//! Loan repository implementation.
//!
//! Every stock-coupled mutation runs in a single transaction so a failure
//! mid-way (insufficient stock on the third of five items) rolls back all
//! prior deductions in the same request.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use partshub_core::error::{AppError, ErrorKind};
use partshub_core::result::AppResult;
use partshub_entity::loan::Loan;
use partshub_entity::stock_history::{StockChange, StockMovement};

use crate::repositories::stock::{append_ledger, deduct_stock, restore_stock};
use crate::store::{LoanFilter, LoanStore};

/// Repository for loan persistence.
#[derive(Debug, Clone)]
pub struct LoanRepository {
    pool: PgPool,
}

impl LoanRepository {
    /// Create a new loan repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Insert a full loan row. Shared with the recycle-bin restore path.
pub(crate) async fn insert_loan<'e>(
    executor: impl sqlx::PgExecutor<'e>,
    loan: &Loan,
) -> AppResult<Loan> {
    sqlx::query_as::<_, Loan>(
        "INSERT INTO loans (id, items, grand_total, borrower_name, borrower_phone, \
             borrower_type, expected_return_date, returned, return_date, last_return_date, \
             returned_amount, remaining_amount, note, status, created_by, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
         RETURNING *",
    )
    .bind(loan.id)
    .bind(&loan.items)
    .bind(loan.grand_total)
    .bind(&loan.borrower_name)
    .bind(&loan.borrower_phone)
    .bind(loan.borrower_type)
    .bind(loan.expected_return_date)
    .bind(loan.returned)
    .bind(loan.return_date)
    .bind(loan.last_return_date)
    .bind(loan.returned_amount)
    .bind(loan.remaining_amount)
    .bind(&loan.note)
    .bind(loan.status)
    .bind(&loan.created_by)
    .bind(loan.created_at)
    .bind(loan.updated_at)
    .fetch_one(executor)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert loan", e))
}

/// Update every mutable column of a loan row.
async fn update_loan_row<'e>(
    executor: impl sqlx::PgExecutor<'e>,
    loan: &Loan,
) -> AppResult<Loan> {
    sqlx::query_as::<_, Loan>(
        "UPDATE loans SET items = $2, grand_total = $3, borrower_name = $4, \
             borrower_phone = $5, borrower_type = $6, expected_return_date = $7, \
             returned = $8, return_date = $9, last_return_date = $10, returned_amount = $11, \
             remaining_amount = $12, note = $13, status = $14, updated_at = $15 \
         WHERE id = $1 RETURNING *",
    )
    .bind(loan.id)
    .bind(&loan.items)
    .bind(loan.grand_total)
    .bind(&loan.borrower_name)
    .bind(&loan.borrower_phone)
    .bind(loan.borrower_type)
    .bind(loan.expected_return_date)
    .bind(loan.returned)
    .bind(loan.return_date)
    .bind(loan.last_return_date)
    .bind(loan.returned_amount)
    .bind(loan.remaining_amount)
    .bind(&loan.note)
    .bind(loan.status)
    .bind(loan.updated_at)
    .fetch_optional(executor)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update loan", e))?
    .ok_or_else(|| AppError::not_found("Loan not found"))
}

#[async_trait]
impl LoanStore for LoanRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Loan>> {
        sqlx::query_as::<_, Loan>("SELECT * FROM loans WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find loan", e))
    }

    async fn list(&self, filter: LoanFilter) -> AppResult<Vec<Loan>> {
        let sql = match filter {
            LoanFilter::All => "SELECT * FROM loans ORDER BY created_at DESC",
            LoanFilter::Active => {
                "SELECT * FROM loans WHERE returned = FALSE ORDER BY created_at DESC"
            }
            LoanFilter::Returned => {
                "SELECT * FROM loans WHERE returned = TRUE ORDER BY created_at DESC"
            }
        };
        sqlx::query_as::<_, Loan>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list loans", e))
    }

    async fn create_with_stock(&self, loan: &Loan, deductions: &[StockChange]) -> AppResult<Loan> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        deduct_stock(&mut tx, deductions).await?;
        append_ledger(
            &mut tx,
            StockMovement::Loan,
            deductions,
            Some(loan.id),
            "Loan created",
        )
        .await?;
        let created = insert_loan(&mut *tx, loan).await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;
        Ok(created)
    }

    async fn update_with_stock(
        &self,
        loan: &Loan,
        restores: &[StockChange],
        deductions: &[StockChange],
    ) -> AppResult<Loan> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        restore_stock(&mut tx, restores).await?;
        append_ledger(
            &mut tx,
            StockMovement::Return,
            restores,
            Some(loan.id),
            "Loan edited",
        )
        .await?;
        deduct_stock(&mut tx, deductions).await?;
        append_ledger(
            &mut tx,
            StockMovement::Loan,
            deductions,
            Some(loan.id),
            "Loan edited",
        )
        .await?;
        let updated = update_loan_row(&mut *tx, loan).await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;
        Ok(updated)
    }

    async fn update(&self, loan: &Loan) -> AppResult<Loan> {
        update_loan_row(&self.pool, loan).await
    }

    async fn release_stock_and_update(
        &self,
        loan: &Loan,
        restores: &[StockChange],
    ) -> AppResult<Loan> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        restore_stock(&mut tx, restores).await?;
        append_ledger(
            &mut tx,
            StockMovement::Return,
            restores,
            Some(loan.id),
            "Loan returned",
        )
        .await?;
        let updated = update_loan_row(&mut *tx, loan).await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;
        Ok(updated)
    }
}
