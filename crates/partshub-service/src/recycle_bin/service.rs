//! Recycle-bin operations: soft delete, restore, purge, and expiry sweeps.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;
use uuid::Uuid;

use partshub_core::config::RecycleBinConfig;
use partshub_core::error::AppError;
use partshub_core::result::AppResult;
use partshub_database::store::{LoanStore, RecycleBinStore};
use partshub_entity::deleted_loan::DeletedLoan;
use partshub_entity::loan::Loan;

use crate::context::RequestContext;

/// Soft deletion with a bounded restore window.
///
/// Deleting a loan moves a full snapshot into the bin and removes the live
/// row; stock stays deducted for the whole round trip, so a delete-restore
/// cycle has no net inventory effect. Expired, non-restored entries are
/// permanently removed by [`RecycleBinService::cleanup_expired`].
#[derive(Clone)]
pub struct RecycleBinService {
    loans: Arc<dyn LoanStore>,
    bin: Arc<dyn RecycleBinStore>,
    restore_window: Duration,
}

impl RecycleBinService {
    /// Creates a new recycle-bin service.
    pub fn new(
        loans: Arc<dyn LoanStore>,
        bin: Arc<dyn RecycleBinStore>,
        config: &RecycleBinConfig,
    ) -> Self {
        Self {
            loans,
            bin,
            restore_window: Duration::hours(config.restore_window_hours),
        }
    }

    /// Lists non-restored bin entries, newest deletion first. Expired entries
    /// stay visible until a cleanup sweep removes them.
    pub async fn list(&self) -> AppResult<Vec<DeletedLoan>> {
        self.bin.list_unrestored().await
    }

    /// Soft-deletes a loan: snapshots it into the bin and removes the live
    /// row. Stock is not restored; the snapshot keeps its claim on inventory
    /// until the entry expires or the loan is restored and returned.
    pub async fn delete_loan(&self, ctx: &RequestContext, loan_id: Uuid) -> AppResult<DeletedLoan> {
        let loan = self
            .loans
            .find_by_id(loan_id)
            .await?
            .ok_or_else(|| AppError::not_found("Loan not found"))?;

        let now = Utc::now();
        let entry = DeletedLoan {
            id: Uuid::new_v4(),
            original_id: loan.id,
            loan_data: sqlx::types::Json(loan),
            deleted_by: ctx.actor.clone(),
            deleted_at: now,
            restore_until: now + self.restore_window,
            is_restored: false,
        };

        let entry = self.bin.move_to_bin(&entry).await?;
        info!(
            entry_id = %entry.id,
            loan_id = %entry.original_id,
            deleted_by = %entry.deleted_by,
            "Loan moved to recycle bin"
        );
        Ok(entry)
    }

    /// Restores a deleted loan as a new live loan.
    ///
    /// Fails with `AlreadyRestored` when the entry was restored before, and
    /// with `ExpiryExceeded` once the restore window has passed. Stock is not
    /// re-deducted: it was never restored at deletion time.
    pub async fn restore_loan(&self, entry_id: Uuid) -> AppResult<Loan> {
        let entry = self
            .bin
            .find_by_id(entry_id)
            .await?
            .ok_or_else(|| AppError::not_found("Deleted loan not found"))?;

        if entry.is_restored {
            return Err(AppError::already_restored("Loan has already been restored"));
        }
        let now = Utc::now();
        if entry.is_expired(now) {
            return Err(AppError::expiry_exceeded(
                "Restore window has expired for this loan",
            ));
        }

        let mut loan: Loan = entry.loan_data.0.clone();
        loan.id = Uuid::new_v4();
        loan.refresh(now);

        let restored = self.bin.restore(entry_id, &loan).await?;
        info!(
            entry_id = %entry_id,
            loan_id = %restored.id,
            original_id = %entry.original_id,
            "Loan restored from recycle bin"
        );
        Ok(restored)
    }

    /// Permanently removes a bin entry. The snapshot is gone for good.
    /// Restored entries are kept as a trace of the restore and cannot be
    /// purged.
    pub async fn purge(&self, entry_id: Uuid) -> AppResult<()> {
        let entry = self
            .bin
            .find_by_id(entry_id)
            .await?
            .ok_or_else(|| AppError::not_found("Deleted loan not found"))?;
        if entry.is_restored {
            return Err(AppError::already_restored("Cannot delete restored loan"));
        }

        if !self.bin.purge(entry_id).await? {
            return Err(AppError::not_found("Deleted loan not found"));
        }
        info!(entry_id = %entry_id, "Recycle-bin entry purged");
        Ok(())
    }

    /// Removes every expired, non-restored entry. Returns how many were
    /// removed. Intended to be called periodically.
    pub async fn cleanup_expired(&self) -> AppResult<u64> {
        let removed = self.bin.cleanup_expired(Utc::now()).await?;
        if removed > 0 {
            info!(removed, "Expired recycle-bin entries cleaned up");
        }
        Ok(removed)
    }
}
