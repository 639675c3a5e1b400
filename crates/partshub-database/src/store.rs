//! Store trait seams implemented by the PostgreSQL repositories.
//!
//! The service layer depends on these traits (as `Arc<dyn ...>`) instead of
//! the concrete repositories, so the Loan Engine can be exercised against
//! in-memory fakes in unit tests. Every multi-step stock effect is a single
//! trait method so that implementations can provide all-or-nothing
//! visibility (a transaction in PostgreSQL, a validate-then-apply pass in a
//! fake).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use partshub_core::result::AppResult;
use partshub_entity::deleted_loan::DeletedLoan;
use partshub_entity::loan::Loan;
use partshub_entity::spare_part::{CreateSparePart, SparePart, UpdateSparePart};
use partshub_entity::stock_history::StockChange;

/// Which loans a listing should include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanFilter {
    /// Every loan.
    All,
    /// Only loans not yet returned.
    Active,
    /// Only fully returned loans.
    Returned,
}

/// Catalog access and direct stock adjustment.
#[async_trait]
pub trait InventoryStore: Send + Sync + 'static {
    /// Find a spare part by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<SparePart>>;

    /// Find a spare part by exact (trimmed, case-sensitive) name.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<SparePart>>;

    /// List all spare parts, newest first.
    async fn list(&self) -> AppResult<Vec<SparePart>>;

    /// Create a new spare part.
    async fn create(&self, data: &CreateSparePart) -> AppResult<SparePart>;

    /// Apply a partial update to a spare part.
    async fn update(&self, id: Uuid, data: &UpdateSparePart) -> AppResult<SparePart>;

    /// Delete a spare part. Returns `true` if a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Increase stock and append an `IN` ledger entry, atomically.
    async fn stock_in(&self, part_id: Uuid, quantity: f64, note: &str) -> AppResult<SparePart>;

    /// Decrease stock and append an `OUT` ledger entry, atomically.
    ///
    /// Fails with `InsufficientStock` when the requested quantity exceeds
    /// what is available; the check and the decrement are one conditional
    /// update so a concurrent writer cannot drive the quantity negative.
    async fn stock_out(&self, part_id: Uuid, quantity: f64, note: &str) -> AppResult<SparePart>;
}

/// Loan persistence with stock-coupled mutations.
#[async_trait]
pub trait LoanStore: Send + Sync + 'static {
    /// Find a loan by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Loan>>;

    /// List loans matching the filter, newest first.
    async fn list(&self, filter: LoanFilter) -> AppResult<Vec<Loan>>;

    /// Insert the loan, deducting stock for every linked item and appending
    /// `LOAN` ledger entries, all-or-nothing.
    ///
    /// If any deduction finds less stock than requested the whole operation
    /// fails with `InsufficientStock` and nothing is committed.
    async fn create_with_stock(&self, loan: &Loan, deductions: &[StockChange]) -> AppResult<Loan>;

    /// Persist an edited loan: restore stock for the old items, deduct stock
    /// for the new items, and update the loan row, all-or-nothing.
    ///
    /// The restore-then-deduct sequence must never be observable half-done,
    /// so both phases run in the same transaction.
    async fn update_with_stock(
        &self,
        loan: &Loan,
        restores: &[StockChange],
        deductions: &[StockChange],
    ) -> AppResult<Loan>;

    /// Update loan fields with no stock side effects.
    async fn update(&self, loan: &Loan) -> AppResult<Loan>;

    /// Persist a fully-returned loan and release stock for every linked
    /// item, appending `RETURN` ledger entries, all-or-nothing.
    async fn release_stock_and_update(
        &self,
        loan: &Loan,
        restores: &[StockChange],
    ) -> AppResult<Loan>;
}

/// Recycle-bin persistence.
#[async_trait]
pub trait RecycleBinStore: Send + Sync + 'static {
    /// Find a recycle-bin entry by id.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<DeletedLoan>>;

    /// List non-restored entries, newest deletion first.
    async fn list_unrestored(&self) -> AppResult<Vec<DeletedLoan>>;

    /// Insert the bin entry and remove the live loan row, atomically.
    async fn move_to_bin(&self, entry: &DeletedLoan) -> AppResult<DeletedLoan>;

    /// Insert the restored loan and mark the bin entry restored, atomically.
    ///
    /// The `is_restored` flip is conditional, so a concurrent double restore
    /// fails with `AlreadyRestored` instead of creating two live loans.
    async fn restore(&self, entry_id: Uuid, loan: &Loan) -> AppResult<Loan>;

    /// Permanently remove a bin entry. Returns `true` if a row was removed.
    async fn purge(&self, entry_id: Uuid) -> AppResult<bool>;

    /// Bulk-remove entries whose restore window has expired and that were
    /// never restored. Returns the number of rows removed.
    async fn cleanup_expired(&self, now: DateTime<Utc>) -> AppResult<u64>;
}
