//! Loan lifecycle operations with inventory consistency.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use partshub_core::error::AppError;
use partshub_core::result::AppResult;
use partshub_database::store::{InventoryStore, LoanFilter, LoanStore};
use partshub_entity::loan::{BorrowerType, Loan, LoanStatus};
use partshub_entity::stock_history::StockChange;

use crate::context::RequestContext;
use crate::loan::items::{LoanItemRequest, resolve_items};

/// Request to create a new loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLoanRequest {
    /// Borrower name (required, trimmed).
    pub borrower_name: String,
    /// Borrower phone.
    pub borrower_phone: Option<String>,
    /// Borrower classification, defaults to mechanic.
    #[serde(default)]
    pub borrower_type: BorrowerType,
    /// When the borrower promises to settle; must not be in the past.
    pub expected_return_date: Option<DateTime<Utc>>,
    /// Free-form note.
    pub note: Option<String>,
    /// Items to lend (at least one).
    pub items: Vec<LoanItemRequest>,
}

/// Request to edit an existing loan. The item list fully replaces the old one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLoanRequest {
    /// New borrower name.
    pub borrower_name: String,
    /// New borrower phone.
    pub borrower_phone: Option<String>,
    /// New borrower classification.
    #[serde(default)]
    pub borrower_type: BorrowerType,
    /// New expected return date.
    pub expected_return_date: Option<DateTime<Utc>>,
    /// New note.
    pub note: Option<String>,
    /// Replacement item list (validated exactly as on create).
    pub items: Vec<LoanItemRequest>,
}

/// The Loan Engine.
///
/// Creates loans, validates items, adjusts the inventory store on
/// create/edit/return/item-removal, and recomputes totals and status after
/// every mutation.
#[derive(Clone)]
pub struct LoanService {
    /// Loan persistence.
    loans: Arc<dyn LoanStore>,
    /// Spare-part catalog.
    inventory: Arc<dyn InventoryStore>,
}

/// Stock restores for every item on the loan that carries a catalog link.
fn linked_changes(loan: &Loan) -> Vec<StockChange> {
    loan.items
        .iter()
        .filter_map(|item| {
            item.spare_part_id.map(|part_id| StockChange {
                part_id,
                part_name: item.part_name.clone(),
                quantity: item.quantity,
            })
        })
        .collect()
}

impl LoanService {
    /// Creates a new loan service.
    pub fn new(loans: Arc<dyn LoanStore>, inventory: Arc<dyn InventoryStore>) -> Self {
        Self { loans, inventory }
    }

    /// Gets a loan by id.
    pub async fn get_loan(&self, id: Uuid) -> AppResult<Loan> {
        self.loans
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Loan not found"))
    }

    /// Lists loans, newest first.
    pub async fn list_loans(&self, filter: LoanFilter) -> AppResult<Vec<Loan>> {
        self.loans.list(filter).await
    }

    /// Creates a loan, deducting stock for every item that matches a spare
    /// part by name. All-or-nothing: any validation or stock failure leaves
    /// the inventory untouched.
    pub async fn create_loan(&self, ctx: &RequestContext, req: CreateLoanRequest) -> AppResult<Loan> {
        let borrower_name = req.borrower_name.trim();
        if borrower_name.is_empty() {
            return Err(AppError::validation("Borrower name is required"));
        }
        let now = Utc::now();
        validate_expected_return_date(req.expected_return_date, now)?;

        let resolved = resolve_items(self.inventory.as_ref(), &req.items, true).await?;

        let mut loan = Loan {
            id: Uuid::new_v4(),
            items: sqlx::types::Json(resolved.items),
            grand_total: 0.0,
            borrower_name: borrower_name.to_string(),
            borrower_phone: trimmed(req.borrower_phone),
            borrower_type: req.borrower_type,
            expected_return_date: req.expected_return_date,
            returned: false,
            return_date: None,
            last_return_date: None,
            returned_amount: 0.0,
            remaining_amount: 0.0,
            note: trimmed(req.note),
            status: LoanStatus::Active,
            created_by: ctx.actor.clone(),
            created_at: now,
            updated_at: now,
        };
        loan.refresh(now);

        let created = self
            .loans
            .create_with_stock(&loan, &resolved.deductions)
            .await?;

        info!(
            loan_id = %created.id,
            borrower = %created.borrower_name,
            grand_total = created.grand_total,
            items = created.items.len(),
            "Loan created"
        );
        Ok(created)
    }

    /// Edits a loan: restores stock for the old items, replaces the item
    /// list, and deducts stock for the new items in one atomic unit.
    ///
    /// Returned loans are immutable.
    pub async fn update_loan(&self, id: Uuid, req: UpdateLoanRequest) -> AppResult<Loan> {
        let mut loan = self.get_loan(id).await?;
        if loan.returned {
            return Err(AppError::loan_closed("Returned loan cannot be edited"));
        }

        let borrower_name = req.borrower_name.trim();
        if borrower_name.is_empty() {
            return Err(AppError::validation("Borrower name is required"));
        }
        let now = Utc::now();
        validate_expected_return_date(req.expected_return_date, now)?;

        // The stock check happens inside the restore-then-deduct transaction,
        // after the old quantities are back; a pre-check here would wrongly
        // reject re-lending quantities the edit itself frees up.
        let resolved = resolve_items(self.inventory.as_ref(), &req.items, false).await?;
        let restores = linked_changes(&loan);

        loan.items = sqlx::types::Json(resolved.items);
        loan.borrower_name = borrower_name.to_string();
        loan.borrower_phone = trimmed(req.borrower_phone);
        loan.borrower_type = req.borrower_type;
        loan.expected_return_date = req.expected_return_date;
        loan.note = trimmed(req.note);
        loan.refresh(now);

        let updated = self
            .loans
            .update_with_stock(&loan, &restores, &resolved.deductions)
            .await?;

        info!(loan_id = %updated.id, grand_total = updated.grand_total, "Loan updated");
        Ok(updated)
    }

    /// Records a partial repayment. Crossing the grand total closes the loan
    /// and releases the linked stock exactly once.
    pub async fn partial_return(&self, id: Uuid, amount: f64) -> AppResult<Loan> {
        if amount <= 0.0 {
            return Err(AppError::validation("Return amount must be positive"));
        }

        let mut loan = self.get_loan(id).await?;
        if loan.returned {
            return Err(AppError::already_returned("Loan already returned"));
        }

        let now = Utc::now();
        loan.returned_amount += amount;
        loan.last_return_date = Some(now);

        if loan.returned_amount >= loan.grand_total {
            // Full settlement: clamp the over-payment and release inventory.
            // The `returned` flag was false above, so this release happens
            // exactly once in the loan's lifetime.
            loan.returned = true;
            loan.return_date = Some(now);
            loan.returned_amount = loan.grand_total;
            loan.refresh(now);

            let restores = linked_changes(&loan);
            let updated = self.loans.release_stock_and_update(&loan, &restores).await?;
            info!(loan_id = %updated.id, "Loan fully returned");
            return Ok(updated);
        }

        loan.refresh(now);
        let updated = self.loans.update(&loan).await?;
        info!(
            loan_id = %updated.id,
            returned_amount = updated.returned_amount,
            remaining = updated.remaining_amount,
            "Partial return recorded"
        );
        Ok(updated)
    }

    /// Forces full repayment regardless of prior partial amounts and
    /// releases the linked stock.
    pub async fn complete_return(&self, id: Uuid) -> AppResult<Loan> {
        let mut loan = self.get_loan(id).await?;
        if loan.returned {
            return Err(AppError::already_returned("Loan already returned"));
        }

        let now = Utc::now();
        loan.returned = true;
        loan.return_date = Some(now);
        loan.returned_amount = loan.grand_total;
        loan.refresh(now);

        let restores = linked_changes(&loan);
        let updated = self.loans.release_stock_and_update(&loan, &restores).await?;
        info!(loan_id = %updated.id, "Loan marked as fully returned");
        Ok(updated)
    }

    /// Removes one item from a loan, restoring its stock if linked and
    /// recomputing the totals. A loan may end up with zero items.
    pub async fn remove_item(&self, loan_id: Uuid, item_id: Uuid) -> AppResult<Loan> {
        let mut loan = self.get_loan(loan_id).await?;
        if loan.returned {
            return Err(AppError::loan_closed("Cannot modify returned loan"));
        }

        let removed = loan
            .items
            .iter()
            .find(|item| item.id == item_id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Item not found in loan"))?;

        let restores: Vec<StockChange> = removed
            .spare_part_id
            .map(|part_id| StockChange {
                part_id,
                part_name: removed.part_name.clone(),
                quantity: removed.quantity,
            })
            .into_iter()
            .collect();

        loan.items.retain(|item| item.id != item_id);
        loan.refresh(Utc::now());

        let updated = self.loans.update_with_stock(&loan, &restores, &[]).await?;
        info!(loan_id = %updated.id, item_id = %item_id, "Loan item removed");
        Ok(updated)
    }
}

/// The expected return date, when set, must not be before today.
fn validate_expected_return_date(
    date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> AppResult<()> {
    if let Some(date) = date {
        if date.date_naive() < now.date_naive() {
            return Err(AppError::validation(
                "Expected return date cannot be in the past",
            ));
        }
    }
    Ok(())
}

fn trimmed(value: Option<String>) -> String {
    value.as_deref().map(str::trim).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Duration;

    use partshub_core::error::ErrorKind;
    use partshub_entity::loan::Measurement;
    use partshub_entity::stock_history::StockMovement;

    use crate::loan::items::LoanItemRequest;
    use crate::testing::{MemoryInventoryStore, MemoryLoanStore};

    fn setup() -> (Arc<MemoryInventoryStore>, LoanService) {
        let inventory = MemoryInventoryStore::new();
        let loans = MemoryLoanStore::new(inventory.clone());
        let service = LoanService::new(loans, inventory.clone());
        (inventory, service)
    }

    fn item(name: &str, quantity: f64, unit_price: f64) -> LoanItemRequest {
        LoanItemRequest {
            part_name: name.to_string(),
            part_code: None,
            measurement: Measurement::Piece,
            quantity,
            unit_price,
            description: None,
        }
    }

    fn create_request(items: Vec<LoanItemRequest>) -> CreateLoanRequest {
        CreateLoanRequest {
            borrower_name: "Avan".to_string(),
            borrower_phone: None,
            borrower_type: BorrowerType::Mechanic,
            expected_return_date: None,
            note: None,
            items,
        }
    }

    fn update_request(items: Vec<LoanItemRequest>) -> UpdateLoanRequest {
        UpdateLoanRequest {
            borrower_name: "Avan".to_string(),
            borrower_phone: None,
            borrower_type: BorrowerType::Mechanic,
            expected_return_date: None,
            note: None,
            items,
        }
    }

    #[tokio::test]
    async fn create_deducts_stock_and_computes_totals() {
        let (inventory, service) = setup();
        let part_id = inventory.add_part("Filter", 5.0, 10.0);
        let ctx = RequestContext::default();

        let loan = service
            .create_loan(&ctx, create_request(vec![item("Filter", 3.0, 10.0)]))
            .await
            .unwrap();

        assert_eq!(inventory.quantity_of(part_id), 2.0);
        assert_eq!(loan.grand_total, 30.0);
        assert_eq!(loan.remaining_amount, 30.0);
        assert_eq!(loan.status, LoanStatus::Active);
        assert_eq!(loan.items[0].spare_part_id, Some(part_id));
        assert_eq!(loan.created_by, "System");

        let ledger = inventory.ledger();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger[0].movement, StockMovement::Loan);
        assert_eq!(ledger[0].quantity, 3.0);
    }

    #[tokio::test]
    async fn create_fails_on_insufficient_stock_without_mutation() {
        let (inventory, service) = setup();
        let part_id = inventory.add_part("Filter", 2.0, 10.0);
        let ctx = RequestContext::default();

        let err = service
            .create_loan(&ctx, create_request(vec![item("Filter", 3.0, 10.0)]))
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::InsufficientStock);
        assert_eq!(
            err.message,
            "Insufficient stock for Filter. Available: 2, Requested: 3"
        );
        assert_eq!(inventory.quantity_of(part_id), 2.0);
        assert!(service.list_loans(LoanFilter::All).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unlinked_item_creates_without_deduction() {
        let (inventory, service) = setup();
        let ctx = RequestContext::default();

        let loan = service
            .create_loan(&ctx, create_request(vec![item("Custom Gasket", 2.0, 7.5)]))
            .await
            .unwrap();

        assert_eq!(loan.items[0].spare_part_id, None);
        assert_eq!(loan.grand_total, 15.0);
        assert!(inventory.ledger().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_invalid_input() {
        let (inventory, service) = setup();
        inventory.add_part("Filter", 5.0, 10.0);
        let ctx = RequestContext::default();

        let cases: Vec<(CreateLoanRequest, &str)> = vec![
            (create_request(vec![]), "At least one item is required"),
            (
                CreateLoanRequest {
                    borrower_name: "  ".to_string(),
                    ..create_request(vec![item("Filter", 1.0, 10.0)])
                },
                "Borrower name is required",
            ),
            (
                create_request(vec![item("Filter", 1.5, 10.0)]),
                "Filter: Quantity must be a whole number for pieces",
            ),
            (
                create_request(vec![item("Filter", 1.0, -2.0)]),
                "Valid unit price required for Filter",
            ),
            (
                CreateLoanRequest {
                    expected_return_date: Some(Utc::now() - Duration::days(2)),
                    ..create_request(vec![item("Filter", 1.0, 10.0)])
                },
                "Expected return date cannot be in the past",
            ),
        ];

        for (req, expected) in cases {
            let err = service.create_loan(&ctx, req).await.unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation);
            assert_eq!(err.message, expected);
        }
        assert!(service.list_loans(LoanFilter::All).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn liter_items_accept_fractional_quantities() {
        let (inventory, service) = setup();
        let part_id = inventory.add_part("Engine Oil", 10.0, 8.0);
        let ctx = RequestContext::default();

        let loan = service
            .create_loan(
                &ctx,
                create_request(vec![LoanItemRequest {
                    measurement: Measurement::Liter,
                    ..item("Engine Oil", 2.5, 8.0)
                }]),
            )
            .await
            .unwrap();

        assert_eq!(loan.items[0].unit, "L");
        assert_eq!(loan.grand_total, 20.0);
        assert_eq!(inventory.quantity_of(part_id), 7.5);
    }

    #[tokio::test]
    async fn partial_return_below_total_keeps_stock_deducted() {
        let (inventory, service) = setup();
        let part_id = inventory.add_part("Filter", 5.0, 10.0);
        let ctx = RequestContext::default();
        let loan = service
            .create_loan(&ctx, create_request(vec![item("Filter", 3.0, 10.0)]))
            .await
            .unwrap();

        let loan = service.partial_return(loan.id, 10.0).await.unwrap();

        assert_eq!(loan.status, LoanStatus::Partial);
        assert_eq!(loan.returned_amount, 10.0);
        assert_eq!(loan.remaining_amount, 20.0);
        assert!(!loan.returned);
        assert!(loan.last_return_date.is_some());
        assert!(loan.return_date.is_none());
        assert_eq!(inventory.quantity_of(part_id), 2.0);
    }

    #[tokio::test]
    async fn partial_return_crossing_total_closes_and_releases_stock() {
        let (inventory, service) = setup();
        let part_id = inventory.add_part("Filter", 5.0, 10.0);
        let ctx = RequestContext::default();
        let loan = service
            .create_loan(&ctx, create_request(vec![item("Filter", 3.0, 10.0)]))
            .await
            .unwrap();
        service.partial_return(loan.id, 10.0).await.unwrap();

        // Over-payment crosses the grand total and is clamped.
        let loan = service.partial_return(loan.id, 25.0).await.unwrap();

        assert!(loan.returned);
        assert_eq!(loan.status, LoanStatus::Returned);
        assert_eq!(loan.returned_amount, 30.0);
        assert_eq!(loan.remaining_amount, 0.0);
        assert!(loan.return_date.is_some());
        assert_eq!(inventory.quantity_of(part_id), 5.0);

        let returns: Vec<_> = inventory
            .ledger()
            .into_iter()
            .filter(|e| e.movement == StockMovement::Return)
            .collect();
        assert_eq!(returns.len(), 1);

        // A further return must not release stock a second time.
        let err = service.partial_return(loan.id, 5.0).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::AlreadyReturned);
        assert_eq!(inventory.quantity_of(part_id), 5.0);
    }

    #[tokio::test]
    async fn partial_return_rejects_non_positive_amounts() {
        let (inventory, service) = setup();
        inventory.add_part("Filter", 5.0, 10.0);
        let ctx = RequestContext::default();
        let loan = service
            .create_loan(&ctx, create_request(vec![item("Filter", 1.0, 10.0)]))
            .await
            .unwrap();

        let err = service.partial_return(loan.id, 0.0).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        let err = service.partial_return(loan.id, -5.0).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn complete_return_releases_stock_once() {
        let (inventory, service) = setup();
        let part_id = inventory.add_part("Filter", 5.0, 10.0);
        let ctx = RequestContext::default();
        let loan = service
            .create_loan(&ctx, create_request(vec![item("Filter", 3.0, 10.0)]))
            .await
            .unwrap();
        assert_eq!(inventory.quantity_of(part_id), 2.0);

        let loan = service.complete_return(loan.id).await.unwrap();

        assert!(loan.returned);
        assert_eq!(loan.returned_amount, 30.0);
        assert_eq!(loan.remaining_amount, 0.0);
        assert_eq!(inventory.quantity_of(part_id), 5.0);

        let err = service.complete_return(loan.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::AlreadyReturned);
        assert_eq!(inventory.quantity_of(part_id), 5.0);
    }

    #[tokio::test]
    async fn update_with_same_items_nets_zero_stock_change() {
        let (inventory, service) = setup();
        let part_id = inventory.add_part("Filter", 5.0, 10.0);
        let ctx = RequestContext::default();
        let loan = service
            .create_loan(&ctx, create_request(vec![item("Filter", 3.0, 10.0)]))
            .await
            .unwrap();

        // Re-submitting the same quantities must not trip the stock check
        // even though only 2 are free before the restore.
        let updated = service
            .update_loan(loan.id, update_request(vec![item("Filter", 3.0, 10.0)]))
            .await
            .unwrap();

        assert_eq!(inventory.quantity_of(part_id), 2.0);
        assert_eq!(updated.grand_total, 30.0);
    }

    #[tokio::test]
    async fn update_swaps_item_quantities_atomically() {
        let (inventory, service) = setup();
        let part_id = inventory.add_part("Filter", 5.0, 10.0);
        let ctx = RequestContext::default();
        let loan = service
            .create_loan(&ctx, create_request(vec![item("Filter", 3.0, 10.0)]))
            .await
            .unwrap();

        let updated = service
            .update_loan(loan.id, update_request(vec![item("Filter", 1.0, 10.0)]))
            .await
            .unwrap();

        assert_eq!(inventory.quantity_of(part_id), 4.0);
        assert_eq!(updated.grand_total, 10.0);
        assert_eq!(updated.remaining_amount, 10.0);
    }

    #[tokio::test]
    async fn update_failing_stock_check_leaves_everything_unchanged() {
        let (inventory, service) = setup();
        let part_id = inventory.add_part("Filter", 5.0, 10.0);
        let ctx = RequestContext::default();
        let loan = service
            .create_loan(&ctx, create_request(vec![item("Filter", 3.0, 10.0)]))
            .await
            .unwrap();

        // 3 restored + 2 free = 5 available, 6 requested.
        let err = service
            .update_loan(loan.id, update_request(vec![item("Filter", 6.0, 10.0)]))
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::InsufficientStock);
        assert_eq!(inventory.quantity_of(part_id), 2.0);
        let unchanged = service.get_loan(loan.id).await.unwrap();
        assert_eq!(unchanged.grand_total, 30.0);
        assert_eq!(unchanged.items[0].quantity, 3.0);
    }

    #[tokio::test]
    async fn update_rejects_returned_loan() {
        let (inventory, service) = setup();
        inventory.add_part("Filter", 5.0, 10.0);
        let ctx = RequestContext::default();
        let loan = service
            .create_loan(&ctx, create_request(vec![item("Filter", 1.0, 10.0)]))
            .await
            .unwrap();
        service.complete_return(loan.id).await.unwrap();

        let err = service
            .update_loan(loan.id, update_request(vec![item("Filter", 1.0, 10.0)]))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::LoanClosed);
    }

    #[tokio::test]
    async fn remove_item_restores_only_that_item() {
        let (inventory, service) = setup();
        let filter_id = inventory.add_part("Filter", 5.0, 10.0);
        let oil_id = inventory.add_part("Engine Oil", 10.0, 8.0);
        let ctx = RequestContext::default();
        let loan = service
            .create_loan(
                &ctx,
                create_request(vec![item("Filter", 2.0, 10.0), item("Engine Oil", 4.0, 8.0)]),
            )
            .await
            .unwrap();
        let filter_item_id = loan.items[0].id;

        let updated = service.remove_item(loan.id, filter_item_id).await.unwrap();

        assert_eq!(inventory.quantity_of(filter_id), 5.0);
        assert_eq!(inventory.quantity_of(oil_id), 6.0);
        assert_eq!(updated.items.len(), 1);
        assert_eq!(updated.grand_total, 32.0);
    }

    #[tokio::test]
    async fn removing_last_item_leaves_empty_loan() {
        let (inventory, service) = setup();
        let part_id = inventory.add_part("Filter", 5.0, 10.0);
        let ctx = RequestContext::default();
        let loan = service
            .create_loan(&ctx, create_request(vec![item("Filter", 2.0, 10.0)]))
            .await
            .unwrap();

        let updated = service.remove_item(loan.id, loan.items[0].id).await.unwrap();

        assert!(updated.items.is_empty());
        assert_eq!(updated.grand_total, 0.0);
        assert_eq!(updated.remaining_amount, 0.0);
        assert_eq!(inventory.quantity_of(part_id), 5.0);
    }

    #[tokio::test]
    async fn remove_item_rejects_unknown_item() {
        let (inventory, service) = setup();
        inventory.add_part("Filter", 5.0, 10.0);
        let ctx = RequestContext::default();
        let loan = service
            .create_loan(&ctx, create_request(vec![item("Filter", 2.0, 10.0)]))
            .await
            .unwrap();

        let err = service.remove_item(loan.id, Uuid::new_v4()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn list_filters_by_returned_state() {
        let (inventory, service) = setup();
        inventory.add_part("Filter", 10.0, 10.0);
        let ctx = RequestContext::default();
        let open = service
            .create_loan(&ctx, create_request(vec![item("Filter", 1.0, 10.0)]))
            .await
            .unwrap();
        let closed = service
            .create_loan(&ctx, create_request(vec![item("Filter", 1.0, 10.0)]))
            .await
            .unwrap();
        service.complete_return(closed.id).await.unwrap();

        let active = service.list_loans(LoanFilter::Active).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, open.id);

        let returned = service.list_loans(LoanFilter::Returned).await.unwrap();
        assert_eq!(returned.len(), 1);
        assert_eq!(returned[0].id, closed.id);

        assert_eq!(service.list_loans(LoanFilter::All).await.unwrap().len(), 2);
    }
}
