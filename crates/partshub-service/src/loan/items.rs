//! Loan item validation and catalog resolution.
//!
//! Shared by create and update: validates every requested item, looks each
//! one up in the catalog by exact trimmed name, and produces the embedded
//! item list plus the stock deductions for linked items. Items that do not
//! match any spare part are recorded with no stock linkage — they model
//! shop-supplied or non-inventory goods.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use partshub_core::error::AppError;
use partshub_core::result::AppResult;
use partshub_core::types::round2;
use partshub_database::store::InventoryStore;
use partshub_entity::loan::{LoanItem, Measurement};
use partshub_entity::stock_history::StockChange;

/// One requested loan item, as received from the HTTP layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanItemRequest {
    /// Part name; matched against the catalog by exact trimmed name.
    pub part_name: String,
    /// Optional part code.
    pub part_code: Option<String>,
    /// Measurement kind, defaults to piece.
    #[serde(default)]
    pub measurement: Measurement,
    /// Quantity requested.
    pub quantity: f64,
    /// Price per unit.
    pub unit_price: f64,
    /// Free-form description.
    pub description: Option<String>,
}

/// The outcome of validating and resolving a full item list.
pub(crate) struct ResolvedItems {
    /// Embedded items ready to store on the loan.
    pub items: Vec<LoanItem>,
    /// Stock deductions for every item that matched a spare part.
    pub deductions: Vec<StockChange>,
}

/// Validate every requested item and resolve catalog linkage.
///
/// With `verify_stock` set, items that match a spare part are also checked
/// against the currently available quantity so the request fails before any
/// mutation begins. The update path passes `false` because the authoritative
/// check happens inside the restore-then-deduct transaction, after the old
/// quantities have been restored.
pub(crate) async fn resolve_items(
    inventory: &dyn InventoryStore,
    requests: &[LoanItemRequest],
    verify_stock: bool,
) -> AppResult<ResolvedItems> {
    if requests.is_empty() {
        return Err(AppError::validation("At least one item is required"));
    }

    let mut items = Vec::with_capacity(requests.len());
    let mut deductions = Vec::new();

    for request in requests {
        let part_name = request.part_name.trim();
        if part_name.is_empty() {
            return Err(AppError::validation("Item name is required for all items"));
        }
        if request.quantity <= 0.0 {
            return Err(AppError::validation(format!(
                "Valid quantity required for {part_name}"
            )));
        }
        if request.unit_price < 0.0 {
            return Err(AppError::validation(format!(
                "Valid unit price required for {part_name}"
            )));
        }
        match request.measurement {
            Measurement::Piece => {
                if request.quantity.fract() != 0.0 {
                    return Err(AppError::validation(format!(
                        "{part_name}: Quantity must be a whole number for pieces"
                    )));
                }
                if request.quantity < 1.0 {
                    return Err(AppError::validation(format!(
                        "{part_name}: Quantity must be at least 1 for pieces"
                    )));
                }
            }
            Measurement::Liter => {
                if request.quantity < 0.01 {
                    return Err(AppError::validation(format!(
                        "{part_name}: Quantity must be at least 0.01 for liters"
                    )));
                }
            }
        }

        let spare_part = inventory.find_by_name(part_name).await?;
        let spare_part_id = match spare_part {
            Some(part) => {
                if verify_stock && part.quantity < request.quantity {
                    return Err(AppError::insufficient_stock(
                        part_name,
                        part.quantity,
                        request.quantity,
                    ));
                }
                deductions.push(StockChange {
                    part_id: part.id,
                    part_name: part.name.clone(),
                    quantity: request.quantity,
                });
                Some(part.id)
            }
            None => None,
        };

        items.push(LoanItem {
            id: Uuid::new_v4(),
            spare_part_id,
            part_name: part_name.to_string(),
            part_code: request
                .part_code
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            measurement: request.measurement,
            unit: request.measurement.unit().to_string(),
            quantity: request.quantity,
            unit_price: round2(request.unit_price),
            total_price: round2(request.quantity * request.unit_price),
            description: request
                .description
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
        });
    }

    Ok(ResolvedItems { items, deductions })
}
