//! Request DTOs.
//!
//! Loan create/update bodies deserialize directly into the service-layer
//! request types; only the bodies with no service counterpart live here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `PUT /api/loans/{id}/return`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartialReturnRequest {
    /// Amount repaid; must be positive.
    pub amount: f64,
}

/// Body of `POST /api/stock/in` and `POST /api/stock/out`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockAdjustRequest {
    /// Part to adjust.
    pub part_id: Uuid,
    /// Amount to add or remove; must be positive.
    pub quantity: f64,
    /// Reason recorded in the stock ledger.
    pub note: Option<String>,
}
