//! Stock ledger entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Direction of a stock quantity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "stock_movement", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum StockMovement {
    /// Manual restock.
    In,
    /// Manual issue.
    Out,
    /// Deducted by loan creation or edit.
    Loan,
    /// Released by loan return.
    Return,
}

/// One append-only stock ledger entry.
///
/// Write-only audit trail: the Loan Engine appends entries but never reads
/// them back.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StockHistory {
    /// Unique ledger entry identifier.
    pub id: Uuid,
    /// The spare part whose quantity changed.
    pub part_id: Uuid,
    /// Direction of the change.
    pub movement: StockMovement,
    /// Quantity moved (always positive; direction comes from `movement`).
    pub quantity: f64,
    /// Optional reference to the loan that caused the movement.
    pub reference_id: Option<String>,
    /// Free-form note.
    pub note: String,
    /// When the movement happened.
    pub date: DateTime<Utc>,
}

/// A pending quantity change against one spare part.
///
/// Carries the part name so that insufficient-stock failures can name the
/// part in the error message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockChange {
    /// The spare part to adjust.
    pub part_id: Uuid,
    /// Part name, for error messages and logging.
    pub part_name: String,
    /// Quantity to deduct or restore (always positive).
    pub quantity: f64,
}
