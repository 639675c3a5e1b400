//! Loan entity model and derived-state logic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use partshub_core::types::round2;

/// How a loan item is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Measurement {
    /// Counted in whole pieces.
    #[default]
    Piece,
    /// Measured in liters (fractional quantities allowed).
    Liter,
}

impl Measurement {
    /// The display unit derived from the measurement.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Piece => "pcs",
            Self::Liter => "L",
        }
    }
}

/// Classification of who took the loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, sqlx::Type)]
#[sqlx(type_name = "borrower_type")]
pub enum BorrowerType {
    /// A mechanic working with the shop.
    #[default]
    Mechanic,
    /// A retail customer.
    Customer,
    /// A parts supplier.
    Supplier,
    /// Anyone else.
    Other,
}

/// Derived loan status.
///
/// Never set independently: always recomputed by [`Loan::refresh`] from
/// `returned`, `returned_amount`, and the overdue check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "loan_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    /// Open, nothing repaid, not overdue.
    Active,
    /// Partially repaid.
    Partial,
    /// Past the expected return date with nothing repaid.
    Overdue,
    /// Fully repaid and closed.
    Returned,
}

/// A single borrowed item, embedded in a [`Loan`].
///
/// `spare_part_id` is a weak, lookup-only reference into the catalog. A
/// later-deleted spare part leaves it dangling, which is tolerated; the
/// reference then becomes informational only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanItem {
    /// Item identifier within the loan.
    pub id: Uuid,
    /// Linked spare part, if the item matched the catalog by name.
    pub spare_part_id: Option<Uuid>,
    /// Part name as entered.
    pub part_name: String,
    /// Optional part code.
    #[serde(default)]
    pub part_code: String,
    /// Measurement kind.
    #[serde(default)]
    pub measurement: Measurement,
    /// Display unit (`pcs` or `L`), derived from `measurement`.
    pub unit: String,
    /// Quantity borrowed. Whole number for pieces, >= 0.01 for liters.
    pub quantity: f64,
    /// Price per unit.
    pub unit_price: f64,
    /// `round2(quantity * unit_price)`.
    pub total_price: f64,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// A record of spare parts lent to a borrower against repayment.
///
/// The loan exclusively owns its items; they have no independent lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Loan {
    /// Unique loan identifier.
    pub id: Uuid,
    /// Ordered, non-empty item list (JSONB column).
    pub items: Json<Vec<LoanItem>>,
    /// `round2(sum of item.total_price)`.
    pub grand_total: f64,
    /// Borrower name.
    pub borrower_name: String,
    /// Borrower phone.
    pub borrower_phone: String,
    /// Borrower classification.
    pub borrower_type: BorrowerType,
    /// When the borrower promised to settle, if agreed.
    pub expected_return_date: Option<DateTime<Utc>>,
    /// Whether the loan has been fully returned.
    pub returned: bool,
    /// When the loan was fully returned.
    pub return_date: Option<DateTime<Utc>>,
    /// When the most recent (partial) return was recorded.
    pub last_return_date: Option<DateTime<Utc>>,
    /// Amount repaid so far.
    pub returned_amount: f64,
    /// `max(0, grand_total - returned_amount)`.
    pub remaining_amount: f64,
    /// Free-form note.
    pub note: String,
    /// Derived status.
    pub status: LoanStatus,
    /// Who created the loan.
    pub created_by: String,
    /// When the loan was created.
    pub created_at: DateTime<Utc>,
    /// When the loan was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Loan {
    /// Whether the loan is past its expected return date and still open.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        if self.returned {
            return false;
        }
        match self.expected_return_date {
            Some(expected) => now > expected,
            None => false,
        }
    }

    /// Recompute every derived field from the current state.
    ///
    /// Called at the end of every mutating operation so that `grand_total`,
    /// `remaining_amount`, and `status` are always consistent with `items`,
    /// `returned_amount`, and the `returned` flag.
    pub fn refresh(&mut self, now: DateTime<Utc>) {
        self.grand_total = round2(self.items.iter().map(|i| i.total_price).sum());
        self.remaining_amount = round2((self.grand_total - self.returned_amount).max(0.0));

        self.status = if self.returned {
            LoanStatus::Returned
        } else if self.returned_amount > 0.0 {
            LoanStatus::Partial
        } else if self.is_overdue(now) {
            LoanStatus::Overdue
        } else {
            LoanStatus::Active
        };

        self.updated_at = now;
    }
}
