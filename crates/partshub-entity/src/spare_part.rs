//! Spare-part catalog entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A spare part in the shop catalog.
///
/// `quantity` is the single source of truth for availability. It is mutated
/// only through the Loan Engine or the direct stock-adjustment operations,
/// and never goes negative. Quantities are `f64` because liter-measured loan
/// items deduct fractional amounts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SparePart {
    /// Unique part identifier.
    pub id: Uuid,
    /// Human-readable part name (unique in the catalog).
    pub name: String,
    /// Optional free-form part code.
    pub code: Option<String>,
    /// Part category.
    pub category: Option<String>,
    /// Quantity on hand.
    pub quantity: f64,
    /// Reorder threshold.
    pub min_stock: Option<f64>,
    /// Unit price.
    pub unit_price: f64,
    /// Supplier name.
    pub supplier: Option<String>,
    /// Shelf/bin location in the shop.
    pub location: Option<String>,
    /// When the part was created.
    pub created_at: DateTime<Utc>,
    /// When the part was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new spare part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSparePart {
    /// Part name (unique).
    pub name: String,
    /// Optional part code.
    pub code: Option<String>,
    /// Category.
    pub category: Option<String>,
    /// Initial quantity on hand.
    pub quantity: f64,
    /// Reorder threshold.
    pub min_stock: Option<f64>,
    /// Unit price.
    pub unit_price: f64,
    /// Supplier.
    pub supplier: Option<String>,
    /// Location.
    pub location: Option<String>,
}

/// Fields that can be updated on an existing spare part.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSparePart {
    /// New name, if changing.
    pub name: Option<String>,
    /// New code, if changing.
    pub code: Option<String>,
    /// New category, if changing.
    pub category: Option<String>,
    /// New quantity, if correcting directly.
    pub quantity: Option<f64>,
    /// New reorder threshold, if changing.
    pub min_stock: Option<f64>,
    /// New unit price, if changing.
    pub unit_price: Option<f64>,
    /// New supplier, if changing.
    pub supplier: Option<String>,
    /// New location, if changing.
    pub location: Option<String>,
}
