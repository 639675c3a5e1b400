//! Spare-part catalog operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use partshub_core::error::AppError;
use partshub_core::result::AppResult;
use partshub_database::store::InventoryStore;
use partshub_entity::spare_part::{CreateSparePart, SparePart, UpdateSparePart};

/// A manual stock movement (goods received or written off).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockAdjustment {
    /// Part to adjust.
    pub part_id: Uuid,
    /// Amount to add or remove; must be positive.
    pub quantity: f64,
    /// Reason recorded in the stock ledger.
    pub note: Option<String>,
}

/// Catalog CRUD and manual stock in/out.
#[derive(Clone)]
pub struct InventoryService {
    inventory: Arc<dyn InventoryStore>,
}

impl InventoryService {
    /// Creates a new inventory service.
    pub fn new(inventory: Arc<dyn InventoryStore>) -> Self {
        Self { inventory }
    }

    /// Gets a spare part by id.
    pub async fn get_part(&self, id: Uuid) -> AppResult<SparePart> {
        self.inventory
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Spare part not found"))
    }

    /// Lists all spare parts, newest first.
    pub async fn list_parts(&self) -> AppResult<Vec<SparePart>> {
        self.inventory.list().await
    }

    /// Creates a new spare part. Names are unique; a duplicate fails with a
    /// conflict from the store.
    pub async fn create_part(&self, mut data: CreateSparePart) -> AppResult<SparePart> {
        data.name = data.name.trim().to_string();
        if data.name.is_empty() {
            return Err(AppError::validation("Part name is required"));
        }
        if data.quantity < 0.0 {
            return Err(AppError::validation("Quantity cannot be negative"));
        }
        if data.unit_price < 0.0 {
            return Err(AppError::validation("Unit price cannot be negative"));
        }

        let part = self.inventory.create(&data).await?;
        info!(part_id = %part.id, name = %part.name, "Spare part created");
        Ok(part)
    }

    /// Applies a partial update to a spare part.
    pub async fn update_part(&self, id: Uuid, mut data: UpdateSparePart) -> AppResult<SparePart> {
        if let Some(name) = data.name.as_deref() {
            let name = name.trim();
            if name.is_empty() {
                return Err(AppError::validation("Part name is required"));
            }
            data.name = Some(name.to_string());
        }
        if matches!(data.quantity, Some(q) if q < 0.0) {
            return Err(AppError::validation("Quantity cannot be negative"));
        }
        if matches!(data.unit_price, Some(p) if p < 0.0) {
            return Err(AppError::validation("Unit price cannot be negative"));
        }

        let part = self.inventory.update(id, &data).await?;
        info!(part_id = %part.id, "Spare part updated");
        Ok(part)
    }

    /// Deletes a spare part from the catalog. Existing loans keep their
    /// embedded item copies; only the catalog link dangles.
    pub async fn delete_part(&self, id: Uuid) -> AppResult<()> {
        if !self.inventory.delete(id).await? {
            return Err(AppError::not_found("Spare part not found"));
        }
        info!(part_id = %id, "Spare part deleted");
        Ok(())
    }

    /// Receives goods: increases stock and writes an `IN` ledger entry.
    pub async fn stock_in(&self, adj: StockAdjustment) -> AppResult<SparePart> {
        if adj.quantity <= 0.0 {
            return Err(AppError::validation("Quantity must be positive"));
        }
        let note = adj.note.as_deref().unwrap_or("Stock in");
        let part = self
            .inventory
            .stock_in(adj.part_id, adj.quantity, note)
            .await?;
        info!(part_id = %part.id, quantity = adj.quantity, "Stock received");
        Ok(part)
    }

    /// Writes off stock: decreases the quantity and writes an `OUT` ledger
    /// entry. Fails with `InsufficientStock` when not enough is on hand.
    pub async fn stock_out(&self, adj: StockAdjustment) -> AppResult<SparePart> {
        if adj.quantity <= 0.0 {
            return Err(AppError::validation("Quantity must be positive"));
        }
        let note = adj.note.as_deref().unwrap_or("Stock out");
        let part = self
            .inventory
            .stock_out(adj.part_id, adj.quantity, note)
            .await?;
        info!(part_id = %part.id, quantity = adj.quantity, "Stock written off");
        Ok(part)
    }
}
