//! Spare-part repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use partshub_core::error::{AppError, ErrorKind};
use partshub_core::result::AppResult;
use partshub_entity::spare_part::{CreateSparePart, SparePart, UpdateSparePart};
use partshub_entity::stock_history::{StockChange, StockMovement};

use crate::repositories::stock::append_ledger;
use crate::store::InventoryStore;

/// Repository for the spare-part catalog and direct stock adjustment.
#[derive(Debug, Clone)]
pub struct SparePartRepository {
    pool: PgPool,
}

impl SparePartRepository {
    /// Create a new spare-part repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InventoryStore for SparePartRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<SparePart>> {
        sqlx::query_as::<_, SparePart>("SELECT * FROM spare_parts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find spare part", e))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<SparePart>> {
        sqlx::query_as::<_, SparePart>("SELECT * FROM spare_parts WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find spare part by name", e)
            })
    }

    async fn list(&self) -> AppResult<Vec<SparePart>> {
        sqlx::query_as::<_, SparePart>("SELECT * FROM spare_parts ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list spare parts", e)
            })
    }

    async fn create(&self, data: &CreateSparePart) -> AppResult<SparePart> {
        sqlx::query_as::<_, SparePart>(
            "INSERT INTO spare_parts (name, code, category, quantity, min_stock, unit_price, supplier, location) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.code)
        .bind(&data.category)
        .bind(data.quantity)
        .bind(data.min_stock)
        .bind(data.unit_price)
        .bind(&data.supplier)
        .bind(&data.location)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("spare_parts_name_key") =>
            {
                AppError::conflict(format!("Spare part '{}' already exists", data.name))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create spare part", e),
        })
    }

    async fn update(&self, id: Uuid, data: &UpdateSparePart) -> AppResult<SparePart> {
        sqlx::query_as::<_, SparePart>(
            "UPDATE spare_parts SET \
                name = COALESCE($2, name), \
                code = COALESCE($3, code), \
                category = COALESCE($4, category), \
                quantity = COALESCE($5, quantity), \
                min_stock = COALESCE($6, min_stock), \
                unit_price = COALESCE($7, unit_price), \
                supplier = COALESCE($8, supplier), \
                location = COALESCE($9, location), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.code)
        .bind(&data.category)
        .bind(data.quantity)
        .bind(data.min_stock)
        .bind(data.unit_price)
        .bind(&data.supplier)
        .bind(&data.location)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update spare part", e))?
        .ok_or_else(|| AppError::not_found("Spare part not found"))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM spare_parts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete spare part", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn stock_in(&self, part_id: Uuid, quantity: f64, note: &str) -> AppResult<SparePart> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let part = sqlx::query_as::<_, SparePart>(
            "UPDATE spare_parts SET quantity = quantity + $2, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(part_id)
        .bind(quantity)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add stock", e))?
        .ok_or_else(|| AppError::not_found("Spare part not found"))?;

        let change = StockChange {
            part_id,
            part_name: part.name.clone(),
            quantity,
        };
        append_ledger(&mut tx, StockMovement::In, std::slice::from_ref(&change), None, note)
            .await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;
        Ok(part)
    }

    async fn stock_out(&self, part_id: Uuid, quantity: f64, note: &str) -> AppResult<SparePart> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        // Conditional decrement: availability check and mutation in one step.
        let part = sqlx::query_as::<_, SparePart>(
            "UPDATE spare_parts SET quantity = quantity - $2, updated_at = NOW() \
             WHERE id = $1 AND quantity >= $2 RETURNING *",
        )
        .bind(part_id)
        .bind(quantity)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to issue stock", e))?;

        let part = match part {
            Some(part) => part,
            None => {
                let existing: Option<(String, f64)> =
                    sqlx::query_as("SELECT name, quantity FROM spare_parts WHERE id = $1")
                        .bind(part_id)
                        .fetch_optional(&mut *tx)
                        .await
                        .map_err(|e| {
                            AppError::with_source(
                                ErrorKind::Database,
                                "Failed to read stock level",
                                e,
                            )
                        })?;
                return match existing {
                    Some((name, available)) => {
                        Err(AppError::insufficient_stock(&name, available, quantity))
                    }
                    None => Err(AppError::not_found("Spare part not found")),
                };
            }
        };

        let change = StockChange {
            part_id,
            part_name: part.name.clone(),
            quantity,
        };
        append_ledger(&mut tx, StockMovement::Out, std::slice::from_ref(&change), None, note)
            .await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;
        Ok(part)
    }
}
