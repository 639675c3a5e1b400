//! Shared transactional stock-mutation helpers.
//!
//! Used inside repository transactions wherever a loan operation touches
//! spare-part quantities. Deductions are compare-and-swap conditional
//! updates so the availability check and the decrement cannot be separated
//! by a concurrent writer.

use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use partshub_core::error::{AppError, ErrorKind};
use partshub_core::result::AppResult;
use partshub_entity::stock_history::{StockChange, StockMovement};

/// Deduct each change from its spare part, failing the transaction with
/// `InsufficientStock` if any part has less than requested.
///
/// A part that disappeared from the catalog since lookup is skipped: the
/// loan item's reference is weak and becomes informational only.
pub(crate) async fn deduct_stock(
    tx: &mut Transaction<'_, Postgres>,
    changes: &[StockChange],
) -> AppResult<()> {
    for change in changes {
        let result = sqlx::query(
            "UPDATE spare_parts SET quantity = quantity - $2, updated_at = NOW() \
             WHERE id = $1 AND quantity >= $2",
        )
        .bind(change.part_id)
        .bind(change.quantity)
        .execute(&mut **tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to deduct stock", e))?;

        if result.rows_affected() == 0 {
            let available: Option<f64> =
                sqlx::query_scalar("SELECT quantity FROM spare_parts WHERE id = $1")
                    .bind(change.part_id)
                    .fetch_optional(&mut **tx)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to read stock level", e)
                    })?;

            match available {
                Some(avail) => {
                    return Err(AppError::insufficient_stock(
                        &change.part_name,
                        avail,
                        change.quantity,
                    ));
                }
                None => continue,
            }
        }
    }
    Ok(())
}

/// Add each change back to its spare part. Missing parts are ignored.
pub(crate) async fn restore_stock(
    tx: &mut Transaction<'_, Postgres>,
    changes: &[StockChange],
) -> AppResult<()> {
    for change in changes {
        sqlx::query(
            "UPDATE spare_parts SET quantity = quantity + $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(change.part_id)
        .bind(change.quantity)
        .execute(&mut **tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to restore stock", e))?;
    }
    Ok(())
}

/// Append one ledger row per change.
pub(crate) async fn append_ledger(
    tx: &mut Transaction<'_, Postgres>,
    movement: StockMovement,
    changes: &[StockChange],
    reference_id: Option<Uuid>,
    note: &str,
) -> AppResult<()> {
    for change in changes {
        sqlx::query(
            "INSERT INTO stock_history (part_id, movement, quantity, reference_id, note) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(change.part_id)
        .bind(movement)
        .bind(change.quantity)
        .bind(reference_id.map(|id| id.to_string()))
        .bind(note)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to append stock history", e)
        })?;
    }
    Ok(())
}
