//! Recycle-bin entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use crate::loan::Loan;

/// A soft-deleted loan held in the recycle bin.
///
/// The snapshot is a full copy of the loan at deletion time, opaque to the
/// store. Once `is_restored` is set or `restore_until` has passed the entry
/// is inert: it can no longer be restored, but stays listable until a
/// cleanup sweep purges expired, non-restored entries.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DeletedLoan {
    /// Unique recycle-bin entry identifier.
    pub id: Uuid,
    /// The id the loan had while it was live.
    pub original_id: Uuid,
    /// Full loan snapshot (JSONB column).
    pub loan_data: Json<Loan>,
    /// Who deleted the loan.
    pub deleted_by: String,
    /// When the loan was deleted.
    pub deleted_at: DateTime<Utc>,
    /// Deadline for restoring (`deleted_at` + restore window).
    pub restore_until: DateTime<Utc>,
    /// Whether the entry has already been restored.
    pub is_restored: bool,
}

impl DeletedLoan {
    /// Whether the restore window has passed.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.restore_until
    }
}
