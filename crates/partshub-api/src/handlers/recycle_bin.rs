//! Recycle-bin handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use partshub_entity::deleted_loan::DeletedLoan;
use partshub_entity::loan::Loan;

use crate::dto::response::{ApiResponse, CleanupResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::Actor;
use crate::state::AppState;

/// DELETE /api/loans/{id}
pub async fn delete_loan(
    State(state): State<AppState>,
    actor: Actor,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<DeletedLoan>>> {
    let entry = state.recycle_bin_service.delete_loan(&actor, id).await?;
    Ok(Json(ApiResponse::ok(entry)))
}

/// POST /api/loans/{id}/restore — `id` is the recycle-bin entry id.
pub async fn restore_loan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Loan>>> {
    let loan = state.recycle_bin_service.restore_loan(id).await?;
    Ok(Json(ApiResponse::ok(loan)))
}

/// GET /api/loans/recycle-bin/all
pub async fn list_deleted_loans(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<DeletedLoan>>>> {
    let entries = state.recycle_bin_service.list().await?;
    Ok(Json(ApiResponse::ok(entries)))
}

/// DELETE /api/loans/recycle-bin/{id}
pub async fn purge_deleted_loan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.recycle_bin_service.purge(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Loan permanently deleted".to_string(),
    })))
}

/// POST /api/loans/recycle-bin/cleanup
pub async fn cleanup_recycle_bin(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<CleanupResponse>>> {
    let deleted_count = state.recycle_bin_service.cleanup_expired().await?;
    Ok(Json(ApiResponse::ok(CleanupResponse { deleted_count })))
}
