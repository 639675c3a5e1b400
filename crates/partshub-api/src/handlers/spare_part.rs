//! Spare-part catalog handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use partshub_entity::spare_part::{CreateSparePart, SparePart, UpdateSparePart};

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/spare-parts
pub async fn create_part(
    State(state): State<AppState>,
    Json(body): Json<CreateSparePart>,
) -> ApiResult<(StatusCode, Json<ApiResponse<SparePart>>)> {
    let part = state.inventory_service.create_part(body).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(part))))
}

/// GET /api/spare-parts
pub async fn list_parts(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<SparePart>>>> {
    let parts = state.inventory_service.list_parts().await?;
    Ok(Json(ApiResponse::ok(parts)))
}

/// GET /api/spare-parts/{id}
pub async fn get_part(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<SparePart>>> {
    let part = state.inventory_service.get_part(id).await?;
    Ok(Json(ApiResponse::ok(part)))
}

/// PUT /api/spare-parts/{id}
pub async fn update_part(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateSparePart>,
) -> ApiResult<Json<ApiResponse<SparePart>>> {
    let part = state.inventory_service.update_part(id, body).await?;
    Ok(Json(ApiResponse::ok(part)))
}

/// DELETE /api/spare-parts/{id}
pub async fn delete_part(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.inventory_service.delete_part(id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Spare part deleted".to_string(),
    })))
}
