//! Manual stock adjustment handlers.

use axum::Json;
use axum::extract::State;

use partshub_entity::spare_part::SparePart;
use partshub_service::inventory::StockAdjustment;

use crate::dto::request::StockAdjustRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::state::AppState;

impl From<StockAdjustRequest> for StockAdjustment {
    fn from(body: StockAdjustRequest) -> Self {
        Self {
            part_id: body.part_id,
            quantity: body.quantity,
            note: body.note,
        }
    }
}

/// POST /api/stock/in
pub async fn stock_in(
    State(state): State<AppState>,
    Json(body): Json<StockAdjustRequest>,
) -> ApiResult<Json<ApiResponse<SparePart>>> {
    let part = state.inventory_service.stock_in(body.into()).await?;
    Ok(Json(ApiResponse::ok(part)))
}

/// POST /api/stock/out
pub async fn stock_out(
    State(state): State<AppState>,
    Json(body): Json<StockAdjustRequest>,
) -> ApiResult<Json<ApiResponse<SparePart>>> {
    let part = state.inventory_service.stock_out(body.into()).await?;
    Ok(Json(ApiResponse::ok(part)))
}
