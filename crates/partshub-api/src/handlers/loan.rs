//! Loan handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use partshub_database::store::LoanFilter;
use partshub_entity::loan::Loan;
use partshub_service::loan::{CreateLoanRequest, UpdateLoanRequest};

use crate::dto::request::PartialReturnRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::Actor;
use crate::state::AppState;

/// POST /api/loans
pub async fn create_loan(
    State(state): State<AppState>,
    actor: Actor,
    Json(body): Json<CreateLoanRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Loan>>)> {
    let loan = state.loan_service.create_loan(&actor, body).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(loan))))
}

/// GET /api/loans
pub async fn list_loans(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<Loan>>>> {
    let loans = state.loan_service.list_loans(LoanFilter::All).await?;
    Ok(Json(ApiResponse::ok(loans)))
}

/// GET /api/loans/active
pub async fn list_active_loans(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<Loan>>>> {
    let loans = state.loan_service.list_loans(LoanFilter::Active).await?;
    Ok(Json(ApiResponse::ok(loans)))
}

/// GET /api/loans/returned
pub async fn list_returned_loans(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<Loan>>>> {
    let loans = state.loan_service.list_loans(LoanFilter::Returned).await?;
    Ok(Json(ApiResponse::ok(loans)))
}

/// GET /api/loans/{id}
pub async fn get_loan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Loan>>> {
    let loan = state.loan_service.get_loan(id).await?;
    Ok(Json(ApiResponse::ok(loan)))
}

/// PUT /api/loans/{id}
pub async fn update_loan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateLoanRequest>,
) -> ApiResult<Json<ApiResponse<Loan>>> {
    let loan = state.loan_service.update_loan(id, body).await?;
    Ok(Json(ApiResponse::ok(loan)))
}

/// PUT /api/loans/{id}/return
pub async fn partial_return(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<PartialReturnRequest>,
) -> ApiResult<Json<ApiResponse<Loan>>> {
    let loan = state.loan_service.partial_return(id, body.amount).await?;
    Ok(Json(ApiResponse::ok(loan)))
}

/// PUT /api/loans/{id}/complete-return
pub async fn complete_return(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Loan>>> {
    let loan = state.loan_service.complete_return(id).await?;
    Ok(Json(ApiResponse::ok(loan)))
}

/// DELETE /api/loans/{loan_id}/items/{item_id}
pub async fn remove_item(
    State(state): State<AppState>,
    Path((loan_id, item_id)): Path<(Uuid, Uuid)>,
) -> ApiResult<Json<ApiResponse<Loan>>> {
    let loan = state.loan_service.remove_item(loan_id, item_id).await?;
    Ok(Json(ApiResponse::ok(loan)))
}
