use super::models::{
    CreateInvoiceRequest, InvoiceDetailResponse, InvoiceListResponse, InvoiceResponse,
    StatusResponse, UpdateInvoiceRequest,
};
use super::services::InvoicesService;
use crate::common::{ApiError, AppState};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// GET /invoices - List all invoices
pub async fn get_invoices(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let invoices_service = InvoicesService::new(app_state.db.clone());

    let invoices = invoices_service.get_all_invoices().await?;

    debug!(count = invoices.len(), "Loaded invoices list");

    Ok(Json(InvoiceListResponse { invoices }))
}

/// GET /invoices/:id - Get one invoice with its company nested
pub async fn get_invoice(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let invoices_service = InvoicesService::new(app_state.db.clone());

    let invoice = invoices_service.get_invoice_by_id(id).await?;

    Ok(Json(InvoiceDetailResponse { invoice }))
}

/// POST /invoices - Create a new invoice for a company
pub async fn create_invoice(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<CreateInvoiceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let invoices_service = InvoicesService::new(app_state.db.clone());

    let invoice = invoices_service.create_invoice(request).await?;

    Ok((StatusCode::CREATED, Json(InvoiceResponse { invoice })))
}

/// PATCH /invoices/:id - Replace an invoice's amount
pub async fn update_invoice(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateInvoiceRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let invoices_service = InvoicesService::new(app_state.db.clone());

    let invoice = invoices_service.update_invoice(id, request).await?;

    Ok(Json(InvoiceResponse { invoice }))
}

/// DELETE /invoices/:id - Delete an invoice
pub async fn delete_invoice(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let app_state = state.read().await;
    let invoices_service = InvoicesService::new(app_state.db.clone());

    invoices_service.delete_invoice(id).await?;

    Ok(Json(StatusResponse {
        status: "deleted".to_string(),
    }))
}
