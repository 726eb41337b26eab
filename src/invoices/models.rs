// src/invoices/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::companies::models::Company;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Invoice {
    pub id: i64,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: String,
    pub paid_date: Option<String>,
}

/// Flat row produced by the invoice/company join; reshaped into
/// [`InvoiceDetail`] before serialization.
#[derive(Debug, FromRow)]
pub struct InvoiceCompanyRow {
    pub id: i64,
    pub amt: f64,
    pub paid: bool,
    pub add_date: String,
    pub paid_date: Option<String>,
    pub code: String,
    pub name: String,
    pub description: String,
}

/// Invoice with its issuing company nested in place of the bare
/// company code, as returned by `GET /invoices/:id`
#[derive(Debug, Serialize)]
pub struct InvoiceDetail {
    pub id: i64,
    pub amt: f64,
    pub paid: bool,
    pub add_date: String,
    pub paid_date: Option<String>,
    pub company: Company,
}

impl From<InvoiceCompanyRow> for InvoiceDetail {
    fn from(row: InvoiceCompanyRow) -> Self {
        Self {
            id: row.id,
            amt: row.amt,
            paid: row.paid,
            add_date: row.add_date,
            paid_date: row.paid_date,
            company: Company {
                code: row.code,
                name: row.name,
                description: row.description,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
    pub comp_code: String,
    pub amt: f64,
}

/// Only the amount is client-mutable after creation.
#[derive(Debug, Deserialize)]
pub struct UpdateInvoiceRequest {
    pub amt: f64,
}

#[derive(Serialize)]
pub struct InvoiceListResponse {
    pub invoices: Vec<Invoice>,
}

#[derive(Serialize)]
pub struct InvoiceResponse {
    pub invoice: Invoice,
}

#[derive(Serialize)]
pub struct InvoiceDetailResponse {
    pub invoice: InvoiceDetail,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}
