// src/companies/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: String,
}

/// Company plus the ids of the invoices it owns, as returned by
/// `GET /companies/:code`
#[derive(Debug, Serialize)]
pub struct CompanyDetail {
    pub code: String,
    pub name: String,
    pub description: String,
    pub invoices: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    pub name: String,
    pub description: String,
}

/// Full replacement of the mutable fields; the code is immutable.
#[derive(Debug, Deserialize)]
pub struct UpdateCompanyRequest {
    pub name: String,
    pub description: String,
}

#[derive(Serialize)]
pub struct CompanyListResponse {
    pub companies: Vec<Company>,
}

#[derive(Serialize)]
pub struct CompanyResponse {
    pub company: Company,
}

#[derive(Serialize)]
pub struct CompanyDetailResponse {
    pub company: CompanyDetail,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}
